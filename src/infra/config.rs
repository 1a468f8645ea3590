use crate::clients::xroad::DEFAULT_BASE_URL;

pub struct Config {
    pub mode: String, // "server" or "stdio"
    pub port: u16,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let mode = std::env::var("MODE").unwrap_or_else(|_| "server".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        let base_url = std::env::var("XROAD_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        Self {
            mode,
            port,
            base_url,
        }
    }
}
