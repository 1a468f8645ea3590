use std::time::Duration;

/// Build a reqwest client with sane defaults. No per-request timeout is set
/// elsewhere; these bounds are the only ones governing an in-flight lookup.
pub fn make_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(2))
        .timeout(Duration::from_secs(6))
        .build()
        .expect("reqwest client")
}

#[cfg(test)]
mod tests {
    #[test]
    fn client_builds_with_default_limits() {
        let _ = super::make_http_client();
    }
}
