use crate::clients::xroad::XroadRemote;
use crate::infra::config::Config;
use crate::tools::bridges::tool_router::{BridgeRouter, BridgeSvc};
use std::net::SocketAddr;

/// Per-session factory handed to whichever transport is selected.
fn bridge_factory(
    base: String,
) -> impl Fn() -> (BridgeSvc<XroadRemote>, BridgeRouter) + Send + Sync + Clone + 'static {
    move || {
        let client = XroadRemote::new(base.clone());
        (BridgeSvc { client }, BridgeSvc::router())
    }
}

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::from_env();
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        base_url = %cfg.base_url,
        "BOOT xroad-mcp-gateway"
    );

    let factory = bridge_factory(cfg.base_url.clone());

    // Stdio mode: run MCP over stdio ONLY (no HTTP).
    if cfg.mode == "stdio" {
        crate::infra::runtime::mcp_transport::serve_stdio(factory)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = crate::infra::http_app::build_app(factory);
    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_wires_the_bridges_tool() {
        let (_handler, tools) = bridge_factory("http://test".into())();
        let names: Vec<String> = tools.into_iter().map(|r| r.name().to_string()).collect();
        assert!(
            names.iter().any(|n| n == "road.get_bridges_by_area"),
            "boot factory must expose the bridges tool, got: {:?}",
            names
        );
    }
}
