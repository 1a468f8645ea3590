use axum::{
    routing::{any_service, get},
    Router,
};
use std::sync::Arc;

use crate::clients::xroad::XroadRemote;
use crate::infra::runtime::mcp_transport::{self, LocalSessionManager};
use crate::tools::bridges::tool_router::{BridgeRouter, BridgeSvc};

/// `/healthz` probe plus the streamable MCP endpoint at `/mcp`.
pub fn build_app(
    factory: impl Fn() -> (BridgeSvc<XroadRemote>, BridgeRouter) + Send + Sync + Clone + 'static,
) -> Router {
    let session_mgr = Arc::new(LocalSessionManager::default());
    let mcp_service = mcp_transport::make_streamable_http_service(factory, session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}
