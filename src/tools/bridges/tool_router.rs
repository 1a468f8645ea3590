use std::future::Future;

use rmcp::handler::server::tool::ToolRouter;

use crate::clients::xroad::XroadRemote;
use crate::domain::{BoundingBox, BridgeLookup};
use crate::infra::runtime::mcp_transport::ServerHandler;

#[derive(Clone)]
pub struct BridgeSvc<TClient> {
    pub client: TClient,
}

impl<TClient: Send + Sync + 'static> ServerHandler for BridgeSvc<TClient> {}

/// Tool surface for the bridges lookup.
/// Input:  { "area": [lat_min, lat_max, lon_min, lon_max] }
/// Output: one text block holding either the raw upstream payload or a
/// `{"code","message"}` envelope. The call itself never fails past argument
/// validation; every upstream fault comes back as data.
#[rmcp::tool_router]
impl BridgeSvc<XroadRemote> {
    #[rmcp::tool(
        name = "road.get_bridges_by_area",
        description = "指定された経緯度を元に橋梁の情報を取得します。検索範囲は「北緯の下限,北緯の上限,東経の下限,東経の上限」の順の4つの数値です。"
    )]
    async fn get_bridges_by_area(
        &self,
        params: rmcp::handler::server::tool::Parameters<rmcp::model::JsonObject>,
    ) -> Result<rmcp::model::CallToolResult, rmcp::ErrorData> {
        tracing::debug!(params = ?params.0, "get_bridges_by_area invoked");
        let area = params
            .0
            .get("area")
            .and_then(|v| v.as_array())
            .and_then(|vals| vals.iter().map(|v| v.as_f64()).collect::<Option<Vec<f64>>>())
            .and_then(|vals| BoundingBox::from_area(&vals))
            .ok_or_else(|| {
                rmcp::ErrorData::invalid_params(
                    "field \"area\" must be an array of four numbers: lat_min,lat_max,lon_min,lon_max",
                    None,
                )
            })?;

        let reply = self.client.bridges_by_area(&area).await.into_reply();
        tracing::trace!(reply = %reply, "get_bridges_by_area returning");
        Ok(rmcp::model::CallToolResult::success(vec![
            rmcp::model::Content::text(reply),
        ]))
    }
}

pub type BridgeRouter = ToolRouter<BridgeSvc<XroadRemote>>;

impl BridgeSvc<XroadRemote> {
    pub fn router() -> BridgeRouter {
        // Wrapper to expose the macro-generated private tool_router
        Self::tool_router()
    }
}
