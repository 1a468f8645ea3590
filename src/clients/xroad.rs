use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Instant;

use crate::domain::{BoundingBox, BridgeLookup, LookupOutcome};
use crate::infra::http::headers::{add_standard_headers, generate_request_id};
use crate::infra::runtime::limits::make_http_client;

/// Production base of the MLIT road-structures DB.
pub const DEFAULT_BASE_URL: &str = "https://road-structures-db.mlit.go.jp/xROAD/api/v1";

/// Unknown-fault detail can echo upstream body fragments; keep the envelope bounded.
const FAULT_DETAIL_MAX: usize = 200;

#[derive(Clone)]
pub struct XroadRemote {
    base: String,
    http: Client,
}

impl XroadRemote {
    pub fn new(base: impl Into<String>) -> Self {
        let http = make_http_client();
        Self {
            base: base.into(),
            http,
        }
    }

    /// One GET against `/bridges`, with every outcome folded into
    /// `LookupOutcome`. The upstream reports an empty window either as an
    /// HTTP 404 or as a JSON `null` body; both collapse to `NotFound`.
    async fn fetch(&self, url: &str, request_id: String) -> LookupOutcome {
        let (builder, _rid) = add_standard_headers(self.http.get(url), Some(request_id));
        let resp = match builder.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(error = %e, "bridges_by_area transport error");
                return LookupOutcome::ExternalError {
                    code: e.status().map(|s| s.as_u16().to_string()),
                    message: format!("外部API呼び出しエラー (HTTP): {e}"),
                };
            }
        };

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return LookupOutcome::NotFound;
        }
        if !status.is_success() {
            return LookupOutcome::ExternalError {
                code: Some(status.as_u16().to_string()),
                message: format!("外部API呼び出しエラー (HTTP): upstream status {status}"),
            };
        }

        let body = match resp.text().await {
            Ok(b) => b,
            Err(e) => {
                return LookupOutcome::ExternalError {
                    code: Some("500".into()),
                    message: format!("不明なエラーが発生しました: {e}"),
                }
            }
        };
        tracing::trace!(body = %body, "bridges_by_area response body");

        let parsed: JsonValue = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(e) => {
                return LookupOutcome::ExternalError {
                    code: Some("500".into()),
                    message: format!("外部APIからの応答JSON解析エラー: {e}"),
                }
            }
        };

        match parsed {
            JsonValue::Null => LookupOutcome::NotFound,
            JsonValue::Object(map) => match map.get("result") {
                Some(JsonValue::Null) => LookupOutcome::NotFound,
                Some(JsonValue::String(s)) => LookupOutcome::Payload(s.clone()),
                // No `result` key, or a non-string value: fail closed.
                _ => LookupOutcome::ExternalError {
                    code: Some("500".into()),
                    message: format!(
                        "不明なエラーが発生しました: 応答に result 文字列がありません: {}",
                        clip(&body, FAULT_DETAIL_MAX)
                    ),
                },
            },
            other => LookupOutcome::ExternalError {
                code: Some("500".into()),
                message: format!(
                    "不明なエラーが発生しました: 予期しない応答形式です: {}",
                    clip(&other.to_string(), FAULT_DETAIL_MAX)
                ),
            },
        }
    }
}

#[async_trait::async_trait]
impl BridgeLookup for XroadRemote {
    async fn bridges_by_area(&self, area: &BoundingBox) -> LookupOutcome {
        let url = format!(
            "{}/bridges?area={}",
            self.base.trim_end_matches('/'),
            area.area_query()
        );
        tracing::debug!(endpoint = %url, "bridges_by_area request");
        let req_id = generate_request_id();
        let start = Instant::now();
        let outcome = self.fetch(&url, req_id).await;
        if matches!(outcome, LookupOutcome::ExternalError { .. }) {
            crate::infra::logging::log_metric("road.bridges", "remote_error_total", 1.0);
        }
        let elapsed_ms = start.elapsed().as_millis() as f64;
        crate::infra::logging::log_metric("road.bridges", "remote_latency_ms", elapsed_ms);
        outcome
    }
}

fn clip(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
