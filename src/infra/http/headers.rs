use reqwest::RequestBuilder;

/// Generate a simple request id suitable for logging/correlation.
pub fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("xroad-{}-{}", now.as_secs(), now.subsec_nanos())
}

/// Add standard headers to an outgoing request. The upstream asks for a
/// descriptive client identification; we send crate name and version.
pub fn add_standard_headers(
    builder: RequestBuilder,
    request_id: Option<String>,
) -> (RequestBuilder, String) {
    let rid = request_id.unwrap_or_else(generate_request_id);
    let b = builder.header("x-request-id", rid.as_str()).header(
        reqwest::header::USER_AGENT,
        format!("xroad-mcp-gateway/{}", env!("CARGO_PKG_VERSION")),
    );
    (b, rid)
}
