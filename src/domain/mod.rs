/// Fixed reply when the search window holds no bridge records.
pub const NOT_FOUND_MESSAGE: &str = "指定された範囲には橋梁情報が見つかりませんでした。";

/// Search window for the bridges endpoint. Field order is fixed by the
/// upstream API: lat_min, lat_max, lon_min, lon_max. Ordering and range are
/// deliberately not validated; only arity is checked at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Build from a flat `[lat_min, lat_max, lon_min, lon_max]` slice.
    /// Exactly four values are required.
    pub fn from_area(area: &[f64]) -> Option<Self> {
        match area {
            [lat_min, lat_max, lon_min, lon_max] => Some(Self {
                lat_min: *lat_min,
                lat_max: *lat_max,
                lon_min: *lon_min,
                lon_max: *lon_max,
            }),
            _ => None,
        }
    }

    /// Render the `area=` query value. Rust's f64 Display never produces
    /// scientific notation, which the upstream API would reject.
    pub fn area_query(&self) -> String {
        format!(
            "{},{},{},{}",
            self.lat_min, self.lat_max, self.lon_min, self.lon_max
        )
    }
}

/// Result of one bridges lookup. Every failure path of the upstream call is
/// absorbed into this type; nothing propagates past the client.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Raw JSON text from the upstream `result` field, passed through verbatim.
    Payload(String),
    /// Upstream reported no data (null body, null `result`, or HTTP 404).
    NotFound,
    /// The call failed at the HTTP layer or the body was unusable.
    ExternalError {
        code: Option<String>,
        message: String,
    },
}

impl LookupOutcome {
    /// Flatten to the wire contract: the payload string itself, or a
    /// `{"code","message"}` envelope for everything else.
    pub fn into_reply(self) -> String {
        match self {
            LookupOutcome::Payload(s) => s,
            LookupOutcome::NotFound => envelope("404", NOT_FOUND_MESSAGE),
            LookupOutcome::ExternalError { code, message } => {
                envelope(code.as_deref().unwrap_or("N/A"), &message)
            }
        }
    }
}

fn envelope(code: &str, message: &str) -> String {
    serde_json::json!({ "code": code, "message": message }).to_string()
}

/// Seam between the tool surface and whatever backs the lookup, so the tool
/// router stays testable without a live upstream.
#[async_trait::async_trait]
pub trait BridgeLookup: Send + Sync {
    async fn bridges_by_area(&self, area: &BoundingBox) -> LookupOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_area_requires_exactly_four_values() {
        assert!(BoundingBox::from_area(&[1.0, 2.0, 3.0]).is_none());
        assert!(BoundingBox::from_area(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_none());
        let b = BoundingBox::from_area(&[34.0, 35.0, 135.0, 136.0]).unwrap();
        assert_eq!(b.lat_min, 34.0);
        assert_eq!(b.lon_max, 136.0);
    }

    #[test]
    fn area_query_keeps_upstream_ordering() {
        let b = BoundingBox::from_area(&[35.1, 35.2, 139.3, 139.4]).unwrap();
        assert_eq!(b.area_query(), "35.1,35.2,139.3,139.4");
    }

    #[test]
    fn area_query_never_uses_scientific_notation() {
        let b = BoundingBox::from_area(&[0.0000001, 35.0, 135.0, 136.0]).unwrap();
        assert_eq!(b.area_query(), "0.0000001,35,135,136");
    }

    #[test]
    fn payload_passes_through_verbatim() {
        let raw = r#"{"bridges":[{"name":"夢舞大橋"}]}"#;
        let out = LookupOutcome::Payload(raw.to_string()).into_reply();
        assert_eq!(out, raw);
    }

    #[test]
    fn not_found_renders_canonical_envelope() {
        let out = LookupOutcome::NotFound.into_reply();
        assert_eq!(
            out,
            r#"{"code":"404","message":"指定された範囲には橋梁情報が見つかりませんでした。"}"#
        );
    }

    #[test]
    fn external_error_renders_code_and_message() {
        let out = LookupOutcome::ExternalError {
            code: Some("503".into()),
            message: "外部API呼び出しエラー (HTTP): upstream status 503".into(),
        }
        .into_reply();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["code"], "503");
        assert!(v["message"]
            .as_str()
            .unwrap()
            .contains("外部API呼び出しエラー (HTTP):"));
    }

    #[test]
    fn external_error_without_status_gets_placeholder_code() {
        let out = LookupOutcome::ExternalError {
            code: None,
            message: "外部API呼び出しエラー (HTTP): connection refused".into(),
        }
        .into_reply();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["code"], "N/A");
    }
}
