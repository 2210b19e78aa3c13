//! Response shaping per calling convention
//!
//! Typed callers receive a JSON-encoded string (their schema declares the
//! return type as String); gateway callers receive a status-code envelope
//! with a stringified JSON body. There is no partial-success shape.

use crate::error::GenerateError;
use plangen_store::ArtifactLocator;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

/// The CORS header attached to successful gateway responses
pub const CORS_ALLOW_ALL: (&str, &str) = ("Access-Control-Allow-Origin", "*");

/// Gateway-convention envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayResponse {
    /// HTTP status code
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Response headers, omitted when empty
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Stringified JSON body
    pub body: String,
}

/// A convention-shaped pipeline result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Typed convention: the JSON-encoded `{"url": ...}` string
    Typed(String),
    /// Gateway convention: full envelope, success or failure
    Gateway(GatewayResponse),
}

impl Response {
    /// Typed success: JSON string of the locator
    #[must_use]
    pub fn typed_success(locator: &ArtifactLocator) -> Self {
        Self::Typed(json!({ "url": locator.url }).to_string())
    }

    /// Gateway success: 200 with CORS-allow-all and a `{"url": ...}` body
    #[must_use]
    pub fn gateway_success(locator: &ArtifactLocator) -> Self {
        let (name, value) = CORS_ALLOW_ALL;
        Self::Gateway(GatewayResponse {
            status_code: 200,
            headers: BTreeMap::from([(name.to_string(), value.to_string())]),
            body: json!({ "url": locator.url }).to_string(),
        })
    }

    /// Gateway failure: 500 with a `{"error": ...}` body
    #[must_use]
    pub fn gateway_failure(error: &GenerateError) -> Self {
        Self::Gateway(GatewayResponse {
            status_code: 500,
            headers: BTreeMap::new(),
            body: json!({ "error": error.caller_message() }).to_string(),
        })
    }
}
