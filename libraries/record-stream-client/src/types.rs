//! Wire types for the signed-URL endpoint.

use serde::{Deserialize, Serialize};

/// Request body for the signing endpoint.
///
/// `expires_in` is optional on the wire; the endpoint substitutes its
/// default validity (3600 seconds) when the field is omitted or invalid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUrlRequest {
    /// Object-storage path to sign
    pub object_path: String,

    /// Requested URL validity in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

/// Successful response from the signing endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUrlResponse {
    /// Time-limited playable URL
    pub signed_url: String,
}

/// Error payload returned by the signing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// Error description
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_and_omits_empty_expiry() {
        let request = SignedUrlRequest {
            object_path: "demos/live.mp3".to_string(),
            expires_in: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, "{\"objectPath\":\"demos/live.mp3\"}");

        let request = SignedUrlRequest {
            object_path: "demos/live.mp3".to_string(),
            expires_in: Some(600),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"expiresIn\":600"));
    }

    #[test]
    fn response_parses_camel_case() {
        let response: SignedUrlResponse =
            serde_json::from_str("{\"signedUrl\":\"https://cdn.example.com/x\"}").unwrap();
        assert_eq!(response.signed_url, "https://cdn.example.com/x");
    }
}
