//! Signed-URL client.

use crate::error::{Result, StreamClientError};
use crate::types::{ErrorResponse, SignedUrlRequest, SignedUrlResponse};
use async_trait::async_trait;
use record_playback::{PlaybackError, UrlResolver};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Configuration for the signed-URL client.
#[derive(Debug, Clone)]
pub struct StreamClientConfig {
    /// URL of the signing function endpoint
    pub function_url: String,

    /// API key sent as a bearer token, when the endpoint requires one
    pub api_key: Option<String>,

    /// Requested URL validity in seconds. `None` or a zero value defers to
    /// the endpoint's default (one hour).
    pub expires_in: Option<u64>,
}

impl StreamClientConfig {
    /// Create a config with just the endpoint URL.
    pub fn new(function_url: impl Into<String>) -> Self {
        Self {
            function_url: function_url.into(),
            api_key: None,
            expires_in: None,
        }
    }

    /// Attach an API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Request a specific URL validity.
    pub fn with_expires_in(mut self, seconds: u64) -> Self {
        self.expires_in = Some(seconds);
        self
    }
}

/// Client for the signed-URL endpoint.
///
/// Exchanges an object-storage path for a time-limited playable URL. The
/// client does not cache results; callers re-request when a URL expires.
///
/// # Example
///
/// ```ignore
/// use record_stream_client::{SignedUrlClient, StreamClientConfig};
///
/// let config = StreamClientConfig::new("https://functions.example.com/generate-signed-url");
/// let client = SignedUrlClient::new(config)?;
///
/// let url = client.fetch_signed_url("demos/live.mp3").await?;
/// println!("stream from {url}");
/// ```
pub struct SignedUrlClient {
    http: Client,
    config: StreamClientConfig,
}

impl SignedUrlClient {
    /// Create a new client, validating and normalizing the endpoint URL.
    pub fn new(config: StreamClientConfig) -> Result<Self> {
        if config.function_url.is_empty() {
            return Err(StreamClientError::InvalidUrl(
                "endpoint URL cannot be empty".into(),
            ));
        }

        let function_url = config.function_url.trim_end_matches('/').to_string();
        if !function_url.starts_with("http://") && !function_url.starts_with("https://") {
            return Err(StreamClientError::InvalidUrl(
                "endpoint URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("RecordMachine/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(StreamClientError::Request)?;

        Ok(Self {
            http,
            config: StreamClientConfig {
                function_url,
                ..config
            },
        })
    }

    /// The normalized endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.config.function_url
    }

    /// Request a signed URL for an object path.
    pub async fn fetch_signed_url(&self, object_path: &str) -> Result<Url> {
        // A zero validity would be rejected server-side; treat it as unset
        let expires_in = self.config.expires_in.filter(|&secs| secs > 0);
        let request = SignedUrlRequest {
            object_path: object_path.to_string(),
            expires_in,
        };

        debug!(url = %self.config.function_url, object_path, "requesting signed url");

        let mut builder = self.http.post(&self.config.function_url).json(&request);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                StreamClientError::Unreachable(e.to_string())
            } else {
                StreamClientError::Request(e)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            let body: SignedUrlResponse = response.json().await.map_err(|e| {
                StreamClientError::Parse(format!("bad signing response: {}", e))
            })?;

            let url = Url::parse(&body.signed_url)
                .map_err(|e| StreamClientError::InvalidUrl(e.to_string()))?;

            info!(object_path, "signed url issued");
            Ok(url)
        } else {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);

            warn!(object_path, status = status.as_u16(), %message, "signing request failed");
            Err(StreamClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl UrlResolver for SignedUrlClient {
    async fn signed_url(&self, object_path: &str) -> record_playback::Result<Url> {
        self.fetch_signed_url(object_path)
            .await
            .map_err(|e| PlaybackError::ResolutionFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_validation() {
        assert!(SignedUrlClient::new(StreamClientConfig::new("https://example.com/fn")).is_ok());
        assert!(SignedUrlClient::new(StreamClientConfig::new("http://localhost:9000")).is_ok());

        assert!(SignedUrlClient::new(StreamClientConfig::new("")).is_err());
        assert!(SignedUrlClient::new(StreamClientConfig::new("example.com/fn")).is_err());
        assert!(SignedUrlClient::new(StreamClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn endpoint_url_normalization() {
        let client =
            SignedUrlClient::new(StreamClientConfig::new("https://example.com/fn///")).unwrap();
        assert_eq!(client.endpoint(), "https://example.com/fn");
    }

    #[test]
    fn config_builder() {
        let config = StreamClientConfig::new("https://example.com")
            .with_api_key("key-123")
            .with_expires_in(600);
        assert_eq!(config.api_key.as_deref(), Some("key-123"));
        assert_eq!(config.expires_in, Some(600));
    }
}
