//! Signed-URL client tests against a mock signing endpoint.

use record_playback::{PlaybackError, UrlResolver};
use record_stream_client::{SignedUrlClient, StreamClientConfig, StreamClientError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SignedUrlClient {
    SignedUrlClient::new(StreamClientConfig::new(format!(
        "{}/generate-signed-url",
        server.uri()
    )))
    .unwrap()
}

#[tokio::test]
async fn successful_signing_returns_playable_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-signed-url"))
        .and(body_json(serde_json::json!({
            "objectPath": "demos/live.mp3"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "signedUrl": "https://cdn.example.com/demos/live.mp3?Expires=1700000000&Signature=abc"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let url = client.fetch_signed_url("demos/live.mp3").await.unwrap();

    assert_eq!(url.host_str(), Some("cdn.example.com"));
    assert_eq!(url.path(), "/demos/live.mp3");
    assert!(url.query().unwrap().contains("Signature=abc"));
}

#[tokio::test]
async fn explicit_expiry_is_sent_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-signed-url"))
        .and(body_json(serde_json::json!({
            "objectPath": "demos/live.mp3",
            "expiresIn": 600
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "signedUrl": "https://cdn.example.com/demos/live.mp3?sig=x"
        })))
        .mount(&server)
        .await;

    let client = SignedUrlClient::new(
        StreamClientConfig::new(format!("{}/generate-signed-url", server.uri()))
            .with_expires_in(600),
    )
    .unwrap();

    assert!(client.fetch_signed_url("demos/live.mp3").await.is_ok());
}

#[tokio::test]
async fn zero_expiry_is_omitted_for_server_default() {
    let server = MockServer::start().await;

    // The endpoint replaces invalid expiry values with its default; the
    // client never sends a non-positive value in the first place.
    Mock::given(method("POST"))
        .and(path("/generate-signed-url"))
        .and(body_json(serde_json::json!({
            "objectPath": "demos/live.mp3"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "signedUrl": "https://cdn.example.com/demos/live.mp3?sig=x"
        })))
        .mount(&server)
        .await;

    let client = SignedUrlClient::new(
        StreamClientConfig::new(format!("{}/generate-signed-url", server.uri()))
            .with_expires_in(0),
    )
    .unwrap();

    assert!(client.fetch_signed_url("demos/live.mp3").await.is_ok());
}

#[tokio::test]
async fn api_key_is_sent_as_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-signed-url"))
        .and(header("Authorization", "Bearer anon-key-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "signedUrl": "https://cdn.example.com/x?sig=y"
        })))
        .mount(&server)
        .await;

    let client = SignedUrlClient::new(
        StreamClientConfig::new(format!("{}/generate-signed-url", server.uri()))
            .with_api_key("anon-key-123"),
    )
    .unwrap();

    assert!(client.fetch_signed_url("demos/live.mp3").await.is_ok());
}

#[tokio::test]
async fn error_payload_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-signed-url"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "objectPath is required and must be a string"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.fetch_signed_url("").await;

    match result.unwrap_err() {
        StreamClientError::ServerError { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("objectPath is required"));
        }
        e => panic!("expected ServerError, got: {e:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-signed-url"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.fetch_signed_url("demos/live.mp3").await;

    assert!(matches!(
        result.unwrap_err(),
        StreamClientError::Parse(_)
    ));
}

#[tokio::test]
async fn invalid_signed_url_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-signed-url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "signedUrl": "not a url"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.fetch_signed_url("demos/live.mp3").await;

    assert!(matches!(
        result.unwrap_err(),
        StreamClientError::InvalidUrl(_)
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_reported() {
    let client =
        SignedUrlClient::new(StreamClientConfig::new("http://127.0.0.1:1/no-such-fn")).unwrap();
    let result = client.fetch_signed_url("demos/live.mp3").await;

    match result.unwrap_err() {
        StreamClientError::Unreachable(_) | StreamClientError::Request(_) => {}
        e => panic!("expected Unreachable or Request error, got: {e:?}"),
    }
}

#[tokio::test]
async fn resolver_trait_maps_failures_to_resolution_failed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-signed-url"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "Missing required environment variables"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = UrlResolver::signed_url(&client, "demos/live.mp3").await;

    match result.unwrap_err() {
        PlaybackError::ResolutionFailed(message) => {
            assert!(message.contains("400"));
        }
        e => panic!("expected ResolutionFailed, got: {e:?}"),
    }
}

#[tokio::test]
async fn resolver_trait_returns_playable_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-signed-url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "signedUrl": "https://cdn.example.com/demos/live.mp3?sig=ok"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let url = UrlResolver::signed_url(&client, "demos/live.mp3")
        .await
        .unwrap();
    assert_eq!(url.host_str(), Some("cdn.example.com"));
}
