//! HTTP API for the murmur TTS relay.
//!
//! One route, `/tts`. CORS-permissive so browser frontends can call it
//! directly. `POST` relays to the provider, `OPTIONS` answers preflights,
//! everything else gets a 405 with an `Allow` header.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tracing::debug;

use murmur_core::types::AUDIO_CONTENT_TYPE;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::upstream::SynthesisClient;

/// Shared handler state: the startup config plus one reused HTTP client.
#[derive(Clone)]
pub struct RelayState {
    config: Arc<RelayConfig>,
    client: SynthesisClient,
}

impl RelayState {
    pub fn new(config: RelayConfig) -> Self {
        let client = SynthesisClient::new(config.upstream_url.clone());
        Self {
            config: Arc::new(config),
            client,
        }
    }
}

/// Build the axum router from a [`RelayConfig`].
pub fn router(config: RelayConfig) -> Router {
    Router::new()
        .route(
            "/tts",
            post(synthesize)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(CorsLayer::permissive())
        .with_state(RelayState::new(config))
}

/// The relay flow: lenient body parse, `text` validation, credential check,
/// one upstream call, audio back out.
async fn synthesize(
    State(state): State<RelayState>,
    body: Bytes,
) -> Result<Response, RelayError> {
    // An empty body reads as {} and fails the text check below with the
    // normal 400; malformed JSON surfaces as the generic server error.
    let parsed: Value = if body.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body)?
    };

    let text = match parsed.get("text").and_then(Value::as_str) {
        Some(text) if !text.is_empty() => text,
        _ => {
            return Err(RelayError::InvalidRequest(
                "Missing \"text\" string".to_string(),
            ));
        }
    };

    let (api_key, voice_id) = state.config.credentials()?;

    debug!(chars = text.len(), "relaying synthesis request");
    let audio = state.client.synthesize(api_key, voice_id, text).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, AUDIO_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-store"),
        ],
        audio,
    )
        .into_response())
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST, OPTIONS")],
        "Method Not Allowed",
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    /// Config with credentials set but an upstream no test here reaches.
    fn test_config() -> RelayConfig {
        RelayConfig {
            upstream_url: "http://127.0.0.1:9".to_string(),
            api_key: Some("test-key".to_string()),
            voice_id: Some("test-voice".to_string()),
        }
    }

    fn post_tts(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/tts")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_text_is_400() {
        let resp = router(test_config()).oneshot(post_tts("{}")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({"error": "Missing \"text\" string"})
        );
    }

    #[tokio::test]
    async fn non_string_text_is_400() {
        let resp = router(test_config())
            .oneshot(post_tts(r#"{"text": 5}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_string_text_is_400() {
        let resp = router(test_config())
            .oneshot(post_tts(r#"{"text": ""}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_body_reads_as_empty_object() {
        let resp = router(test_config()).oneshot(post_tts("")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({"error": "Missing \"text\" string"})
        );
    }

    #[tokio::test]
    async fn malformed_json_is_server_error() {
        let resp = router(test_config())
            .oneshot(post_tts("not json"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Server error");
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn missing_credentials_is_500() {
        let config = RelayConfig {
            api_key: None,
            ..test_config()
        };
        let resp = router(config)
            .oneshot(post_tts(r#"{"text": "Hello"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(resp).await,
            json!({"error": "Missing ELEVENLABS_API_KEY or ELEVENLABS_VOICE_ID"})
        );
    }

    #[tokio::test]
    async fn options_is_200_with_empty_body() {
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/tts")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let resp = router(test_config()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn wrong_method_is_405_with_allow_header() {
        for method in ["GET", "PUT", "DELETE"] {
            let req = Request::builder()
                .method(method)
                .uri("/tts")
                .body(Body::empty())
                .unwrap();
            let resp = router(test_config()).oneshot(req).await.unwrap();
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(
                resp.headers().get(header::ALLOW).map(|v| v.to_str().unwrap()),
                Some("POST, OPTIONS")
            );
            let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(&bytes[..], b"Method Not Allowed");
        }
    }

    #[tokio::test]
    async fn error_responses_carry_cors_headers() {
        let resp = router(test_config()).oneshot(post_tts("{}")).await.unwrap();
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
    }
}
