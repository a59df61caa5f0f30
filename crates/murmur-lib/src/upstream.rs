//! ElevenLabs synthesis client.
//!
//! One POST per relay request, no retries. Voice selection goes in the URL
//! path, the API key in the `xi-api-key` header, and the model plus fixed
//! voice-tuning settings in the JSON body.

use axum::http::header;
use tracing::{debug, error};

use murmur_core::types::{AUDIO_CONTENT_TYPE, SynthesisBody};

use crate::error::RelayError;

/// Thin client over the provider's synthesis endpoint.
#[derive(Debug, Clone)]
pub struct SynthesisClient {
    http: reqwest::Client,
    base_url: String,
}

impl SynthesisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Synthesize `text` with the given credentials, returning the raw audio
    /// bytes. A non-success provider status becomes [`RelayError::Upstream`]
    /// carrying the provider's error text.
    pub async fn synthesize(
        &self,
        api_key: &str,
        voice_id: &str,
        text: &str,
    ) -> Result<Vec<u8>, RelayError> {
        let url = format!("{}/v1/text-to-speech/{voice_id}", self.base_url);
        debug!(voice_id, chars = text.len(), "posting synthesis request");

        let resp = self
            .http
            .post(&url)
            .header("xi-api-key", api_key)
            .header(header::ACCEPT, AUDIO_CONTENT_TYPE)
            .json(&SynthesisBody::new(text))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let detail = resp.text().await.unwrap_or_default();
            error!("provider returned {status}: {detail}");
            return Err(RelayError::Upstream { detail });
        }

        Ok(resp.bytes().await?.to_vec())
    }
}
