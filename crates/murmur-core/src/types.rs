//! Shared types for the murmur TTS relay.
//!
//! The provider wire body lives here so both murmur-lib (to build requests)
//! and downstream consumers can depend on the contract without pulling in
//! tokio, axum, or reqwest.

use serde::{Deserialize, Serialize};

// ─── Provider constants ────────────────────────────────────────────────────

/// ElevenLabs model used for every synthesis request.
pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";

/// Fixed voice-tuning parameters sent with every request.
pub const DEFAULT_STABILITY: f32 = 0.5;
pub const DEFAULT_SIMILARITY_BOOST: f32 = 0.75;

/// Content type of the audio the provider returns.
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

// ─── Provider wire types ───────────────────────────────────────────────────

/// Voice-tuning settings in the provider's JSON body.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: DEFAULT_STABILITY,
            similarity_boost: DEFAULT_SIMILARITY_BOOST,
        }
    }
}

/// JSON body POSTed to `/v1/text-to-speech/{voice_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisBody {
    pub text: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
}

impl SynthesisBody {
    /// Build a request body with the fixed model and voice settings.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            voice_settings: VoiceSettings::default(),
        }
    }
}

// ─── Relay error body ──────────────────────────────────────────────────────

/// JSON body of every non-audio relay response.
///
/// `detail` is present only for upstream and unexpected failures, so a plain
/// validation error serializes as exactly `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    pub fn with_detail(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: Some(detail.into()),
        }
    }
}
