//! Relay configuration.
//!
//! Read from the environment once at startup and passed explicitly into the
//! router, so tests can construct configs without touching the process
//! environment.

use crate::error::RelayError;

/// Default ElevenLabs API base URL.
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.elevenlabs.io";

/// Relay configuration.
///
/// Credentials are optional here: a deployment without them still serves
/// (and answers preflights), but every synthesis request fails with a
/// misconfiguration error, matching the per-request check the relay
/// contract requires.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Provider base URL, without a trailing slash.
    pub upstream_url: String,
    pub api_key: Option<String>,
    pub voice_id: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            api_key: None,
            voice_id: None,
        }
    }
}

impl RelayConfig {
    /// Read configuration from `ELEVENLABS_API_KEY`, `ELEVENLABS_VOICE_ID`,
    /// and optional `ELEVENLABS_API_URL`. Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            upstream_url: std::env::var("ELEVENLABS_API_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
            api_key: std::env::var("ELEVENLABS_API_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
            voice_id: std::env::var("ELEVENLABS_VOICE_ID")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }

    /// Both credentials, or the misconfiguration error the relay returns
    /// when a deployment is missing either one.
    pub fn credentials(&self) -> Result<(&str, &str), RelayError> {
        match (self.api_key.as_deref(), self.voice_id.as_deref()) {
            (Some(key), Some(voice)) => Ok((key, voice)),
            _ => Err(RelayError::Misconfiguration(
                "Missing ELEVENLABS_API_KEY or ELEVENLABS_VOICE_ID".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_present() {
        let config = RelayConfig {
            api_key: Some("key".into()),
            voice_id: Some("voice".into()),
            ..Default::default()
        };
        assert_eq!(config.credentials().unwrap(), ("key", "voice"));
    }

    #[test]
    fn credentials_missing_either_is_misconfiguration() {
        let missing_key = RelayConfig {
            voice_id: Some("voice".into()),
            ..Default::default()
        };
        let missing_voice = RelayConfig {
            api_key: Some("key".into()),
            ..Default::default()
        };
        for config in [missing_key, missing_voice, RelayConfig::default()] {
            let err = config.credentials().unwrap_err();
            assert!(matches!(err, RelayError::Misconfiguration(_)));
        }
    }
}
