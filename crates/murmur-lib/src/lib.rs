//! murmur-lib — TTS relay engine.
//!
//! One inbound `POST /tts` becomes exactly one ElevenLabs synthesis call;
//! the audio bytes (or a JSON error) are relayed back to the caller.
//! Depends on murmur-core for the provider wire contract.

pub mod config;
pub mod error;
pub mod server;
pub mod upstream;

// Re-export murmur-core for convenience
pub use murmur_core;
