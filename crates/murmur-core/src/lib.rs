//! murmur-core — Pure types for the murmur TTS relay.
//!
//! No async runtime, no I/O, no platform dependencies. Holds the provider
//! wire contract and the JSON error body shared by the relay and its CLI.

pub mod types;
