//! murmur CLI — standalone TTS relay.
//!
//! ```text
//! murmur serve [--port 2010] [--host 127.0.0.1] [--upstream-url URL]
//! murmur speak "hello world" [--server http://localhost:2010] [--out speech.mp3]
//! ```
//!
//! `serve` reads `ELEVENLABS_API_KEY` and `ELEVENLABS_VOICE_ID` from the
//! environment; `speak` is a convenience client for a running relay.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;

use murmur_lib::config::RelayConfig;
use murmur_lib::murmur_core::types::ErrorBody;

/// murmur — HTTP relay to the ElevenLabs text-to-speech API
#[derive(Parser)]
#[command(name = "murmur", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the relay server
    Serve {
        /// Listen port
        #[arg(long, default_value = "2010")]
        port: u16,
        /// Listen host
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Provider base URL (overrides ELEVENLABS_API_URL)
        #[arg(long)]
        upstream_url: Option<String>,
    },
    /// Send text to a running relay and save the audio
    Speak {
        /// Text to synthesize
        text: String,
        /// Relay URL
        #[arg(long, default_value = "http://localhost:2010")]
        server: String,
        /// Output file for the audio
        #[arg(long, default_value = "speech.mp3")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            port,
            host,
            upstream_url,
        } => {
            let mut config = RelayConfig::from_env();
            if let Some(url) = upstream_url {
                config.upstream_url = url;
            }
            if config.api_key.is_none() || config.voice_id.is_none() {
                warn!(
                    "ELEVENLABS_API_KEY or ELEVENLABS_VOICE_ID not set; \
                     synthesis requests will fail until both are configured"
                );
            }

            let app = murmur_lib::server::router(config);

            let addr = format!("{host}:{port}");
            eprintln!("murmur listening on {addr}");

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .expect("failed to bind");

            axum::serve(listener, app).await.expect("server error");
        }

        Command::Speak { text, server, out } => {
            let resp = reqwest::Client::new()
                .post(format!("{server}/tts"))
                .json(&serde_json::json!({ "text": text }))
                .send()
                .await
                .expect("request failed");

            if resp.status().is_success() {
                let audio = resp.bytes().await.expect("failed to read audio");
                tokio::fs::write(&out, &audio)
                    .await
                    .expect("failed to write audio file");
                println!("wrote {} bytes to {}", audio.len(), out.display());
            } else {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                match serde_json::from_str::<ErrorBody>(&body) {
                    Ok(err) => match err.detail {
                        Some(detail) => eprintln!("relay error ({status}): {}: {detail}", err.error),
                        None => eprintln!("relay error ({status}): {}", err.error),
                    },
                    Err(_) => eprintln!("relay error ({status}): {body}"),
                }
                std::process::exit(1);
            }
        }
    }
}
