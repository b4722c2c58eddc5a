use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    /// Hex-encoded Ed25519 public key of the calling platform
    pub public_key: String,
    /// Destination webhook for relayed command payloads
    pub forward_webhook_url: String,
    /// Inbound request timeout in seconds
    pub request_timeout: u64,
    /// Upper bound on a single relay attempt in seconds
    pub relay_timeout_secs: u64,
    /// Accept self-signed certificates on the relay client only, never on
    /// the inbound side
    pub relay_accept_invalid_certs: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Ok(Config {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            public_key: env::var("INTERACTION_PUBLIC_KEY").map_err(|_| {
                anyhow::anyhow!("INTERACTION_PUBLIC_KEY environment variable is required")
            })?,
            forward_webhook_url: env::var("FORWARD_WEBHOOK_URL").map_err(|_| {
                anyhow::anyhow!("FORWARD_WEBHOOK_URL environment variable is required")
            })?,
            request_timeout: env::var("REQUEST_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            relay_timeout_secs: env::var("RELAY_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            relay_accept_invalid_certs: env::var("RELAY_ACCEPT_INVALID_CERTS")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
        })
    }
}
