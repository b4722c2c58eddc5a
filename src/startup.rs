//! Application startup and initialization logic

use anyhow::Result;
use tracing::info;

use crate::app_state::AppState;
use crate::config::Config;
use crate::services::RelayService;
use crate::utils::SignatureVerifier;

/// Initialize application services and create the AppState.
pub fn initialize_app(config: &Config) -> Result<AppState> {
    let verifier = SignatureVerifier::from_hex(&config.public_key)
        .map_err(|e| anyhow::anyhow!("Failed to load interaction public key: {}", e))?;
    info!("Signature verifier initialized");

    let relay = RelayService::new(config)?;
    info!(
        "Relay client initialized (target: {})",
        config.forward_webhook_url
    );

    Ok(AppState {
        config: config.clone(),
        verifier,
        relay,
    })
}
