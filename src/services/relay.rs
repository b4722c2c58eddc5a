use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::models::ForwardPayload;

/// Fire-and-forget relay to the downstream automation endpoint.
///
/// Each dispatched payload gets exactly one delivery attempt with a bounded
/// timeout. The outcome is logged and never surfaced to the calling
/// platform; there is no retry and no persisted record.
#[derive(Clone)]
pub struct RelayService {
    client: Client,
    webhook_url: String,
}

impl RelayService {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder =
            Client::builder().timeout(Duration::from_secs(config.relay_timeout_secs));

        if config.relay_accept_invalid_certs {
            // Scoped to this one client, for self-signed automation endpoints.
            warn!("Relay client accepts invalid TLS certificates");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build relay HTTP client: {}", e))?;

        Ok(Self {
            client,
            webhook_url: config.forward_webhook_url.clone(),
        })
    }

    /// Dispatch a payload on a detached task.
    ///
    /// Returns immediately so the platform-facing acknowledgment is never
    /// delayed by downstream latency.
    pub fn dispatch(&self, payload: ForwardPayload) {
        let relay = self.clone();
        tokio::spawn(async move {
            if let Err(e) = relay.deliver(&payload).await {
                error!(url = %payload.url, "Relay delivery failed: {}", e);
            }
        });
    }

    /// Deliver a payload and log the endpoint's verdict.
    pub async fn deliver(&self, payload: &ForwardPayload) -> Result<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(url = %payload.url, status = %status, "Relay delivered");
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(
                url = %payload.url,
                status = %status,
                body = %body,
                "Relay endpoint returned non-success"
            );
        }

        Ok(())
    }
}
