use crate::config::Config;
use crate::services::RelayService;
use crate::utils::SignatureVerifier;

/// Application state shared across handlers.
///
/// Built once at startup and cloned per request; nothing in here is mutable
/// after initialization.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub verifier: SignatureVerifier,
    pub relay: RelayService,
}
