// Service layer
// Outbound relay to the automation endpoint.

pub mod relay;

pub use relay::RelayService;
