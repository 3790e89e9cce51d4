//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (live
//! subscription, admin panel, dashboard controls) that the
//! [`ScoringService`](super::service::ScoringService) interprets.

use crate::config::EngineConfig;
use crate::reading::Reading;
use crate::scoring::category::Scheme;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Score a new reading from the live subscription (or an injected
    /// test reading from the admin panel).
    Ingest(Reading),

    /// Switch the classification scheme used for reported status.
    SetScheme(Scheme),

    /// Hot-reload configuration.  Rejected if validation fails.
    UpdateConfig(EngineConfig),

    /// Drop every sample from the score history.
    ClearHistory,
}
