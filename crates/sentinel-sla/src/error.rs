//! Error types for SLA configuration.

use thiserror::Error;

/// Errors raised by invalid threshold configuration.
///
/// Fatal at construction time: a broken threshold table corrupts every
/// verdict computed from it, so the engine refuses it up front rather
/// than defaulting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// An SLA limit that is zero, negative, or not finite.
    #[error("invalid sla limit for {priority} {milestone}: {hours}")]
    InvalidLimit {
        /// Priority tier the limit belongs to.
        priority: String,
        /// Milestone name ("assignment" or "first_response").
        milestone: String,
        /// The rejected value.
        hours: f64,
    },

    /// Risk age thresholds that do not strictly decrease.
    #[error(
        "risk thresholds must strictly decrease: critical {critical_after_days} > high {high_after_days} > medium {medium_after_days}"
    )]
    InvalidRiskThresholds {
        /// Age in business days above which a ticket is critical risk.
        critical_after_days: u32,
        /// Age above which a ticket is high risk.
        high_after_days: u32,
        /// Age above which a ticket is medium risk.
        medium_after_days: u32,
    },
}

/// Result type alias for SLA configuration.
pub type Result<T> = std::result::Result<T, ConfigError>;
