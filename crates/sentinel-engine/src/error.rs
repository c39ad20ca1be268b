//! Error types for the analysis pipeline.

use thiserror::Error;

use sentinel_calendar::ScheduleError;
use sentinel_sla::ConfigError;

/// Errors surfaced by the engine.
///
/// Configuration errors are fatal at construction. A malformed
/// `created_at` is a per-ticket failure at the ingestion boundary: the
/// batch runner isolates it and continues with the remaining tickets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The business schedule is invalid.
    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),

    /// The SLA threshold or risk configuration is invalid.
    #[error("invalid sla configuration: {0}")]
    Config(#[from] ConfigError),

    /// A ticket's creation timestamp could not be parsed.
    #[error("ticket {id}: malformed created_at: {value:?}")]
    MalformedCreatedAt {
        /// The offending ticket's id.
        id: String,
        /// The raw value that failed to parse.
        value: String,
    },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
