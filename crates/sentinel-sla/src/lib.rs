//! SLA milestone evaluation and risk classification.
//!
//! Given a ticket, its extracted timeline, a priority-to-limit threshold
//! table, and a business schedule, this crate computes a per-milestone
//! [`SlaVerdict`](sentinel_models::SlaVerdict) (assignment and first
//! response) and aggregates the verdicts plus ticket age into an overall
//! risk tier with a recommended next action.
//!
//! Everything is a pure function of its arguments; `now` is always
//! injected, never read from a clock.

pub mod error;
pub mod evaluate;
pub mod risk;
pub mod thresholds;

pub use error::{ConfigError, Result};
pub use evaluate::{evaluate, SlaOutcome};
pub use risk::{classify, recommended_action, RiskThresholds};
pub use thresholds::{MilestoneLimits, SlaThresholds};
