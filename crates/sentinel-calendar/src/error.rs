//! Error types for schedule configuration.

use thiserror::Error;

/// Errors raised when a business schedule is malformed.
///
/// A broken schedule corrupts every verdict computed from it, so these are
/// fatal at construction time rather than defaulted around.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// A day window where start is not strictly before end, or either bound
    /// is outside the day.
    #[error("invalid day window: start {start_hour} must be >= 0 and < end {end_hour} <= 24")]
    InvalidWindow {
        /// Configured start of day in fractional hours.
        start_hour: f64,
        /// Configured end of day in fractional hours.
        end_hour: f64,
    },

    /// A civil-timezone offset outside the representable range.
    #[error("invalid utc offset: {minutes} minutes")]
    InvalidOffset {
        /// Configured offset in minutes east of UTC.
        minutes: i32,
    },
}

/// Result type alias for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
