//! Per-priority SLA limits.
//!
//! Limits are configuration supplied by the deploying organization, not
//! business logic: the domain has no single authoritative table, so none
//! is hard-coded here.

use serde::{Deserialize, Serialize};

use sentinel_models::TicketPriority;

use crate::error::{ConfigError, Result};

/// Business-hour limits for one priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilestoneLimits {
    /// Limit for the assignment milestone, in business hours.
    pub assignment_hours: f64,
    /// Limit for the first-response milestone, in business hours.
    pub first_response_hours: f64,
}

impl MilestoneLimits {
    /// Creates validated limits.
    pub fn new(assignment_hours: f64, first_response_hours: f64) -> Self {
        Self {
            assignment_hours,
            first_response_hours,
        }
    }

    fn validate(&self, priority: TicketPriority) -> Result<()> {
        let check = |milestone: &str, hours: f64| {
            if hours.is_finite() && hours > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidLimit {
                    priority: format!("{priority:?}").to_ascii_lowercase(),
                    milestone: milestone.to_string(),
                    hours,
                })
            }
        };
        check("assignment", self.assignment_hours)?;
        check("first_response", self.first_response_hours)?;
        Ok(())
    }
}

/// The full priority-to-limit table.
///
/// One field per tier rather than a map: a missing tier is
/// unrepresentable, which is the configuration contract: the engine must
/// refuse a table that cannot answer for every priority.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlaThresholds {
    /// Limits for critical-priority tickets.
    pub critical: MilestoneLimits,
    /// Limits for high-priority tickets.
    pub high: MilestoneLimits,
    /// Limits for normal-priority tickets.
    pub normal: MilestoneLimits,
    /// Limits for low-priority tickets.
    pub low: MilestoneLimits,
}

impl SlaThresholds {
    /// Creates a validated threshold table.
    pub fn new(
        critical: MilestoneLimits,
        high: MilestoneLimits,
        normal: MilestoneLimits,
        low: MilestoneLimits,
    ) -> Result<Self> {
        let thresholds = Self {
            critical,
            high,
            normal,
            low,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Checks every limit. Deserialized tables must be validated before
    /// use; the engine config does this on construction.
    pub fn validate(&self) -> Result<()> {
        self.critical.validate(TicketPriority::Critical)?;
        self.high.validate(TicketPriority::High)?;
        self.normal.validate(TicketPriority::Normal)?;
        self.low.validate(TicketPriority::Low)?;
        Ok(())
    }

    /// Returns the limits for a priority tier.
    pub fn limits_for(&self, priority: TicketPriority) -> MilestoneLimits {
        match priority {
            TicketPriority::Critical => self.critical,
            TicketPriority::High => self.high,
            TicketPriority::Normal => self.normal,
            TicketPriority::Low => self.low,
        }
    }
}
