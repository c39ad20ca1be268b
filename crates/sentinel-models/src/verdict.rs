//! SLA verdicts and risk assessment output shapes.
//!
//! These are the per-ticket results handed to reporting and alerting
//! collaborators. All hour values are full-precision fractional business
//! hours; rounding is a presentation concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Compliance state of one milestone for one ticket at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Milestone occurred within its limit.
    Compliant,
    /// Milestone has not occurred and elapsed time is approaching the limit.
    AtRisk,
    /// Elapsed time exceeds the limit, whether or not the milestone occurred.
    Violated,
    /// Milestone has not occurred and elapsed time is comfortably under the
    /// limit. Only used for the first-response milestone.
    Pending,
}

/// The computed compliance state of one milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaVerdict {
    /// Compliance status.
    pub status: MilestoneStatus,

    /// Business hours elapsed from the reference start to the milestone,
    /// or to `now` if the milestone has not occurred.
    pub business_hours_elapsed: f64,

    /// The configured limit in business hours.
    pub limit_hours: f64,

    /// `max(0, business_hours_elapsed - limit_hours)`.
    pub overdue_by_hours: f64,

    /// When the milestone occurred, if it has.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<DateTime<Utc>>,
}

impl SlaVerdict {
    /// Returns true if the milestone is in breach.
    pub fn is_violated(&self) -> bool {
        self.status == MilestoneStatus::Violated
    }

    /// Returns true if the milestone has not occurred yet.
    pub fn is_open(&self) -> bool {
        self.occurred_at.is_none()
    }
}

/// Overall risk tier for a ticket.
///
/// Higher numeric value = higher risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// Routine; no action needed beyond monitoring.
    #[default]
    Low,
    /// Needs a follow-up.
    Medium,
    /// Needs senior review.
    High,
    /// Needs escalation.
    Critical,
}

impl RiskTier {
    /// Returns the numeric value of this tier.
    /// Higher value = higher risk.
    pub fn as_value(&self) -> u8 {
        match self {
            RiskTier::Low => 1,
            RiskTier::Medium => 2,
            RiskTier::High => 3,
            RiskTier::Critical => 4,
        }
    }
}

impl PartialOrd for RiskTier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RiskTier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_value().cmp(&other.as_value())
    }
}

/// Risk tier plus the recommended next action for a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Overall risk tier.
    pub tier: RiskTier,

    /// Recommended next action, e.g. "escalate" or "monitor".
    pub action: String,
}
