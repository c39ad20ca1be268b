//! Age-based risk classification.
//!
//! A deterministic decision table on ticket age in business days, informed
//! by the SLA verdicts: a ticket whose first response is in breach is
//! never `Low` risk regardless of how young it is. Thresholds are
//! configuration with overridable defaults, not hard-coded business logic.

use serde::{Deserialize, Serialize};

use sentinel_models::{RiskAssessment, RiskTier};

use crate::error::{ConfigError, Result};
use crate::evaluate::SlaOutcome;

/// Age thresholds, in business days, for the risk tiers.
///
/// Invariant: `critical_after_days > high_after_days > medium_after_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Age above which a ticket is critical risk.
    pub critical_after_days: u32,
    /// Age above which a ticket is high risk.
    pub high_after_days: u32,
    /// Age above which a ticket is medium risk.
    pub medium_after_days: u32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            critical_after_days: 21,
            high_after_days: 14,
            medium_after_days: 7,
        }
    }
}

impl RiskThresholds {
    /// Creates validated thresholds.
    pub fn new(critical_after_days: u32, high_after_days: u32, medium_after_days: u32) -> Result<Self> {
        let thresholds = Self {
            critical_after_days,
            high_after_days,
            medium_after_days,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Checks that the thresholds strictly decrease.
    pub fn validate(&self) -> Result<()> {
        if self.critical_after_days > self.high_after_days
            && self.high_after_days > self.medium_after_days
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidRiskThresholds {
                critical_after_days: self.critical_after_days,
                high_after_days: self.high_after_days,
                medium_after_days: self.medium_after_days,
            })
        }
    }

    fn tier_for_age(&self, age_business_days: u32) -> RiskTier {
        if age_business_days > self.critical_after_days {
            RiskTier::Critical
        } else if age_business_days > self.high_after_days {
            RiskTier::High
        } else if age_business_days > self.medium_after_days {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }
}

/// Returns the recommended next action for a risk tier.
pub fn recommended_action(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Critical => "escalate",
        RiskTier::High => "senior review",
        RiskTier::Medium => "follow up",
        RiskTier::Low => "monitor",
    }
}

/// Classifies a ticket's overall risk.
///
/// Age drives the tier; a violated first-response milestone floors it at
/// `Medium` so a breached ticket can never read as routine.
pub fn classify(
    outcome: &SlaOutcome,
    age_business_days: u32,
    thresholds: &RiskThresholds,
) -> RiskAssessment {
    let mut tier = thresholds.tier_for_age(age_business_days);
    if outcome.first_response.is_violated() && tier < RiskTier::Medium {
        tier = RiskTier::Medium;
    }
    RiskAssessment {
        tier,
        action: recommended_action(tier).to_string(),
    }
}
