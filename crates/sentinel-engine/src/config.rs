//! Engine configuration.
//!
//! One document bundling the business schedule, the SLA threshold table,
//! and the risk thresholds. It is supplied by the caller as structured
//! data (typically deserialized from a config file by the hosting
//! application). The engine never reads the environment.

use serde::{Deserialize, Serialize};

use sentinel_calendar::BusinessSchedule;
use sentinel_sla::{RiskThresholds, SlaThresholds};

use crate::error::Result;

/// Complete configuration for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Business-hours schedule of the support organization.
    pub schedule: BusinessSchedule,

    /// Per-priority SLA limits.
    pub thresholds: SlaThresholds,

    /// Risk tier age thresholds.
    #[serde(default)]
    pub risk: RiskThresholds,
}

impl EngineConfig {
    /// Creates a validated configuration.
    pub fn new(
        schedule: BusinessSchedule,
        thresholds: SlaThresholds,
        risk: RiskThresholds,
    ) -> Result<Self> {
        let config = Self {
            schedule,
            thresholds,
            risk,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every part of the configuration.
    ///
    /// Invalid configuration is fatal: the engine refuses to evaluate
    /// anything rather than silently defaulting, since a broken schedule
    /// or threshold table corrupts every verdict it produces.
    pub fn validate(&self) -> Result<()> {
        self.schedule.validate()?;
        self.thresholds.validate()?;
        self.risk.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_calendar::{DayWindow, WeekendHours};
    use sentinel_sla::MilestoneLimits;
    use std::collections::BTreeSet;

    fn valid_config() -> EngineConfig {
        EngineConfig {
            schedule: BusinessSchedule {
                utc_offset_minutes: 0,
                weekday: DayWindow {
                    start_hour: 8.5,
                    end_hour: 17.5,
                },
                weekend: WeekendHours::Excluded,
                holidays: BTreeSet::new(),
            },
            thresholds: SlaThresholds {
                critical: MilestoneLimits::new(1.0, 2.0),
                high: MilestoneLimits::new(2.0, 4.0),
                normal: MilestoneLimits::new(4.0, 8.0),
                low: MilestoneLimits::new(8.0, 16.0),
            },
            risk: RiskThresholds::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_bad_schedule_is_fatal() {
        let mut config = valid_config();
        config.schedule.weekday.end_hour = 4.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_threshold_is_fatal() {
        let mut config = valid_config();
        config.thresholds.normal.assignment_hours = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_risk_thresholds_are_fatal() {
        let mut config = valid_config();
        config.risk.medium_after_days = 30;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserializes_from_one_document() {
        let json = r#"{
            "schedule": {
                "utc_offset_minutes": 60,
                "weekday": {"start_hour": 8.5, "end_hour": 17.5},
                "weekend": {"window": {"start_hour": 8.5, "end_hour": 16.0}},
                "holidays": ["2024-12-25"]
            },
            "thresholds": {
                "critical": {"assignment_hours": 1.0, "first_response_hours": 2.0},
                "high": {"assignment_hours": 2.0, "first_response_hours": 4.0},
                "normal": {"assignment_hours": 4.0, "first_response_hours": 8.0},
                "low": {"assignment_hours": 8.0, "first_response_hours": 16.0}
            }
        }"#;

        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        // Risk thresholds were omitted and fall back to the defaults.
        assert_eq!(config.risk, RiskThresholds::default());
    }
}
