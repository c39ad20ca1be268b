//! Per-ticket and per-batch output records.
//!
//! These are the shapes handed to reporting and notification
//! collaborators (dashboards, alerting, email). They are plain
//! serializable data with no behavior beyond aggregation.

use serde::{Deserialize, Serialize};

use sentinel_models::{
    MilestoneStatus, RiskAssessment, RiskTier, SlaVerdict, TicketId, TicketPriority, TicketStatus,
    Timeline,
};

/// The full analysis result for one ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketReport {
    /// The analyzed ticket's id.
    pub ticket_id: TicketId,

    /// Normalized priority of the ticket.
    pub priority: TicketPriority,

    /// Normalized status of the ticket.
    pub status: TicketStatus,

    /// The extracted event timeline.
    pub timeline: Timeline,

    /// Verdict for the assignment milestone.
    pub assignment: SlaVerdict,

    /// Verdict for the first-response milestone.
    pub first_response: SlaVerdict,

    /// Ticket age in business days at evaluation time.
    pub age_business_days: u32,

    /// Overall risk tier and recommended action.
    pub risk: RiskAssessment,
}

impl TicketReport {
    /// Returns true if either milestone is in breach.
    pub fn has_violation(&self) -> bool {
        self.assignment.is_violated() || self.first_response.is_violated()
    }
}

/// Aggregate counts over one batch, for reporting layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Tickets analyzed.
    pub total: usize,
    /// Tickets with a violated assignment milestone.
    pub assignment_violations: usize,
    /// Tickets with a violated first-response milestone.
    pub first_response_violations: usize,
    /// Tickets at low risk.
    pub low_risk: usize,
    /// Tickets at medium risk.
    pub medium_risk: usize,
    /// Tickets at high risk.
    pub high_risk: usize,
    /// Tickets at critical risk.
    pub critical_risk: usize,
    /// Fraction of tickets with any violated milestone.
    pub breach_rate: f64,
}

impl BatchSummary {
    /// Aggregates a batch of reports.
    pub fn from_reports(reports: &[TicketReport]) -> Self {
        let mut summary = Self {
            total: reports.len(),
            ..Self::default()
        };

        for report in reports {
            if report.assignment.status == MilestoneStatus::Violated {
                summary.assignment_violations += 1;
            }
            if report.first_response.status == MilestoneStatus::Violated {
                summary.first_response_violations += 1;
            }
            match report.risk.tier {
                RiskTier::Low => summary.low_risk += 1,
                RiskTier::Medium => summary.medium_risk += 1,
                RiskTier::High => summary.high_risk += 1,
                RiskTier::Critical => summary.critical_risk += 1,
            }
        }

        if summary.total > 0 {
            let breached = reports.iter().filter(|r| r.has_violation()).count();
            summary.breach_rate = breached as f64 / summary.total as f64;
        }
        summary
    }
}
