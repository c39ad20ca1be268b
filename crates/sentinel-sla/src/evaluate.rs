//! Per-milestone SLA evaluation.
//!
//! Two milestones are tracked. **Assignment** runs from ticket creation to
//! the first assignment event. **First response** runs from the first
//! assignment event (falling back to creation when assignment was never
//! observed in the log) to the first technician response after that point.
//! A milestone that has not occurred is measured open-ended against the
//! injected `now` and can never be `Compliant`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sentinel_calendar::{business_hours_between, BusinessSchedule};
use sentinel_models::{MilestoneStatus, SlaVerdict, Ticket, Timeline};

use crate::thresholds::SlaThresholds;

/// Fraction of the limit below which an open first-response milestone is
/// still `Pending` rather than `AtRisk`.
const PENDING_BAND: f64 = 0.75;

/// The two milestone verdicts for one ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaOutcome {
    /// Verdict for the assignment milestone.
    pub assignment: SlaVerdict,
    /// Verdict for the first-response milestone.
    pub first_response: SlaVerdict,
}

/// Evaluates both milestones for a ticket.
///
/// Pure and deterministic: unchanged inputs and an unchanged `now` yield
/// an identical outcome. All hour values are full precision; rounding is
/// left to presentation layers.
pub fn evaluate(
    ticket: &Ticket,
    timeline: &Timeline,
    thresholds: &SlaThresholds,
    schedule: &BusinessSchedule,
    now: DateTime<Utc>,
) -> SlaOutcome {
    let limits = thresholds.limits_for(ticket.priority);
    let assignment_at = timeline.first_assignment().map(|e| e.timestamp);

    let assignment = match assignment_at {
        Some(occurred) => closed_verdict(
            business_hours_between(schedule, ticket.created_at, occurred),
            limits.assignment_hours,
            occurred,
        ),
        None => open_verdict(
            business_hours_between(schedule, ticket.created_at, now),
            limits.assignment_hours,
            // An unassigned ticket is never comfortably on track.
            false,
        ),
    };

    // Assignment time is frequently unobservable from the log; creation is
    // the documented fallback reference.
    let reference = assignment_at.unwrap_or(ticket.created_at);
    let first_response = match timeline.first_technician_response_after(reference) {
        Some(event) => closed_verdict(
            business_hours_between(schedule, reference, event.timestamp),
            limits.first_response_hours,
            event.timestamp,
        ),
        None => open_verdict(
            business_hours_between(schedule, reference, now),
            limits.first_response_hours,
            true,
        ),
    };

    SlaOutcome {
        assignment,
        first_response,
    }
}

/// Verdict for a milestone that has occurred.
fn closed_verdict(elapsed: f64, limit: f64, occurred_at: DateTime<Utc>) -> SlaVerdict {
    let overdue = (elapsed - limit).max(0.0);
    SlaVerdict {
        status: if overdue > 0.0 {
            MilestoneStatus::Violated
        } else {
            MilestoneStatus::Compliant
        },
        business_hours_elapsed: elapsed,
        limit_hours: limit,
        overdue_by_hours: overdue,
        occurred_at: Some(occurred_at),
    }
}

/// Verdict for a milestone that has not occurred, measured against `now`.
fn open_verdict(elapsed: f64, limit: f64, pending_allowed: bool) -> SlaVerdict {
    let status = if elapsed > limit {
        MilestoneStatus::Violated
    } else if pending_allowed && elapsed < PENDING_BAND * limit {
        MilestoneStatus::Pending
    } else {
        MilestoneStatus::AtRisk
    };
    SlaVerdict {
        status,
        business_hours_elapsed: elapsed,
        limit_hours: limit,
        overdue_by_hours: (elapsed - limit).max(0.0),
        occurred_at: None,
    }
}
