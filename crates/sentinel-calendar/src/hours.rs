//! Business-hours duration math.
//!
//! Pure functions over a [`BusinessSchedule`]. Invalid ranges (start at or
//! after end) return zero rather than erroring: "zero hours elapsed" is a
//! safe degenerate answer for a monitoring system.

use chrono::{DateTime, Utc};

use crate::schedule::BusinessSchedule;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Returns the business hours elapsed between two instants, fractional.
///
/// Iterates the civil days spanning `[start, end]` (one iteration per day,
/// O(days spanned)) and sums the overlap of the range with each day's
/// business window. Days with an empty window contribute nothing; a start
/// or end outside business hours clamps to the window boundary.
pub fn business_hours_between(
    schedule: &BusinessSchedule,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> f64 {
    if start >= end {
        return 0.0;
    }

    let first_day = schedule.civil_date(start);
    let last_day = schedule.civil_date(end);

    let mut total = 0.0;
    let mut day = first_day;
    loop {
        if let Some((window_start, window_end)) = schedule.business_window(day) {
            let lo = window_start.max(start);
            let hi = window_end.min(end);
            if hi > lo {
                total += (hi - lo).num_seconds() as f64 / SECONDS_PER_HOUR;
            }
        }
        if day >= last_day {
            break;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    total
}

/// Returns the number of business days elapsed between two instants.
///
/// Counts the civil dates after `start`'s date, up to and including
/// `end`'s date, that have a non-empty business window. Used as the age
/// input to risk classification.
pub fn business_days_between(
    schedule: &BusinessSchedule,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> u32 {
    if start >= end {
        return 0;
    }

    let first_day = schedule.civil_date(start);
    let last_day = schedule.civil_date(end);

    let mut count = 0;
    let mut day = first_day;
    while day < last_day {
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
        if schedule.is_business_day(day) {
            count += 1;
        }
    }
    count
}
