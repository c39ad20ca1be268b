//! Business-hours calendar and duration math for the Sentinel SLA engine.
//!
//! "Business hours" is a civil-calendar concept: a configured open window
//! per weekday/weekend day plus a holiday set, all interpreted in the
//! support organization's fixed civil timezone. This crate answers two
//! questions for the rest of the engine:
//!
//! - what are the business-hour bounds of a given civil date
//!   ([`BusinessSchedule::business_window`]), and
//! - how many business hours elapsed between two instants
//!   ([`business_hours_between`]).
//!
//! Everything here is a pure function of the schedule and its arguments.

pub mod error;
pub mod hours;
pub mod schedule;

pub use error::{Result, ScheduleError};
pub use hours::{business_days_between, business_hours_between};
pub use schedule::{BusinessSchedule, DayWindow, WeekendHours};
