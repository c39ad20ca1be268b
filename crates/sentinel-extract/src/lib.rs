//! Event timeline extraction from free-text activity logs.
//!
//! Helpdesk exports record technician and user actions as free text, one
//! action per line, each beginning with a timestamp token. This crate
//! turns that text into a typed, chronologically ordered
//! [`Timeline`](sentinel_models::Timeline):
//!
//! 1. split the log into candidate lines;
//! 2. parse a leading timestamp from each line; lines without one are
//!    continuation text and are ignored;
//! 3. classify each timestamped line as an assignment, a technician
//!    response, or a user response via an ordered rule table.
//!
//! Extraction never fails: unparseable lines are skipped, and a ticket
//! with no usable log yields a creation-only timeline. "No technician
//! response found" is a first-class outcome for callers, not an error.

pub mod extract;
pub mod patterns;
pub mod timestamp;

pub use extract::TimelineExtractor;
pub use patterns::{default_rules, ClassifierRule};
pub use timestamp::split_leading_timestamp;
