//! Core data models for the Sentinel SLA engine.
//!
//! This crate provides the fundamental data types shared by the calendar,
//! extraction, evaluation, and engine crates: tickets as they arrive from
//! the ingestion layer, the typed event timelines reconstructed from their
//! activity logs, and the SLA verdicts computed against them.

pub mod event;
pub mod ticket;
pub mod verdict;

// Re-export main types
pub use event::{EventKind, TicketEvent, Timeline};
pub use ticket::{Ticket, TicketId, TicketPriority, TicketStatus};
pub use verdict::{MilestoneStatus, RiskAssessment, RiskTier, SlaVerdict};
