//! Ticket types as supplied by the ingestion layer.
//!
//! Tickets are read-only input: the engine derives timelines and verdicts
//! from them but never mutates them. The ingestion collaborator guarantees
//! a non-empty id and a parseable creation time; priority and status
//! strings may be empty or unrecognized and normalize leniently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a ticket, owned by the ingestion layer.
///
/// Unlike internally minted IDs there is no random constructor: ticket
/// identity always arrives from outside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TicketId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for TicketId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Priority tiers for tickets.
///
/// Higher numeric value = higher priority.
/// Critical (4) > High (3) > Normal (2) > Low (1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    /// Low priority (1).
    Low,
    /// Normal priority (2). Default for unrecognized or empty input.
    #[default]
    Normal,
    /// High priority (3).
    High,
    /// Critical priority (4).
    Critical,
}

impl TicketPriority {
    /// Returns the numeric value of this priority.
    /// Higher value = higher priority.
    pub fn as_value(&self) -> u8 {
        match self {
            TicketPriority::Low => 1,
            TicketPriority::Normal => 2,
            TicketPriority::High => 3,
            TicketPriority::Critical => 4,
        }
    }

    /// Normalizes an ingestion-layer priority string.
    ///
    /// Matching is case-insensitive and whitespace-tolerant; empty or
    /// unrecognized strings map to [`TicketPriority::Normal`], which is the
    /// contract the ingestion layer relies on.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" | "urgent" | "p1" => TicketPriority::Critical,
            "high" | "p2" => TicketPriority::High,
            "low" | "p4" => TicketPriority::Low,
            _ => TicketPriority::Normal,
        }
    }
}

impl PartialOrd for TicketPriority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TicketPriority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_value().cmp(&other.as_value())
    }
}

/// Normalized lifecycle status of a ticket.
///
/// The raw status string is preserved on the ticket; this enum is the
/// normalized view used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Ticket is open and awaiting action.
    #[default]
    Open,
    /// Ticket is actively being worked.
    InProgress,
    /// Ticket has been resolved but not yet closed.
    Resolved,
    /// Ticket is closed.
    Closed,
    /// Any status string not recognized above.
    Other,
}

impl TicketStatus {
    /// Normalizes an ingestion-layer status string.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "open" | "new" | "pending" => TicketStatus::Open,
            "in progress" | "in_progress" | "assigned" | "working" => TicketStatus::InProgress,
            "resolved" | "fixed" => TicketStatus::Resolved,
            "closed" | "complete" | "completed" => TicketStatus::Closed,
            _ => TicketStatus::Other,
        }
    }

    /// Returns true if the ticket still needs attention.
    pub fn is_open(&self) -> bool {
        matches!(self, TicketStatus::Open | TicketStatus::InProgress)
    }
}

/// A helpdesk ticket as exported by the ingestion layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier for the ticket.
    pub id: TicketId,

    /// When the ticket was created.
    pub created_at: DateTime<Utc>,

    /// Normalized priority tier.
    pub priority: TicketPriority,

    /// Normalized lifecycle status.
    pub status: TicketStatus,

    /// The status string exactly as exported.
    pub raw_status: String,

    /// The free-text activity log, newline-delimited.
    #[serde(default)]
    pub raw_comments: String,
}

impl Ticket {
    /// Creates a ticket from normalized ingestion output.
    ///
    /// Priority and status strings are normalized here; the raw status is
    /// retained for reporting.
    pub fn new(
        id: impl Into<TicketId>,
        created_at: DateTime<Utc>,
        priority: &str,
        status: &str,
        raw_comments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            created_at,
            priority: TicketPriority::parse(priority),
            status: TicketStatus::parse(status),
            raw_status: status.to_string(),
            raw_comments: raw_comments.into(),
        }
    }
}
