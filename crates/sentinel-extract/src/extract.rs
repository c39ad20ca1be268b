//! The timeline extractor.
//!
//! Two passes over the comment log. Pass 1 parses each line into a
//! timestamp, an optional `Actor:` or `Actor (Role):` prefix, and the
//! body, and collects the technician names that assignment lines mention.
//! Pass 2 classifies every parsed line through the rule table, using the
//! collected names to attribute lines whose only technician signal is the
//! actor identity.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use sentinel_models::{EventKind, Ticket, TicketEvent, Timeline};

use crate::patterns::{default_rules, ClassifierRule};
use crate::timestamp::split_leading_timestamp;

/// Regex to split an `Actor (Role): body` prefix off a line remainder.
static ACTOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<actor>[^:()\[\]]{1,48}?)\s*(?:\((?P<role>[^)]{1,32})\))?\s*:\s*(?P<body>.*)$")
        .expect("Invalid actor regex")
});

/// Regex to capture the technician name out of an assignment line.
static ASSIGNEE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:re)?assigned\s+to(?:\s+technician)?\s*[:\-]?\s*(?P<name>[A-Za-z][A-Za-z .'\-]{0,48})")
        .expect("Invalid assignee regex")
});

/// One log line after pass 1.
struct ParsedLine {
    timestamp: DateTime<Utc>,
    actor: Option<String>,
    assignee: Option<String>,
    raw: String,
}

/// Extracts typed timelines from ticket activity logs.
///
/// Holds the ordered rule table and the UTC offset used to interpret the
/// naive timestamps found in log text. Custom rule tables can be injected
/// for deployments whose exports use different phrasing.
#[derive(Debug)]
pub struct TimelineExtractor {
    rules: Vec<ClassifierRule>,
    utc_offset_minutes: i32,
}

impl Default for TimelineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineExtractor {
    /// Creates an extractor with the default rule table, reading log
    /// timestamps as UTC.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            utc_offset_minutes: 0,
        }
    }

    /// Sets the UTC offset (minutes east) used to interpret log timestamps.
    ///
    /// Log text carries civil local times; this is normally the same
    /// offset the business schedule is configured with.
    pub fn with_offset(mut self, utc_offset_minutes: i32) -> Self {
        self.utc_offset_minutes = utc_offset_minutes;
        self
    }

    /// Replaces the rule table.
    pub fn with_rules(mut self, rules: Vec<ClassifierRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Extracts the ordered event timeline for a ticket.
    ///
    /// Never fails: lines without a parseable timestamp are skipped as
    /// continuation text, and an empty or absent log yields a
    /// creation-only timeline.
    pub fn extract(&self, ticket: &Ticket) -> Timeline {
        let offset = self.offset();

        // Pass 1: parse lines, collect technician names from assignments.
        let mut lines = Vec::new();
        let mut technicians: HashSet<String> = HashSet::new();

        for raw in ticket.raw_comments.lines() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let Some((naive, rest)) = split_leading_timestamp(trimmed) else {
                debug!(ticket = %ticket.id, line = trimmed, "skipping continuation line");
                continue;
            };

            let actor = split_actor(rest);
            let assignee = ASSIGNEE_REGEX
                .captures(rest)
                .and_then(|caps| caps.name("name"))
                .map(|name| name.as_str().trim().to_string());
            if let Some(name) = &assignee {
                technicians.insert(normalize_name(name));
            }
            lines.push(ParsedLine {
                timestamp: to_utc(naive, offset),
                actor,
                assignee,
                raw: trimmed.to_string(),
            });
        }

        // Pass 2: classify through the rule table, then by actor identity.
        let mut events = Vec::with_capacity(lines.len() + 1);
        events.push(TicketEvent::new(
            ticket.created_at,
            EventKind::Creation,
            None,
            "",
        ));
        for line in lines {
            let kind = self.classify(&line, &technicians);
            // An assignment line's subject is the technician it names, not
            // whoever wrote the note.
            let actor = match kind {
                EventKind::Assignment => line.assignee.or(line.actor),
                _ => line.actor,
            };
            events.push(TicketEvent::new(line.timestamp, kind, actor, line.raw));
        }

        Timeline::from_events(events)
    }

    fn classify(&self, line: &ParsedLine, technicians: &HashSet<String>) -> EventKind {
        // First matching rule wins; the table sees the whole line so actor
        // prefixes like "(Technician)" participate.
        for rule in &self.rules {
            if rule.matches(&line.raw) {
                return rule.kind;
            }
        }

        // No textual signal. A line authored by a previously assigned
        // technician is still technician activity.
        if let Some(actor) = &line.actor {
            if technicians.contains(&normalize_name(actor)) {
                return EventKind::TechnicianResponse;
            }
        }
        EventKind::UserResponse
    }

    fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"))
    }
}

fn to_utc(naive: NaiveDateTime, offset: FixedOffset) -> DateTime<Utc> {
    match offset.from_local_datetime(&naive).single() {
        Some(dt) => dt.with_timezone(&Utc),
        // A fixed offset maps every local datetime to exactly one instant;
        // this arm is unreachable but keeps the conversion total.
        None => DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc),
    }
}

fn split_actor(rest: &str) -> Option<String> {
    ACTOR_REGEX
        .captures(rest)
        .and_then(|caps| caps.name("actor"))
        .map(|m| m.as_str().trim().to_string())
        .filter(|actor| !actor.is_empty())
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
