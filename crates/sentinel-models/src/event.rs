//! Timeline events reconstructed from a ticket's activity log.
//!
//! A [`Timeline`] is derived data: it is rebuilt from the raw comment log
//! whenever the log changes, and is immutable once built. Events are
//! totally ordered by timestamp; ties keep log order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The ticket was created.
    Creation,
    /// The ticket was assigned or reassigned to a technician.
    ///
    /// Assignment events are informational markers; they never satisfy the
    /// first-response milestone.
    Assignment,
    /// A technician responded on the ticket.
    TechnicianResponse,
    /// The requester responded or followed up.
    UserResponse,
}

/// One parsed occurrence in a ticket's activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketEvent {
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,

    /// What kind of event this is.
    pub kind: EventKind,

    /// Who performed the action, when attributable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// The log line the event was parsed from.
    pub raw_text: String,
}

impl TicketEvent {
    /// Creates a new event.
    pub fn new(
        timestamp: DateTime<Utc>,
        kind: EventKind,
        actor: Option<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            kind,
            actor,
            raw_text: raw_text.into(),
        }
    }
}

/// Chronologically ordered sequence of events for one ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    events: Vec<TicketEvent>,
}

impl Timeline {
    /// Builds a timeline from events in log order.
    ///
    /// Events are sorted by timestamp; the sort is stable, so events with
    /// equal timestamps keep their log order.
    pub fn from_events(mut events: Vec<TicketEvent>) -> Self {
        events.sort_by_key(|e| e.timestamp);
        Self { events }
    }

    /// Returns the events in chronological order.
    pub fn events(&self) -> &[TicketEvent] {
        &self.events
    }

    /// Returns the number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the timeline has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over the events in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, TicketEvent> {
        self.events.iter()
    }

    /// Returns the first event of the given kind, if any.
    pub fn first_of_kind(&self, kind: EventKind) -> Option<&TicketEvent> {
        self.events.iter().find(|e| e.kind == kind)
    }

    /// Returns the first assignment event, if any.
    pub fn first_assignment(&self) -> Option<&TicketEvent> {
        self.first_of_kind(EventKind::Assignment)
    }

    /// Returns the first user response, if any.
    pub fn first_user_response(&self) -> Option<&TicketEvent> {
        self.first_of_kind(EventKind::UserResponse)
    }

    /// Returns the first technician response strictly after `after`.
    ///
    /// "No response yet" is a first-class outcome for callers, not an
    /// error, so this returns an `Option`.
    pub fn first_technician_response_after(&self, after: DateTime<Utc>) -> Option<&TicketEvent> {
        self.events
            .iter()
            .find(|e| e.kind == EventKind::TechnicianResponse && e.timestamp > after)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TicketEvent;
    type IntoIter = std::slice::Iter<'a, TicketEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, h, m, 0).unwrap()
    }

    fn event(h: u32, m: u32, kind: EventKind, text: &str) -> TicketEvent {
        TicketEvent::new(at(h, m), kind, None, text)
    }

    #[test]
    fn test_from_events_sorts_by_timestamp() {
        let timeline = Timeline::from_events(vec![
            event(12, 0, EventKind::UserResponse, "b"),
            event(9, 0, EventKind::Creation, "a"),
            event(14, 0, EventKind::TechnicianResponse, "c"),
        ]);

        let kinds: Vec<EventKind> = timeline.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::Creation,
                EventKind::UserResponse,
                EventKind::TechnicianResponse
            ]
        );
    }

    #[test]
    fn test_equal_timestamps_keep_log_order() {
        let timeline = Timeline::from_events(vec![
            event(9, 0, EventKind::Assignment, "first in log"),
            event(9, 0, EventKind::TechnicianResponse, "second in log"),
        ]);

        assert_eq!(timeline.events()[0].raw_text, "first in log");
        assert_eq!(timeline.events()[1].raw_text, "second in log");
    }

    #[test]
    fn test_first_of_kind() {
        let timeline = Timeline::from_events(vec![
            event(9, 0, EventKind::Creation, "created"),
            event(10, 0, EventKind::Assignment, "assigned once"),
            event(11, 0, EventKind::Assignment, "assigned twice"),
        ]);

        let first = timeline.first_assignment().unwrap();
        assert_eq!(first.raw_text, "assigned once");
    }

    #[test]
    fn test_first_technician_response_after_skips_earlier() {
        let timeline = Timeline::from_events(vec![
            event(9, 0, EventKind::TechnicianResponse, "too early"),
            event(10, 0, EventKind::Assignment, "assigned"),
            event(11, 0, EventKind::TechnicianResponse, "the one"),
        ]);

        let found = timeline.first_technician_response_after(at(10, 0)).unwrap();
        assert_eq!(found.raw_text, "the one");
    }

    #[test]
    fn test_first_technician_response_after_is_strict() {
        let timeline = Timeline::from_events(vec![event(
            10,
            0,
            EventKind::TechnicianResponse,
            "at the boundary",
        )]);

        assert!(timeline.first_technician_response_after(at(10, 0)).is_none());
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline::default();
        assert!(timeline.is_empty());
        assert_eq!(timeline.len(), 0);
        assert!(timeline.first_assignment().is_none());
        assert!(timeline.first_technician_response_after(at(0, 0)).is_none());
    }

    #[test]
    fn test_timeline_serialization_roundtrip() {
        let timeline = Timeline::from_events(vec![
            event(9, 0, EventKind::Creation, "created"),
            event(10, 0, EventKind::UserResponse, "any updates?"),
        ]);

        let json = serde_json::to_string(&timeline).unwrap();
        let back: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, timeline);
    }

    #[test]
    fn test_event_kind_serialization() {
        let json = serde_json::to_string(&EventKind::TechnicianResponse).unwrap();
        assert_eq!(json, "\"technician_response\"");
    }
}
