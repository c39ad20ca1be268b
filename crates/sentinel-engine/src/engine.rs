//! The per-ticket pipeline and batch runners.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use sentinel_calendar::business_days_between;
use sentinel_extract::{split_leading_timestamp, TimelineExtractor};
use sentinel_models::Ticket;
use sentinel_sla::{classify, evaluate};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::report::TicketReport;

/// A ticket row as exported, before timestamp parsing.
///
/// This is the ingestion boundary shape: `created_at` is still a string,
/// and parsing it is the engine's per-ticket failure point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTicket {
    /// Ticket id.
    pub id: String,
    /// Creation timestamp as exported.
    pub created_at: String,
    /// Priority string, possibly empty.
    #[serde(default)]
    pub priority: String,
    /// Status string, possibly empty.
    #[serde(default)]
    pub status: String,
    /// Free-text activity log.
    #[serde(default)]
    pub comments: String,
}

/// The SLA analysis engine.
///
/// Owns validated configuration and the timeline extractor. Construction
/// fails on invalid configuration; after that every operation is a pure
/// function of its arguments and the injected `now`.
#[derive(Debug)]
pub struct SlaEngine {
    config: EngineConfig,
    extractor: TimelineExtractor,
}

impl SlaEngine {
    /// Creates an engine from validated configuration.
    ///
    /// Log timestamps are interpreted in the schedule's civil timezone.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let extractor = TimelineExtractor::new().with_offset(config.schedule.utc_offset_minutes);
        Ok(Self { config, extractor })
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs the full pipeline for one ticket: extraction, milestone
    /// evaluation, and risk classification.
    pub fn analyze_ticket(&self, ticket: &Ticket, now: DateTime<Utc>) -> TicketReport {
        let timeline = self.extractor.extract(ticket);
        let outcome = evaluate(
            ticket,
            &timeline,
            &self.config.thresholds,
            &self.config.schedule,
            now,
        );
        let age_business_days = business_days_between(&self.config.schedule, ticket.created_at, now);
        let risk = classify(&outcome, age_business_days, &self.config.risk);

        TicketReport {
            ticket_id: ticket.id.clone(),
            priority: ticket.priority,
            status: ticket.status,
            timeline,
            assignment: outcome.assignment,
            first_response: outcome.first_response,
            age_business_days,
            risk,
        }
    }

    /// Analyzes a batch sequentially, preserving input order.
    pub fn analyze_batch(&self, tickets: &[Ticket], now: DateTime<Utc>) -> Vec<TicketReport> {
        tickets
            .iter()
            .map(|ticket| self.analyze_ticket(ticket, now))
            .collect()
    }

    /// Analyzes a batch across up to `workers` threads.
    ///
    /// Tickets are independent, so the batch is split into contiguous
    /// chunks and reassembled in input order; the output is identical to
    /// [`analyze_batch`](Self::analyze_batch).
    pub fn analyze_batch_parallel(
        &self,
        tickets: &[Ticket],
        now: DateTime<Utc>,
        workers: usize,
    ) -> Vec<TicketReport> {
        if workers <= 1 || tickets.len() <= 1 {
            return self.analyze_batch(tickets, now);
        }

        let chunk_size = tickets.len().div_ceil(workers);
        std::thread::scope(|scope| {
            let handles: Vec<_> = tickets
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || self.analyze_batch(chunk, now)))
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().expect("analysis worker panicked"))
                .collect()
        })
    }

    /// Analyzes a batch of raw export rows, isolating per-ticket failures.
    ///
    /// A row whose `created_at` does not parse fails on its own; the rest
    /// of the batch is still analyzed. Results are in input order.
    pub fn analyze_raw_batch(
        &self,
        rows: &[RawTicket],
        now: DateTime<Utc>,
    ) -> Vec<Result<TicketReport>> {
        rows.iter()
            .map(|row| match self.parse_raw(row) {
                Ok(ticket) => Ok(self.analyze_ticket(&ticket, now)),
                Err(err) => {
                    warn!(ticket = %row.id, %err, "skipping unparseable ticket row");
                    Err(err)
                }
            })
            .collect()
    }

    /// Parses a raw export row into a ticket.
    pub fn parse_raw(&self, row: &RawTicket) -> Result<Ticket> {
        let created_at = self.parse_created_at(row)?;
        Ok(Ticket::new(
            row.id.as_str(),
            created_at,
            &row.priority,
            &row.status,
            row.comments.clone(),
        ))
    }

    fn parse_created_at(&self, row: &RawTicket) -> Result<DateTime<Utc>> {
        let value = row.created_at.trim();

        // Offset-carrying timestamps are taken as-is; anything else is a
        // civil local time in the schedule's timezone.
        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Ok(parsed.with_timezone(&Utc));
        }
        if let Some(naive) = parse_civil(value) {
            let offset = chrono::FixedOffset::east_opt(self.config.schedule.utc_offset_minutes * 60)
                .expect("offset validated at construction");
            if let Some(local) = offset.from_local_datetime(&naive).single() {
                return Ok(local.with_timezone(&Utc));
            }
        }
        Err(EngineError::MalformedCreatedAt {
            id: row.id.clone(),
            value: row.created_at.clone(),
        })
    }
}

/// Parses a bare civil timestamp using the same token formats the
/// extractor accepts in log lines, requiring the whole string to be the
/// timestamp.
fn parse_civil(value: &str) -> Option<NaiveDateTime> {
    match split_leading_timestamp(value) {
        Some((naive, rest)) if rest.is_empty() => Some(naive),
        _ => None,
    }
}
