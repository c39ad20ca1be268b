//! Batch SLA analysis pipeline.
//!
//! Ties the engine crates together: for each ticket in a batch, extract
//! the event timeline, evaluate both SLA milestones against the business
//! schedule, and classify overall risk. The pipeline is a pure function
//! of the batch, the configuration, and an injected `now`; there is no
//! internal clock and no state between runs.
//!
//! Tickets are independent of one another, so batches may also be
//! processed across worker threads with
//! [`SlaEngine::analyze_batch_parallel`]; output order always matches
//! input order.

pub mod config;
pub mod engine;
pub mod error;
pub mod report;

pub use config::EngineConfig;
pub use engine::{RawTicket, SlaEngine};
pub use error::{EngineError, Result};
pub use report::{BatchSummary, TicketReport};
