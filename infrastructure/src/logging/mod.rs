//! Logging infrastructure for structured interaction records.
//!
//! Provides [`JsonlInteractionLogger`], a JSONL file writer that implements
//! the [`InteractionLogger`](folio_application::InteractionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlInteractionLogger;
