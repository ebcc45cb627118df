//! Ingestion layer for chat-tally.
//!
//! Opens an exported chat log, classifies each line as a message header or a
//! wrapped continuation, parses headers and counts target matches per month
//! and author.

pub mod aggregator;
pub mod parser;
pub mod reader;

pub use aggregator::{LogAggregator, ScanStats};
pub use tally_core as core;
