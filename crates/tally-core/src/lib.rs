//! Core types for chat-tally.
//!
//! Holds the month/author tally table, the error type shared by every crate,
//! the command-line settings and the plain-text report formatter.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{Result, TallyError};
pub use models::{LineKind, MessageHeader, MonthBucket, MonthlyTally};
