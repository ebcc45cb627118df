use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by chat-tally.
#[derive(Error, Debug)]
pub enum TallyError {
    /// The chat log could not be opened or a line could not be read.
    #[error("Failed to read file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matching header line did not carry a `] {author}: ` segment.
    #[error("Could not find an author on header line {line_number}: {line}")]
    HeaderParse { line_number: usize, line: String },

    /// More positional arguments were given than `[TARGET] [FILE]`.
    #[error("Wrong number of arguments: got {0}, expected at most 2 ([TARGET] [FILE])")]
    ArgumentCount(usize),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the tally crates.
pub type Result<T> = std::result::Result<T, TallyError>;
