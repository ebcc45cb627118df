use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, TallyError};

/// Target counted when no `TARGET` argument is given.
pub const DEFAULT_TARGET: &str = "💩";

/// File name looked up next to the executable when no `FILE` is given.
pub const DEFAULT_CHAT_FILE: &str = "_chat.txt";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Count how often a string shows up per person per month in a chat export
#[derive(Parser, Debug, Clone)]
#[command(
    name = "chat-tally",
    about = "Count how often a string shows up per person per month in a chat export",
    version
)]
pub struct Settings {
    /// Up to two values: the string to count, then the path of the chat log.
    /// Options go before these values.
    #[arg(value_name = "TARGET [FILE]", allow_hyphen_values = true)]
    pub inputs: Vec<String>,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// What to count and where, after defaults have been filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyInputs {
    pub target: String,
    pub path: PathBuf,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply the `--debug` flag.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os().collect())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args(args: Vec<OsString>) -> Self {
        let mut settings = Settings::parse_from(args);

        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        settings
    }

    /// Resolve the positional arguments against the built-in defaults.
    ///
    /// * none → [`DEFAULT_TARGET`] in [`default_chat_path`]
    /// * `TARGET` → that target in [`default_chat_path`]
    /// * `TARGET FILE` → both as given
    ///
    /// Anything longer fails with [`TallyError::ArgumentCount`].
    pub fn resolve_inputs(&self) -> Result<TallyInputs> {
        let inputs = match self.inputs.as_slice() {
            [] => Ok(TallyInputs {
                target: DEFAULT_TARGET.to_string(),
                path: default_chat_path(),
            }),
            [target] => Ok(TallyInputs {
                target: target.clone(),
                path: default_chat_path(),
            }),
            [target, path] => Ok(TallyInputs {
                target: target.clone(),
                path: PathBuf::from(path),
            }),
            extra => Err(TallyError::ArgumentCount(extra.len())),
        }?;

        debug!(
            "Resolved inputs: target={:?}, file={}",
            inputs.target,
            inputs.path.display()
        );
        Ok(inputs)
    }
}

/// `_chat.txt` in the directory holding the running executable.
///
/// Falls back to the working directory when the executable path is unknown.
pub fn default_chat_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_CHAT_FILE)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
