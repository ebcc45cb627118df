mod bootstrap;

use std::io::Write;

use anyhow::Result;
use tally_core::formatting::write_report;
use tally_core::settings::Settings;
use tally_data::aggregator::LogAggregator;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("chat-tally v{} starting", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    run(&settings, stdout.lock())
}

/// Resolve inputs, tally the chat log and write the report to `out`.
///
/// Nothing is written unless the whole log was counted successfully.
fn run(settings: &Settings, out: impl Write) -> Result<()> {
    // Argument count is checked before the chat log is touched.
    let inputs = settings.resolve_inputs()?;

    let tally = LogAggregator::new().aggregate(&inputs.target, &inputs.path)?;

    tracing::info!(
        "{} matches across {} months",
        tally.total(),
        tally.month_count()
    );

    write_report(&tally, out)?;

    Ok(())
}
