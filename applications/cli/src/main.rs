/// Mixtape - apply a playlist change list to a catalog
use clap::Parser;
use mixtape_cli::{Cli, LogLevel, RunConfig};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and succeed; usage errors exit 1
            err.print().ok();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: LogLevel) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(level.to_filter_directive()))
        .with(tracing_subscriber::fmt::layer().with_ansi(std::io::stdout().is_terminal()))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = RunConfig::from(cli);
    let summary = mixtape_cli::run(&config)?;

    tracing::info!(
        "Applied {} changes ({} added, {} removed, {} amended, {} skipped, {} unrecognized)",
        summary.total(),
        summary.added,
        summary.removed,
        summary.amended,
        summary.skipped,
        summary.unrecognized
    );

    Ok(())
}
