use anyhow::{Context, Result};
use clap::Parser;
use othello_play::config::Config;
use othello_play::connectors::TerminalDisplay;
use othello_rules::Engine;
use tracing_subscriber::EnvFilter;

fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter {:?}", default_filter))?,
    };

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config.log_level)?;

    let mut engine = Engine::with_rules(TerminalDisplay::stdio(), config.rules());
    let outcome = engine.run().context("game did not finish")?;
    tracing::info!(?outcome, "exiting");
    Ok(())
}
