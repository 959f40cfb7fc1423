use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Play UNO against the computer in your terminal.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Seed for the shuffle; the same seed deals the same games
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// How long the computer "thinks" before each move
    #[arg(long, default_value = "1500")]
    pub computer_delay_ms: u64,

    /// Log filter, e.g. `debug` or `unocore=debug`. Falls back to RUST_LOG, then `warn`
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Logs go to stderr so they never tear up the table drawn on stdout.
pub fn init_tracing(log_level: Option<&str>) {
    let filter = log_level
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
