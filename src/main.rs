//! Detective Quest: The Mysterious Mansion
//!
//! Explore the mansion, collect the clues, and accuse the culprit.

use anyhow::Context;
use clap::Parser;
use crossterm::tty::IsTty;
use detective_quest::console::App;
use detective_quest::{Case, GameConfig, DEFAULT_CAPACITY};
use std::io::{self, stdout};
use tracing_subscriber::EnvFilter;

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "detective-quest", version, about = "Explore the mansion and find the culprit")]
struct Cli {
    /// Number of buckets in the suspect index
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    buckets: usize,

    /// Print the case report as JSON after the verdict
    #[arg(long)]
    json: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "detective_quest=trace"
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let config = GameConfig {
        buckets: cli.buckets,
        color: !cli.no_color && stdout().is_tty(),
        json_report: cli.json,
    };

    let mut case = Case::new(&config).context("setting up the mansion")?;
    let stdin = io::stdin();
    let mut app = App::new(stdin.lock(), stdout().lock(), config);
    app.run(&mut case)?;

    Ok(())
}
