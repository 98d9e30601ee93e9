use std::env;
use std::fs::File;
use std::io::{self, stderr, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};
use transaction_analyzer::{process_transactions, InputFormat};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    anyhow::ensure!(
        args.len() == 2 || args.len() == 3,
        "Usage: {} <input.csv|input.json> [log_level]\nAvailable log levels: error, warn, info, debug, trace (default: error)",
        args.first().map(String::as_str).unwrap_or("transaction-analyzer")
    );

    let log_level = args
        .get(2)
        .map(|level| parse_log_level(level))
        .unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let path = Path::new(&args[1]);

    let format = InputFormat::from_path(path)
        .with_context(|| format!("Cannot determine input format of '{}'", path.display()))?;

    let file = File::open(path)
        .with_context(|| format!("Failed to open input file '{}'", path.display()))?;

    let report = process_transactions(BufReader::new(file), format, io::stdout().lock())
        .context("Failed to analyze transactions and write report")?;

    match report {
        Some(report) => info!("Analyzed {} valid transactions", report.transaction_count),
        None => info!("No usable transactions in '{}'", path.display()),
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

// The report goes to stdout, so logs are written to stderr
fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}
