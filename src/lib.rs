pub mod analyzer;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;

use std::io::{Read, Write};

pub use analyzer::{analyze, TransactionAnalyzer};
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, Result};
pub use loader::{load_file, load_transactions, InputFormat};
pub use models::{CategoryBreakdown, Report, Transaction, TransactionType};

/// Read transactions, analyze them with the default thresholds and write the
/// report to `writer` as JSON (`null` when there is no usable data)
pub fn process_transactions<R: Read, W: Write>(
    reader: R,
    format: InputFormat,
    writer: W,
) -> Result<Option<Report>> {
    let report = load_transactions(reader, format)?.and_then(|transactions| analyze(&transactions));

    write_report(report.as_ref(), writer)?;

    Ok(report)
}

/// Write a report, or `null`, as pretty-printed JSON
fn write_report<W: Write>(report: Option<&Report>, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
