use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AnalyzerError, Result};
use crate::models::Transaction;

/// Supported input encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Header row `id,type,amount,to,category,date`
    Csv,
    /// A JSON array of transaction objects
    Json,
}

impl InputFormat {
    /// Pick a format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(AnalyzerError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Read transactions from CSV
/// Rows that cannot be decoded are skipped, I/O failures are returned
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut transactions = Vec::new();

    for (row, result) in csv_reader.deserialize::<Transaction>().enumerate() {
        match result {
            Ok(transaction) => transactions.push(transaction),
            Err(error) if error.is_io_error() => return Err(error.into()),
            Err(error) => {
                warn!("Skipping malformed CSV row {}: {}", row + 1, error);
            }
        }
    }

    Ok(transactions)
}

/// Fields read as text, whatever JSON type they arrive as
const TEXT_FIELDS: [&str; 5] = ["id", "type", "to", "category", "date"];

/// Rewrite scalar text fields as strings so only `type` and `amount` decide
/// whether a record is usable. Nulls, arrays and objects become empty text.
fn normalize_text_fields(element: &mut Value) {
    let Value::Object(fields) = element else {
        return;
    };

    for name in TEXT_FIELDS {
        let Some(value) = fields.get_mut(name) else {
            continue;
        };

        let text = match value {
            Value::String(_) => continue,
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
        };
        *value = Value::String(text);
    }
}

/// Read transactions from a JSON document
///
/// Returns `Ok(None)` when the top level is not an array. Array elements that
/// are not objects are skipped. Numbers and booleans in text fields such as
/// `id` or `date` are kept as their JSON text.
pub fn read_json<R: Read>(reader: R) -> Result<Option<Vec<Transaction>>> {
    let document: Value = serde_json::from_reader(reader)?;

    let Value::Array(elements) = document else {
        warn!("JSON input is not an array of transactions");
        return Ok(None);
    };

    let transactions: Vec<Transaction> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, mut element)| {
            normalize_text_fields(&mut element);
            match serde_json::from_value::<Transaction>(element) {
                Ok(transaction) => Some(transaction),
                Err(error) => {
                    debug!("Skipping JSON element {}: {}", index, error);
                    None
                }
            }
        })
        .collect();

    Ok(Some(transactions))
}

/// Read transactions in the given format
/// `None` means the input was not a sequence of records at all
pub fn load_transactions<R: Read>(reader: R, format: InputFormat) -> Result<Option<Vec<Transaction>>> {
    match format {
        InputFormat::Csv => read_csv(reader).map(Some),
        InputFormat::Json => read_json(reader),
    }
}

/// Open `path` and read it in the format implied by its extension
pub fn load_file(path: &Path) -> Result<Option<Vec<Transaction>>> {
    let format = InputFormat::from_path(path)?;
    let file = File::open(path)?;

    load_transactions(BufReader::new(file), format)
}
