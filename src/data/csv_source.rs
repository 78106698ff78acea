//! CSV source: header-keyed rows with dynamic typing, and the row → series mapping.
//!
//! The first row is the header. Every later row becomes a [`RawCsvRow`] keyed by
//! header name. Short rows simply lack the trailing fields, long rows have their
//! extra cells dropped, and a row the reader cannot decode at all is kept as an
//! empty row so that the series length always equals the row count.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use super::number::infer_cell;
use super::point::{Point, Series, Value};
use crate::error::{DynPlotError, Result};

/// Column holding x values. Matched exactly, case-sensitive.
pub const X_COLUMN: &str = "x";
/// Column holding y values. Matched exactly, case-sensitive.
pub const Y_COLUMN: &str = "y";

/// One parsed data row: header name → typed cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCsvRow {
    fields: HashMap<String, Value>,
}

impl RawCsvRow {
    /// Field value, or [`Value::Missing`] if the row has no such field.
    pub fn get(&self, name: &str) -> Value {
        self.fields.get(name).cloned().unwrap_or(Value::Missing)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }
}

/// Result of parsing a whole CSV document.
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<RawCsvRow>,
    /// Number of rows the reader failed to decode (kept as empty rows).
    pub bad_rows: usize,
}

/// Parse CSV text from any reader.
///
/// Cells are decoded lossily, so invalid UTF-8 in one cell turns into
/// replacement characters instead of failing the row. Blank lines are skipped.
pub fn parse_reader<R: Read>(reader: R) -> Result<ParsedCsv> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.byte_headers()?.iter().map(decode_cell).collect();
    let mut parsed = ParsedCsv {
        headers,
        ..ParsedCsv::default()
    };

    for (idx, record) in rdr.byte_records().enumerate() {
        let mut row = RawCsvRow::default();
        match record {
            Ok(record) => {
                for (name, cell) in parsed.headers.iter().zip(record.iter()) {
                    row.insert(name.clone(), infer_cell(&decode_cell(cell)));
                }
            }
            Err(e) => {
                tracing::warn!(row = idx + 1, error = %e, "unreadable CSV row, keeping it as missing values");
                parsed.bad_rows += 1;
            }
        }
        parsed.rows.push(row);
    }

    Ok(parsed)
}

fn decode_cell(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Open and parse a CSV file.
pub fn parse_path(path: &Path) -> Result<ParsedCsv> {
    let file = std::fs::File::open(path).map_err(|e| DynPlotError::file_open(path, e))?;
    let parsed = parse_reader(file)?;
    if parsed.headers.is_empty() {
        return Err(DynPlotError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    Ok(parsed)
}

/// Map every row to `(row.x, row.y)`, preserving order. Rows without an `x` or
/// `y` field produce [`Value::Missing`] at that position instead of being dropped.
pub fn rows_to_series(rows: &[RawCsvRow]) -> Series {
    rows.iter()
        .map(|row| Point {
            x: row.get(X_COLUMN),
            y: row.get(Y_COLUMN),
        })
        .collect()
}

/// Convenience: read a CSV file straight into a series.
pub fn load_series(path: &Path) -> Result<Series> {
    let parsed = parse_path(path)?;
    if !parsed.headers.iter().any(|h| h == X_COLUMN) || !parsed.headers.iter().any(|h| h == Y_COLUMN) {
        tracing::warn!(
            path = %path.display(),
            headers = ?parsed.headers,
            "CSV header lacks an `x` or `y` column; affected values will be missing"
        );
    }
    if parsed.bad_rows > 0 {
        tracing::warn!(path = %path.display(), bad_rows = parsed.bad_rows, "some CSV rows could not be read");
    }
    tracing::debug!(path = %path.display(), rows = ?parsed.rows, "parsed CSV values");
    Ok(rows_to_series(&parsed.rows))
}
