//! Series table loading
//!
//! Parses delimited text of the shape
//!
//! ```text
//! ,Punjab,Haryana,Delhi
//! 02/01/2019 00:00:00,119.9,130.3,85.8
//! 03/01/2019 00:00:00,121.9,133.5,85.5
//! ```
//!
//! into a [`SeriesTable`]. The first header field is ignored; the remaining
//! header fields name the series. Every data row carries a label (usually a
//! timestamp) followed by one reading per series.
//!
//! Loading never fails on bad content: unparsable, missing or non-finite
//! cells become `0.0`, and empty input yields an empty table.

use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use log::{debug, warn};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::path::Path;

use crate::error::{Error, Result};

/// Maximum number of data rows read by default
pub const DEFAULT_MAX_ROWS: usize = 99;

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

/// Format of the row labels in the bundled dataset
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Options controlling how text is turned into a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Upper bound on the number of data rows kept
    pub max_rows: usize,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// One labelled row of readings, positionally aligned with the table's series names
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    label: String,
    values: Vec<f64>,
}

impl Row {
    /// Create a row from a label and its readings
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Row label as it appeared in the source
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Readings in series-name order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Parse the label as a `dd/mm/yyyy HH:MM:SS` timestamp
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.label.trim(), TIMESTAMP_FORMAT).ok()
    }
}

/// Immutable, column-indexed set of rows
///
/// The series-name set is fixed at construction and every row holds exactly
/// one reading per series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesTable {
    series_names: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Row>,
    version: u64,
}

impl SeriesTable {
    /// Build a table from series names and rows
    ///
    /// Duplicate names keep their first position. Rows are padded with `0.0`
    /// or truncated so that every row has one reading per series.
    pub fn from_rows(series_names: Vec<String>, rows: Vec<Row>) -> Self {
        let (series_names, positions) = dedup_names(series_names);
        let width = series_names.len();

        let rows = rows
            .into_iter()
            .map(|row| {
                let mut values = vec![0.0; width];
                for (field, value) in row.values.into_iter().enumerate() {
                    if let Some(&column) = positions.get(field) {
                        values[column] = value;
                    }
                }
                Row {
                    label: row.label,
                    values,
                }
            })
            .collect();

        Self::assemble(series_names, rows)
    }

    fn assemble(series_names: Vec<String>, rows: Vec<Row>) -> Self {
        let index = series_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        let version = fingerprint(&series_names, &rows);

        Self {
            series_names,
            index,
            rows,
            version,
        }
    }

    /// Series names in header order
    pub fn series_names(&self) -> &[String] {
        &self.series_names
    }

    /// All rows in source order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether `name` is one of the table's series
    pub fn has_series(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Reading of `name` in row `row`
    pub fn value(&self, row: usize, name: &str) -> Option<f64> {
        let column = *self.index.get(name)?;
        self.rows.get(row).map(|r| r.values[column])
    }

    /// All readings of one series, or `None` for an unknown series
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let column = *self.index.get(name)?;
        Some(self.rows.iter().map(|r| r.values[column]).collect())
    }

    /// Like [`SeriesTable::column`] but reports an unknown series as an error
    pub fn require_column(&self, name: &str) -> Result<Vec<f64>> {
        self.column(name)
            .ok_or_else(|| Error::SeriesNotFound(name.to_string()))
    }

    /// Row labels in source order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.label.as_str())
    }

    /// Content fingerprint, equal for tables loaded from identical text
    pub fn version(&self) -> u64 {
        self.version
    }
}

/// Parse delimited text into a table, keeping at most `max_rows` data rows
pub fn load_table(text: &str, max_rows: usize) -> SeriesTable {
    load_table_with(
        text,
        &LoadOptions {
            max_rows,
            ..LoadOptions::default()
        },
    )
}

/// Parse delimited text into a table using explicit options
pub fn load_table_with(text: &str, options: &LoadOptions) -> SeriesTable {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(text.trim().as_bytes());
    let mut records = reader.records();

    let header = match records.next() {
        Some(Ok(record)) => record,
        Some(Err(err)) => {
            warn!("Unreadable header line, returning empty table: {}", err);
            return SeriesTable::default();
        }
        None => return SeriesTable::default(),
    };

    let (series_names, positions) = dedup_names(header.iter().skip(1).map(String::from).collect());

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for result in records {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!("Skipping unreadable record: {}", err);
                continue;
            }
        };
        if rows.len() >= options.max_rows {
            skipped += 1;
            continue;
        }

        let label = record.get(0).unwrap_or_default().to_string();
        let mut values = vec![0.0; series_names.len()];
        for (field, &column) in positions.iter().enumerate() {
            values[column] = parse_cell(record.get(field + 1), &label, &series_names[column]);
        }
        rows.push(Row { label, values });
    }

    debug!(
        "Loaded table: {} series, {} rows ({} rows beyond limit of {})",
        series_names.len(),
        rows.len(),
        skipped,
        options.max_rows
    );

    SeriesTable::assemble(series_names, rows)
}

/// Read and parse a table from a file
pub fn read_table<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<SeriesTable> {
    let text = std::fs::read_to_string(path.as_ref()).map_err(Error::Io)?;
    Ok(load_table_with(&text, options))
}

/// Deduplicate names keeping first positions; returns the names and, for
/// each input position, the column it maps to.
fn dedup_names(names: Vec<String>) -> (Vec<String>, Vec<usize>) {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut positions = Vec::with_capacity(names.len());

    for name in names {
        let column = match seen.get(&name) {
            Some(&column) => column,
            None => {
                let column = unique.len();
                seen.insert(name.clone(), column);
                unique.push(name);
                column
            }
        };
        positions.push(column);
    }

    (unique, positions)
}

fn parse_cell(raw: Option<&str>, label: &str, series: &str) -> f64 {
    let cell = match raw {
        Some(cell) => cell.trim(),
        None => return 0.0,
    };

    let prefix = &cell[..numeric_prefix_len(cell)];
    let value = match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            if !cell.is_empty() {
                warn!(
                    "Unparsable reading {:?} for series '{}' at '{}', using 0",
                    cell, series, label
                );
            }
            return 0.0;
        }
    };

    if prefix.len() < cell.len() {
        warn!(
            "Ignoring trailing characters in reading {:?} for series '{}' at '{}', using {}",
            cell, series, label, value
        );
    }
    value
}

/// Length of the longest leading decimal number in `cell`: optional sign,
/// digits with an optional fraction, then an optional exponent. A signed
/// `Infinity` also counts.
fn numeric_prefix_len(cell: &str) -> usize {
    let bytes = cell.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if cell[end..].starts_with("Infinity") {
        return end + "Infinity".len();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exp_digits = count_digits(&bytes[exponent..]);
        if exp_digits > 0 {
            end = exponent + exp_digits;
        }
    }
    end
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn fingerprint(series_names: &[String], rows: &[Row]) -> u64 {
    let mut hasher = DefaultHasher::new();
    series_names.hash(&mut hasher);
    for row in rows {
        row.label.hash(&mut hasher);
        for value in &row.values {
            value.to_bits().hash(&mut hasher);
        }
    }
    hasher.finish()
}
