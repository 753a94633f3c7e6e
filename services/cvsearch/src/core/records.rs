//! Cleaning of transcription records before they are indexed.
//!
//! Records come from the transcription pipeline either as the decoded CSV
//! (one row per clip) or as a JSON array of objects. A field counts as
//! missing when it is absent, `null`, or a blank string. Records missing a
//! required field are dropped; defaulted fields are filled in. Field order
//! of each record is kept.

use crate::core::error::{CvSearchError, Result};
use crate::core::schema::IndexSchema;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::path::Path;

/// A single record to index
pub type Record = Map<String, Value>;

/// Counts from a cleaning pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    /// Records read
    pub input: usize,
    /// Records kept
    pub kept: usize,
    /// Records dropped for missing a required field
    pub dropped: usize,
    /// Field values filled with their default
    pub filled: usize,
}

/// Cleaned records and the counts describing the pass
#[derive(Debug, Clone, Default)]
pub struct CleanOutcome {
    pub records: Vec<Record>,
    pub stats: CleanStats,
}

/// Applies the schema's required/default rules to records
#[derive(Debug, Clone)]
pub struct RecordCleaner {
    required: Vec<String>,
    defaults: Vec<(String, String)>,
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

impl RecordCleaner {
    pub fn from_schema(schema: &IndexSchema) -> Self {
        let required = schema
            .fields()
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.clone())
            .collect();
        let defaults = schema
            .fields()
            .iter()
            .filter_map(|f| f.default.as_ref().map(|d| (f.name.clone(), d.clone())))
            .collect();

        Self { required, defaults }
    }

    /// Drop incomplete records and fill defaults in the rest
    pub fn clean(&self, records: Vec<Record>) -> CleanOutcome {
        let mut stats = CleanStats {
            input: records.len(),
            ..CleanStats::default()
        };

        let mut kept = Vec::with_capacity(records.len());
        for mut record in records {
            if self.required.iter().any(|f| is_missing(record.get(f))) {
                stats.dropped += 1;
                continue;
            }

            for (field, default) in &self.defaults {
                if is_missing(record.get(field)) {
                    record.insert(field.clone(), Value::String(default.clone()));
                    stats.filled += 1;
                }
            }
            kept.push(record);
        }
        stats.kept = kept.len();

        tracing::info!(
            "Filled {} missing value(s), removed {} record(s) without required fields",
            stats.filled,
            stats.dropped
        );

        CleanOutcome {
            records: kept,
            stats,
        }
    }
}

/// Input format of a record file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Csv,
}

impl RecordFormat {
    /// Guess the format from the file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => RecordFormat::Csv,
            _ => RecordFormat::Json,
        }
    }
}

/// Parse `text` as records in the given format
pub fn read_records(text: &str, format: RecordFormat) -> Result<Vec<Record>> {
    match format {
        RecordFormat::Json => parse_records(text),
        RecordFormat::Csv => parse_csv_records(text),
    }
}

/// Parse a CSV document with a header row into records.
///
/// Columns become fields in header order. Empty cells become `null`;
/// integer and float cells become numbers, everything else stays a string.
pub fn parse_csv_records(text: &str) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record = headers
            .iter()
            .zip(row.iter())
            .map(|(column, cell)| (column.to_string(), csv_cell_value(cell)))
            .collect();
        records.push(record);
    }
    Ok(records)
}

fn csv_cell_value(cell: &str) -> Value {
    let cell = cell.trim();
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = cell.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Some(n) = cell.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(n);
    }
    Value::String(cell.to_string())
}

/// Parse a JSON array of objects into records
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(CvSearchError::InvalidRecord(
            "expected a JSON array of records".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(CvSearchError::InvalidRecord(format!(
                "record {i} is not a JSON object: {other}"
            ))),
        })
        .collect()
}
