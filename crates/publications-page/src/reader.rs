//! CSV input: turns `publications.csv` into raw records.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::columns;
use crate::error::{BuildError, BuildResult};
use crate::models::{RawRecord, RawRow};

/// Read all records from a CSV file.
///
/// # Errors
///
/// Returns [`BuildError::MissingInput`] if the file does not exist, and the
/// errors of [`read_rows`] otherwise.
pub fn read_rows_from_path(path: &Path) -> BuildResult<Vec<RawRecord>> {
    if !path.exists() {
        return Err(BuildError::missing_input(path));
    }

    let file = File::open(path)?;
    tracing::debug!(path = %path.display(), "Reading publications CSV");
    read_rows(file)
}

/// Read all records from CSV data with a header row.
///
/// Header names and cells are trimmed. Quoted cells may span lines. Records
/// whose field count differs from the header come back as
/// [`RawRecord::Malformed`] so the caller decides what to do with them.
///
/// # Errors
///
/// Returns [`BuildError::MissingColumns`] if the header lacks a required
/// column, or [`BuildError::Csv`] on invalid CSV or UTF-8.
pub fn read_rows<R: Read>(input: R) -> BuildResult<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    validate_headers(&headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        if record.len() != headers.len() {
            records.push(RawRecord::Malformed {
                line,
                expected: headers.len(),
                found: record.len(),
            });
            continue;
        }

        let fields: BTreeMap<String, String> =
            headers.iter().cloned().zip(record.iter().map(str::to_string)).collect();
        records.push(RawRow::new(line, fields).into());
    }

    tracing::debug!(records = records.len(), columns = headers.len(), "Parsed CSV");
    Ok(records)
}

/// Check the header for required columns.
///
/// Recognized optional columns may be missing; they read as empty.
///
/// # Errors
///
/// Returns [`BuildError::MissingColumns`] listing every absent required column.
pub fn validate_headers(headers: &[String]) -> BuildResult<()> {
    let has = |name: &str| headers.iter().any(|h| h == name);

    let missing: Vec<&str> = columns::REQUIRED.iter().copied().filter(|c| !has(c)).collect();
    if !missing.is_empty() {
        return Err(BuildError::missing_columns(missing));
    }

    for column in columns::RECOGNIZED.iter().filter(|c| !has(c)) {
        tracing::debug!(column, "Optional column absent");
    }

    Ok(())
}
