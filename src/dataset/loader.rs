//! CSV Loader
//!
//! Reads raw colony records from a delimited file with a header row.
//! Columns are matched by name; extra columns are ignored. Any missing
//! column or unparseable value aborts the load.

use super::error::{DatasetError, DatasetResult};
use super::types::{RawRecord, REQUIRED_COLUMNS};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load raw records from a CSV file on disk
pub fn load_raw_records(path: &Path) -> DatasetResult<Vec<RawRecord>> {
    let file = File::open(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "Reading dataset file");
    load_raw_records_from_reader(file)
}

/// Load raw records from any reader (useful for testing)
pub fn load_raw_records_from_reader<R: Read>(reader: R) -> DatasetResult<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    validate_headers(&headers)?;

    let mut records = Vec::new();
    for result in reader.deserialize::<RawRecord>() {
        records.push(result?);
    }

    Ok(records)
}

/// Ensure every required column is present in the header row
fn validate_headers(headers: &csv::StringRecord) -> DatasetResult<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}
