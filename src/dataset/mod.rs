//! Colony Dataset
//!
//! Loads the bee colony CSV once at startup and holds the aggregated table
//! for the rest of the process.
//!
//! # Architecture
//!
//! ```text
//! bees.csv ──► loader ──► Vec<RawRecord> ──► aggregate ──► Dataset (immutable)
//!                                                             │
//!                                                             ▼
//!                                                  filter(year, category)
//! ```
//!
//! Raw records are dropped as soon as aggregation finishes. The resulting
//! [`Dataset`] is never mutated and is shared behind an `Arc`.

mod aggregate;
mod error;
mod loader;
mod types;

pub use aggregate::aggregate;
pub use error::{DatasetError, DatasetResult};
pub use loader::{load_raw_records, load_raw_records_from_reader};
pub use types::{AggregatedRecord, DatasetSummary, GroupKey, RawRecord, REQUIRED_COLUMNS};

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

/// Number of rows echoed to the log after loading
const PREVIEW_ROWS: usize = 5;

/// Immutable set of aggregated colony records
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<AggregatedRecord>,
}

impl Dataset {
    /// Build a dataset by aggregating raw records
    pub fn from_raw(raw: Vec<RawRecord>) -> Self {
        let raw_count = raw.len();
        let records = aggregate(raw);

        tracing::info!(
            raw_rows = raw_count,
            aggregated_rows = records.len(),
            "Dataset aggregated"
        );
        for record in records.iter().take(PREVIEW_ROWS) {
            tracing::debug!("{}", record);
        }

        Self { records }
    }

    /// Load and aggregate a CSV file
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let raw = load_raw_records(path)?;
        Ok(Self::from_raw(raw))
    }

    /// Load and aggregate CSV data from a reader
    pub fn from_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        let raw = load_raw_records_from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    /// All aggregated records, sorted by key
    pub fn records(&self) -> &[AggregatedRecord] {
        &self.records
    }

    /// Records for one year and stressor category
    pub fn filter(&self, year: i32, affected_by: &str) -> Vec<&AggregatedRecord> {
        self.records
            .iter()
            .filter(|r| r.matches(year, affected_by))
            .collect()
    }

    /// Distinct years, ascending
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct stressor categories, ascending
    pub fn categories(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.affected_by.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            records: self.len(),
            years: self.years(),
            categories: self.categories(),
        }
    }
}
