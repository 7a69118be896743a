//! Core data types for the colony dataset
//!
//! This module defines the rows that flow through the dataset layer:
//! - `RawRecord`: One line of the source CSV file
//! - `GroupKey`: The categorical fields records are grouped by
//! - `AggregatedRecord`: One row per unique key with the averaged measurement

use serde::{Deserialize, Serialize};

/// Columns that must be present in the source file header
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "State",
    "ANSI",
    "Affected by",
    "Year",
    "state_code",
    "Pct of Colonies Impacted",
];

/// A single row of the unaggregated source dataset
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawRecord {
    /// State name
    #[serde(rename = "State")]
    pub state: String,
    /// Region code, kept verbatim (may be blank for multi-state rows)
    #[serde(rename = "ANSI")]
    pub ansi: String,
    /// Stressor category (disease or pest name)
    #[serde(rename = "Affected by")]
    pub affected_by: String,
    /// Survey year
    #[serde(rename = "Year")]
    pub year: i32,
    /// Two-letter postal abbreviation
    #[serde(rename = "state_code")]
    pub state_code: String,
    /// Percentage of colonies impacted (0-100)
    #[serde(rename = "Pct of Colonies Impacted")]
    pub pct_colonies_impacted: f64,
}

impl RawRecord {
    /// Create a raw record
    pub fn new(
        state: impl Into<String>,
        ansi: impl Into<String>,
        affected_by: impl Into<String>,
        year: i32,
        state_code: impl Into<String>,
        pct_colonies_impacted: f64,
    ) -> Self {
        Self {
            state: state.into(),
            ansi: ansi.into(),
            affected_by: affected_by.into(),
            year,
            state_code: state_code.into(),
            pct_colonies_impacted,
        }
    }

    /// Grouping key for this record
    pub fn key(&self) -> GroupKey {
        GroupKey {
            state: self.state.clone(),
            ansi: self.ansi.clone(),
            affected_by: self.affected_by.clone(),
            year: self.year,
            state_code: self.state_code.clone(),
        }
    }
}

/// Categorical fields shared by every record of a group.
///
/// Field order defines the sort order of aggregated output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GroupKey {
    pub state: String,
    pub ansi: String,
    pub affected_by: String,
    pub year: i32,
    pub state_code: String,
}

/// One post group-by-mean row, unique per `GroupKey`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AggregatedRecord {
    pub state: String,
    pub ansi: String,
    pub affected_by: String,
    pub year: i32,
    pub state_code: String,
    /// Arithmetic mean of the group's measurements
    pub pct_colonies_impacted: f64,
    /// Number of raw rows folded into this record
    pub sample_count: usize,
}

impl AggregatedRecord {
    pub(crate) fn from_group(key: GroupKey, mean: f64, sample_count: usize) -> Self {
        Self {
            state: key.state,
            ansi: key.ansi,
            affected_by: key.affected_by,
            year: key.year,
            state_code: key.state_code,
            pct_colonies_impacted: mean,
            sample_count,
        }
    }

    /// Grouping key for this record
    pub fn key(&self) -> GroupKey {
        GroupKey {
            state: self.state.clone(),
            ansi: self.ansi.clone(),
            affected_by: self.affected_by.clone(),
            year: self.year,
            state_code: self.state_code.clone(),
        }
    }

    /// Check whether this record belongs to a year and stressor category.
    /// Category comparison is exact and case-sensitive.
    pub fn matches(&self, year: i32, affected_by: &str) -> bool {
        self.year == year && self.affected_by == affected_by
    }
}

impl std::fmt::Display for AggregatedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) ansi={} {} {}: {:.2}% (n={})",
            self.state,
            self.state_code,
            self.ansi,
            self.affected_by,
            self.year,
            self.pct_colonies_impacted,
            self.sample_count
        )
    }
}

/// Summary of a loaded dataset
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetSummary {
    /// Number of aggregated records
    pub records: usize,
    /// Distinct years, ascending
    pub years: Vec<i32>,
    /// Distinct stressor categories, ascending
    pub categories: Vec<String>,
}
