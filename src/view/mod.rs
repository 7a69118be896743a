//! View Controller
//!
//! Owns the read-only dataset and turns a year selection into the view
//! outputs: a status line and a choropleth figure.
//!
//! ```text
//! Idle ──(year selected)──► filter(year, "Varroa_mites") ──► MapFigure ──► Idle
//! ```
//!
//! # Example
//!
//! ```rust
//! use hivemap::dataset::{Dataset, RawRecord};
//! use hivemap::view::ViewController;
//! use std::sync::Arc;
//!
//! let dataset = Dataset::from_raw(vec![
//!     RawRecord::new("California", "6", "Varroa_mites", 2015, "CA", 10.0),
//!     RawRecord::new("California", "6", "Varroa_mites", 2015, "CA", 20.0),
//! ]);
//! let controller = ViewController::new(Arc::new(dataset));
//!
//! let update = controller.on_year_selected(2015);
//! assert_eq!(update.status_text, "The year chosen is 2015");
//! assert_eq!(update.figure.points(), vec![("CA", 15.0)]);
//! ```

pub mod figure;
pub mod layout;
pub mod page;

pub use figure::{MapFigure, Trace};
pub use layout::{Dropdown, DropdownOption, Layout};
pub use page::render_page;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::dataset::Dataset;

/// Stressor category shown on the map
pub const VARROA_CATEGORY: &str = "Varroa_mites";

/// Years offered by the dropdown
pub const YEAR_OPTIONS: [i32; 4] = [2015, 2016, 2017, 2018];

/// Year selected before any user interaction
pub const DEFAULT_YEAR: i32 = 2015;

/// The currently chosen year.
///
/// Carried by each request, so sessions never share it.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct SelectionState {
    #[serde(default = "default_year")]
    pub year: i32,
}

fn default_year() -> i32 {
    DEFAULT_YEAR
}

impl Default for SelectionState {
    fn default() -> Self {
        Self { year: DEFAULT_YEAR }
    }
}

/// Outputs produced for one selection event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ViewUpdate {
    pub status_text: String,
    pub figure: MapFigure,
}

/// Renders the dashboard from an immutable dataset
#[derive(Debug, Clone)]
pub struct ViewController {
    dataset: Arc<Dataset>,
}

impl ViewController {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Layout shown before the first selection event
    pub fn initial_layout(&self) -> Layout {
        Layout::new(&YEAR_OPTIONS, DEFAULT_YEAR)
    }

    /// Handle a year selection.
    ///
    /// Years without data (including ones outside the dropdown) produce a
    /// figure with no points.
    pub fn on_year_selected(&self, year: i32) -> ViewUpdate {
        tracing::debug!(year, "Year selected");

        let rows = self.dataset.filter(year, VARROA_CATEGORY);
        let figure = MapFigure::choropleth(rows);

        tracing::debug!(year, points = figure.point_count(), "Figure built");

        ViewUpdate {
            status_text: format!("The year chosen is {}", year),
            figure,
        }
    }
}
