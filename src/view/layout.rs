//! Page Layout
//!
//! Declarative description of the dashboard page: heading, year dropdown,
//! status line and map placeholder.

use serde::Serialize;

/// Heading shown at the top of the page
pub const PAGE_TITLE: &str = "Bees fatalities Factors - Dashboard";

/// Element ids shared by the layout, the rendered page and its script
pub const SELECT_YEAR_ID: &str = "select_year";
pub const STATUS_ID: &str = "output_container";
pub const MAP_ID: &str = "my_bee_map";

/// The initial page layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    pub title: String,
    pub dropdown: Dropdown,
    /// Id of the text placeholder echoing the selection
    pub status_id: String,
    /// Id of the (initially empty) map placeholder
    pub map_id: String,
}

/// Single-select year dropdown
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    /// Initially selected value
    pub value: i32,
    pub multi: bool,
    /// CSS width
    pub width: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: i32,
}

impl Layout {
    pub fn new(years: &[i32], default_year: i32) -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            dropdown: Dropdown {
                id: SELECT_YEAR_ID.to_string(),
                options: years
                    .iter()
                    .map(|&year| DropdownOption {
                        label: year.to_string(),
                        value: year,
                    })
                    .collect(),
                value: default_year,
                multi: false,
                width: "40%".to_string(),
            },
            status_id: STATUS_ID.to_string(),
            map_id: MAP_ID.to_string(),
        }
    }
}
