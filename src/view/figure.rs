//! Map Figure
//!
//! Choropleth figure descriptor. Serializes to the Plotly figure JSON
//! schema (`{ "data": [...], "layout": {...} }`) so the browser can hand it
//! straight to `Plotly.react`.

use serde::Serialize;

use crate::dataset::AggregatedRecord;

/// Title shown above the map
pub const MAP_TITLE: &str = "Bees Affected By Mites in the USA";

/// Title font size in points
pub const TITLE_FONT_SIZE: u32 = 24;

/// Continuous color scale used for the measurement
pub const COLOR_SCALE: &str = "curl";

/// A complete map figure
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapFigure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

/// Figure traces, tagged with the Plotly trace type
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Choropleth(ChoroplethTrace),
}

/// Regions colored by a value
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChoroplethTrace {
    /// How `locations` are resolved ("USA-states" = postal codes)
    pub locationmode: String,
    /// Region identifiers
    pub locations: Vec<String>,
    /// Value per region, same length as `locations`
    pub z: Vec<f64>,
    pub colorscale: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FigureLayout {
    pub title: Title,
    pub geo: Geo,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
    pub xanchor: String,
    pub x: f64,
    pub font: Font,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Geo {
    pub scope: String,
}

impl MapFigure {
    /// Build a U.S. state choropleth colored by percentage of colonies impacted
    pub fn choropleth<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AggregatedRecord>,
    {
        let (locations, z): (Vec<String>, Vec<f64>) = records
            .into_iter()
            .map(|r| (r.state_code.clone(), r.pct_colonies_impacted))
            .unzip();

        Self {
            data: vec![Trace::Choropleth(ChoroplethTrace {
                locationmode: "USA-states".to_string(),
                locations,
                z,
                colorscale: COLOR_SCALE.to_string(),
            })],
            layout: FigureLayout {
                title: Title {
                    text: MAP_TITLE.to_string(),
                    xanchor: "center".to_string(),
                    x: 0.5,
                    font: Font {
                        size: TITLE_FONT_SIZE,
                    },
                },
                geo: Geo {
                    scope: "usa".to_string(),
                },
            },
        }
    }

    /// `(StateCode, value)` pairs across all traces
    pub fn points(&self) -> Vec<(&str, f64)> {
        self.data
            .iter()
            .flat_map(|trace| match trace {
                Trace::Choropleth(t) => t
                    .locations
                    .iter()
                    .map(String::as_str)
                    .zip(t.z.iter().copied()),
            })
            .collect()
    }

    pub fn point_count(&self) -> usize {
        self.data
            .iter()
            .map(|trace| match trace {
                Trace::Choropleth(t) => t.locations.len(),
            })
            .sum()
    }
}
