//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be passed to the chart and map
//! scripts as JSON, or printed by the CLI.

use serde::Serialize;

/// Summed capacity of one product (bar chart: category, value).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductCapacity {
    pub product: String,
    /// Cubic meters (m³)
    pub capacity: f64,
}

/// Summed capacity of one (municipality, product) pair
/// (bar chart: category, subcategory, value).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionProductCapacity {
    pub region: String,
    pub product: String,
    /// Cubic meters (m³)
    pub capacity: f64,
}

/// Headline figures for a municipality or for the whole state.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CapacitySummary {
    /// `None` for the whole dataset.
    pub region: Option<String>,
    /// Facilities counted once per tax id.
    pub facility_count: usize,
    /// Tank rows.
    pub tank_count: usize,
    /// Every tank row counts, no deduplication.
    pub total_capacity: f64,
    pub by_product: Vec<ProductCapacity>,
}

/// A tank with a valid position, ready for the map widget.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub region: String,
    /// HTML popup text.
    pub label: String,
    pub capacity: f64,
    /// `max(5, capacity / 500)`
    pub radius: f64,
    /// True when the point belongs to the selected municipality.
    pub highlighted: bool,
}

/// Everything the map widget needs to draw one map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapView {
    /// `[latitude, longitude]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub points: Vec<MapPoint>,
}
