//! Map marker sizing, popup text and view constants.

use crate::facility::FacilityRecord;

/// Smallest marker radius, in the map widget's pixel units.
pub const MIN_RADIUS: f64 = 5.0;
/// Cubic meters of capacity per unit of marker radius.
pub const CAPACITY_PER_RADIUS: f64 = 500.0;
/// Zoom for the whole-state view.
pub const STATE_ZOOM: u8 = 7;
/// Zoom after recentering on a selected municipality.
pub const REGION_ZOOM: u8 = 12;

/// Marker radius for a tank of the given capacity: `max(5, capacity / 500)`.
pub fn marker_radius(capacity: f64) -> f64 {
    (capacity / CAPACITY_PER_RADIUS).max(MIN_RADIUS)
}

/// HTML popup shown when a marker is clicked.
pub fn popup_label(record: &FacilityRecord) -> String {
    format!(
        "<b>{}</b><br>Produto: {}<br>Tanque: {}<br>Tancagem: {} m³",
        escape_html(&record.legal_name),
        escape_html(&record.product),
        escape_html(&record.tank_name),
        record.capacity
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
