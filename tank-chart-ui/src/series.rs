//! JSON payloads for the bar chart and map scripts.

use serde::Serialize;
use tank_db::models::{MapView, ProductCapacity, RegionProductCapacity};

#[derive(Serialize)]
struct CategoryValue<'a> {
    category: &'a str,
    value: f64,
}

#[derive(Serialize)]
struct CategorySubcategoryValue<'a> {
    category: &'a str,
    subcategory: &'a str,
    value: f64,
}

/// `[{ category: product, value: capacity }]` for `renderBarChart`.
pub fn product_series_json(rows: &[ProductCapacity]) -> String {
    let series: Vec<CategoryValue<'_>> = rows
        .iter()
        .map(|r| CategoryValue {
            category: &r.product,
            value: r.capacity,
        })
        .collect();
    serde_json::to_string(&series).unwrap_or_else(|_| "[]".to_string())
}

/// `[{ category: region, subcategory: product, value: capacity }]` for
/// `renderStackedBarChart`.
pub fn region_product_series_json(rows: &[RegionProductCapacity]) -> String {
    let series: Vec<CategorySubcategoryValue<'_>> = rows
        .iter()
        .map(|r| CategorySubcategoryValue {
            category: &r.region,
            subcategory: &r.product,
            value: r.capacity,
        })
        .collect();
    serde_json::to_string(&series).unwrap_or_else(|_| "[]".to_string())
}

/// Serialized `MapView` for the map scripts.
pub fn map_view_json(view: &MapView) -> String {
    serde_json::to_string(view).unwrap_or_else(|_| "{}".to_string())
}
