//! SQL schema for the in-memory SQLite database.
//!
//! One table holds every tank row of the sheet export. `row_id` preserves
//! load order, which is what "first occurrence" means for deduplication and
//! for picking a municipality's first valid coordinate.

/// Returns the full SQL schema as a single batch string.
///
/// - `facilities` - one row per tank: tax id, legal name, municipality,
///   product, tank name, capacity (m³), raw and derived coordinates
///
/// Every aggregate (distinct facilities, totals, per-product and
/// per-municipality breakdowns) is derived on the fly via `GROUP BY` +
/// `SUM(capacity)` queries against this table.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS facilities (
        row_id INTEGER PRIMARY KEY AUTOINCREMENT,
        tax_id TEXT NOT NULL,
        legal_name TEXT NOT NULL,
        region TEXT NOT NULL,
        product TEXT NOT NULL,
        tank_name TEXT NOT NULL,
        capacity REAL NOT NULL DEFAULT 0,
        raw_latitude TEXT NOT NULL,
        raw_longitude TEXT NOT NULL,
        latitude REAL,
        longitude REAL,
        CHECK ((latitude IS NULL) = (longitude IS NULL))
    );
    CREATE INDEX IF NOT EXISTS idx_facilities_region ON facilities(region);
    CREATE INDEX IF NOT EXISTS idx_facilities_tax_id ON facilities(tax_id);
    CREATE INDEX IF NOT EXISTS idx_facilities_product ON facilities(product);
    "#
}
