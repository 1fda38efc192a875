//! In-memory SQLite table of fuel tankage records and aggregate queries.
//!
//! The sheet export is loaded once into an in-memory SQLite database and
//! then only read. Every aggregate shown by the dashboard is a fresh `SELECT`
//! against that table, so views always reflect the loaded record set and
//! nothing is cached.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV data loaded via `include_str!` at compile time in the dashboard, or
//!   from a file path by the CLI
//! - Typed query methods returning serializable structs for the chart and
//!   map scripts
//!
//! # Usage
//!
//! ```rust
//! use tank_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_facilities(
//!     "MUNICÍPIO,CNPJ,Razão Social,Produto,Nome Tanque,Tancagem (m³),LATITUDE,LONGITUDE\n\
//!      Patos,1,Posto A,Etanol,T1,20,-7:1:30,-37:16:48\n",
//!     b',',
//! )
//! .unwrap();
//!
//! assert_eq!(db.query_distinct_facility_count(None).unwrap(), 1);
//! let by_product = db.query_capacity_by_product(Some("Patos")).unwrap();
//! assert_eq!(by_product[0].product, "Etanol");
//! ```
//!
//! # Region scope
//!
//! Aggregates take `region: Option<&str>`. `None` covers the whole state;
//! `Some(name)` restricts the same query to one municipality, which keeps
//! state-wide and municipality figures computed by identical code.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;
use tank_core::FacilityRecord;

/// In-memory SQLite database holding the facility table.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database holding the given records, in slice order.
    pub fn from_records(records: &[FacilityRecord]) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.insert_facilities(records)?;
        Ok(db)
    }

    /// Create a database from a CSV export of the sheet.
    pub fn from_csv(csv_data: &str, delimiter: u8) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_facilities(csv_data, delimiter)?;
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.insert_facilities(&[FacilityRecord::new("1", "A", "Patos", "GLP", "T1", 10.0)])
            .unwrap();
        assert_eq!(
            db2.query_records(None).unwrap().len(),
            1,
            "Clone should see same data via shared Rc"
        );
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_records(None).unwrap().is_empty());
        assert_eq!(db.query_total_capacity(None).unwrap(), 0.0);
        assert_eq!(db.query_distinct_facility_count(None).unwrap(), 0);
    }

    #[test]
    fn fixture_dataset() {
        let db = Database::from_csv(include_str!("../../fixtures/base1.csv"), b',').unwrap();
        assert_eq!(db.query_tank_count(None).unwrap(), 20);
        assert_eq!(db.query_distinct_facility_count(None).unwrap(), 10);
        assert!((db.query_total_capacity(None).unwrap() - 36857.5).abs() < 1e-6);
        assert_eq!(db.query_map_points().unwrap().len(), 17);
        assert_eq!(
            db.query_regions().unwrap(),
            [
                "Bayeux",
                "Cabedelo",
                "Cajazeiras",
                "Campina Grande",
                "João Pessoa",
                "Patos",
                "Sousa"
            ]
        );
        let diesel = db
            .query_capacity_by_product(None)
            .unwrap()
            .into_iter()
            .find(|p| p.product == "Diesel S10")
            .unwrap();
        assert!((diesel.capacity - 5087.5).abs() < 1e-6);
    }

    #[test]
    fn schema_mismatch_fails_construction() {
        let result = Database::from_csv("CNPJ,Produto\n1,GLP\n", b',');
        assert!(result.is_err());
    }
}
