//! Loading facility rows into the in-memory table.
//!
//! The CSV format is the "Folha1" sheet export read by
//! [`FacilityRecord::parse_facility_csv`]. Rows keep their file order.

use crate::Database;
use rusqlite::params;
use tank_core::FacilityRecord;

impl Database {
    /// Load facility rows from a CSV export of the sheet.
    ///
    /// A schema mismatch aborts the load before any row is inserted.
    /// Malformed coordinates or capacities do not: those rows are stored
    /// without a position or with zero capacity.
    pub fn load_facilities(&self, csv_data: &str, delimiter: u8) -> anyhow::Result<()> {
        let records = FacilityRecord::parse_facility_csv(csv_data, delimiter)?;
        self.insert_facilities(&records)
    }

    /// Insert already-parsed records, appending after any existing rows.
    pub fn insert_facilities(&self, records: &[FacilityRecord]) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO facilities
                 (tax_id, legal_name, region, product, tank_name, capacity,
                  raw_latitude, raw_longitude, latitude, longitude)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for r in records {
                let position = r.position();
                stmt.execute(params![
                    r.tax_id,
                    r.legal_name,
                    r.region,
                    r.product,
                    r.tank_name,
                    r.capacity,
                    r.raw_latitude,
                    r.raw_longitude,
                    position.map(|(lat, _)| lat),
                    position.map(|(_, lon)| lon),
                ])?;
            }
        }
        tx.commit()?;
        log::info!("loader: Loaded {} facility rows", records.len());
        Ok(())
    }
}
