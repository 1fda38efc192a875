//! Typed query methods over the facility table.
//!
//! All queries are read-only and return typed structs from
//! [`crate::models`] (or `FacilityRecord`s) that can be serialized to JSON
//! for the chart and map scripts.
//!
//! Aggregates take `region: Option<&str>`: `None` is the whole state,
//! `Some(name)` the same query restricted to one municipality. The
//! restriction is the SQL `(?1 IS NULL OR region = ?1)` clause.

use crate::models::{CapacitySummary, MapPoint, MapView, ProductCapacity, RegionProductCapacity};
use crate::Database;
use rusqlite::{params, Row};
use tank_core::marker::{self, REGION_ZOOM, STATE_ZOOM};
use tank_core::FacilityRecord;

const RECORD_COLUMNS: &str = "tax_id, legal_name, region, product, tank_name, capacity,
     raw_latitude, raw_longitude, latitude, longitude";

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<FacilityRecord> {
    Ok(FacilityRecord {
        tax_id: row.get(0)?,
        legal_name: row.get(1)?,
        region: row.get(2)?,
        product: row.get(3)?,
        tank_name: row.get(4)?,
        capacity: row.get(5)?,
        raw_latitude: row.get(6)?,
        raw_longitude: row.get(7)?,
        latitude: row.get(8)?,
        longitude: row.get(9)?,
    })
}

impl Database {
    // ───────────────────── Row Queries ─────────────────────

    /// Get every tank row, optionally restricted to one municipality.
    ///
    /// Rows come back in load order. Rows without a valid position are
    /// included.
    pub fn query_records(&self, region: Option<&str>) -> anyhow::Result<Vec<FacilityRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM facilities
             WHERE (?1 IS NULL OR region = ?1)
             ORDER BY row_id"
        ))?;
        let rows = stmt
            .query_map(params![region], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_records returned {} records", rows.len());
        Ok(rows)
    }

    /// Get one row per facility: the first occurrence of each tax id.
    pub fn query_distinct_facilities(
        &self,
        region: Option<&str>,
    ) -> anyhow::Result<Vec<FacilityRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM facilities
             WHERE row_id IN (
                 SELECT MIN(row_id) FROM facilities
                 WHERE (?1 IS NULL OR region = ?1)
                 GROUP BY tax_id
             )
             ORDER BY row_id"
        ))?;
        let rows = stmt
            .query_map(params![region], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_distinct_facilities returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Count facilities, each tax id once regardless of how many tanks it has.
    pub fn query_distinct_facility_count(&self, region: Option<&str>) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row(
            "SELECT COUNT(DISTINCT tax_id) FROM facilities
             WHERE (?1 IS NULL OR region = ?1)",
            params![region],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Count tank rows.
    pub fn query_tank_count(&self, region: Option<&str>) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM facilities WHERE (?1 IS NULL OR region = ?1)",
            params![region],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    // ───────────────────── Capacity Queries ─────────────────────

    /// Sum of capacity (m³) over every tank row. Zero when there are no rows.
    pub fn query_total_capacity(&self, region: Option<&str>) -> anyhow::Result<f64> {
        let conn = self.conn.borrow();
        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(capacity), 0.0) FROM facilities
             WHERE (?1 IS NULL OR region = ?1)",
            params![region],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Capacity summed per product, sorted by product.
    pub fn query_capacity_by_product(
        &self,
        region: Option<&str>,
    ) -> anyhow::Result<Vec<ProductCapacity>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT product, SUM(capacity) FROM facilities
             WHERE (?1 IS NULL OR region = ?1)
             GROUP BY product
             ORDER BY product",
        )?;
        let rows = stmt
            .query_map(params![region], |row| {
                Ok(ProductCapacity {
                    product: row.get(0)?,
                    capacity: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_capacity_by_product returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Capacity summed per (municipality, product), sorted by both keys.
    pub fn query_capacity_by_region_and_product(
        &self,
    ) -> anyhow::Result<Vec<RegionProductCapacity>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT region, product, SUM(capacity) FROM facilities
             GROUP BY region, product
             ORDER BY region, product",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RegionProductCapacity {
                    region: row.get(0)?,
                    product: row.get(1)?,
                    capacity: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_capacity_by_region_and_product returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Headline figures for one municipality, or the whole state for `None`.
    pub fn query_summary(&self, region: Option<&str>) -> anyhow::Result<CapacitySummary> {
        Ok(CapacitySummary {
            region: region.map(str::to_string),
            facility_count: self.query_distinct_facility_count(region)?,
            tank_count: self.query_tank_count(region)?,
            total_capacity: self.query_total_capacity(region)?,
            by_product: self.query_capacity_by_product(region)?,
        })
    }

    /// Distinct municipality names, sorted, for the selection list.
    ///
    /// Empty names are left out. The "no selection" entry is the caller's.
    pub fn query_regions(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT region FROM facilities
             WHERE region <> ''
             ORDER BY region",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    // ───────────────────── Spatial Queries ─────────────────────

    /// Every tank with a valid position, in load order.
    pub fn query_map_points(&self) -> anyhow::Result<Vec<MapPoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM facilities
             WHERE latitude IS NOT NULL AND longitude IS NOT NULL
             ORDER BY row_id"
        ))?;
        let rows = stmt
            .query_map([], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        let points: Vec<MapPoint> = rows.iter().filter_map(map_point).collect();
        log::info!("query: query_map_points returned {} points", points.len());
        Ok(points)
    }

    /// Whole-state map for marker clustering: mean center, state zoom.
    pub fn query_cluster_map(&self) -> anyhow::Result<MapView> {
        let points = self.query_map_points()?;
        Ok(MapView {
            center: mean_center(&points),
            zoom: STATE_ZOOM,
            points,
        })
    }

    /// Map with one municipality's points highlighted.
    ///
    /// With no selection nothing is highlighted and the view is the
    /// whole-state one. When the selected municipality has at least one
    /// valid position, the view recenters on its first one and zooms in.
    pub fn query_highlight_map(&self, selected: Option<&str>) -> anyhow::Result<MapView> {
        let mut points = self.query_map_points()?;
        let mut center = mean_center(&points);
        let mut zoom = STATE_ZOOM;

        if let Some(selected) = selected {
            for point in points.iter_mut() {
                point.highlighted = point.region == selected;
            }
            if let Some(first) = points.iter().find(|p| p.highlighted) {
                center = [first.latitude, first.longitude];
                zoom = REGION_ZOOM;
            }
        }

        Ok(MapView {
            center,
            zoom,
            points,
        })
    }
}

fn map_point(record: &FacilityRecord) -> Option<MapPoint> {
    let (latitude, longitude) = record.position()?;
    Some(MapPoint {
        latitude,
        longitude,
        region: record.region.clone(),
        label: marker::popup_label(record),
        capacity: record.capacity,
        radius: marker::marker_radius(record.capacity),
        highlighted: false,
    })
}

/// Mean latitude/longitude of the points; `[0, 0]` when there are none.
fn mean_center(points: &[MapPoint]) -> [f64; 2] {
    if points.is_empty() {
        return [0.0, 0.0];
    }
    let n = points.len() as f64;
    let lat = points.iter().map(|p| p.latitude).sum::<f64>() / n;
    let lon = points.iter().map(|p| p.longitude).sum::<f64>() / n;
    [lat, lon]
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use tank_core::FacilityRecord;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    /// Three facilities in two municipalities; facility 1 has two tanks and
    /// one tank of facility 3 has a malformed longitude.
    fn sample_records() -> Vec<FacilityRecord> {
        vec![
            FacilityRecord::new("1", "Posto Tambaú", "João Pessoa", "A", "T1", 300.0)
                .with_coordinates("-7:6:0", "-34:50:0"),
            FacilityRecord::new("1", "Posto Tambaú", "João Pessoa", "B", "T2", 100.0)
                .with_coordinates("-7:6:0", "-34:50:0"),
            FacilityRecord::new("2", "Auto Posto Sertão", "Patos", "A", "T1", 200.0)
                .with_coordinates("-7:1:30", "-37:16:48"),
            FacilityRecord::new("3", "Posto Brisa", "Patos", "B", "T1", 50.0)
                .with_coordinates("-7:2:0", "not a coordinate"),
            FacilityRecord::new("3", "Posto Brisa", "Patos", "C", "T2", 7000.0)
                .with_coordinates("-7:2:0", "-37:17:0"),
        ]
    }

    fn sample_db() -> Database {
        Database::from_records(&sample_records()).unwrap()
    }

    #[test]
    fn product_breakdown_example() {
        let db = Database::from_records(&[
            FacilityRecord::new("1", "X", "R", "A", "T1", 300.0),
            FacilityRecord::new("2", "Y", "R", "A", "T1", 200.0),
            FacilityRecord::new("3", "Z", "R", "B", "T1", 100.0),
        ])
        .unwrap();
        let by_product = db.query_capacity_by_product(None).unwrap();
        assert_eq!(by_product.len(), 2);
        assert_eq!(by_product[0].product, "A");
        assert_close(by_product[0].capacity, 500.0);
        assert_eq!(by_product[1].product, "B");
        assert_close(by_product[1].capacity, 100.0);
        assert_close(db.query_total_capacity(None).unwrap(), 600.0);
    }

    #[test]
    fn distinct_count_ignores_repeated_tax_ids() {
        let db = sample_db();
        assert_eq!(db.query_records(None).unwrap().len(), 5);
        assert_eq!(db.query_distinct_facility_count(None).unwrap(), 3);
        assert_eq!(db.query_distinct_facility_count(Some("Patos")).unwrap(), 2);
        assert_eq!(db.query_distinct_facility_count(Some("Sousa")).unwrap(), 0);
    }

    #[test]
    fn distinct_facilities_keep_first_occurrence() {
        let db = sample_db();
        let facilities = db.query_distinct_facilities(None).unwrap();
        let firsts: Vec<(&str, &str)> = facilities
            .iter()
            .map(|r| (r.tax_id.as_str(), r.product.as_str()))
            .collect();
        assert_eq!(firsts, [("1", "A"), ("2", "A"), ("3", "B")]);
        assert_eq!(
            facilities.len(),
            db.query_distinct_facility_count(None).unwrap()
        );
    }

    #[test]
    fn total_counts_every_tank_row() {
        let db = sample_db();
        assert_close(db.query_total_capacity(None).unwrap(), 7650.0);
        assert_close(db.query_total_capacity(Some("João Pessoa")).unwrap(), 400.0);
        assert_eq!(db.query_total_capacity(Some("Sousa")).unwrap(), 0.0);
    }

    #[test]
    fn total_is_independent_of_row_order() {
        let records = sample_records();
        let expected = db_total(&records);

        let mut reversed = records.clone();
        reversed.reverse();
        assert_close(db_total(&reversed), expected);

        let mut rotated = records.clone();
        rotated.rotate_left(2);
        assert_close(db_total(&rotated), expected);

        let mut interleaved: Vec<FacilityRecord> = records.iter().step_by(2).cloned().collect();
        interleaved.extend(records.iter().skip(1).step_by(2).cloned());
        assert_close(db_total(&interleaved), expected);
    }

    fn db_total(records: &[FacilityRecord]) -> f64 {
        Database::from_records(records)
            .unwrap()
            .query_total_capacity(None)
            .unwrap()
    }

    #[test]
    fn product_partition_sums_to_total() {
        let db = sample_db();
        for region in [None, Some("Patos"), Some("João Pessoa")] {
            let by_product: f64 = db
                .query_capacity_by_product(region)
                .unwrap()
                .iter()
                .map(|p| p.capacity)
                .sum();
            assert_close(by_product, db.query_total_capacity(region).unwrap());
        }
    }

    #[test]
    fn region_totals_agree_with_region_product_breakdown() {
        let db = sample_db();
        let breakdown = db.query_capacity_by_region_and_product().unwrap();
        for region in db.query_regions().unwrap() {
            let from_breakdown: f64 = breakdown
                .iter()
                .filter(|row| row.region == region)
                .map(|row| row.capacity)
                .sum();
            let from_subset: f64 = db
                .query_records(Some(region.as_str()))
                .unwrap()
                .iter()
                .map(|r| r.capacity)
                .sum();
            assert_close(from_breakdown, from_subset);
            assert_close(from_breakdown, db.query_total_capacity(Some(region.as_str())).unwrap());
        }
    }

    #[test]
    fn region_product_breakdown_is_sorted_by_both_keys() {
        let db = sample_db();
        let keys: Vec<(String, String)> = db
            .query_capacity_by_region_and_product()
            .unwrap()
            .into_iter()
            .map(|row| (row.region, row.product))
            .collect();
        let expected: Vec<(String, String)> = [
            ("João Pessoa", "A"),
            ("João Pessoa", "B"),
            ("Patos", "A"),
            ("Patos", "B"),
            ("Patos", "C"),
        ]
        .iter()
        .map(|(r, p)| (r.to_string(), p.to_string()))
        .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn region_subset_matches_region_column() {
        let db = sample_db();
        let patos = db.query_records(Some("Patos")).unwrap();
        assert_eq!(patos.len(), 3);
        assert!(patos.iter().all(|r| r.region == "Patos"));
        assert!(db.query_records(Some("patos")).unwrap().is_empty());
    }

    #[test]
    fn summary_matches_individual_queries() {
        let db = sample_db();
        let summary = db.query_summary(Some("Patos")).unwrap();
        assert_eq!(summary.region.as_deref(), Some("Patos"));
        assert_eq!(summary.facility_count, 2);
        assert_eq!(summary.tank_count, 3);
        assert_close(summary.total_capacity, 7250.0);
        assert_eq!(
            summary.by_product,
            db.query_capacity_by_product(Some("Patos")).unwrap()
        );

        let state = db.query_summary(None).unwrap();
        assert_eq!(state.region, None);
        assert_eq!(state.facility_count, 3);
        assert_eq!(state.tank_count, 5);
    }

    #[test]
    fn summary_reports_query_failure() {
        let db = sample_db();
        db.conn
            .borrow()
            .execute_batch("DROP TABLE facilities")
            .unwrap();
        assert!(db.query_summary(None).is_err());
        assert!(db.query_summary(Some("Patos")).is_err());
    }

    #[test]
    fn regions_are_sorted_and_skip_empty_names() {
        let mut records = sample_records();
        records.push(FacilityRecord::new("4", "Sem Município", "", "A", "T1", 1.0));
        records.push(FacilityRecord::new("5", "Posto Alto", "Cabedelo", "A", "T1", 1.0));
        let db = Database::from_records(&records).unwrap();
        assert_eq!(
            db.query_regions().unwrap(),
            ["Cabedelo", "João Pessoa", "Patos"]
        );
    }

    #[test]
    fn rows_without_position_are_left_off_the_map_only() {
        let db = sample_db();
        let points = db.query_map_points().unwrap();
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|p| p.capacity != 50.0));
        // ...but the 50 m³ tank still counts everywhere else
        assert_close(db.query_total_capacity(Some("Patos")).unwrap(), 7250.0);
        assert_eq!(db.query_distinct_facility_count(None).unwrap(), 3);
    }

    #[test]
    fn map_points_carry_radius_and_label() {
        let db = sample_db();
        let points = db.query_map_points().unwrap();
        assert_eq!(points[0].radius, 5.0);
        assert_eq!(points[3].radius, 14.0);
        assert!(points[0].label.starts_with("<b>Posto Tambaú</b>"));
        assert_close(points[0].latitude, -7.1);
    }

    #[test]
    fn cluster_map_centers_on_mean() {
        let db = sample_db();
        let view = db.query_cluster_map().unwrap();
        let points = db.query_map_points().unwrap();
        let n = points.len() as f64;
        assert_close(view.center[0], points.iter().map(|p| p.latitude).sum::<f64>() / n);
        assert_close(view.center[1], points.iter().map(|p| p.longitude).sum::<f64>() / n);
        assert_eq!(view.zoom, 7);
        assert!(view.points.iter().all(|p| !p.highlighted));
    }

    #[test]
    fn highlight_without_selection_is_state_view() {
        let db = sample_db();
        let view = db.query_highlight_map(None).unwrap();
        assert_eq!(view, db.query_cluster_map().unwrap());
    }

    #[test]
    fn highlight_recenters_on_first_region_point() {
        let db = sample_db();
        let view = db.query_highlight_map(Some("Patos")).unwrap();
        assert_eq!(view.points.len(), 4);
        assert_eq!(view.points.iter().filter(|p| p.highlighted).count(), 2);
        assert_eq!(view.zoom, 12);
        assert_close(view.center[0], -7.025);
        assert_close(view.center[1], -37.28);
    }

    #[test]
    fn highlight_of_region_without_positions_keeps_state_view() {
        let mut records = sample_records();
        records.push(FacilityRecord::new("6", "Posto Sem GPS", "Sousa", "A", "T1", 10.0));
        let db = Database::from_records(&records).unwrap();
        let view = db.query_highlight_map(Some("Sousa")).unwrap();
        assert!(view.points.iter().all(|p| !p.highlighted));
        assert_eq!(view.zoom, 7);
        assert_eq!(view.center, db.query_cluster_map().unwrap().center);
    }

    #[test]
    fn empty_database_map_centers_on_origin() {
        let db = Database::new().unwrap();
        let view = db.query_cluster_map().unwrap();
        assert!(view.points.is_empty());
        assert_eq!(view.center, [0.0, 0.0]);
    }
}
