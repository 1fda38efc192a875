//! Printing query results as plain-text tables or JSON.

use std::io::Write;
use tank_db::models::{CapacitySummary, MapView, RegionProductCapacity};

/// Write distinct facilities, tank count, total and per-product capacity.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &CapacitySummary,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, summary)?;
        writeln!(out)?;
        return Ok(());
    }

    let scope = summary.region.as_deref().unwrap_or("Paraíba");
    writeln!(out, "{}", scope)?;
    writeln!(out, "  Facilities:      {}", summary.facility_count)?;
    writeln!(out, "  Tanks:           {}", summary.tank_count)?;
    writeln!(out, "  Total capacity:  {:.2} m³", summary.total_capacity)?;
    if !summary.by_product.is_empty() {
        writeln!(out, "  By product:")?;
        let width = summary
            .by_product
            .iter()
            .map(|p| p.product.chars().count())
            .max()
            .unwrap_or(0);
        for p in &summary.by_product {
            writeln!(
                out,
                "    {:<width$}  {:>14.2} m³",
                p.product,
                p.capacity,
                width = width
            )?;
        }
    }
    Ok(())
}

/// Write one municipality name per line.
pub fn write_regions<W: Write>(out: &mut W, regions: &[String]) -> anyhow::Result<()> {
    for region in regions {
        writeln!(out, "{}", region)?;
    }
    log::info!("report: {} municipalities", regions.len());
    Ok(())
}

/// Write the municipality × product table.
pub fn write_breakdown<W: Write>(
    out: &mut W,
    rows: &[RegionProductCapacity],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, rows)?;
        writeln!(out)?;
        return Ok(());
    }
    for row in rows {
        writeln!(out, "{}\t{}\t{:.2}", row.region, row.product, row.capacity)?;
    }
    Ok(())
}

/// Write a map view as JSON.
pub fn write_map_view<W: Write>(out: &mut W, view: &MapView) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, view)?;
    writeln!(out)?;
    Ok(())
}

/// Normalize one coordinate and write the decimal value.
///
/// A malformed coordinate is reported on the output, not as a failure.
pub fn write_normalized<W: Write>(out: &mut W, dms: &str) -> anyhow::Result<()> {
    match tank_core::parse_dms(dms) {
        Ok(value) => writeln!(out, "{}", value)?,
        Err(e) => writeln!(out, "absent ({})", e)?,
    }
    Ok(())
}
