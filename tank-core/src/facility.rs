use crate::coordinate::normalize_pair;
use crate::error::{DatasetError, Result};
use crate::schema;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

/// One tank row of the sheet export.
///
/// A facility (identified by its CNPJ tax id) may appear on several rows,
/// one per tank. Derived coordinates are both present or both absent.
#[derive(Debug, PartialEq, Clone)]
pub struct FacilityRecord {
    /// CNPJ of the facility
    pub tax_id: String,
    /// Razão social
    pub legal_name: String,
    /// Municipality name
    pub region: String,
    pub product: String,
    pub tank_name: String,
    /// Storage capacity in cubic meters (m³)
    pub capacity: f64,
    pub raw_latitude: String,
    pub raw_longitude: String,
    /// Decimal degrees, `None` when either raw coordinate is malformed
    pub latitude: Option<f64>,
    /// Decimal degrees, `None` when either raw coordinate is malformed
    pub longitude: Option<f64>,
}

impl FacilityRecord {
    /// Build a record without coordinates.
    pub fn new(
        tax_id: &str,
        legal_name: &str,
        region: &str,
        product: &str,
        tank_name: &str,
        capacity: f64,
    ) -> Self {
        Self {
            tax_id: tax_id.to_string(),
            legal_name: legal_name.to_string(),
            region: region.to_string(),
            product: product.to_string(),
            tank_name: tank_name.to_string(),
            capacity,
            raw_latitude: String::new(),
            raw_longitude: String::new(),
            latitude: None,
            longitude: None,
        }
    }

    /// Attach raw DMS coordinates and derive the decimal pair from them.
    pub fn with_coordinates(mut self, raw_latitude: &str, raw_longitude: &str) -> Self {
        let position = normalize_pair(non_empty(raw_latitude), non_empty(raw_longitude));
        self.raw_latitude = raw_latitude.to_string();
        self.raw_longitude = raw_longitude.to_string();
        self.latitude = position.map(|(lat, _)| lat);
        self.longitude = position.map(|(_, lon)| lon);
        self
    }

    /// Decimal (latitude, longitude) when the row has a valid position.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Read every row of a sheet export file.
    ///
    /// A missing file or a missing column is fatal; malformed cells are not.
    pub fn read_facility_file(path: &Path, delimiter: u8) -> Result<Vec<FacilityRecord>> {
        let csv_object = std::fs::read_to_string(path)?;
        let records = Self::parse_facility_csv(&csv_object, delimiter)?;
        log::info!(
            "facility: read {} rows from {}",
            records.len(),
            path.display()
        );
        Ok(records)
    }

    /// Parse a CSV export of the sheet into records, in file order.
    ///
    /// Expected headers (any order, extra columns ignored):
    /// `MUNICÍPIO,CNPJ,Razão Social,Produto,Nome Tanque,Tancagem (m³),LATITUDE,LONGITUDE`
    ///
    /// # Example CSV
    /// ```text
    /// MUNICÍPIO,CNPJ,Razão Social,Produto,Nome Tanque,Tancagem (m³),LATITUDE,LONGITUDE
    /// João Pessoa,01.234.567/0001-89,Posto Exemplo Ltda,Gasolina C,T1,30,-7:7:12,-34:51:36
    /// ```
    pub fn parse_facility_csv(csv_object: &str, delimiter: u8) -> Result<Vec<FacilityRecord>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());

        let columns = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut records = Vec::new();
        let mut unplaced = 0u32;
        for row in rdr.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            let record = columns.record(&row, line);
            if record.position().is_none() {
                unplaced += 1;
            }
            records.push(record);
        }
        log::info!(
            "facility: parsed {} rows, {} without a valid position",
            records.len(),
            unplaced
        );
        Ok(records)
    }
}

fn non_empty(cell: &str) -> Option<&str> {
    if cell.trim().is_empty() {
        None
    } else {
        Some(cell)
    }
}

/// Parse a capacity cell. Empty is zero.
///
/// A cell holding a comma is read as pt-BR: `.` groups thousands and `,` is
/// the decimal mark, so `1.234,5` is 1234.5. Without a comma the cell is
/// parsed as-is.
fn parse_capacity(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Some(0.0);
    }
    let normalized = if cell.contains(',') {
        cell.replace('.', "").replace(',', ".")
    } else {
        cell.to_string()
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Positions of the required columns within a header row.
struct ColumnIndex {
    region: usize,
    tax_id: usize,
    legal_name: usize,
    product: usize,
    tank_name: usize,
    capacity: usize,
    latitude: usize,
    longitude: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let names: Vec<&str> = headers.iter().map(schema::internal_name).collect();
        let find = |column: &str| -> Result<usize> {
            names.iter().position(|n| *n == column).ok_or_else(|| {
                let reported = if column == schema::MUNICIPIO {
                    schema::MUNICIPIO_SOURCE
                } else {
                    column
                };
                DatasetError::MissingColumn(reported.to_string())
            })
        };
        Ok(Self {
            region: find(schema::MUNICIPIO)?,
            tax_id: find(schema::CNPJ)?,
            legal_name: find(schema::RAZAO_SOCIAL)?,
            product: find(schema::PRODUTO)?,
            tank_name: find(schema::NOME_TANQUE)?,
            capacity: find(schema::TANCAGEM)?,
            latitude: find(schema::LATITUDE)?,
            longitude: find(schema::LONGITUDE)?,
        })
    }

    fn record(&self, row: &StringRecord, line: u64) -> FacilityRecord {
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let raw_capacity = cell(self.capacity);
        let capacity = parse_capacity(raw_capacity).unwrap_or_else(|| {
            log::warn!(
                "facility: line {}: non-numeric capacity {:?}, counted as 0",
                line,
                raw_capacity
            );
            0.0
        });

        FacilityRecord::new(
            cell(self.tax_id).trim(),
            cell(self.legal_name).trim(),
            cell(self.region).trim(),
            cell(self.product).trim(),
            cell(self.tank_name).trim(),
            capacity,
        )
        .with_coordinates(cell(self.latitude), cell(self.longitude))
    }
}
