//! Command implementations for the tankage CLI.
//!
//! Every subcommand loads the sheet export into an in-memory database and
//! runs the same queries the dashboard uses, printing the result.

use anyhow::Context;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use tank_core::FacilityRecord;
use tank_db::Database;

pub mod report;

/// Where to read the "Folha1" sheet export from.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the CSV export of the sheet
    #[arg(short = 'i', long, default_value = "fixtures/base1.csv")]
    pub input: PathBuf,

    /// Field delimiter of the CSV export
    #[arg(short = 'd', long, default_value_t = ',')]
    pub delimiter: char,
}

#[derive(Subcommand)]
pub enum Command {
    /// Distinct facilities, total capacity and capacity per product
    Summary {
        #[command(flatten)]
        input: InputArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List municipalities, sorted
    Regions {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Figures for one municipality
    Region {
        /// Municipality name, exactly as in the sheet
        name: String,

        #[command(flatten)]
        input: InputArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Capacity per municipality and product
    Breakdown {
        #[command(flatten)]
        input: InputArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Map points as JSON, highlighted for a municipality if given
    Points {
        #[command(flatten)]
        input: InputArgs,

        /// Municipality to highlight and center on
        #[arg(short = 'r', long)]
        region: Option<String>,
    },

    /// Convert one degrees:minutes:seconds coordinate to decimal degrees
    Normalize {
        /// Coordinate text, e.g. "-7:07:12,5"
        #[arg(allow_hyphen_values = true)]
        dms: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    match command {
        Command::Summary { input, json } => {
            let db = load_database(&input)?;
            report::write_summary(&mut out, &db.query_summary(None)?, json)
        }
        Command::Regions { input } => {
            let db = load_database(&input)?;
            report::write_regions(&mut out, &db.query_regions()?)
        }
        Command::Region { name, input, json } => {
            let db = load_database(&input)?;
            if !db.query_regions()?.contains(&name) {
                log::warn!("No rows for municipality {:?}", name);
            }
            report::write_summary(&mut out, &db.query_summary(Some(name.as_str()))?, json)
        }
        Command::Breakdown { input, json } => {
            let db = load_database(&input)?;
            report::write_breakdown(&mut out, &db.query_capacity_by_region_and_product()?, json)
        }
        Command::Points { input, region } => {
            let db = load_database(&input)?;
            let view = db.query_highlight_map(region.as_deref())?;
            report::write_map_view(&mut out, &view)
        }
        Command::Normalize { dms } => report::write_normalized(&mut out, &dms),
    }
}

/// Read the sheet export into a fresh in-memory database.
///
/// A missing file or a schema mismatch is an error; nothing is printed.
pub fn load_database(input: &InputArgs) -> anyhow::Result<Database> {
    let delimiter = delimiter_byte(input.delimiter)?;
    let records = read_records(&input.input, delimiter)?;
    Database::from_records(&records)
}

fn read_records(path: &Path, delimiter: u8) -> anyhow::Result<Vec<FacilityRecord>> {
    FacilityRecord::read_facility_file(path, delimiter)
        .with_context(|| format!("Failed to load {}", path.display()))
}

fn delimiter_byte(delimiter: char) -> anyhow::Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        anyhow::bail!("Delimiter must be a single ASCII character, got {:?}", delimiter)
    }
}
