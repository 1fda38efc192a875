//! Core types for the Paraíba fuel tankage dashboard.
//!
//! - `schema`: column names of the "Folha1" sheet export
//! - `coordinate`: degrees:minutes:seconds text to decimal degrees
//! - `facility`: the `FacilityRecord` row type and the CSV sheet reader
//! - `marker`: map marker sizing and view constants
//! - `error`: error types

pub mod coordinate;
pub mod error;
pub mod facility;
pub mod marker;
pub mod schema;

pub use coordinate::{normalize, normalize_pair, parse_dms};
pub use error::{CoordinateError, DatasetError};
pub use facility::FacilityRecord;
