//! Source-table ingestion for the Olympic statistics core.

pub mod csv_ingest;
pub mod error;
pub mod noc_regions;

pub use csv_ingest::{MAX_CSV_FILE_SIZE, read_athlete_events, read_csv_table};
pub use error::{IngestError, Result};
pub use noc_regions::read_noc_regions;
