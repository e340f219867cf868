//! Patent extract ingestion.
//!
//! Reads the four CSV extracts of the dashboard into a
//! [`patent_model::DatasetStore`].
//!
//! # Features
//!
//! - **CSV Loading**: UTF-8 files with one header row, tolerant of ragged rows
//! - **Discovery**: Locate the four extracts in a data directory
//! - **Row Mapping**: Map header names onto the typed rows, checking key columns
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use patent_ingest::load_dataset_store;
//!
//! let store = load_dataset_store(Path::new("data"))?;
//! println!("{} country-year rows", store.country_year.len());
//! ```

mod csv;
mod discovery;
mod error;
mod rows;
mod store;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use crate::csv::{
    CsvHeaders, CsvRecord, CsvTable, MAX_CSV_FILE_SIZE, check_file_size,
    check_file_size_with_limit, normalize_header, read_csv_table, validate_encoding,
};

// === File Discovery ===
pub use discovery::{DatasetFiles, discover_dataset_files, list_csv_files};

// === Dataset Loading ===
pub use rows::{FromRecord, read_dataset, rows_from_table};
pub use store::{load_dataset_files, load_dataset_store};
