//! Error types for dataset ingestion.

use std::path::PathBuf;

use patent_model::Dataset;
use thiserror::Error;

/// Errors that can occur while loading the patent extracts.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Data directory not found or not a directory.
    #[error("data directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file too large: {path} ({size} bytes, max {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Dataset Errors ===
    /// A key column of the dataset is missing from the header.
    #[error("{dataset} extract {path} is missing required column '{column}'")]
    MissingColumn {
        dataset: Dataset,
        column: String,
        path: PathBuf,
    },
}

impl IngestError {
    /// Maps an I/O error on `path`, keeping not-found distinct.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    pub(crate) fn from_csv(path: &std::path::Path, err: &csv::Error) -> Self {
        Self::CsvParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/tidy_data.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/tidy_data.csv");
    }

    #[test]
    fn test_missing_column_display() {
        let err = IngestError::MissingColumn {
            dataset: Dataset::Authority,
            column: "PATENT_AUTHORITIES".to_string(),
            path: PathBuf::from("authority_aggregation.csv"),
        };
        assert_eq!(
            err.to_string(),
            "authority extract authority_aggregation.csv is missing required column 'PATENT_AUTHORITIES'"
        );
    }

    #[test]
    fn test_not_found_io_maps_to_file_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::from_io(std::path::Path::new("x.csv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
