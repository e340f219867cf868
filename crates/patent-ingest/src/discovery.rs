//! Locating the four extracts inside a data directory.

use std::path::{Path, PathBuf};

use patent_model::Dataset;

use crate::error::{IngestError, Result};

/// Paths of the four extracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFiles {
    pub country_year: PathBuf,
    pub technology: PathBuf,
    pub tidy: PathBuf,
    pub authority: PathBuf,
}

impl DatasetFiles {
    /// Standard file names under `dir`, without touching the file system.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            country_year: dir.join(Dataset::CountryYear.file_name()),
            technology: dir.join(Dataset::Technology.file_name()),
            tidy: dir.join(Dataset::Tidy.file_name()),
            authority: dir.join(Dataset::Authority.file_name()),
        }
    }

    pub fn path(&self, dataset: Dataset) -> &Path {
        match dataset {
            Dataset::CountryYear => &self.country_year,
            Dataset::Technology => &self.technology,
            Dataset::Tidy => &self.tidy,
            Dataset::Authority => &self.authority,
        }
    }
}

/// Finds the four extracts in `dir`.
///
/// File names are matched case-insensitively so `Tidy_Data.CSV` is accepted.
/// Every extract must be present.
pub fn discover_dataset_files(dir: &Path) -> Result<DatasetFiles> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = list_csv_files(dir)?;
    let find = |dataset: Dataset| -> Result<PathBuf> {
        let expected = dataset.file_name();
        entries
            .iter()
            .find(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.eq_ignore_ascii_case(expected))
            })
            .cloned()
            .ok_or_else(|| IngestError::FileNotFound {
                path: dir.join(expected),
            })
    };

    Ok(DatasetFiles {
        country_year: find(Dataset::CountryYear)?,
        technology: find(Dataset::Technology)?,
        tidy: find(Dataset::Tidy)?,
        authority: find(Dataset::Authority)?,
    })
}

/// Lists all CSV files in a directory, sorted by file name.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::FileRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::FileRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            std::fs::write(dir.path().join(name), "header\n").unwrap();
        }
        dir
    }

    #[test]
    fn test_discover_all_files() {
        let dir = create_test_dir(&[
            "country_year_aggregation.csv",
            "technology_aggregation.csv",
            "Tidy_Data.CSV",
            "authority_aggregation.csv",
            "notes.txt",
        ]);
        let files = discover_dataset_files(dir.path()).unwrap();
        assert!(files.tidy.ends_with("Tidy_Data.CSV"));
        assert_eq!(
            files.path(Dataset::Authority),
            dir.path().join("authority_aggregation.csv")
        );
    }

    #[test]
    fn test_discover_missing_file() {
        let dir = create_test_dir(&[
            "country_year_aggregation.csv",
            "technology_aggregation.csv",
            "tidy_data.csv",
        ]);
        let result = discover_dataset_files(dir.path());
        match result {
            Err(IngestError::FileNotFound { path }) => {
                assert!(path.ends_with("authority_aggregation.csv"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_list_csv_files_sorted() {
        let dir = create_test_dir(&["b.csv", "a.csv", "c.txt"]);
        let files = list_csv_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.csv"));
    }

    #[test]
    fn test_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("country_year_aggregation.csv");
        std::fs::write(&file_path, "data").unwrap();
        assert!(matches!(
            discover_dataset_files(&file_path),
            Err(IngestError::DirectoryNotFound { .. })
        ));
    }
}
