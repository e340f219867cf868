//! Parallel loading of the four extracts into a [`DatasetStore`].

use std::path::Path;
use std::time::Instant;

use patent_model::{AuthorityRow, CountryYearRow, Dataset, DatasetStore, TechnologyRow, TidyRow};

use crate::discovery::{DatasetFiles, discover_dataset_files};
use crate::error::Result;
use crate::rows::read_dataset;

/// Loads all four extracts from `dir`.
///
/// The files are read concurrently. The store is only built when every file
/// loads; otherwise the error of the first failing dataset (in
/// [`Dataset::ALL`] order) is returned.
pub fn load_dataset_store(dir: &Path) -> Result<DatasetStore> {
    let files = discover_dataset_files(dir)?;
    load_dataset_files(&files)
}

/// Loads the four extracts from explicit paths.
pub fn load_dataset_files(files: &DatasetFiles) -> Result<DatasetStore> {
    let started = Instant::now();

    let ((country_year, technology), (tidy, authority)) = rayon::join(
        || {
            rayon::join(
                || read_dataset::<CountryYearRow>(&files.country_year),
                || read_dataset::<TechnologyRow>(&files.technology),
            )
        },
        || {
            rayon::join(
                || read_dataset::<TidyRow>(&files.tidy),
                || read_dataset::<AuthorityRow>(&files.authority),
            )
        },
    );

    let store = DatasetStore {
        country_year: country_year?,
        technology: technology?,
        tidy: tidy?,
        authority: authority?,
    };

    tracing::info!(
        country_year = store.row_count(Dataset::CountryYear),
        technology = store.row_count(Dataset::Technology),
        tidy = store.row_count(Dataset::Tidy),
        authority = store.row_count(Dataset::Authority),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "loaded patent extracts"
    );

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    fn full_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "country_year_aggregation.csv",
            "COUNTRY_NAME,YEAR,OBS_VALUE_sum\nUS,2019,150\nDE,2019,80\n",
        );
        write(
            dir.path(),
            "technology_aggregation.csv",
            "COUNTRY_NAME,Selected OECD technology domains,OBS_VALUE_sum\nUS,AI,30\n",
        );
        write(dir.path(), "tidy_data.csv", "country,year\nUS,2019\n");
        write(
            dir.path(),
            "authority_aggregation.csv",
            "PATENT_AUTHORITIES,COUNTRY_NAME,OBS_VALUE_sum\nEPO,DE,40\n",
        );
        dir
    }

    #[test]
    fn loads_all_four_extracts() {
        let dir = full_dir();
        let store = load_dataset_store(dir.path()).unwrap();
        assert_eq!(store.country_year.len(), 2);
        assert_eq!(store.technology[0].technology, "AI");
        assert_eq!(store.tidy.len(), 1);
        assert_eq!(store.authority[0].authority, "EPO");
    }

    #[test]
    fn first_failing_dataset_wins() {
        let dir = full_dir();
        write(dir.path(), "technology_aggregation.csv", "COUNTRY_NAME\nUS\n");
        write(dir.path(), "authority_aggregation.csv", "COUNTRY_NAME\nUS\n");
        match load_dataset_store(dir.path()) {
            Err(IngestError::MissingColumn { dataset, .. }) => {
                assert_eq!(dataset, Dataset::Technology);
            }
            other => panic!("expected missing column error, got {other:?}"),
        }
    }
}
