//! Mapping CSV records onto the typed dataset rows.

use std::path::Path;

use patent_model::{AuthorityRow, CountryYearRow, Dataset, TechnologyRow, TidyRow};

use crate::csv::{CsvRecord, CsvTable, read_csv_table};
use crate::error::{IngestError, Result};

/// A dataset row that can be built from one CSV record.
pub trait FromRecord: Sized {
    const DATASET: Dataset;

    fn from_record(record: &CsvRecord<'_>) -> Self;
}

impl FromRecord for CountryYearRow {
    const DATASET: Dataset = Dataset::CountryYear;

    fn from_record(record: &CsvRecord<'_>) -> Self {
        Self {
            country: record.get_owned(Self::COUNTRY),
            year: record.get_owned(Self::YEAR),
            obs_value_sum: record.get_owned(Self::OBS_VALUE_SUM),
            obs_value_mean: record.get_owned(Self::OBS_VALUE_MEAN),
            obs_value_count: record.get_owned(Self::OBS_VALUE_COUNT),
            patent_authorities_nunique: record.get_owned(Self::PATENT_AUTHORITIES_NUNIQUE),
            measure_nunique: record.get_owned(Self::MEASURE_NUNIQUE),
        }
    }
}

impl FromRecord for TechnologyRow {
    const DATASET: Dataset = Dataset::Technology;

    fn from_record(record: &CsvRecord<'_>) -> Self {
        Self {
            wipo: record.get_owned(Self::WIPO),
            oecd_technology_patent: record.get_owned(Self::OECD_TECHNOLOGY_PATENT),
            technology: record.get_owned(Self::TECHNOLOGY),
            country: record.get_owned(Self::COUNTRY),
            obs_value_sum: record.get_owned(Self::OBS_VALUE_SUM),
            obs_value_mean: record.get_owned(Self::OBS_VALUE_MEAN),
            year_min: record.get_owned(Self::YEAR_MIN),
            year_max: record.get_owned(Self::YEAR_MAX),
            year_count: record.get_owned(Self::YEAR_COUNT),
        }
    }
}

impl FromRecord for TidyRow {
    const DATASET: Dataset = Dataset::Tidy;

    fn from_record(record: &CsvRecord<'_>) -> Self {
        Self {
            country: record.get_owned(Self::COUNTRY),
            country_code: record.get_owned(Self::COUNTRY_CODE),
            year: record.get_owned(Self::YEAR),
            patent_authority: record.get_owned(Self::PATENT_AUTHORITY),
            measure_type: record.get_owned(Self::MEASURE_TYPE),
            unit: record.get_owned(Self::UNIT),
            patent_count: record.get_owned(Self::PATENT_COUNT),
            agent_role: record.get_owned(Self::AGENT_ROLE),
            date_type: record.get_owned(Self::DATE_TYPE),
        }
    }
}

impl FromRecord for AuthorityRow {
    const DATASET: Dataset = Dataset::Authority;

    fn from_record(record: &CsvRecord<'_>) -> Self {
        Self {
            authority: record.get_owned(Self::AUTHORITY),
            country: record.get_owned(Self::COUNTRY),
            obs_value_sum: record.get_owned(Self::OBS_VALUE_SUM),
            obs_value_mean: record.get_owned(Self::OBS_VALUE_MEAN),
            obs_value_std: record.get_owned(Self::OBS_VALUE_STD),
            year_min: record.get_owned(Self::YEAR_MIN),
            year_max: record.get_owned(Self::YEAR_MAX),
            year_count: record.get_owned(Self::YEAR_COUNT),
        }
    }
}

/// Converts a table into typed rows after checking the header.
///
/// A missing key column is an error; any other missing column is logged and
/// reads as empty.
pub fn rows_from_table<R: FromRecord>(table: &CsvTable, path: &Path) -> Result<Vec<R>> {
    let dataset = R::DATASET;
    for column in dataset.key_columns() {
        if !table.headers.contains(column) {
            return Err(IngestError::MissingColumn {
                dataset,
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    let missing: Vec<&str> = dataset
        .columns()
        .iter()
        .copied()
        .filter(|column| !table.headers.contains(column))
        .collect();
    if !missing.is_empty() {
        tracing::warn!(
            dataset = %dataset,
            path = %path.display(),
            missing = ?missing,
            "extract is missing columns; their values read as empty"
        );
    }
    Ok(table.records().map(|record| R::from_record(&record)).collect())
}

/// Reads one extract from disk into typed rows.
pub fn read_dataset<R: FromRecord>(path: &Path) -> Result<Vec<R>> {
    let table = read_csv_table(path)?;
    rows_from_table(&table, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::CsvHeaders;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: CsvHeaders::new(headers.iter().copied()),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn maps_country_year_columns() {
        let table = table(
            &["COUNTRY_NAME", "YEAR", "OBS_VALUE_sum", "MEASURE_nunique"],
            &[&["Japan", "2020", "1234.5", "3"]],
        );
        let rows: Vec<CountryYearRow> =
            rows_from_table(&table, Path::new("country_year_aggregation.csv")).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country, "Japan");
        assert_eq!(rows[0].year(), Some(2020));
        assert_eq!(rows[0].obs_value_sum(), 1234.5);
        assert_eq!(rows[0].measure_nunique, "3");
        assert_eq!(rows[0].obs_value_mean, "");
    }

    #[test]
    fn maps_technology_label_column() {
        let table = table(
            &["COUNTRY_NAME", "Selected OECD technology domains", "OBS_VALUE_sum"],
            &[&["France", "Biotechnology", "7"]],
        );
        let rows: Vec<TechnologyRow> =
            rows_from_table(&table, Path::new("technology_aggregation.csv")).unwrap();
        assert_eq!(rows[0].technology, "Biotechnology");
        assert_eq!(rows[0].obs_value_sum(), 7.0);
    }

    #[test]
    fn missing_key_column_is_an_error() {
        let table = table(&["COUNTRY_NAME", "OBS_VALUE_sum"], &[&["Japan", "1"]]);
        let result: Result<Vec<AuthorityRow>> =
            rows_from_table(&table, Path::new("authority_aggregation.csv"));
        match result {
            Err(IngestError::MissingColumn {
                dataset, column, ..
            }) => {
                assert_eq!(dataset, Dataset::Authority);
                assert_eq!(column, "PATENT_AUTHORITIES");
            }
            other => panic!("expected missing column error, got {other:?}"),
        }
    }

    #[test]
    fn short_rows_read_missing_cells_as_empty() {
        let table = table(&["country", "year", "patent_count"], &[&["Italy"]]);
        let rows: Vec<TidyRow> = rows_from_table(&table, Path::new("tidy_data.csv")).unwrap();
        assert_eq!(rows[0].country, "Italy");
        assert_eq!(rows[0].year(), None);
        assert_eq!(rows[0].patent_count(), 0.0);
    }
}
