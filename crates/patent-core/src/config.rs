//! Dashboard configuration.
//!
//! Loaded from a TOML file; every field is optional and falls back to the
//! defaults below.
//!
//! ```toml
//! data_dir = "data"
//! seed_country_count = 10
//! fallback_years = { min = 2017, max = 2021 }
//!
//! [limits]
//! country_totals = 15
//! technology_totals = 8
//! authority_totals = 10
//! trend_countries = 5
//! country_shares = 8
//! ```

use std::path::{Path, PathBuf};

use patent_model::YearRange;
use serde::{Deserialize, Serialize};

use crate::aggregate::AggregationLimits;
use crate::error::{CoreError, Result};

/// Year bounds used when the country-year extract has no parsable year.
pub const DEFAULT_FALLBACK_YEARS: (i32, i32) = (2017, 2021);

/// Settings for the dashboard facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the four CSV extracts.
    pub data_dir: PathBuf,

    /// How many countries are pre-selected on first load.
    pub seed_country_count: usize,

    pub fallback_years: YearRange,

    /// Truncation limits of the ranked series.
    pub limits: AggregationLimits,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed_country_count: 10,
            fallback_years: YearRange::new(DEFAULT_FALLBACK_YEARS.0, DEFAULT_FALLBACK_YEARS.1),
            limits: AggregationLimits::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        // Deserialization bypasses YearRange::new.
        config.fallback_years =
            YearRange::new(config.fallback_years.min(), config.fallback_years.max());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_file_gives_defaults() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.limits.country_totals, 15);
    }

    #[test]
    fn partial_override() {
        let config = DashboardConfig::from_toml(
            "data_dir = \"/srv/patents\"\nfallback_years = { min = 2021, max = 2015 }\n[limits]\ncountry_totals = 3\n",
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/patents"));
        assert_eq!(config.fallback_years, YearRange::new(2015, 2021));
        assert_eq!(config.limits.country_totals, 3);
        assert_eq!(config.limits.technology_totals, 8);
        assert_eq!(config.seed_country_count, 10);
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "seed_country_count = 4").unwrap();
        let config = DashboardConfig::load_from(file.path()).unwrap();
        assert_eq!(config.seed_country_count, 4);
    }

    #[test]
    fn invalid_toml_is_reported_with_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "seed_country_count = \"many\"").unwrap();
        let err = DashboardConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = DashboardConfig::load_from(Path::new("/nonexistent/patent.toml")).unwrap_err();
        assert!(matches!(err, CoreError::ConfigRead { .. }));
    }
}
