//! Row types for the four patent extracts.
//!
//! Cells stay as text exactly as read; accessors parse on demand using the
//! lenient rules in [`crate::values`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::values::{parse_observation, parse_year};

/// The four datasets held by a [`crate::DatasetStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    CountryYear,
    Technology,
    Tidy,
    Authority,
}

impl Dataset {
    /// All datasets in load order.
    pub const ALL: [Dataset; 4] = [
        Dataset::CountryYear,
        Dataset::Technology,
        Dataset::Tidy,
        Dataset::Authority,
    ];

    /// File name of the extract inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::CountryYear => "country_year_aggregation.csv",
            Self::Technology => "technology_aggregation.csv",
            Self::Tidy => "tidy_data.csv",
            Self::Authority => "authority_aggregation.csv",
        }
    }

    /// Columns that must be present in the header for the dataset to be usable.
    pub fn key_columns(self) -> &'static [&'static str] {
        match self {
            Self::CountryYear => &[CountryYearRow::COUNTRY, CountryYearRow::YEAR],
            Self::Technology => &[TechnologyRow::COUNTRY, TechnologyRow::TECHNOLOGY],
            Self::Tidy => &[TidyRow::COUNTRY, TidyRow::YEAR],
            Self::Authority => &[AuthorityRow::COUNTRY, AuthorityRow::AUTHORITY],
        }
    }

    /// All columns the row type reads.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::CountryYear => CountryYearRow::COLUMNS,
            Self::Technology => TechnologyRow::COLUMNS,
            Self::Tidy => TidyRow::COLUMNS,
            Self::Authority => AuthorityRow::COLUMNS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CountryYear => "country-year",
            Self::Technology => "technology",
            Self::Tidy => "tidy",
            Self::Authority => "authority",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One (country, year) aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryYearRow {
    #[serde(rename = "COUNTRY_NAME")]
    pub country: String,
    #[serde(rename = "YEAR")]
    pub year: String,
    #[serde(rename = "OBS_VALUE_sum")]
    pub obs_value_sum: String,
    #[serde(rename = "OBS_VALUE_mean")]
    pub obs_value_mean: String,
    #[serde(rename = "OBS_VALUE_count")]
    pub obs_value_count: String,
    #[serde(rename = "PATENT_AUTHORITIES_nunique")]
    pub patent_authorities_nunique: String,
    #[serde(rename = "MEASURE_nunique")]
    pub measure_nunique: String,
}

impl CountryYearRow {
    pub const COUNTRY: &'static str = "COUNTRY_NAME";
    pub const YEAR: &'static str = "YEAR";
    pub const OBS_VALUE_SUM: &'static str = "OBS_VALUE_sum";
    pub const OBS_VALUE_MEAN: &'static str = "OBS_VALUE_mean";
    pub const OBS_VALUE_COUNT: &'static str = "OBS_VALUE_count";
    pub const PATENT_AUTHORITIES_NUNIQUE: &'static str = "PATENT_AUTHORITIES_nunique";
    pub const MEASURE_NUNIQUE: &'static str = "MEASURE_nunique";

    pub const COLUMNS: &'static [&'static str] = &[
        Self::COUNTRY,
        Self::YEAR,
        Self::OBS_VALUE_SUM,
        Self::OBS_VALUE_MEAN,
        Self::OBS_VALUE_COUNT,
        Self::PATENT_AUTHORITIES_NUNIQUE,
        Self::MEASURE_NUNIQUE,
    ];

    /// Convenience constructor for the three cells the pipeline reads.
    pub fn new(country: impl Into<String>, year: impl Into<String>, sum: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            year: year.into(),
            obs_value_sum: sum.into(),
            ..Self::default()
        }
    }

    pub fn year(&self) -> Option<i32> {
        parse_year(&self.year)
    }

    pub fn obs_value_sum(&self) -> f64 {
        parse_observation(&self.obs_value_sum)
    }

    pub fn obs_value_mean(&self) -> f64 {
        parse_observation(&self.obs_value_mean)
    }
}

/// One (country, technology domain) aggregate over a span of years.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyRow {
    #[serde(rename = "WIPO")]
    pub wipo: String,
    #[serde(rename = "OECD_TECHNOLOGY_PATENT")]
    pub oecd_technology_patent: String,
    #[serde(rename = "Selected OECD technology domains")]
    pub technology: String,
    #[serde(rename = "COUNTRY_NAME")]
    pub country: String,
    #[serde(rename = "OBS_VALUE_sum")]
    pub obs_value_sum: String,
    #[serde(rename = "OBS_VALUE_mean")]
    pub obs_value_mean: String,
    #[serde(rename = "YEAR_min")]
    pub year_min: String,
    #[serde(rename = "YEAR_max")]
    pub year_max: String,
    #[serde(rename = "YEAR_count")]
    pub year_count: String,
}

impl TechnologyRow {
    pub const WIPO: &'static str = "WIPO";
    pub const OECD_TECHNOLOGY_PATENT: &'static str = "OECD_TECHNOLOGY_PATENT";
    pub const TECHNOLOGY: &'static str = "Selected OECD technology domains";
    pub const COUNTRY: &'static str = "COUNTRY_NAME";
    pub const OBS_VALUE_SUM: &'static str = "OBS_VALUE_sum";
    pub const OBS_VALUE_MEAN: &'static str = "OBS_VALUE_mean";
    pub const YEAR_MIN: &'static str = "YEAR_min";
    pub const YEAR_MAX: &'static str = "YEAR_max";
    pub const YEAR_COUNT: &'static str = "YEAR_count";

    pub const COLUMNS: &'static [&'static str] = &[
        Self::WIPO,
        Self::OECD_TECHNOLOGY_PATENT,
        Self::TECHNOLOGY,
        Self::COUNTRY,
        Self::OBS_VALUE_SUM,
        Self::OBS_VALUE_MEAN,
        Self::YEAR_MIN,
        Self::YEAR_MAX,
        Self::YEAR_COUNT,
    ];

    pub fn new(
        country: impl Into<String>,
        technology: impl Into<String>,
        sum: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            technology: technology.into(),
            obs_value_sum: sum.into(),
            ..Self::default()
        }
    }

    pub fn obs_value_sum(&self) -> f64 {
        parse_observation(&self.obs_value_sum)
    }

    pub fn year_min(&self) -> Option<i32> {
        parse_year(&self.year_min)
    }

    pub fn year_max(&self) -> Option<i32> {
        parse_year(&self.year_max)
    }
}

/// Fine-grained fact row: (country, year, authority, measure type).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TidyRow {
    pub country: String,
    pub country_code: String,
    pub year: String,
    pub patent_authority: String,
    pub measure_type: String,
    pub unit: String,
    pub patent_count: String,
    pub agent_role: String,
    pub date_type: String,
}

impl TidyRow {
    pub const COUNTRY: &'static str = "country";
    pub const COUNTRY_CODE: &'static str = "country_code";
    pub const YEAR: &'static str = "year";
    pub const PATENT_AUTHORITY: &'static str = "patent_authority";
    pub const MEASURE_TYPE: &'static str = "measure_type";
    pub const UNIT: &'static str = "unit";
    pub const PATENT_COUNT: &'static str = "patent_count";
    pub const AGENT_ROLE: &'static str = "agent_role";
    pub const DATE_TYPE: &'static str = "date_type";

    pub const COLUMNS: &'static [&'static str] = &[
        Self::COUNTRY,
        Self::COUNTRY_CODE,
        Self::YEAR,
        Self::PATENT_AUTHORITY,
        Self::MEASURE_TYPE,
        Self::UNIT,
        Self::PATENT_COUNT,
        Self::AGENT_ROLE,
        Self::DATE_TYPE,
    ];

    pub fn new(country: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            year: year.into(),
            ..Self::default()
        }
    }

    pub fn year(&self) -> Option<i32> {
        parse_year(&self.year)
    }

    pub fn patent_count(&self) -> f64 {
        parse_observation(&self.patent_count)
    }
}

/// One (country, patent authority) aggregate over a span of years.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityRow {
    #[serde(rename = "PATENT_AUTHORITIES")]
    pub authority: String,
    #[serde(rename = "COUNTRY_NAME")]
    pub country: String,
    #[serde(rename = "OBS_VALUE_sum")]
    pub obs_value_sum: String,
    #[serde(rename = "OBS_VALUE_mean")]
    pub obs_value_mean: String,
    #[serde(rename = "OBS_VALUE_std")]
    pub obs_value_std: String,
    #[serde(rename = "YEAR_min")]
    pub year_min: String,
    #[serde(rename = "YEAR_max")]
    pub year_max: String,
    #[serde(rename = "YEAR_count")]
    pub year_count: String,
}

impl AuthorityRow {
    pub const AUTHORITY: &'static str = "PATENT_AUTHORITIES";
    pub const COUNTRY: &'static str = "COUNTRY_NAME";
    pub const OBS_VALUE_SUM: &'static str = "OBS_VALUE_sum";
    pub const OBS_VALUE_MEAN: &'static str = "OBS_VALUE_mean";
    pub const OBS_VALUE_STD: &'static str = "OBS_VALUE_std";
    pub const YEAR_MIN: &'static str = "YEAR_min";
    pub const YEAR_MAX: &'static str = "YEAR_max";
    pub const YEAR_COUNT: &'static str = "YEAR_count";

    pub const COLUMNS: &'static [&'static str] = &[
        Self::AUTHORITY,
        Self::COUNTRY,
        Self::OBS_VALUE_SUM,
        Self::OBS_VALUE_MEAN,
        Self::OBS_VALUE_STD,
        Self::YEAR_MIN,
        Self::YEAR_MAX,
        Self::YEAR_COUNT,
    ];

    pub fn new(
        country: impl Into<String>,
        authority: impl Into<String>,
        sum: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            authority: authority.into(),
            obs_value_sum: sum.into(),
            ..Self::default()
        }
    }

    pub fn obs_value_sum(&self) -> f64 {
        parse_observation(&self.obs_value_sum)
    }
}
