//! Chart-ready series produced by the aggregation pipeline.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Summed patents for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTotal {
    pub country: String,
    pub patents: f64,
}

/// Summed patents for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTotal {
    pub year: i32,
    pub patents: f64,
}

/// Summed patents for one technology domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyTotal {
    pub name: String,
    pub value: f64,
}

/// Summed patents for one patent authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorityTotal {
    pub authority: String,
    pub patents: f64,
}

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub key: String,
    pub value: f64,
    /// Percentage of the series total, `0.0` when the total is zero.
    pub percent: f64,
}

/// One year of the multi-country trend.
///
/// `countries` always holds one entry per trend country, in trend-country
/// order, with `0.0` for years in which that country has no rows. Serializes
/// flat as `{"year": 2018, "US": 100.0, "DE": 80.0}`; a country literally
/// named `year` is left out of the JSON since its key would collide.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub countries: Vec<(String, f64)>,
}

impl TrendPoint {
    pub fn value_for(&self, country: &str) -> Option<f64> {
        self.countries
            .iter()
            .find(|(name, _)| name == country)
            .map(|(_, value)| *value)
    }
}

const TREND_YEAR_KEY: &str = "year";

impl Serialize for TrendPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let countries: Vec<_> = self
            .countries
            .iter()
            .filter(|(country, _)| country != TREND_YEAR_KEY)
            .collect();
        let mut map = serializer.serialize_map(Some(countries.len() + 1))?;
        map.serialize_entry(TREND_YEAR_KEY, &self.year)?;
        for (country, value) in countries {
            map.serialize_entry(country, value)?;
        }
        map.end()
    }
}

/// Growth figure shown until a real year-over-year computation replaces it.
pub const PLACEHOLDER_AVG_GROWTH: f64 = 5.2;

/// Headline numbers over the filtered country-year rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_patents: i64,
    pub country_count: usize,
    /// Empty when no rows survive the filters.
    pub top_country: String,
    /// Always [`PLACEHOLDER_AVG_GROWTH`]; not derived from data.
    pub avg_growth: f64,
    pub avg_growth_is_placeholder: bool,
    /// Mean year-over-year change of the yearly totals, in percent.
    pub measured_growth: Option<f64>,
    pub technology_filter: Vec<String>,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            total_patents: 0,
            country_count: 0,
            top_country: String::new(),
            avg_growth: PLACEHOLDER_AVG_GROWTH,
            avg_growth_is_placeholder: true,
            measured_growth: None,
            technology_filter: Vec::new(),
        }
    }
}
