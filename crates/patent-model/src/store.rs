//! The read-only dataset store.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::rows::{AuthorityRow, CountryYearRow, Dataset, TechnologyRow, TidyRow};
use crate::selection::YearRange;

/// The four extracts, populated once and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStore {
    pub country_year: Vec<CountryYearRow>,
    pub technology: Vec<TechnologyRow>,
    pub tidy: Vec<TidyRow>,
    pub authority: Vec<AuthorityRow>,
}

impl DatasetStore {
    pub fn is_empty(&self) -> bool {
        self.country_year.is_empty()
            && self.technology.is_empty()
            && self.tidy.is_empty()
            && self.authority.is_empty()
    }

    pub fn row_count(&self, dataset: Dataset) -> usize {
        match dataset {
            Dataset::CountryYear => self.country_year.len(),
            Dataset::Technology => self.technology.len(),
            Dataset::Tidy => self.tidy.len(),
            Dataset::Authority => self.authority.len(),
        }
    }

    /// Distinct non-empty country-year countries in first-seen order.
    pub fn countries_first_seen(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.country_year
            .iter()
            .map(|row| row.country.as_str())
            .filter(|country| !country.is_empty() && seen.insert(*country))
            .collect()
    }

    /// Min/max parsed year across country-year rows, `None` without any.
    pub fn year_bounds(&self) -> Option<YearRange> {
        self.country_year
            .iter()
            .filter_map(CountryYearRow::year)
            .fold(None, |acc: Option<YearRange>, year| {
                Some(match acc {
                    Some(range) => range.extend(year),
                    None => YearRange::single(year),
                })
            })
    }
}
