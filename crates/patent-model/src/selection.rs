//! Filter selection value types.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Inclusive year range with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// Builds a range, swapping the ends when given in reverse order.
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn single(year: i32) -> Self {
        Self {
            min: year,
            max: year,
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    /// Clamps both ends into `bounds`.
    #[must_use]
    pub fn clamp_to(self, bounds: YearRange) -> Self {
        Self::new(
            self.min.clamp(bounds.min, bounds.max),
            self.max.clamp(bounds.min, bounds.max),
        )
    }

    /// Grows the range so it also covers `year`.
    #[must_use]
    pub fn extend(self, year: i32) -> Self {
        Self {
            min: self.min.min(year),
            max: self.max.max(year),
        }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for YearRange {
    type Err = ModelError;

    /// Accepts `"2019"` or `"2017-2021"` (also `..` as separator).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ModelError::InvalidYearRange(s.to_string());
        let parse = |part: &str| part.trim().parse::<i32>().map_err(|_| invalid());
        if let Some((lo, hi)) = trimmed.split_once("..") {
            return Ok(Self::new(parse(lo)?, parse(hi)?));
        }
        if let Some((lo, hi)) = trimmed.split_once('-') {
            return Ok(Self::new(parse(lo)?, parse(hi)?));
        }
        Ok(Self::single(parse(trimmed)?))
    }
}

/// The user's current filter selection.
///
/// An empty `technologies` set means "no technology filter", not "exclude
/// everything".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub countries: BTreeSet<String>,
    pub year_range: YearRange,
    pub technologies: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new(year_range: YearRange) -> Self {
        Self {
            countries: BTreeSet::new(),
            year_range,
            technologies: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_year_range(mut self, year_range: YearRange) -> Self {
        self.year_range = year_range;
        self
    }

    pub fn has_technology_filter(&self) -> bool {
        !self.technologies.is_empty()
    }

    /// Badge text describing the technology filter, `None` when inactive.
    pub fn technology_filter_label(&self) -> Option<String> {
        let mut iter = self.technologies.iter();
        match (iter.next(), self.technologies.len()) {
            (None, _) => None,
            (Some(only), 1) => Some(only.clone()),
            (Some(_), count) => Some(format!("{count} technologies")),
        }
    }
}
