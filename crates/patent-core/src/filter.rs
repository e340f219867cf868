//! Per-dataset row filters.
//!
//! The country-year, tidy and authority extracts are filtered by the
//! effective country set. The technology extract is filtered by the raw
//! selected countries, so a technology chart keeps showing every selected
//! country's domains even when the technology filter narrows the others.

use std::collections::BTreeSet;

use patent_model::{
    AuthorityRow, CountryYearRow, DatasetStore, FilterSelection, TechnologyRow, TidyRow, YearRange,
};

use crate::resolve::resolve_effective_countries;

/// Borrowed views of the rows that pass the current selection.
#[derive(Debug, Clone, Default)]
pub struct FilteredRows<'a> {
    pub effective_countries: BTreeSet<String>,
    pub country_year: Vec<&'a CountryYearRow>,
    pub technology: Vec<&'a TechnologyRow>,
    pub tidy: Vec<&'a TidyRow>,
    pub authority: Vec<&'a AuthorityRow>,
}

fn keeps_country(countries: &BTreeSet<String>, country: &str) -> bool {
    !country.is_empty() && countries.contains(country)
}

fn in_range(year: Option<i32>, range: YearRange) -> bool {
    year.is_some_and(|year| range.contains(year))
}

pub fn filter_country_year<'a>(
    rows: &'a [CountryYearRow],
    effective: &BTreeSet<String>,
    range: YearRange,
) -> Vec<&'a CountryYearRow> {
    rows.iter()
        .filter(|row| keeps_country(effective, &row.country) && in_range(row.year(), range))
        .collect()
}

pub fn filter_technology<'a>(
    rows: &'a [TechnologyRow],
    selection: &FilterSelection,
) -> Vec<&'a TechnologyRow> {
    rows.iter()
        .filter(|row| keeps_country(&selection.countries, &row.country))
        .filter(|row| {
            !selection.has_technology_filter() || selection.technologies.contains(&row.technology)
        })
        .collect()
}

pub fn filter_tidy<'a>(
    rows: &'a [TidyRow],
    effective: &BTreeSet<String>,
    range: YearRange,
) -> Vec<&'a TidyRow> {
    rows.iter()
        .filter(|row| keeps_country(effective, &row.country) && in_range(row.year(), range))
        .collect()
}

/// Authority rows span several years and are never year-filtered.
pub fn filter_authority<'a>(
    rows: &'a [AuthorityRow],
    effective: &BTreeSet<String>,
) -> Vec<&'a AuthorityRow> {
    rows.iter()
        .filter(|row| keeps_country(effective, &row.country))
        .collect()
}

/// Resolves the effective countries and filters all four datasets.
pub fn filter_store<'a>(store: &'a DatasetStore, selection: &FilterSelection) -> FilteredRows<'a> {
    let effective = resolve_effective_countries(selection, &store.technology);
    let range = selection.year_range;

    let filtered = FilteredRows {
        country_year: filter_country_year(&store.country_year, &effective, range),
        technology: filter_technology(&store.technology, selection),
        tidy: filter_tidy(&store.tidy, &effective, range),
        authority: filter_authority(&store.authority, &effective),
        effective_countries: effective,
    };

    tracing::debug!(
        countries = selection.countries.len(),
        effective = filtered.effective_countries.len(),
        technologies = selection.technologies.len(),
        years = %range,
        country_year = filtered.country_year.len(),
        technology = filtered.technology.len(),
        tidy = filtered.tidy.len(),
        authority = filtered.authority.len(),
        "filtered dataset store"
    );

    filtered
}
