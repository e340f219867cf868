//! Headline statistics over the filtered country-year rows.

use std::collections::{BTreeSet, HashSet};

use patent_model::{CountryYearRow, PLACEHOLDER_AVG_GROWTH, Summary, YearTotal};

use crate::aggregate::{all_country_totals, yearly_totals};

/// Computes the summary card values.
///
/// `total_patents` rounds the sum of all filtered rows, so it matches the sum
/// of the untruncated country totals. `avg_growth` stays the placeholder; the
/// measured year-over-year figure is reported separately.
pub fn compute_summary(rows: &[&CountryYearRow], technologies: &BTreeSet<String>) -> Summary {
    let total: f64 = rows.iter().map(|row| row.obs_value_sum()).sum();
    let countries: HashSet<&str> = rows.iter().map(|row| row.country.as_str()).collect();
    let top_country = all_country_totals(rows)
        .into_iter()
        .next()
        .map(|total| total.country)
        .unwrap_or_default();

    Summary {
        total_patents: total.round() as i64,
        country_count: countries.len(),
        top_country,
        avg_growth: PLACEHOLDER_AVG_GROWTH,
        avg_growth_is_placeholder: true,
        measured_growth: measured_growth(&yearly_totals(rows)),
        technology_filter: technologies.iter().cloned().collect(),
    }
}

/// Mean year-over-year change of consecutive yearly totals, in percent.
///
/// Pairs whose earlier total is zero are skipped. `None` when no pair is
/// usable.
pub fn measured_growth(yearly: &[YearTotal]) -> Option<f64> {
    let changes: Vec<f64> = yearly
        .windows(2)
        .filter(|pair| pair[0].patents != 0.0)
        .map(|pair| (pair[1].patents - pair[0].patents) / pair[0].patents * 100.0)
        .collect();
    if changes.is_empty() {
        return None;
    }
    Some(changes.iter().sum::<f64>() / changes.len() as f64)
}
