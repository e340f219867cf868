//! Group-and-sum aggregators producing chart series.
//!
//! Every aggregator folds rows into groups in first-seen order and ranks with
//! a stable sort, so equal totals keep the order in which their keys first
//! appeared in the input.

use std::collections::HashMap;
use std::hash::Hash;

use patent_model::{
    AuthorityRow, AuthorityTotal, CountryTotal, CountryYearRow, Share, TechnologyRow,
    TechnologyTotal, TrendPoint, YearTotal,
};
use serde::{Deserialize, Serialize};

/// How many entries each ranked series keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationLimits {
    pub country_totals: usize,
    pub technology_totals: usize,
    pub authority_totals: usize,
    pub trend_countries: usize,
    pub country_shares: usize,
}

impl Default for AggregationLimits {
    fn default() -> Self {
        Self {
            country_totals: 15,
            technology_totals: 8,
            authority_totals: 10,
            trend_countries: 5,
            country_shares: 8,
        }
    }
}

/// Sums `value` per key, keeping groups in the order keys are first seen.
/// Rows for which `key` returns `None` are skipped.
fn sum_by_key<'a, T, K>(
    rows: &[&'a T],
    key: impl Fn(&'a T) -> Option<K>,
    value: impl Fn(&'a T) -> f64,
) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
{
    let mut groups: Vec<(K, f64)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();
    for &row in rows {
        let Some(k) = key(row) else {
            continue;
        };
        match index.get(&k) {
            Some(&idx) => groups[idx].1 += value(row),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, value(row)));
            }
        }
    }
    groups
}

/// Stable descending sort by value, optionally truncated.
fn rank<K>(mut groups: Vec<(K, f64)>, limit: Option<usize>) -> Vec<(K, f64)> {
    groups.sort_by(|a, b| b.1.total_cmp(&a.1));
    if let Some(limit) = limit {
        groups.truncate(limit);
    }
    groups
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Country totals over all filtered rows, ranked but not truncated.
pub fn all_country_totals(rows: &[&CountryYearRow]) -> Vec<CountryTotal> {
    let groups = sum_by_key(
        rows,
        |row| Some(row.country.as_str()),
        CountryYearRow::obs_value_sum,
    );
    rank(groups, None)
        .into_iter()
        .map(|(country, patents)| CountryTotal {
            country: country.to_string(),
            patents,
        })
        .collect()
}

/// The top `limit` countries by summed patents.
pub fn country_totals(rows: &[&CountryYearRow], limit: usize) -> Vec<CountryTotal> {
    let mut totals = all_country_totals(rows);
    totals.truncate(limit);
    totals
}

/// Totals per year in ascending year order. Rows without a parsable year
/// are skipped.
pub fn yearly_totals(rows: &[&CountryYearRow]) -> Vec<YearTotal> {
    let mut groups = sum_by_key(rows, CountryYearRow::year, CountryYearRow::obs_value_sum);
    groups.sort_by_key(|(year, _)| *year);
    groups
        .into_iter()
        .map(|(year, patents)| YearTotal { year, patents })
        .collect()
}

/// The top `limit` technology domains. Rows with an empty domain label are
/// skipped.
pub fn technology_totals(rows: &[&TechnologyRow], limit: usize) -> Vec<TechnologyTotal> {
    let groups = sum_by_key(
        rows,
        |row| non_empty(&row.technology),
        TechnologyRow::obs_value_sum,
    );
    rank(groups, Some(limit))
        .into_iter()
        .map(|(name, value)| TechnologyTotal {
            name: name.to_string(),
            value,
        })
        .collect()
}

/// The top `limit` patent authorities. Rows with an empty authority code are
/// skipped.
pub fn authority_totals(rows: &[&AuthorityRow], limit: usize) -> Vec<AuthorityTotal> {
    let groups = sum_by_key(
        rows,
        |row| non_empty(&row.authority),
        AuthorityRow::obs_value_sum,
    );
    rank(groups, Some(limit))
        .into_iter()
        .map(|(authority, patents)| AuthorityTotal {
            authority: authority.to_string(),
            patents,
        })
        .collect()
}

/// Names of the `count` leading countries.
pub fn top_countries(rows: &[&CountryYearRow], count: usize) -> Vec<String> {
    all_country_totals(rows)
        .into_iter()
        .take(count)
        .map(|total| total.country)
        .collect()
}

/// Per-year totals for the `count` leading countries.
///
/// One point per year present in `rows`, ascending. Each point lists every
/// trend country in rank order, with `0.0` where the country has no rows
/// that year.
pub fn multi_country_trend(rows: &[&CountryYearRow], count: usize) -> Vec<TrendPoint> {
    let leaders = top_countries(rows, count);
    let mut points: Vec<TrendPoint> = yearly_totals(rows)
        .into_iter()
        .map(|total| TrendPoint {
            year: total.year,
            countries: leaders.iter().map(|name| (name.clone(), 0.0)).collect(),
        })
        .collect();
    let by_year: HashMap<i32, usize> = points
        .iter()
        .enumerate()
        .map(|(idx, point)| (point.year, idx))
        .collect();

    for row in rows {
        let (Some(year), Some(slot)) = (
            row.year(),
            leaders.iter().position(|name| *name == row.country),
        ) else {
            continue;
        };
        if let Some(&idx) = by_year.get(&year) {
            points[idx].countries[slot].1 += row.obs_value_sum();
        }
    }

    points
}

/// Adds each entry's percentage of the series total.
pub fn with_shares<'a, I>(entries: I) -> Vec<Share>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let entries: Vec<(&str, f64)> = entries.into_iter().collect();
    let sum: f64 = entries.iter().map(|(_, value)| value).sum();
    entries
        .into_iter()
        .map(|(key, value)| Share {
            key: key.to_string(),
            value,
            percent: if sum == 0.0 { 0.0 } else { value / sum * 100.0 },
        })
        .collect()
}
