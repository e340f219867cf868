//! Options offered by the country and technology pickers.

use std::collections::BTreeSet;

use patent_model::DatasetStore;

/// Case-insensitive substring match; an empty or blank search matches all.
pub fn matches_search(candidate: &str, search: &str) -> bool {
    let needle = search.trim();
    needle.is_empty() || candidate.to_lowercase().contains(&needle.to_lowercase())
}

fn offered<'a>(names: impl Iterator<Item = &'a str>, search: &str) -> Vec<String> {
    names
        .filter(|name| !name.is_empty())
        .filter(|name| matches_search(name, search))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct country-year countries, sorted, narrowed by `search`.
pub fn offered_countries(store: &DatasetStore, search: &str) -> Vec<String> {
    offered(
        store.country_year.iter().map(|row| row.country.as_str()),
        search,
    )
}

/// Distinct technology domain labels, sorted, narrowed by `search`.
pub fn offered_technologies(store: &DatasetStore, search: &str) -> Vec<String> {
    offered(
        store.technology.iter().map(|row| row.technology.as_str()),
        search,
    )
}
