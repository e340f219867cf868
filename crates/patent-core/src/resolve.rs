//! Cross-filter resolution of the effective country set.

use std::collections::BTreeSet;

use patent_model::{FilterSelection, TechnologyRow};

/// Countries the country-keyed datasets are filtered by.
///
/// Without a technology filter this is the selected country set. With one, it
/// is the selected countries that have at least one technology row in a
/// selected domain; the result may be empty.
pub fn resolve_effective_countries(
    selection: &FilterSelection,
    technology_rows: &[TechnologyRow],
) -> BTreeSet<String> {
    if !selection.has_technology_filter() {
        return selection.countries.clone();
    }

    let active: BTreeSet<&str> = technology_rows
        .iter()
        .filter(|row| selection.technologies.contains(&row.technology))
        .map(|row| row.country.as_str())
        .collect();

    selection
        .countries
        .iter()
        .filter(|country| active.contains(country.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use patent_model::YearRange;

    fn rows() -> Vec<TechnologyRow> {
        vec![
            TechnologyRow::new("US", "AI", "100"),
            TechnologyRow::new("DE", "AI", "50"),
            TechnologyRow::new("US", "Bio", "30"),
            TechnologyRow::new("FR", "Bio", "10"),
        ]
    }

    fn selection() -> FilterSelection {
        FilterSelection::new(YearRange::new(2017, 2021)).with_countries(["US", "DE", "JP"])
    }

    #[test]
    fn no_technologies_keeps_selection() {
        let effective = resolve_effective_countries(&selection(), &rows());
        assert_eq!(effective, selection().countries);
    }

    #[test]
    fn technologies_intersect_with_selection() {
        let sel = selection().with_technologies(["Bio"]);
        let effective = resolve_effective_countries(&sel, &rows());
        assert_eq!(effective, BTreeSet::from(["US".to_string()]));
    }

    #[test]
    fn unknown_technology_yields_empty_set() {
        let sel = selection().with_technologies(["Quantum"]);
        assert!(resolve_effective_countries(&sel, &rows()).is_empty());
    }
}
