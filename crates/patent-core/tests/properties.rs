//! Property tests for the filter-and-aggregation pipeline.

use std::collections::BTreeSet;

use patent_core::{
    all_country_totals, authority_totals, compute_summary, country_totals, filter_store,
    multi_country_trend, resolve_effective_countries, technology_totals, yearly_totals,
};
use patent_model::{
    AuthorityRow, CountryYearRow, DatasetStore, FilterSelection, TechnologyRow, YearRange,
};
use proptest::prelude::*;

const COUNTRIES: &[&str] = &["US", "DE", "FR", "JP", "KR", ""];
const TECHNOLOGIES: &[&str] = &["AI", "Bio", "ICT", ""];
const AUTHORITIES: &[&str] = &["EPO", "USPTO", "JPO"];

fn country() -> impl Strategy<Value = String> {
    prop::sample::select(COUNTRIES).prop_map(str::to_string)
}

fn technology() -> impl Strategy<Value = String> {
    prop::sample::select(TECHNOLOGIES).prop_map(str::to_string)
}

fn value() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => (0u32..1000).prop_map(|v| v.to_string()),
        1 => Just(String::new()),
        1 => Just("n/a".to_string()),
    ]
}

fn country_year_row() -> impl Strategy<Value = CountryYearRow> {
    (country(), 2015i32..2024, value())
        .prop_map(|(country, year, sum)| CountryYearRow::new(country, year.to_string(), sum))
}

fn technology_row() -> impl Strategy<Value = TechnologyRow> {
    (country(), technology(), value())
        .prop_map(|(country, technology, sum)| TechnologyRow::new(country, technology, sum))
}

fn authority_row() -> impl Strategy<Value = AuthorityRow> {
    (country(), prop::sample::select(AUTHORITIES), value())
        .prop_map(|(country, authority, sum)| AuthorityRow::new(country, authority, sum))
}

fn arb_store() -> impl Strategy<Value = DatasetStore> {
    (
        prop::collection::vec(country_year_row(), 0..40),
        prop::collection::vec(technology_row(), 0..20),
        prop::collection::vec(authority_row(), 0..20),
    )
        .prop_map(|(country_year, technology, authority)| DatasetStore {
            country_year,
            technology,
            tidy: Vec::new(),
            authority,
        })
}

fn arb_selection() -> impl Strategy<Value = FilterSelection> {
    (
        prop::collection::btree_set(country(), 0..6),
        2015i32..2024,
        2015i32..2024,
        prop::collection::btree_set(technology(), 0..3),
    )
        .prop_map(|(countries, a, b, technologies)| {
            FilterSelection::new(YearRange::new(a, b))
                .with_countries(countries)
                .with_technologies(technologies)
        })
}

proptest! {
    #[test]
    fn aggregators_are_idempotent(store in arb_store(), selection in arb_selection()) {
        let first = filter_store(&store, &selection);
        let second = filter_store(&store, &selection);

        prop_assert_eq!(first.effective_countries, second.effective_countries);
        prop_assert_eq!(
            country_totals(&first.country_year, 15),
            country_totals(&second.country_year, 15)
        );
        prop_assert_eq!(yearly_totals(&first.country_year), yearly_totals(&second.country_year));
        prop_assert_eq!(
            technology_totals(&first.technology, 8),
            technology_totals(&second.technology, 8)
        );
        prop_assert_eq!(
            authority_totals(&first.authority, 10),
            authority_totals(&second.authority, 10)
        );
        prop_assert_eq!(
            multi_country_trend(&first.country_year, 5),
            multi_country_trend(&second.country_year, 5)
        );
        prop_assert_eq!(
            compute_summary(&first.country_year, &selection.technologies),
            compute_summary(&second.country_year, &selection.technologies)
        );
    }

    #[test]
    fn country_totals_sum_to_summary_total(store in arb_store(), selection in arb_selection()) {
        let filtered = filter_store(&store, &selection);
        let summed: f64 = all_country_totals(&filtered.country_year)
            .iter()
            .map(|total| total.patents)
            .sum();
        let summary = compute_summary(&filtered.country_year, &selection.technologies);
        prop_assert!((summed.round() as i64 - summary.total_patents).abs() <= 1);
    }

    #[test]
    fn no_technologies_means_no_cross_filter(store in arb_store(), selection in arb_selection()) {
        let selection = selection.with_technologies(Vec::<String>::new());
        let effective = resolve_effective_countries(&selection, &store.technology);
        prop_assert_eq!(effective, selection.countries);
    }

    #[test]
    fn effective_countries_narrow_the_selection(store in arb_store(), selection in arb_selection()) {
        let effective = resolve_effective_countries(&selection, &store.technology);
        prop_assert!(effective.is_subset(&selection.countries));

        let filtered = filter_store(&store, &selection);
        prop_assert!(filtered
            .country_year
            .iter()
            .all(|row| effective.contains(&row.country) && !row.country.is_empty()));
        prop_assert!(filtered
            .country_year
            .iter()
            .all(|row| row.year().is_some_and(|year| selection.year_range.contains(year))));
    }

    #[test]
    fn top_n_is_a_prefix_of_the_full_ranking(
        rows in prop::collection::vec(country_year_row(), 0..40),
        limit in 0usize..8,
    ) {
        let refs: Vec<&CountryYearRow> = rows.iter().collect();
        let full = all_country_totals(&refs);
        let top = country_totals(&refs, limit);

        prop_assert_eq!(&top[..], &full[..limit.min(full.len())]);
        prop_assert!(full.windows(2).all(|pair| pair[0].patents >= pair[1].patents));

        let distinct: BTreeSet<&str> = rows.iter().map(|row| row.country.as_str()).collect();
        prop_assert_eq!(full.len(), distinct.len());
    }

    #[test]
    fn equal_totals_keep_first_seen_order(
        names in prop::collection::vec(country(), 1..12),
    ) {
        let rows: Vec<CountryYearRow> = names
            .iter()
            .map(|name| CountryYearRow::new(name.clone(), "2020", "1"))
            .collect();
        let refs: Vec<&CountryYearRow> = rows.iter().collect();
        let full = all_country_totals(&refs);

        for pair in full.windows(2) {
            if pair[0].patents == pair[1].patents {
                let first = names.iter().position(|n| *n == pair[0].country);
                let second = names.iter().position(|n| *n == pair[1].country);
                prop_assert!(first < second);
            }
        }
    }
}
