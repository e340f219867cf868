//! The dashboard facade: one store, one filter state, recomputed series.

use patent_model::{
    AuthorityTotal, CountryTotal, DatasetStore, FilterSelection, Share, Summary, TechnologyTotal,
    TrendPoint, YearRange, YearTotal,
};
use serde::Serialize;

use crate::aggregate::{
    authority_totals, country_totals, multi_country_trend, technology_totals, with_shares,
    yearly_totals,
};
use crate::config::DashboardConfig;
use crate::error::{CoreError, Result};
use crate::filter::{FilteredRows, filter_store};
use crate::options::{offered_countries, offered_technologies};
use crate::state::FilterState;
use crate::summary::compute_summary;

/// Every series for the current selection, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub selection: FilterSelection,
    pub technology_filter_label: Option<String>,
    pub summary: Summary,
    pub country_totals: Vec<CountryTotal>,
    pub country_shares: Vec<Share>,
    pub yearly_totals: Vec<YearTotal>,
    pub technology_totals: Vec<TechnologyTotal>,
    pub technology_shares: Vec<Share>,
    pub authority_totals: Vec<AuthorityTotal>,
    pub multi_country_trend: Vec<TrendPoint>,
}

/// Holds the dataset store and filter state and derives chart series.
///
/// Series are recomputed from scratch on every call. Before a store is
/// attached every series is empty.
#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    store: Option<DatasetStore>,
    state: FilterState,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        let state = FilterState::new(config.fallback_years);
        Self {
            config,
            store: None,
            state,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn store(&self) -> Option<&DatasetStore> {
        self.store.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.store.is_some()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn selection(&self) -> &FilterSelection {
        self.state.selection()
    }

    /// Attaches the loaded store. Derives the year bounds, resets the year
    /// range to them and seeds the country selection.
    pub fn attach_store(&mut self, store: DatasetStore) -> Result<()> {
        if self.store.is_some() {
            return Err(CoreError::StoreAlreadyAttached);
        }
        let bounds = store.year_bounds().unwrap_or(self.config.fallback_years);
        self.state.set_bounds(bounds);
        self.state.seed_countries(
            &store.countries_first_seen(),
            self.config.seed_country_count,
        );
        tracing::info!(
            years = %bounds,
            countries = self.state.selection().countries.len(),
            "dataset store attached"
        );
        self.store = Some(store);
        Ok(())
    }

    // === Selection ===

    pub fn set_countries<I, S>(&mut self, countries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.set_countries(countries);
    }

    pub fn set_year_range(&mut self, min: i32, max: i32) {
        self.state.set_year_range(min, max);
    }

    pub fn set_technologies<I, S>(&mut self, technologies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.set_technologies(technologies);
    }

    /// Mutable access for the finer-grained selection operations.
    pub fn state_mut(&mut self) -> &mut FilterState {
        &mut self.state
    }

    /// Selects every country the store offers.
    pub fn select_all_countries(&mut self) {
        let all = self.available_countries();
        self.state.select_all_countries(all);
    }

    pub fn select_all_technologies(&mut self) {
        let all = self.available_technologies();
        self.state.select_all_technologies(all);
    }

    // === Options ===

    pub fn available_countries(&self) -> Vec<String> {
        self.store
            .as_ref()
            .map(|store| offered_countries(store, ""))
            .unwrap_or_default()
    }

    pub fn available_technologies(&self) -> Vec<String> {
        self.store
            .as_ref()
            .map(|store| offered_technologies(store, ""))
            .unwrap_or_default()
    }

    /// Countries matching the current country search text.
    pub fn offered_countries(&self) -> Vec<String> {
        self.store
            .as_ref()
            .map(|store| offered_countries(store, self.state.country_search()))
            .unwrap_or_default()
    }

    /// Technologies matching the current technology search text.
    pub fn offered_technologies(&self) -> Vec<String> {
        self.store
            .as_ref()
            .map(|store| offered_technologies(store, self.state.technology_search()))
            .unwrap_or_default()
    }

    // === Series ===

    fn filtered(&self) -> FilteredRows<'_> {
        match &self.store {
            Some(store) => filter_store(store, self.state.selection()),
            None => FilteredRows::default(),
        }
    }

    pub fn country_totals(&self) -> Vec<CountryTotal> {
        country_totals(&self.filtered().country_year, self.config.limits.country_totals)
    }

    pub fn yearly_totals(&self) -> Vec<YearTotal> {
        yearly_totals(&self.filtered().country_year)
    }

    pub fn technology_totals(&self) -> Vec<TechnologyTotal> {
        technology_totals(
            &self.filtered().technology,
            self.config.limits.technology_totals,
        )
    }

    pub fn authority_totals(&self) -> Vec<AuthorityTotal> {
        authority_totals(
            &self.filtered().authority,
            self.config.limits.authority_totals,
        )
    }

    pub fn multi_country_trend(&self) -> Vec<TrendPoint> {
        multi_country_trend(
            &self.filtered().country_year,
            self.config.limits.trend_countries,
        )
    }

    pub fn summary(&self) -> Summary {
        compute_summary(
            &self.filtered().country_year,
            &self.state.selection().technologies,
        )
    }

    /// Pie slices for the leading countries of [`Self::country_totals`].
    pub fn country_shares(&self) -> Vec<Share> {
        country_share_slices(&self.country_totals(), self.config.limits.country_shares)
    }

    pub fn technology_shares(&self) -> Vec<Share> {
        with_shares(
            self.technology_totals()
                .iter()
                .map(|total| (total.name.as_str(), total.value)),
        )
    }

    /// All series at once, filtering the store a single time.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let filtered = self.filtered();
        let limits = self.config.limits;
        let selection = self.state.selection();

        let country_totals = country_totals(&filtered.country_year, limits.country_totals);
        let technology_totals = technology_totals(&filtered.technology, limits.technology_totals);

        DashboardSnapshot {
            selection: selection.clone(),
            technology_filter_label: selection.technology_filter_label(),
            summary: compute_summary(&filtered.country_year, &selection.technologies),
            country_shares: country_share_slices(&country_totals, limits.country_shares),
            technology_shares: with_shares(
                technology_totals
                    .iter()
                    .map(|total| (total.name.as_str(), total.value)),
            ),
            yearly_totals: yearly_totals(&filtered.country_year),
            authority_totals: authority_totals(&filtered.authority, limits.authority_totals),
            multi_country_trend: multi_country_trend(
                &filtered.country_year,
                limits.trend_countries,
            ),
            country_totals,
            technology_totals,
        }
    }

    pub fn year_bounds(&self) -> YearRange {
        self.state.bounds()
    }
}

fn country_share_slices(totals: &[CountryTotal], limit: usize) -> Vec<Share> {
    with_shares(
        totals
            .iter()
            .take(limit)
            .map(|total| (total.country.as_str(), total.patents)),
    )
}
