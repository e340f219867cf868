//! Filter state: the current selection plus picker search text.
//!
//! Every operation builds a new [`FilterSelection`] and replaces the current
//! one; nothing edits the selection in place. Operations never fail: invalid
//! input clamps or does nothing.

use patent_model::{FilterSelection, YearRange};
use serde::{Deserialize, Serialize};

/// Whether the initial country selection has been made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedState {
    /// Waiting for the first country-year rows.
    #[default]
    Pending,
    /// Seeding happened, or was skipped because the user chose first. Never
    /// goes back to pending.
    Seeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    selection: FilterSelection,
    bounds: YearRange,
    country_search: String,
    technology_search: String,
    seed: SeedState,
}

impl FilterState {
    /// No countries, no technologies, year range spanning `bounds`.
    pub fn new(bounds: YearRange) -> Self {
        Self {
            selection: FilterSelection::new(bounds),
            bounds,
            country_search: String::new(),
            technology_search: String::new(),
            seed: SeedState::Pending,
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn bounds(&self) -> YearRange {
        self.bounds
    }

    pub fn seed_state(&self) -> SeedState {
        self.seed
    }

    pub fn country_search(&self) -> &str {
        &self.country_search
    }

    pub fn technology_search(&self) -> &str {
        &self.technology_search
    }

    fn replace(&mut self, next: FilterSelection) {
        self.selection = next;
    }

    /// Changes the dataset bounds and resets the year range to span them.
    pub fn set_bounds(&mut self, bounds: YearRange) {
        self.bounds = bounds;
        let next = self.selection.clone().with_year_range(bounds);
        self.replace(next);
    }

    // === Countries ===

    pub fn set_countries<I, S>(&mut self, countries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next = self.selection.clone().with_countries(countries);
        self.replace(next);
    }

    /// Adds `country` if absent, removes it if present.
    pub fn toggle_country(&mut self, country: &str) {
        let mut countries = self.selection.countries.clone();
        if !countries.remove(country) {
            countries.insert(country.to_string());
        }
        self.set_countries(countries);
    }

    /// Removes `country`; a country that is not selected is left alone.
    pub fn remove_country(&mut self, country: &str) {
        if self.selection.countries.contains(country) {
            self.toggle_country(country);
        }
    }

    pub fn select_all_countries<I, S>(&mut self, available: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_countries(available);
    }

    pub fn clear_countries(&mut self) {
        self.set_countries(std::iter::empty::<String>());
    }

    /// Narrows the selection to a single country, as a chart click does.
    pub fn focus_country(&mut self, country: &str) {
        self.set_countries([country]);
    }

    // === Years ===

    /// Sets the year range, clamped into the dataset bounds. The ends may be
    /// given in either order.
    pub fn set_year_range(&mut self, min: i32, max: i32) {
        let range = YearRange::new(min, max).clamp_to(self.bounds);
        let next = self.selection.clone().with_year_range(range);
        self.replace(next);
    }

    // === Technologies ===

    pub fn set_technologies<I, S>(&mut self, technologies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next = self.selection.clone().with_technologies(technologies);
        self.replace(next);
    }

    pub fn toggle_technology(&mut self, technology: &str) {
        let mut technologies = self.selection.technologies.clone();
        if !technologies.remove(technology) {
            technologies.insert(technology.to_string());
        }
        self.set_technologies(technologies);
    }

    pub fn select_all_technologies<I, S>(&mut self, available: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_technologies(available);
    }

    pub fn clear_technologies(&mut self) {
        self.set_technologies(std::iter::empty::<String>());
    }

    pub fn focus_technology(&mut self, technology: &str) {
        self.set_technologies([technology]);
    }

    // === Search ===

    pub fn set_country_search(&mut self, text: impl Into<String>) {
        self.country_search = text.into();
    }

    pub fn set_technology_search(&mut self, text: impl Into<String>) {
        self.technology_search = text.into();
    }

    // === Seeding ===

    /// Pre-selects the first `count` of `countries`, which are expected in
    /// first-seen order (see [`DatasetStore::countries_first_seen`]).
    ///
    /// Fires at most once, the first time it is called with countries. When
    /// the user has already picked countries their choice is kept, but the
    /// state still becomes [`SeedState::Seeded`] so a later clear is not
    /// undone. Returns whether the selection changed.
    ///
    /// [`DatasetStore::countries_first_seen`]: patent_model::DatasetStore::countries_first_seen
    pub fn seed_countries(&mut self, countries: &[&str], count: usize) -> bool {
        if self.seed == SeedState::Seeded || countries.is_empty() {
            return false;
        }
        self.seed = SeedState::Seeded;
        if !self.selection.countries.is_empty() {
            return false;
        }

        let seeded = &countries[..count.min(countries.len())];
        tracing::debug!(countries = ?seeded, "seeded country selection");
        self.set_countries(seeded.iter().copied());
        true
    }
}
