use std::sync::Arc;

use tracing::debug;

use crate::matching::fixture_filter::{apply_filters, country_options, league_options};
use crate::models::{FilterAction, FilterState, Fixture};

/// Number of fixtures kept from one fetch
pub const FIXTURE_DISPLAY_LIMIT: usize = 70;

/// Keep the newest `limit` fixtures of a response, newest first
///
/// The proxy returns fixtures oldest first, so the list is reversed before
/// truncation. Anything past `limit` is dropped.
pub fn latest_fixtures(mut fixtures: Vec<Fixture>, limit: usize) -> Vec<Fixture> {
    fixtures.reverse();
    fixtures.truncate(limit);
    fixtures
}

/// Snapshot of the fixture page
///
/// Every field except `batch` and `filters` is derived; [`FixtureView::reduce`]
/// recomputes them all from scratch on each action.
#[derive(Debug, Clone)]
pub struct FixtureView {
    batch: Arc<Vec<Fixture>>,
    filters: FilterState,
    filtered: Vec<Fixture>,
    leagues: Vec<String>,
    countries: Vec<String>,
    loading: bool,
}

impl FixtureView {
    /// View before the first fetch has resolved
    pub fn loading() -> Self {
        Self {
            batch: Arc::new(Vec::new()),
            filters: FilterState::default(),
            filtered: Vec::new(),
            leagues: Vec::new(),
            countries: Vec::new(),
            loading: true,
        }
    }

    fn derive(batch: Arc<Vec<Fixture>>, filters: FilterState) -> Self {
        let filtered = apply_filters(&batch, &filters);
        let leagues = league_options(&batch);
        let countries = country_options(&batch);

        Self {
            batch,
            filters,
            filtered,
            leagues,
            countries,
            loading: false,
        }
    }

    /// Apply one action and return the next snapshot
    pub fn reduce(&self, action: FilterAction) -> Self {
        let mut filters = self.filters.clone();
        let mut batch = Arc::clone(&self.batch);

        match action {
            FilterAction::LoadBatch(fixtures) => batch = Arc::new(fixtures),
            FilterAction::LoadFailed => batch = Arc::new(Vec::new()),
            FilterAction::SetSearch(term) => filters.search_term = term,
            FilterAction::SelectLeague(league) => filters.selected_league = league,
            FilterAction::SelectCountry(country) => filters.selected_country = country,
            FilterAction::SetLiveOnly(live_only) => filters.show_live_only = live_only,
            FilterAction::ClearFilters => filters = FilterState::default(),
        }

        let next = Self::derive(batch, filters);
        debug!(
            "Fixture view: {} of {} fixtures shown",
            next.filtered.len(),
            next.batch.len()
        );
        next
    }

    pub fn batch(&self) -> &[Fixture] {
        &self.batch
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filtered(&self) -> &[Fixture] {
        &self.filtered
    }

    pub fn leagues(&self) -> &[String] {
        &self.leagues
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl Default for FixtureView {
    fn default() -> Self {
        Self::loading()
    }
}
