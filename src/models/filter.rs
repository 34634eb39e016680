use serde::{Deserialize, Serialize};

/// Filter inputs for the fixture view; empty strings and `false` mean inactive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub selected_league: String,
    pub selected_country: String,
    pub show_live_only: bool,
}

impl FilterState {
    /// Whether any predicate is currently active
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || !self.selected_league.is_empty()
            || !self.selected_country.is_empty()
            || self.show_live_only
    }
}

/// Input event applied to the fixture view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Replace the full batch after a successful fetch
    LoadBatch(Vec<crate::models::Fixture>),
    /// Fetch failed; leave an empty, non-loading view
    LoadFailed,
    SetSearch(String),
    SelectLeague(String),
    SelectCountry(String),
    SetLiveOnly(bool),
    /// Reset all four predicates at once
    ClearFilters,
}
