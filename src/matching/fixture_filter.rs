use std::collections::BTreeSet;

use crate::models::{FilterState, Fixture};

/// One filter criterion; active predicates are combined with AND
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive equality on `league`
    League(String),
    /// Case-insensitive equality on `country`
    Country(String),
    LiveOnly,
    /// Case-insensitive substring of `league`, `homeTeam` or `awayTeam`
    Search(String),
}

impl Predicate {
    pub fn matches(&self, fixture: &Fixture) -> bool {
        match self {
            Predicate::League(league) => eq_ignore_case(fixture.league.as_deref(), league),
            Predicate::Country(country) => eq_ignore_case(fixture.country.as_deref(), country),
            Predicate::LiveOnly => fixture.is_live(),
            Predicate::Search(term) => {
                let term = term.to_lowercase();
                [&fixture.league, &fixture.home_team, &fixture.away_team]
                    .into_iter()
                    .any(|field| contains_lowercase(field.as_deref(), &term))
            }
        }
    }
}

impl FilterState {
    /// Predicates that are currently active, in evaluation order
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::with_capacity(4);

        if !self.selected_league.is_empty() {
            predicates.push(Predicate::League(self.selected_league.clone()));
        }
        if !self.selected_country.is_empty() {
            predicates.push(Predicate::Country(self.selected_country.clone()));
        }
        if self.show_live_only {
            predicates.push(Predicate::LiveOnly);
        }
        // A whitespace-only term is inactive, but a non-blank term is matched as typed
        if !self.search_term.trim().is_empty() {
            predicates.push(Predicate::Search(self.search_term.clone()));
        }

        predicates
    }
}

/// Fixtures from `batch` that match every active predicate in `filters`
pub fn apply_filters(batch: &[Fixture], filters: &FilterState) -> Vec<Fixture> {
    let predicates = filters.predicates();

    batch
        .iter()
        .filter(|fixture| predicates.iter().all(|p| p.matches(fixture)))
        .cloned()
        .collect()
}

/// Sorted distinct league names of the full batch
pub fn league_options(batch: &[Fixture]) -> Vec<String> {
    distinct_sorted(batch.iter().map(|f| f.league.as_deref()))
}

/// Sorted distinct country names of the full batch
pub fn country_options(batch: &[Fixture]) -> Vec<String> {
    distinct_sorted(batch.iter().map(|f| f.country.as_deref()))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn eq_ignore_case(field: Option<&str>, wanted: &str) -> bool {
    field
        .map(|value| value.to_lowercase() == wanted.to_lowercase())
        .unwrap_or(false)
}

fn contains_lowercase(field: Option<&str>, term: &str) -> bool {
    field
        .map(|value| value.to_lowercase().contains(term))
        .unwrap_or(false)
}
