pub mod fixture_filter;
pub mod view;

pub use fixture_filter::{apply_filters, country_options, league_options, Predicate};
pub use view::{latest_fixtures, FixtureView, FIXTURE_DISPLAY_LIMIT};
