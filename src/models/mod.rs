pub mod filter;
pub mod fixture;

pub use filter::{FilterAction, FilterState};
pub use fixture::{Fixture, FixtureBatch, RawFixture, NO_FIXTURES_MESSAGE};
