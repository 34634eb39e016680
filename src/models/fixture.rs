use serde::{Deserialize, Deserializer, Serialize};

/// Message returned instead of an empty array when the upstream has no fixtures
pub const NO_FIXTURES_MESSAGE: &str = "No fixtures found in the given range.";

/// Fixture record as sent by AllSportsAPI (`met=Fixtures`)
///
/// Only the fields we forward are read. The provider sends some keys as JSON
/// numbers and others as strings, so every field is read as opaque text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFixture {
    #[serde(default, deserialize_with = "opaque_text")]
    pub event_key: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub event_date: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub event_time: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub event_home_team: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub event_away_team: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub home_team_key: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub away_team_key: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub event_stadium: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub country_name: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub event_country_key: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub league_name: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub league_key: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub league_round: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub league_season: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub event_live: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub home_team_logo: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub away_team_logo: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub league_logo: Option<String>,
    #[serde(default, deserialize_with = "opaque_text")]
    pub country_logo: Option<String>,
}

/// Flattened fixture served by `/fixtures`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    /// Upstream `event_key`, used as the rendering key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team_key: Option<String>,

    /// Stadium name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_round: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_season: Option<String>,

    /// `"1"` while the match is in progress
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_live: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_logo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_logo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_logo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_logo: Option<String>,
}

impl Fixture {
    /// Whether the match is currently in progress
    pub fn is_live(&self) -> bool {
        self.event_live.as_deref() == Some("1")
    }
}

/// Body of a `/fixtures` response
///
/// A non-empty batch is sent as a bare JSON array; an empty range is sent as
/// `{"message": ...}` so consumers can tell it apart from "not loaded yet".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixtureBatch {
    Fixtures(Vec<Fixture>),
    NoResults { message: String },
}

impl FixtureBatch {
    pub fn no_results() -> Self {
        FixtureBatch::NoResults {
            message: NO_FIXTURES_MESSAGE.to_string(),
        }
    }

    /// Fixtures carried by this batch (empty for `NoResults`)
    pub fn into_fixtures(self) -> Vec<Fixture> {
        match self {
            FixtureBatch::Fixtures(fixtures) => fixtures,
            FixtureBatch::NoResults { .. } => Vec::new(),
        }
    }
}

/// Read a string-or-number JSON value as text; `null` becomes `None`
fn opaque_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
