use tracing::debug;

use crate::models::{Fixture, FixtureBatch, RawFixture};

/// Map the upstream result list onto the flat fixture schema
///
/// Order and length are preserved. A missing or empty list yields
/// [`FixtureBatch::NoResults`].
pub fn normalize(raw: Option<Vec<RawFixture>>) -> FixtureBatch {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            debug!("Upstream returned no fixtures");
            return FixtureBatch::no_results();
        }
    };

    FixtureBatch::Fixtures(raw.into_iter().map(Fixture::from).collect())
}

impl From<RawFixture> for Fixture {
    fn from(event: RawFixture) -> Self {
        Fixture {
            event_id: event.event_key,
            event_date: event.event_date,
            event_time: event.event_time,
            home_team: event.event_home_team,
            away_team: event.event_away_team,
            home_team_key: event.home_team_key,
            away_team_key: event.away_team_key,
            venue: event.event_stadium,
            country: event.country_name,
            country_key: event.event_country_key,
            league: event.league_name,
            league_key: event.league_key,
            league_round: event.league_round,
            league_season: event.league_season,
            event_live: event.event_live,
            home_logo: event.home_team_logo,
            away_logo: event.away_team_logo,
            league_logo: event.league_logo,
            country_logo: event.country_logo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(key: &str) -> RawFixture {
        RawFixture {
            event_key: Some(key.to_string()),
            event_home_team: Some(format!("Home {}", key)),
            ..Default::default()
        }
    }

    #[test]
    fn test_preserves_length_and_order() {
        let input = vec![raw("3"), raw("1"), raw("2")];
        let keys: Vec<_> = input.iter().map(|r| r.event_key.clone()).collect();

        let fixtures = normalize(Some(input)).into_fixtures();

        assert_eq!(fixtures.len(), 3);
        let ids: Vec<_> = fixtures.iter().map(|f| f.event_id.clone()).collect();
        assert_eq!(ids, keys);
        assert_eq!(fixtures[0].home_team.as_deref(), Some("Home 3"));
    }

    #[test]
    fn test_missing_or_empty_is_no_results() {
        assert_eq!(normalize(None), FixtureBatch::no_results());
        assert_eq!(normalize(Some(Vec::new())), FixtureBatch::no_results());
    }

    #[test]
    fn test_full_field_mapping() {
        let raw: RawFixture = serde_json::from_value(serde_json::json!({
            "event_key": 11,
            "event_date": "2026-10-18",
            "event_time": "20:00",
            "event_home_team": "Arsenal",
            "event_away_team": "Chelsea",
            "home_team_key": 141,
            "away_team_key": 88,
            "event_stadium": "Emirates Stadium",
            "country_name": "England",
            "event_country_key": 44,
            "league_name": "Premier League",
            "league_key": 152,
            "league_round": "Round 8",
            "league_season": "2026/2027",
            "event_live": "0",
            "home_team_logo": "https://example.test/h.png",
            "away_team_logo": "https://example.test/a.png",
            "league_logo": "https://example.test/l.png",
            "country_logo": "https://example.test/c.png",
            "event_referee": "ignored"
        }))
        .unwrap();

        let fixture = Fixture::from(raw);
        let json = serde_json::to_value(&fixture).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "eventId": "11",
                "eventDate": "2026-10-18",
                "eventTime": "20:00",
                "homeTeam": "Arsenal",
                "awayTeam": "Chelsea",
                "homeTeamKey": "141",
                "awayTeamKey": "88",
                "venue": "Emirates Stadium",
                "country": "England",
                "countryKey": "44",
                "league": "Premier League",
                "leagueKey": "152",
                "leagueRound": "Round 8",
                "leagueSeason": "2026/2027",
                "eventLive": "0",
                "homeLogo": "https://example.test/h.png",
                "awayLogo": "https://example.test/a.png",
                "leagueLogo": "https://example.test/l.png",
                "countryLogo": "https://example.test/c.png"
            })
        );
    }

    #[test]
    fn test_absent_fields_pass_through() {
        let fixture = Fixture::from(raw("9"));
        assert_eq!(fixture.venue, None);
        assert_eq!(fixture.league_round, None);
        assert_eq!(fixture.home_logo, None);
    }
}
