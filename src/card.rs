//! Text rendering of the fixture view.

use crate::matching::FixtureView;
use crate::models::Fixture;

/// Image used when a fixture has no logo URL
pub const PLACEHOLDER_LOGO: &str = "/placeholder.svg";

/// Display strings for one fixture card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCard {
    pub key: String,
    pub live: bool,
    pub league: String,
    pub league_logo: String,
    pub country: String,
    pub country_logo: String,
    pub home_team: String,
    pub home_logo: String,
    pub away_team: String,
    pub away_logo: String,
    pub kickoff: String,
    pub date: String,
    /// `None` hides the venue line
    pub venue: Option<String>,
    pub round: String,
}

impl From<&Fixture> for FixtureCard {
    fn from(fixture: &Fixture) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let logo = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|url| !url.is_empty())
                .unwrap_or(PLACEHOLDER_LOGO)
                .to_string()
        };

        FixtureCard {
            key: text(&fixture.event_id),
            live: fixture.is_live(),
            league: text(&fixture.league),
            league_logo: logo(&fixture.league_logo),
            country: text(&fixture.country),
            country_logo: logo(&fixture.country_logo),
            home_team: text(&fixture.home_team),
            home_logo: logo(&fixture.home_logo),
            away_team: text(&fixture.away_team),
            away_logo: logo(&fixture.away_logo),
            kickoff: text(&fixture.event_time),
            date: text(&fixture.event_date),
            venue: fixture.venue.clone().filter(|v| !v.is_empty()),
            round: fixture
                .league_round
                .clone()
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl FixtureCard {
    pub fn render(&self) -> String {
        let badge = if self.live { "  [LIVE]" } else { "" };
        let mut out = format!("{} ({}){}\n", self.league, self.country, badge);

        out.push_str(&format!(
            "  {}  VS  {}   {}\n",
            self.home_team, self.away_team, self.kickoff
        ));
        out.push_str(&format!("  date:  {}\n", self.date));
        if let Some(venue) = &self.venue {
            out.push_str(&format!("  venue: {}\n", venue));
        }
        out.push_str(&format!("  round: {}\n", self.round));

        out
    }
}

/// Render the whole page: headline, active filters and cards
pub fn render_view(view: &FixtureView) -> String {
    if view.is_loading() {
        return "Loading fixtures...\n".to_string();
    }

    let mut out = format!(
        "Football Fixtures - {} fixtures found\n",
        view.filtered().len()
    );

    let filters = view.filters();
    if filters.is_active() {
        out.push_str(&format!(
            "filters: search={:?} league={:?} country={:?} live_only={}\n",
            filters.search_term,
            filters.selected_league,
            filters.selected_country,
            filters.show_live_only
        ));
    }

    if view.filtered().is_empty() {
        out.push_str("\nNo fixtures found\nTry adjusting your filters\n");
        return out;
    }

    for fixture in view.filtered() {
        out.push('\n');
        out.push_str(&FixtureCard::from(fixture).render());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilterAction;

    fn arsenal_chelsea() -> Fixture {
        Fixture {
            event_id: Some("11".to_string()),
            event_date: Some("2026-10-18".to_string()),
            event_time: Some("20:00".to_string()),
            home_team: Some("Arsenal".to_string()),
            away_team: Some("Chelsea".to_string()),
            league: Some("Premier League".to_string()),
            country: Some("England".to_string()),
            event_live: Some("1".to_string()),
            home_logo: Some("https://example.test/h.png".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_card_placeholders() {
        let card = FixtureCard::from(&arsenal_chelsea());

        assert_eq!(card.key, "11");
        assert!(card.live);
        assert_eq!(card.home_logo, "https://example.test/h.png");
        assert_eq!(card.away_logo, PLACEHOLDER_LOGO);
        assert_eq!(card.league_logo, PLACEHOLDER_LOGO);
        assert_eq!(card.country_logo, PLACEHOLDER_LOGO);
        assert_eq!(card.venue, None);
        assert_eq!(card.round, "-");
    }

    #[test]
    fn test_card_render() {
        let mut fixture = arsenal_chelsea();
        fixture.venue = Some("Emirates Stadium".to_string());
        fixture.league_round = Some("Round 8".to_string());

        let text = FixtureCard::from(&fixture).render();

        assert!(text.contains("[LIVE]"));
        assert!(text.contains("Arsenal  VS  Chelsea"));
        assert!(text.contains("venue: Emirates Stadium"));
        assert!(text.contains("round: Round 8"));

        fixture.venue = None;
        fixture.event_live = Some("0".to_string());
        let text = FixtureCard::from(&fixture).render();
        assert!(!text.contains("venue:"));
        assert!(!text.contains("[LIVE]"));
    }

    #[test]
    fn test_render_view_states() {
        let loading = FixtureView::loading();
        assert_eq!(render_view(&loading), "Loading fixtures...\n");

        let view = loading.reduce(FilterAction::LoadBatch(vec![arsenal_chelsea()]));
        let text = render_view(&view);
        assert!(text.contains("1 fixtures found"));
        assert!(text.contains("Arsenal"));

        let empty = view.reduce(FilterAction::SelectCountry("Spain".to_string()));
        let text = render_view(&empty);
        assert!(text.contains("0 fixtures found"));
        assert!(text.contains("No fixtures found"));
        assert!(text.contains("filters:"));
    }
}
