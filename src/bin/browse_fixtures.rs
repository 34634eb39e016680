use std::env;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fixture_proxy::api::ProxyClient;
use fixture_proxy::card::render_view;
use fixture_proxy::matching::{latest_fixtures, FixtureView, FIXTURE_DISPLAY_LIMIT};
use fixture_proxy::models::{FilterAction, FixtureBatch};

const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "browse_fixtures=info,fixture_proxy=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse arguments
    let args: Vec<String> = env::args().collect();
    let actions = parse_filters(&args)?;

    dotenvy::dotenv().ok();
    let backend_url = env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

    let client = ProxyClient::new(&backend_url);
    let mut view = FixtureView::loading();

    view = match client.fetch_fixtures().await {
        Ok(FixtureBatch::Fixtures(fixtures)) => {
            let fixtures = latest_fixtures(fixtures, FIXTURE_DISPLAY_LIMIT);
            info!("Loaded {} fixtures", fixtures.len());
            view.reduce(FilterAction::LoadBatch(fixtures))
        }
        Ok(FixtureBatch::NoResults { message }) => {
            info!("{}", message);
            view.reduce(FilterAction::LoadBatch(Vec::new()))
        }
        Err(e) => {
            error!("Error fetching fixtures: {:#}", e);
            view.reduce(FilterAction::LoadFailed)
        }
    };

    for action in actions {
        view = view.reduce(action);
    }

    if !view.leagues().is_empty() {
        println!("Leagues: {}", view.leagues().join(", "));
    }
    if !view.countries().is_empty() {
        println!("Countries: {}", view.countries().join(", "));
    }
    print!("{}", render_view(&view));

    Ok(())
}

/// Translate `--search`, `--league`, `--country` and `--live` into view actions
fn parse_filters(args: &[String]) -> Result<Vec<FilterAction>> {
    let mut actions = Vec::new();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("{} requires a value", flag))
        };

        match arg.as_str() {
            "--search" => actions.push(FilterAction::SetSearch(value("--search")?)),
            "--league" => actions.push(FilterAction::SelectLeague(value("--league")?)),
            "--country" => actions.push(FilterAction::SelectCountry(value("--country")?)),
            "--live" => actions.push(FilterAction::SetLiveOnly(true)),
            other => anyhow::bail!(
                "Unknown argument {}. Usage: browse_fixtures [--search TERM] [--league NAME] [--country NAME] [--live]",
                other
            ),
        }
    }

    Ok(actions)
}
