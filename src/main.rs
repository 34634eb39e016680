use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fixture_proxy::api::AllSportsClient;
use fixture_proxy::config::Config;
use fixture_proxy::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fixture_proxy=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting fixture-proxy");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded");

    let client = AllSportsClient::new(&config.api_base_url, &config.api_key);
    let state = AppState::new(client, config.lookahead_days);

    let addr = config.listen_addr();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        result = server::serve(state, &addr) => {
            result?;
        }
    }

    info!("Shutting down fixture-proxy");
    Ok(())
}
