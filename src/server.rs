//! HTTP surface of the proxy: `GET /fixtures` and `GET /health`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use chrono::{Days, NaiveDate, Utc};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::api::AllSportsClient;
use crate::models::FixtureBatch;
use crate::normalizer::normalize;

/// Shared state for route handlers
#[derive(Clone)]
pub struct AppState {
    client: Arc<AllSportsClient>,
    lookahead_days: u32,
}

impl AppState {
    pub fn new(client: AllSportsClient, lookahead_days: u32) -> Self {
        Self {
            client: Arc::new(client),
            lookahead_days,
        }
    }
}

/// Errors surfaced to callers of the proxy
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("failed to fetch fixtures: {0:#}")]
    Upstream(#[from] anyhow::Error),

    #[error("look-ahead of {0} days is out of the calendar range")]
    Window(u32),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        error!("Error fetching fixtures: {}", self);

        let body = Json(serde_json::json!({ "error": "Failed to fetch fixtures." }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Calendar window `[today, today + days]`, `None` past the last representable date
pub fn lookahead_window(today: NaiveDate, days: u32) -> Option<(NaiveDate, NaiveDate)> {
    let end = today.checked_add_days(Days::new(u64::from(days)))?;
    Some((today, end))
}

/// Build the proxy router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/fixtures", get(fixtures_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(state: AppState, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;

    info!(addr = %addr, "Fixture proxy listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}

// -- Route Handlers --

async fn fixtures_handler(
    State(state): State<AppState>,
) -> Result<Json<FixtureBatch>, ProxyError> {
    let (from, to) = lookahead_window(Utc::now().date_naive(), state.lookahead_days)
        .ok_or(ProxyError::Window(state.lookahead_days))?;

    let raw = state.client.fetch_fixtures(from, to).await?;
    let batch = normalize(raw);

    if let FixtureBatch::Fixtures(fixtures) = &batch {
        info!("Serving {} fixtures", fixtures.len());
    }

    Ok(Json(batch))
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookahead_window() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let (from, to) = lookahead_window(today, 15).unwrap();

        assert_eq!(from.to_string(), "2026-10-18");
        assert_eq!(to.to_string(), "2026-11-02");
    }

    #[test]
    fn test_lookahead_window_crosses_year() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 20).unwrap();
        let (_, to) = lookahead_window(today, 15).unwrap();

        assert_eq!(to.to_string(), "2027-01-04");
    }

    #[test]
    fn test_lookahead_window_overflow_is_none() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(lookahead_window(today, u32::MAX), None);
        assert_eq!(lookahead_window(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn test_error_response_is_generic() {
        let response = ProxyError::from(anyhow::anyhow!("connection refused")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ProxyError::Window(u32::MAX).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
