//! HTTP route handlers for the Câmara Radar API.

use std::any::Any;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::briefing::{DaySummary, SpokenSummary};

use super::state::{AppState, ConfigReport};

/// Spoken when the daily or latest-day summary fails.
pub const INFORMATION_APOLOGY: &str = "Desculpe, ocorreu um erro ao buscar as informações.";
/// Spoken when the recent-sessions summary fails.
pub const SESSIONS_APOLOGY: &str = "Desculpe, ocorreu um erro ao buscar as sessões.";

/// Create the API router with all routes.
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/debug/config", get(debug_config))
        .route(
            "/api/resumo",
            get(daily_summary).layer(CatchPanicLayer::custom(ApologyOnPanic(INFORMATION_APOLOGY))),
        )
        .route(
            "/api/sessoes",
            get(sessions_summary).layer(CatchPanicLayer::custom(ApologyOnPanic(SESSIONS_APOLOGY))),
        )
        .route(
            "/api/ultimo-dia",
            get(latest_day_summary)
                .layer(CatchPanicLayer::custom(ApologyOnPanic(INFORMATION_APOLOGY))),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Which settings are present, without their values.
async fn debug_config(State(state): State<Arc<AppState>>) -> Json<ConfigReport> {
    Json(state.config_report.clone())
}

/// Today's sessions, falling back to yesterday's.
async fn daily_summary(State(state): State<Arc<AppState>>) -> Json<SpokenSummary> {
    Json(state.briefing.daily_summary(Utc::now()).await)
}

/// Sessions of the last three days.
async fn sessions_summary(State(state): State<Arc<AppState>>) -> Json<SpokenSummary> {
    Json(state.briefing.sessions_summary(Utc::now()).await)
}

/// Sessions of the most recent day with records.
async fn latest_day_summary(State(state): State<Arc<AppState>>) -> Json<DaySummary> {
    Json(state.briefing.single_day_summary().await)
}

/// Body of a failed summary request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Apology the assistant reads out.
    pub texto_alexa: String,
    /// What went wrong.
    pub error: String,
}

/// Turns a handler panic into a 500 carrying a spoken apology.
#[derive(Clone, Copy, Debug)]
struct ApologyOnPanic(&'static str);

impl ResponseForPanic for ApologyOnPanic {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response {
        let error = panic_message(&*err);
        tracing::error!("summary handler failed: {error}");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                texto_alexa: self.0.to_string(),
                error,
            }),
        )
            .into_response()
    }
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    err.downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|message| (*message).to_string()))
        .unwrap_or_else(|| "unknown error".to_string())
}
