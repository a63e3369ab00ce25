//! HTTP route handlers.
//!
//! Every handler runs the pipeline afresh and renders its envelope. Error
//! envelopes are still HTTP 200: clients tell success from failure by the
//! `error` key.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::pipeline::{DepartureBoard, Envelope, RawBoard, TransitProvider};

use super::state::AppState;
use super::templates::{BoardTemplate, BoardView};

/// Create the application router.
///
/// When `static_dir` is given, its files are served under `/static`.
pub fn create_router<P: TransitProvider + 'static>(
    state: AppState<P>,
    static_dir: Option<&Path>,
) -> Router {
    let router = Router::new()
        .route("/", get(index_page::<P>))
        .route("/health", get(health))
        .route("/api/departures", get(api_departures::<P>))
        .route("/raw", get(raw_departures::<P>));

    let router = match static_dir {
        Some(dir) => router.nest_service("/static", ServeDir::new(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// HTML departure board.
async fn index_page<P: TransitProvider>(
    State(state): State<AppState<P>>,
) -> Result<Html<String>, AppError> {
    let envelope = state.pipeline.board().await;
    let template = BoardTemplate {
        board: BoardView::from_envelope(&envelope, state.pipeline.config()),
    };
    Ok(Html(template.render()?))
}

/// Formatted departures as JSON.
async fn api_departures<P: TransitProvider>(
    State(state): State<AppState<P>>,
) -> Json<Envelope<DepartureBoard>> {
    Json(state.pipeline.board().await)
}

/// Unformatted departures as JSON, for iOS Shortcuts and other automation.
async fn raw_departures<P: TransitProvider>(
    State(state): State<AppState<P>>,
) -> Json<Envelope<RawBoard>> {
    Json(state.pipeline.raw_board().await)
}

/// Application error type.
///
/// Pipeline failures never end up here; they are rendered as error
/// envelopes. This covers failures of the web layer itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
