//! HTTP route handlers.

use std::path::Path as FsPath;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
};
use chrono::Local;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::domain::{minutes_of_day, parse_clock};
use crate::planner::{
    DepartAfter, FixedDestinationRequest, OpenDestinationRequest, RoundTripPlanner, SearchError,
};

use super::dto::*;
use super::options::{DEFAULT_DEPART_AFTER, DEFAULT_RETURN_LIMIT, time_options};
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static front-end directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/lines", get(list_lines))
        .route("/api/lines/:line/stations", get(line_stations))
        .route("/api/time-options", get(get_time_options))
        .route("/api/round-trips/fixed", get(search_fixed))
        .route("/api/round-trips/open", get(search_open))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Send browsers to the front end.
async fn index() -> Redirect {
    Redirect::to("/static/index.html")
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All lines in display order.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .timetables
        .lines()
        .iter()
        .map(LineResult::from_line)
        .collect();

    Json(LinesResponse { lines })
}

/// Canonical stations of one line, for the station pickers.
async fn line_stations(
    State(state): State<AppState>,
    Path(line): Path<String>,
) -> Result<Json<StationsResponse>, AppError> {
    let line = state
        .timetables
        .line(&line)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown line: {}", line),
        })?;

    Ok(Json(StationsResponse::from_line(line)))
}

/// Time picker choices and defaults.
async fn get_time_options() -> Json<TimeOptionsResponse> {
    Json(time_options())
}

/// Round trips between two chosen stations.
async fn search_fixed(
    State(state): State<AppState>,
    Query(req): Query<FixedSearchRequest>,
) -> Result<Json<RoundTripResponse>, AppError> {
    let min_stay = state.config.fixed_min_stay(req.min_stay.as_deref());
    let request = FixedDestinationRequest::new(req.line, req.origin, req.destination, min_stay);

    let planner = RoundTripPlanner::new(&state.timetables, &state.config);
    let outcome = planner.search_fixed(&request)?;

    info!(
        line = %request.line,
        origin = request.origin_pos,
        destination = request.dest_pos,
        patterns = outcome.summary().map_or(0, |s| s.count()),
        "fixed-destination search"
    );

    Ok(Json(RoundTripResponse::from_outcome(&outcome)))
}

/// Round trips from one station to anywhere on its line.
async fn search_open(
    State(state): State<AppState>,
    Query(req): Query<OpenSearchRequest>,
) -> Result<Json<RoundTripResponse>, AppError> {
    let depart_after = req.depart_after.as_deref().unwrap_or(DEFAULT_DEPART_AFTER);
    let depart_after = DepartAfter::parse(depart_after).map_err(|e| AppError::BadRequest {
        message: format!("Invalid depart_after {:?}: {}", depart_after, e),
    })?;

    let return_limit = req.return_limit.as_deref().unwrap_or(DEFAULT_RETURN_LIMIT);
    let return_limit_mins = parse_clock(return_limit).map_err(|e| AppError::BadRequest {
        message: format!("Invalid return_limit {:?}: {}", return_limit, e),
    })?;

    let now_mins = minutes_of_day(Local::now().time());
    let request =
        OpenDestinationRequest::new(req.line, req.origin, depart_after, return_limit_mins);

    let planner = RoundTripPlanner::new(&state.timetables, &state.config);
    let outcome = planner.search_open(&request, now_mins)?;

    info!(
        line = %request.line,
        origin = request.origin_pos,
        patterns = outcome.summary().map_or(0, |s| s.count()),
        "open-destination search"
    );

    Ok(Json(RoundTripResponse::from_outcome(&outcome)))
}

// Error handling

/// Error returned from a handler, converted to a JSON error response.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::UnknownLine(_) => AppError::NotFound {
                message: e.to_string(),
            },
            SearchError::InvalidRequest(msg) => AppError::BadRequest { message: msg },
            SearchError::Time(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
