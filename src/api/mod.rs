//! REST API endpoints.
//!
//! Axum-based HTTP API through which a front end drives the draft:
//! ranked views, search, configuration changes and picks.

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::models::PlacementError;
use crate::session::DraftError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<DraftError> for ApiError {
    fn from(err: DraftError) -> Self {
        let message = err.to_string();
        match err {
            DraftError::UnknownPlayer(_) => ApiError::NotFound(message),
            DraftError::Placement(PlacementError::UnknownTeam(_)) => ApiError::NotFound(message),
            DraftError::AlreadyDrafted(_) => ApiError::Conflict(message),
            DraftError::Placement(PlacementError::SlotFull { .. }) => ApiError::Conflict(message),
            DraftError::Placement(PlacementError::Ineligible { .. }) => {
                ApiError::BadRequest(message)
            }
            DraftError::InvalidLeague(_) => ApiError::BadRequest(message),
        }
    }
}

/// Default page size for ranked views; the board shows the top 100.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: u32 = 500;

/// A 1-based page window over a ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Pagination {
    /// Missing values take defaults; out-of-range values are pulled into bounds.
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.page_size as usize
    }

    /// Slice one page out of `items` and describe where it sits.
    pub fn apply<T>(&self, items: Vec<T>) -> (Vec<T>, PaginationMeta) {
        let total_items = items.len();
        let total_pages = total_items.div_ceil(self.page_size as usize);
        let meta = PaginationMeta {
            page: self.page,
            page_size: self.page_size,
            total_items,
            total_pages,
            has_next: (self.page as usize) < total_pages,
            has_prev: self.page > 1,
        };

        let page = items
            .into_iter()
            .skip(self.offset())
            .take(self.page_size as usize)
            .collect();
        (page, meta)
    }
}

/// Where a page sits in the full list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// CORS policy for the configured origin; `*` allows any origin.
pub fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origin == "*" {
        return layer.allow_origin(Any);
    }

    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(_) => {
            warn!("Ignoring invalid CORS origin: {}", origin);
            layer
        }
    }
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/rankings", get(routes::rankings::list_rankings))
        .route("/api/search", get(routes::rankings::search_players))
        .route("/api/model", get(routes::rankings::model_info))
        .route(
            "/api/settings",
            get(routes::settings::get_settings).put(routes::settings::set_model_settings),
        )
        .route("/api/league", put(routes::settings::set_league_config))
        .route(
            "/api/draft",
            get(routes::draft::draft_summary).post(routes::draft::mark_drafted),
        )
        .route("/api/board", get(routes::draft::get_board))
        .route("/api/board/picks", post(routes::draft::draft_to_team))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
