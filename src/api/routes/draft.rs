use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{DraftBoard, Pick, PlayerId, RosterSlot};
use crate::session::DraftSummary;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkDraftedRequest {
    pub player_id: PlayerId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPickRequest {
    pub player_id: PlayerId,
    pub team: String,
    pub slot: RosterSlot,
}

pub async fn draft_summary(State(state): State<AppState>) -> Json<DraftSummary> {
    Json(state.session.read().await.draft_summary())
}

pub async fn mark_drafted(
    State(state): State<AppState>,
    Json(req): Json<MarkDraftedRequest>,
) -> Result<(StatusCode, Json<Pick>), ApiError> {
    let pick = state.session.write().await.mark_drafted(req.player_id)?;
    Ok((StatusCode::CREATED, Json(pick)))
}

pub async fn get_board(State(state): State<AppState>) -> Json<DraftBoard> {
    Json(state.session.read().await.board().clone())
}

/// Place a player on a team board; the pick and rescore happen under one lock.
pub async fn draft_to_team(
    State(state): State<AppState>,
    Json(req): Json<BoardPickRequest>,
) -> Result<(StatusCode, Json<Pick>), ApiError> {
    let pick = state
        .session
        .write()
        .await
        .draft_to_team(req.player_id, &req.team, req.slot)?;
    Ok((StatusCode::CREATED, Json(pick)))
}
