use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{LeagueConfig, ModelSettings};
use crate::session::ModelInfo;

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub league: LeagueConfig,
    pub model: ModelSettings,
}

pub async fn get_settings(State(state): State<AppState>) -> Json<SettingsResponse> {
    let session = state.session.read().await;
    Json(SettingsResponse {
        league: session.league().clone(),
        model: session.settings().clone(),
    })
}

/// Replace the model settings; responds with the rescored model summary.
pub async fn set_model_settings(
    State(state): State<AppState>,
    Json(settings): Json<ModelSettings>,
) -> Json<ModelInfo> {
    let mut session = state.session.write().await;
    session.set_model_settings(settings);
    Json(session.model_info())
}

/// Replace the league configuration. An invalid league leaves the session untouched.
pub async fn set_league_config(
    State(state): State<AppState>,
    Json(league): Json<LeagueConfig>,
) -> Result<Json<ModelInfo>, ApiError> {
    let mut session = state.session.write().await;
    session.set_league_config(league)?;
    Ok(Json(session.model_info()))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::routes::test_support::{get_json, send_json, setup_test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_get_settings_defaults() {
        let app = build_router(setup_test_state());
        let (status, json) = get_json(app, "/api/settings").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["league"]["size"], 12);
        assert_eq!(json["league"]["rosterPositions"]["BENCH"], 6);
        assert_eq!(json["model"]["riskTolerance"], 0.5);
        assert_eq!(json["model"]["positionPriority"], "balanced");
    }

    #[tokio::test]
    async fn test_set_model_settings() {
        let state = setup_test_state();
        let app = build_router(state.clone());
        let (status, json) = send_json(
            app,
            "PUT",
            "/api/settings",
            r#"{"riskTolerance": 0.9, "positionPriority": "RB-heavy"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["riskProfileLabel"], "Aggressive (Ceiling)");

        let session = state.session.read().await;
        assert_eq!(session.settings().risk_tolerance, 0.9);
        assert_eq!(session.settings().vorp_weight, 0.7);
    }

    #[tokio::test]
    async fn test_set_model_settings_rejects_unknown_priority() {
        let app = build_router(setup_test_state());
        let (status, _) = send_json(
            app,
            "PUT",
            "/api/settings",
            r#"{"positionPriority": "TE-heavy"}"#,
        )
        .await;

        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_set_league_config() {
        let state = setup_test_state();
        let app = build_router(state.clone());
        let (status, json) = send_json(
            app,
            "PUT",
            "/api/league",
            r#"{"size": 10, "scoringType": "PPR"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["leagueSize"], 10);
        assert_eq!(json["scoringType"], "PPR");
        assert_eq!(state.session.read().await.board().teams.len(), 10);
    }

    #[tokio::test]
    async fn test_set_league_config_rejects_zero_size() {
        let state = setup_test_state();
        let app = build_router(state.clone());
        let (status, json) = send_json(app, "PUT", "/api/league", r#"{"size": 0}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert_eq!(state.session.read().await.league().size, 12);
    }
}
