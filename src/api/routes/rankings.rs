use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{ApiError, Pagination, PaginationMeta};
use crate::models::{Player, PositionFilter, UnknownPosition};
use crate::session::{ModelInfo, DEFAULT_SEARCH_LIMIT};

#[derive(Debug, Deserialize)]
pub struct RankingsParams {
    pub position: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub rank: usize,
    pub high_injury_risk: bool,
    #[serde(flatten)]
    pub player: Player,
}

#[derive(Debug, Serialize)]
pub struct RankingsResponse {
    pub position: String,
    pub players: Vec<RankingEntry>,
    pub pagination: PaginationMeta,
}

fn parse_filter(position: Option<&str>) -> Result<PositionFilter, ApiError> {
    position
        .unwrap_or("ALL")
        .parse()
        .map_err(|e: UnknownPosition| ApiError::BadRequest(e.to_string()))
}

pub async fn list_rankings(
    State(state): State<AppState>,
    Query(params): Query<RankingsParams>,
) -> Result<Json<RankingsResponse>, ApiError> {
    let filter = parse_filter(params.position.as_deref())?;
    let pagination = Pagination::new(params.page, params.page_size);

    let session = state.session.read().await;
    let entries: Vec<RankingEntry> = session
        .ranked_players(filter)
        .into_iter()
        .map(|r| RankingEntry {
            rank: r.rank,
            high_injury_risk: r.high_injury_risk,
            player: r.player.clone(),
        })
        .collect();
    let (players, meta) = pagination.apply(entries);

    Ok(Json(RankingsResponse {
        position: filter.to_string(),
        players,
        pagination: meta,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub players: Vec<Player>,
}

pub async fn search_players(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let term = params.q.unwrap_or_default();
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).clamp(1, 50);

    let session = state.session.read().await;
    let players = session
        .search(&term, limit)
        .into_iter()
        .cloned()
        .collect();

    Json(SearchResponse { players })
}

pub async fn model_info(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(state.session.read().await.model_info())
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::routes::test_support::{get_json, setup_test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_rankings_all() {
        let app = build_router(setup_test_state());
        let (status, json) = get_json(app, "/api/rankings").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["position"], "ALL");
        let players = json["players"].as_array().unwrap();
        assert_eq!(players.len(), 16);
        assert_eq!(players[0]["rank"], 1);
        assert!(players[0]["advancedStats"]["floor"].is_number());

        let scores: Vec<f64> = players
            .iter()
            .map(|p| p["score"].as_f64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_list_rankings_position_filter() {
        let app = build_router(setup_test_state());
        let (status, json) = get_json(app, "/api/rankings?position=rb").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["position"], "RB");
        let players = json["players"].as_array().unwrap();
        assert_eq!(players.len(), 4);
        assert!(players.iter().all(|p| p["position"] == "RB"));
    }

    #[tokio::test]
    async fn test_list_rankings_pagination() {
        let app = build_router(setup_test_state());
        let (_, json) = get_json(app, "/api/rankings?page=2&page_size=5").await;

        assert_eq!(json["players"].as_array().unwrap().len(), 5);
        assert_eq!(json["players"][0]["rank"], 6);
        assert_eq!(json["pagination"]["totalItems"], 16);
        assert_eq!(json["pagination"]["totalPages"], 4);
    }

    #[tokio::test]
    async fn test_list_rankings_bad_position() {
        let app = build_router(setup_test_state());
        let (status, json) = get_json(app, "/api/rankings?position=LB").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_search_players() {
        let app = build_router(setup_test_state());
        let (status, json) = get_json(app, "/api/search?q=player%201&limit=3").await;

        assert_eq!(status, StatusCode::OK);
        let players = json["players"].as_array().unwrap();
        assert_eq!(players.len(), 3);
        assert!(players
            .iter()
            .all(|p| p["name"].as_str().unwrap().starts_with("Player 1")));
    }

    #[tokio::test]
    async fn test_search_players_empty_term() {
        let app = build_router(setup_test_state());
        let (_, json) = get_json(app, "/api/search").await;
        assert!(json["players"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_model_info() {
        let app = build_router(setup_test_state());
        let (status, json) = get_json(app, "/api/model").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["leagueSize"], 12);
        assert_eq!(json["scoringType"], "halfPPR");
        assert_eq!(json["riskProfileLabel"], "Balanced");
        // 12 teams * 2 QBs per team clamps to the last of four QBs
        assert_eq!(json["replacementLevels"]["QB"], 290.0);
    }
}
