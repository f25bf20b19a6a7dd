//! One-shot player data loading.
//!
//! Reads the player pool from an http(s) URL or a local JSON file and
//! validates every record. A load either yields a complete, valid pool or
//! fails; there is no retry and no partial result.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info};
use url::Url;

use crate::config::FetchConfig;
use crate::models::{Player, PlayerError, PlayerId};

/// Errors that can occur while loading players.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Content too large: {size} bytes (max {max_size})")]
    ContentTooLarge { size: usize, max_size: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid player record: {0}")]
    InvalidPlayer(#[from] PlayerError),

    #[error("Duplicate player id: {0}")]
    DuplicatePlayer(PlayerId),

    #[error("Player data is empty")]
    Empty,
}

/// Where player data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerSource {
    Url(Url),
    File(PathBuf),
}

impl PlayerSource {
    /// Interpret `http://` and `https://` strings as URLs, anything else as a path.
    pub fn parse(s: &str) -> Self {
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => PlayerSource::Url(url),
            _ => PlayerSource::File(PathBuf::from(s)),
        }
    }
}

impl std::fmt::Display for PlayerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerSource::Url(url) => write!(f, "{}", url),
            PlayerSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse and validate a JSON array of player records.
pub fn parse_players(bytes: &[u8]) -> Result<Vec<Player>, LoadError> {
    let players: Vec<Player> = serde_json::from_slice(bytes)?;
    if players.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut seen = HashSet::with_capacity(players.len());
    for player in &players {
        player.validate()?;
        if !seen.insert(player.id) {
            return Err(LoadError::DuplicatePlayer(player.id));
        }
    }

    Ok(players)
}

/// Loads the player pool.
pub struct PlayerLoader {
    client: Client,
    max_content_bytes: usize,
}

impl PlayerLoader {
    pub fn new(config: &FetchConfig) -> Result<Self, LoadError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("draft-assistant/0.1.0")),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            max_content_bytes: config.max_content_bytes,
        })
    }

    /// Create a loader with default configuration.
    pub fn with_defaults() -> Result<Self, LoadError> {
        Self::new(&FetchConfig::default())
    }

    /// Load and validate players from `source`.
    pub async fn load(&self, source: &PlayerSource) -> Result<Vec<Player>, LoadError> {
        info!("Loading players from {}", source);

        let bytes = match source {
            PlayerSource::Url(url) => self.fetch_url(url).await?,
            PlayerSource::File(path) => self.read_file(path).await?,
        };

        let players = parse_players(&bytes)?;
        info!("Loaded {} players", players.len());
        Ok(players)
    }

    async fn fetch_url(&self, url: &Url) -> Result<Vec<u8>, LoadError> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        if let Some(len) = response.content_length() {
            self.check_size(len as usize)?;
        }

        let bytes = response.bytes().await?;
        self.check_size(bytes.len())?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, LoadError> {
        let io_err = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let meta = fs::metadata(path).await.map_err(io_err)?;
        self.check_size(meta.len() as usize)?;

        let bytes = fs::read(path).await.map_err(io_err)?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(bytes)
    }

    fn check_size(&self, size: usize) -> Result<(), LoadError> {
        if size > self.max_content_bytes {
            return Err(LoadError::ContentTooLarge {
                size,
                max_size: self.max_content_bytes,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeagueConfig, ModelSettings, Position};
    use crate::session::DraftSession;
    use std::io::Write;

    const PLAYERS_JSON: &str = r#"[
        {
            "id": 1, "name": "Christian McCaffrey", "position": "RB", "team": "SF",
            "stats": {"gamesPlayed": 16, "totalPoints": 356.4, "averagePoints": 22.3, "consistency": 0.85},
            "injury": {"gamesInjured": 1, "injuryHistory": ["Achilles"], "riskScore": 0.45}
        },
        {
            "id": 2, "name": "Travis Kelce", "position": "TE", "team": "KC",
            "stats": {"gamesPlayed": 17, "totalPoints": 210.0, "averagePoints": 12.35, "consistency": 0.78},
            "injury": {"gamesInjured": 0, "injuryHistory": [], "riskScore": 0.22}
        }
    ]"#;

    #[test]
    fn test_parse_players() {
        let players = parse_players(PLAYERS_JSON.as_bytes()).unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].position, Position::Rb);
        assert_eq!(players[0].injury.injury_history, vec!["Achilles".to_string()]);
        assert_eq!(players[1].team, "KC");
    }

    #[test]
    fn test_parse_players_rejects_malformed_json() {
        assert!(matches!(
            parse_players(b"{not json"),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_parse_players_rejects_missing_stats() {
        let json = r#"[{"id": 1, "name": "X", "position": "QB", "team": "NYJ",
            "injury": {"riskScore": 0.1}}]"#;
        assert!(matches!(
            parse_players(json.as_bytes()),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_parse_players_keeps_unscored_positions() {
        let json = PLAYERS_JSON.replace("\"TE\"", "\"LB\"");
        let players = parse_players(json.as_bytes()).unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[1].position, Position::Other);
    }

    #[test]
    fn test_unscored_position_is_ranked_without_baseline() {
        let kicker = r#"{
            "id": 3, "name": "Justin Tucker", "position": "PK", "team": "BAL",
            "stats": {"gamesPlayed": 17, "totalPoints": 140.0, "averagePoints": 8.2, "consistency": 0.9},
            "injury": {"gamesInjured": 0, "injuryHistory": [], "riskScore": 0.05}
        }"#;
        let punter = r#"{
            "id": 4, "name": "Some Punter", "position": "P", "team": "BAL",
            "stats": {"gamesPlayed": 17, "totalPoints": 40.0, "averagePoints": 2.4, "consistency": 0.9},
            "injury": {"gamesInjured": 0, "injuryHistory": [], "riskScore": 0.0}
        }"#;
        let base = parse_players(PLAYERS_JSON.as_bytes()).unwrap();
        let extended = PLAYERS_JSON.replacen(
            "\n    ]",
            &format!(",{}, {}\n    ]", kicker, punter),
            1,
        );
        let players = parse_players(extended.as_bytes()).unwrap();

        assert_eq!(players.len(), 4);
        assert_eq!(players[2].position, Position::K);
        assert_eq!(players[3].position, Position::Other);

        let league = LeagueConfig::default();
        let settings = ModelSettings::default();
        let before = DraftSession::new(base, league.clone(), settings.clone()).unwrap();
        let after = DraftSession::new(players, league, settings).unwrap();

        let punter = after.player(PlayerId::new(4)).unwrap();
        assert!(punter.score.is_finite());
        assert!(punter.score > 0.0);
        assert!(!after.replacement_levels().contains_key(&Position::Other));
        for position in [Position::Qb, Position::Rb, Position::Wr, Position::Te] {
            assert_eq!(
                before.replacement_levels()[&position],
                after.replacement_levels()[&position]
            );
        }
    }

    #[test]
    fn test_parse_players_rejects_out_of_range_values() {
        let json = PLAYERS_JSON.replace("0.78", "1.78");
        assert!(matches!(
            parse_players(json.as_bytes()),
            Err(LoadError::InvalidPlayer(PlayerError::OutOfUnitRange { .. }))
        ));
    }

    #[test]
    fn test_parse_players_rejects_duplicate_ids() {
        let json = PLAYERS_JSON.replace("\"id\": 2", "\"id\": 1");
        assert!(matches!(
            parse_players(json.as_bytes()),
            Err(LoadError::DuplicatePlayer(_))
        ));
    }

    #[test]
    fn test_parse_players_rejects_empty() {
        assert!(matches!(parse_players(b"[]"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_player_source_parse() {
        assert!(matches!(
            PlayerSource::parse("https://example.com/players.json"),
            PlayerSource::Url(_)
        ));
        assert_eq!(
            PlayerSource::parse("data/players.json"),
            PlayerSource::File(PathBuf::from("data/players.json"))
        );
        assert!(matches!(
            PlayerSource::parse("C:\\data\\players.json"),
            PlayerSource::File(_)
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PLAYERS_JSON.as_bytes()).unwrap();

        let loader = PlayerLoader::with_defaults().unwrap();
        let source = PlayerSource::File(file.path().to_path_buf());
        let players = loader.load(&source).await.unwrap();

        assert_eq!(players.len(), 2);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let loader = PlayerLoader::with_defaults().unwrap();
        let source = PlayerSource::File(PathBuf::from("/nonexistent/players.json"));

        assert!(matches!(
            loader.load(&source).await,
            Err(LoadError::Io { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_rejects_oversized_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PLAYERS_JSON.as_bytes()).unwrap();

        let loader = PlayerLoader::new(&FetchConfig {
            max_content_bytes: 16,
            ..Default::default()
        })
        .unwrap();
        let source = PlayerSource::File(file.path().to_path_buf());

        assert!(matches!(
            loader.load(&source).await,
            Err(LoadError::ContentTooLarge { max_size: 16, .. })
        ));
    }
}
