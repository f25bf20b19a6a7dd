use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use draft_assistant::api::{build_router, cors_layer, state::AppState};
use draft_assistant::config::AppConfig;
use draft_assistant::fetch::{PlayerLoader, PlayerSource};
use draft_assistant::models::{PlayerId, PositionFilter};
use draft_assistant::session::DraftSession;

#[derive(Parser)]
#[command(name = "draft-assistant")]
#[command(about = "Fantasy football draft assistant with VORP-based rankings")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Player data URL or file, overrides the config file
    #[arg(long)]
    data_source: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current rankings
    Rank {
        /// Position filter (ALL, QB, RB, WR, TE, K, DEF)
        #[arg(long, default_value = "ALL")]
        position: String,

        /// Number of players to show
        #[arg(long, default_value = "25")]
        limit: usize,
    },

    /// Print replacement levels and model settings
    Info,

    /// Draft the top-ranked player repeatedly and show how the board moves
    Simulate {
        /// Number of picks to make
        #[arg(long, default_value = "12")]
        picks: u32,

        /// Players already taken before the simulation starts (comma-separated ids)
        #[arg(long, value_delimiter = ',')]
        drafted: Vec<PlayerId>,
    },

    /// Start the API server
    Serve {
        /// Bind address, overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Port number, overrides the config file
        #[arg(long)]
        port: Option<u16>,
    },
}

fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::info!("No config file at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }
    AppConfig::from_file(path).with_context(|| format!("loading {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is read before tracing starts so its log level can apply
    let config_path = Path::new(&cli.config);
    let config_result = load_config(config_path);
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config_result.as_ref().ok().map(|c| c.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(cli.json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!cli.json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Starting draft-assistant v{}", env!("CARGO_PKG_VERSION"));

    let mut config = config_result?;
    if let Some(source) = cli.data_source {
        config.data_source = source;
    }

    let loader = PlayerLoader::new(&config.fetch)?;
    let source = PlayerSource::parse(&config.data_source);
    let players = loader
        .load(&source)
        .await
        .with_context(|| format!("loading players from {}", source))?;

    let mut session = DraftSession::new(players, config.league.clone(), config.model.clone())?;

    match cli.command {
        Commands::Rank { position, limit } => {
            let filter: PositionFilter = position.parse()?;
            print_rankings(&session, filter, limit);
        }
        Commands::Info => {
            let info = session.model_info();
            println!(
                "League: {} teams, {} scoring",
                info.league_size, info.scoring_type
            );
            println!(
                "Roster: {} players per team",
                session.league().roster_positions.total()
            );
            println!(
                "Risk profile: {} (priority {})",
                info.risk_profile_label,
                session.settings().position_priority
            );
            println!("Replacement levels:");
            for (position, level) in &info.replacement_levels {
                println!("  {:<4} {:>7.1}", position, level);
            }
        }
        Commands::Simulate { picks, drafted } => {
            for id in drafted {
                session.mark_drafted(id)?;
            }
            for _ in 0..picks {
                let Some(top) = session
                    .ranked_players(PositionFilter::All)
                    .first()
                    .map(|r| r.player.id)
                else {
                    tracing::warn!("Player pool exhausted");
                    break;
                };
                let pick = session.mark_drafted(top)?;
                println!(
                    "Pick {:>3}: {} ({}, {})",
                    pick.pick, pick.player_name, pick.position, pick.team
                );
            }
            println!();
            print_rankings(&session, PositionFilter::All, 10);
        }
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(session);
            let app = build_router(state).layer(cors_layer(&config.server.cors_origin));
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Draft assistant API: http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

fn print_rankings(session: &DraftSession, filter: PositionFilter, limit: usize) {
    println!(
        "{:>4}  {:<28} {:<4} {:<4} {:>8} {:>8} {:>8}",
        "Rank", "Player", "Pos", "Team", "Score", "VORP", "Floor"
    );
    for ranked in session.ranked_players(filter).into_iter().take(limit) {
        let player = ranked.player;
        let (vorp, floor) = player
            .advanced_stats
            .as_ref()
            .map(|s| (s.vorp, s.floor))
            .unwrap_or_default();
        println!(
            "{:>4}  {:<28} {:<4} {:<4} {:>8.2} {:>8.1} {:>8.1}{}",
            ranked.rank,
            player.name,
            player.position,
            player.team,
            player.score,
            vorp,
            floor,
            if ranked.high_injury_risk { "  injury risk" } else { "" }
        );
    }
}
