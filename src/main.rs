mod config;
mod dictionary;
mod error;
mod game;
mod models;
mod routes;
mod websocket;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use config::Config;
use dashmap::DashMap;
use dictionary::Dictionary;
use game::BoggleGame;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// How often idle games are swept
pub const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup, read-only afterwards
    pub dictionary: Arc<Dictionary>,
    pub games: DashMap<Uuid, GameSession>,
}

/// A game owned by one websocket connection
pub struct GameSession {
    pub game: BoggleGame,
    pub last_activity: Instant,
}

impl GameSession {
    pub fn is_idle(&self, now: Instant, timeout: Duration) -> bool {
        now.duration_since(self.last_activity) > timeout
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Boggle backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // A game cannot run without its word list
    let dictionary = Dictionary::load(&config.game.dictionary_path)
        .await
        .with_context(|| {
            format!(
                "Download a word list to {} (or set DICTIONARY_PATH)",
                config.game.dictionary_path
            )
        })?;

    let state = Arc::new(AppState {
        config: config.clone(),
        dictionary: Arc::new(dictionary),
        games: DashMap::new(),
    });

    // Spawn background task to drop games nobody is playing
    let sweep_state = state.clone();
    tokio::spawn(async move {
        session_sweep_task(sweep_state).await;
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Serve frontend static files
    let frontend_service = ServeDir::new(&config.server.frontend_dir);

    let app = routes::create_routes()
        .fallback_service(frontend_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Game frontend: http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Background task that periodically removes games idle past the configured timeout
async fn session_sweep_task(state: Arc<AppState>) {
    let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
    let timeout = state.config.game.session_idle_timeout();

    loop {
        interval.tick().await;
        let removed = sweep_idle_sessions(&state, Instant::now(), timeout);
        if removed > 0 {
            tracing::info!("Removed {} idle games", removed);
        }
    }
}

/// Drop every session idle longer than `timeout`; returns how many were removed
fn sweep_idle_sessions(state: &AppState, now: Instant, timeout: Duration) -> usize {
    let before = state.games.len();
    state
        .games
        .retain(|_, session| !session.is_idle(now, timeout));
    before.saturating_sub(state.games.len())
}
