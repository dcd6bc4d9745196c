use anyhow::{Context, Result};
use serde::Deserialize;
use std::{env, str::FromStr, time::Duration};

use crate::game::{GameOptions, GridGeometry};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub scoring_enabled: bool,
    pub x_inset: f64,
    pub y_inset: f64,
    pub cell_size: f64,
    pub session_idle_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            frontend_dir: env::var("FRONTEND_DIR").unwrap_or_else(|_| "./frontend".to_string()),
        };

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./bogwords.txt".to_string()),
            scoring_enabled: parse_or("BOGGLE_SCORING", true)?,
            x_inset: parse_or("BOARD_X_INSET", 50.0)?,
            y_inset: parse_or("BOARD_Y_INSET", 50.0)?,
            cell_size: parse_or("BOARD_CELL_SIZE", 50.0)?,
            session_idle_timeout_secs: parse_or("SESSION_IDLE_TIMEOUT_SECS", 900)?,
        };

        if game.cell_size <= 0.0 {
            anyhow::bail!("BOARD_CELL_SIZE must be positive");
        }

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl GameConfig {
    pub fn game_options(&self) -> GameOptions {
        GameOptions {
            geometry: GridGeometry {
                x_inset: self.x_inset,
                y_inset: self.y_inset,
                cell_size: self.cell_size,
                ..GridGeometry::default()
            },
            scoring_enabled: self.scoring_enabled,
        }
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }
}

/// Read an optional variable, falling back to `default` when unset
fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", key, value)),
        Err(_) => Ok(default),
    }
}
