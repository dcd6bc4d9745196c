use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CellStyle, Position};
use crate::game::grid::{GridGeometry, Rect};

/// Wire view of one cell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CellView {
    pub position: Position,
    pub letter: String,
    pub style: CellStyle,
    pub selected: bool,
    pub fill_color: String,
    pub text_color: String,
}

/// Everything the frontend needs to redraw a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub game_id: Uuid,
    pub geometry: GridGeometry,
    pub reset_button: Rect,
    pub exit_button: Rect,
    /// Row-major
    pub cells: Vec<CellView>,
    pub path: Vec<Position>,
    pub in_progress: String,
    pub found_words: Vec<String>,
    pub found_words_text: String,
    pub status: String,
    pub score: u32,
    pub scoring_enabled: bool,
    pub started_at: DateTime<Utc>,
}
