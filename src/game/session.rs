use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    board::BoggleBoard,
    grid::{GridGeometry, Point},
    scorer::Scorer,
    validator::WordValidator,
};
use crate::{
    dictionary::Dictionary,
    models::{BoardSnapshot, CellStyle, CellView, Position},
};

/// Tunables for a new game
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOptions {
    pub geometry: GridGeometry,
    pub scoring_enabled: bool,
}

/// Progress of the word being traced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PathState {
    /// No word in progress
    #[default]
    Idle,
    /// At least one cell selected; the last one is the head
    Building { path: Vec<Position> },
}

impl PathState {
    pub fn path(&self) -> &[Position] {
        match self {
            PathState::Idle => &[],
            PathState::Building { path } => path,
        }
    }

    pub fn head(&self) -> Option<Position> {
        self.path().last().copied()
    }
}

/// What a single click did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click landed outside the grid and controls
    Ignored,
    Started,
    Extended,
    /// Head re-clicked and the word was new and valid
    Found { word: String, points: u32 },
    /// Head re-clicked but the word was unknown or already found
    Rejected { word: String },
    /// Path discarded by a click that could not extend it
    Aborted,
    Reset,
    Exit,
}

impl ClickOutcome {
    pub fn keeps_playing(&self) -> bool {
        !matches!(self, ClickOutcome::Exit)
    }
}

/// A single-player Boggle game: one board, the words found on it, and the
/// path currently being traced.
pub struct BoggleGame {
    id: Uuid,
    board: BoggleBoard,
    validator: WordValidator,
    found_words: Vec<String>,
    state: PathState,
    score: u32,
    scoring_enabled: bool,
    rng: StdRng,
    started_at: DateTime<Utc>,
}

impl BoggleGame {
    pub fn new(dictionary: Arc<Dictionary>, options: GameOptions) -> Self {
        Self::with_rng(dictionary, options, StdRng::from_os_rng())
    }

    /// Create a game drawing all randomness from `rng`
    pub fn with_rng(
        dictionary: Arc<Dictionary>,
        options: GameOptions,
        mut rng: StdRng,
    ) -> Self {
        let board = BoggleBoard::new(options.geometry, &mut rng);
        let id = Uuid::new_v4();
        tracing::info!("Created game {}", id);

        Self {
            id,
            board,
            validator: WordValidator::new(dictionary),
            found_words: Vec::new(),
            state: PathState::Idle,
            score: 0,
            scoring_enabled: options.scoring_enabled,
            rng,
            started_at: Utc::now(),
        }
    }

    /// Process one pointer click. Exit is checked first, then reset, then the grid.
    pub fn click(&mut self, point: Point) -> ClickOutcome {
        let geometry = *self.board.geometry();

        if geometry.in_exit(point) {
            tracing::debug!("Game {}: exit requested", self.id);
            return ClickOutcome::Exit;
        }

        if geometry.in_reset(point) {
            self.reset();
            return ClickOutcome::Reset;
        }

        match self.board.cell_at(point).map(|cell| cell.position()) {
            Some(position) => self.select(position),
            None => ClickOutcome::Ignored,
        }
    }

    /// Advance the path state machine with a click on `position`
    pub fn select(&mut self, position: Position) -> ClickOutcome {
        if self.board.cell(position).is_none() {
            return ClickOutcome::Ignored;
        }

        let head = self.state.head();
        let outcome = match (std::mem::take(&mut self.state), head) {
            (PathState::Building { path }, Some(head)) => {
                if position == head {
                    self.commit(path)
                } else if self.board.are_adjacent(head, position) && !path.contains(&position) {
                    self.extend_word(path, head, position)
                } else {
                    self.abort()
                }
            }
            _ => self.start_word(position),
        };

        tracing::debug!(
            "Game {}: click at ({}, {}) -> {:?}",
            self.id,
            position.row,
            position.col,
            outcome
        );

        outcome
    }

    fn start_word(&mut self, position: Position) -> ClickOutcome {
        self.board.set_style(position, CellStyle::Head);
        self.append_letter(position);
        self.state = PathState::Building {
            path: vec![position],
        };
        ClickOutcome::Started
    }

    fn extend_word(
        &mut self,
        mut path: Vec<Position>,
        head: Position,
        position: Position,
    ) -> ClickOutcome {
        self.board.set_style(head, CellStyle::Trail);
        self.board.set_style(position, CellStyle::Head);
        self.append_letter(position);
        path.push(position);
        self.state = PathState::Building { path };
        ClickOutcome::Extended
    }

    fn commit(&mut self, path: Vec<Position>) -> ClickOutcome {
        debug_assert!(WordValidator::is_valid_path(&path));
        let word = WordValidator::extract_word(&self.board, &path);

        let outcome = if self.validator.is_valid_word(&word) && !self.is_found(&word) {
            let points = if self.scoring_enabled {
                Scorer::score_word(&word)
            } else {
                0
            };
            self.record_word(word.clone(), points);
            tracing::info!("Game {}: found {} for {} points", self.id, word, points);
            ClickOutcome::Found { word, points }
        } else {
            ClickOutcome::Rejected { word }
        };

        self.clear_path();
        outcome
    }

    fn abort(&mut self) -> ClickOutcome {
        self.clear_path();
        ClickOutcome::Aborted
    }

    fn record_word(&mut self, word: String, points: u32) {
        self.found_words.push(word);
        self.board.display_mut().found_words = self.found_words.join("\n");

        if self.scoring_enabled {
            self.score += points;
            self.board.display_mut().status = format!("Score: {}", self.score);
        }
    }

    fn append_letter(&mut self, position: Position) {
        let letter = self
            .board
            .cell(position)
            .map(|cell| cell.letter().to_lowercase())
            .unwrap_or_default();
        self.board.display_mut().in_progress.push_str(&letter);
    }

    fn clear_path(&mut self) {
        self.board.display_mut().in_progress.clear();
        self.board.reset_visual();
        self.state = PathState::Idle;
    }

    /// Forget found words and score, drop any path and reshake the board
    pub fn reset(&mut self) {
        self.found_words.clear();
        self.score = 0;
        self.state = PathState::Idle;
        self.board.reset(&mut self.rng);
        tracing::info!("Game {}: reset", self.id);
    }

    pub fn is_found(&self, word: &str) -> bool {
        let word = WordValidator::normalize(word);
        self.found_words.iter().any(|found| *found == word)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn board(&self) -> &BoggleBoard {
        &self.board
    }

    pub fn state(&self) -> &PathState {
        &self.state
    }

    pub fn path(&self) -> &[Position] {
        self.state.path()
    }

    /// Upper-case, in discovery order
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn scoring_enabled(&self) -> bool {
        self.scoring_enabled
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let geometry = *self.board.geometry();
        let display = self.board.display();

        let cells = self
            .board
            .cells()
            .iter()
            .map(|cell| {
                let (fill, text) = cell.style().colors();
                CellView {
                    position: cell.position(),
                    letter: cell.letter().to_string(),
                    style: cell.style(),
                    selected: cell.is_selected(),
                    fill_color: fill.to_string(),
                    text_color: text.to_string(),
                }
            })
            .collect();

        BoardSnapshot {
            game_id: self.id,
            geometry,
            reset_button: geometry.reset_rect(),
            exit_button: geometry.exit_rect(),
            cells,
            path: self.path().to_vec(),
            in_progress: display.in_progress.clone(),
            found_words: self.found_words.clone(),
            found_words_text: display.found_words.clone(),
            status: display.status.clone(),
            score: self.score,
            scoring_enabled: self.scoring_enabled,
            started_at: self.started_at,
        }
    }
}
