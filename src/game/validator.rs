use std::sync::Arc;

use super::board::BoggleBoard;
use crate::{dictionary::Dictionary, models::Position};

/// Dictionary lookups for committed paths
#[derive(Debug, Clone)]
pub struct WordValidator {
    dictionary: Arc<Dictionary>,
}

impl WordValidator {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    /// Words are compared in upper case everywhere
    pub fn normalize(word: &str) -> String {
        word.trim().to_uppercase()
    }

    /// Check if word exists in dictionary
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.dictionary.contains(&Self::normalize(word))
    }

    /// Validate that positions form a legal path: non-empty, every step
    /// adjacent to the one before it, no position repeated.
    pub fn is_valid_path(positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        if !positions.windows(2).all(|pair| pair[0].is_adjacent(&pair[1])) {
            return false;
        }

        positions
            .iter()
            .enumerate()
            .all(|(i, pos)| !positions[..i].contains(pos))
    }

    /// Extract the upper-case word spelled by positions on the board
    pub fn extract_word(board: &BoggleBoard, positions: &[Position]) -> String {
        let word: String = positions
            .iter()
            .filter_map(|pos| board.cell(*pos))
            .map(|cell| cell.letter())
            .collect();
        Self::normalize(&word)
    }
}
