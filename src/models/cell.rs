use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid coordinate. Two cells may share a letter but never a position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if two positions are adjacent (including diagonals).
    /// A position is never adjacent to itself.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }
}

/// Selection styling of a cell while a word is being traced
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CellStyle {
    #[default]
    Default,
    /// Most recently added cell of the path
    Head,
    /// Earlier cell of the path
    Trail,
}

impl CellStyle {
    /// (fill, text) colors the frontend paints for this style
    pub fn colors(self) -> (&'static str, &'static str) {
        match self {
            CellStyle::Default => ("white", "black"),
            CellStyle::Head => ("light green", "forest green"),
            CellStyle::Trail => ("powder blue", "blue"),
        }
    }
}

impl fmt::Display for CellStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellStyle::Default => "default",
            CellStyle::Head => "head",
            CellStyle::Trail => "trail",
        };
        f.write_str(name)
    }
}

/// One lettered square of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    letter: String,
    style: CellStyle,
}

impl Cell {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            letter: String::new(),
            style: CellStyle::Default,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Upper-case face text, `""` when blank
    pub fn letter(&self) -> &str {
        &self.letter
    }

    pub fn set_letter(&mut self, letter: impl Into<String>) {
        self.letter = letter.into().to_uppercase();
    }

    pub fn style(&self) -> CellStyle {
        self.style
    }

    pub fn set_style(&mut self, style: CellStyle) {
        self.style = style;
    }

    pub fn is_selected(&self) -> bool {
        self.style != CellStyle::Default
    }

    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.position.is_adjacent(&other.position)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cell({}, {}, '{}', {})",
            self.position.col, self.position.row, self.letter, self.style
        )
    }
}
