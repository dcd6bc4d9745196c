use rand::{seq::SliceRandom, Rng};
use std::fmt;

use super::grid::{GridGeometry, Point};
use crate::models::{Cell, CellStyle, Position};

/// Boggle is played on a 4x4 board
pub const BOARD_SIZE: usize = 4;
pub const CUBE_FACES: usize = 6;

pub type Cube = [&'static str; CUBE_FACES];

/// The sixteen letter cubes. Only their arrangement and the face showing change
/// between shakes.
pub const CUBES: [Cube; BOARD_SIZE * BOARD_SIZE] = [
    ["A", "A", "C", "I", "O", "T"],
    ["T", "Y", "A", "B", "I", "L"],
    ["J", "M", "O", "QU", "A", "B"],
    ["A", "C", "D", "E", "M", "P"],
    ["A", "C", "E", "L", "S", "R"],
    ["A", "D", "E", "N", "V", "Z"],
    ["A", "H", "M", "O", "R", "S"],
    ["B", "F", "I", "O", "R", "X"],
    ["D", "E", "N", "O", "S", "W"],
    ["D", "K", "N", "O", "T", "U"],
    ["E", "E", "F", "H", "I", "Y"],
    ["E", "G", "I", "N", "T", "V"],
    ["E", "G", "K", "L", "U", "Y"],
    ["E", "H", "I", "N", "P", "S"],
    ["E", "L", "P", "S", "T", "U"],
    ["G", "I", "L", "R", "U", "W"],
];

/// The three text areas drawn around the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayRegions {
    /// Word currently being traced, lower-case
    pub in_progress: String,
    /// Found words, newline-joined in discovery order
    pub found_words: String,
    pub status: String,
}

impl DisplayRegions {
    pub fn clear(&mut self) {
        self.in_progress.clear();
        self.found_words.clear();
        self.status.clear();
    }
}

/// A shaken grid of lettered cells laid out on screen by a [`GridGeometry`]
#[derive(Debug, Clone)]
pub struct BoggleBoard {
    geometry: GridGeometry,
    /// Row-major
    cells: Vec<Cell>,
    /// Cube index that landed on each cell during the last shake
    cube_assignment: Vec<usize>,
    display: DisplayRegions,
}

impl BoggleBoard {
    /// Create a board and give it an initial shake. The geometry's dimensions
    /// are forced to 4x4.
    pub fn new(geometry: GridGeometry, rng: &mut impl Rng) -> Self {
        let geometry = GridGeometry {
            rows: BOARD_SIZE,
            cols: BOARD_SIZE,
            ..geometry
        };

        let cells = (0..geometry.rows)
            .flat_map(|row| {
                (0..geometry.cols).map(move |col| Cell::new(Position::new(row, col)))
            })
            .collect();

        let mut board = Self {
            geometry,
            cells,
            cube_assignment: Vec::with_capacity(CUBES.len()),
            display: DisplayRegions::default(),
        };
        board.shake(rng);
        board
    }

    /// Permute the cubes over the cells and roll a face for each one.
    /// Selection styling is left alone.
    pub fn shake(&mut self, rng: &mut impl Rng) {
        let mut order: Vec<usize> = (0..CUBES.len()).collect();
        order.shuffle(rng);

        for (cell, &cube) in self.cells.iter_mut().zip(&order) {
            let face = rng.random_range(0..CUBE_FACES);
            cell.set_letter(CUBES[cube][face]);
        }

        self.cube_assignment = order;
        tracing::debug!(
            "Shook board with cube order {:?}:\n{}",
            self.cube_assignment,
            self
        );
    }

    /// Unselect every cell without touching letters
    pub fn reset_visual(&mut self) {
        for cell in &mut self.cells {
            cell.set_style(CellStyle::Default);
        }
    }

    /// Blank the board and text areas, then shake again
    pub fn reset(&mut self, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            cell.set_letter("");
            cell.set_style(CellStyle::Default);
        }
        self.display.clear();
        self.shake(rng);
    }

    /// The cell under a screen coordinate, if any
    pub fn cell_at(&self, point: Point) -> Option<&Cell> {
        self.position_at(point).and_then(|position| self.cell(position))
    }

    pub fn position_at(&self, point: Point) -> Option<Position> {
        self.geometry.position_at(point)
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).map(|idx| &self.cells[idx])
    }

    /// Adjacency of the cells at two positions; false if either is off the board
    pub fn are_adjacent(&self, a: Position, b: Position) -> bool {
        match (self.cell(a), self.cell(b)) {
            (Some(first), Some(second)) => first.is_adjacent(second),
            _ => false,
        }
    }

    pub fn set_style(&mut self, position: Position, style: CellStyle) {
        if let Some(idx) = self.index(position) {
            self.cells[idx].set_style(style);
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        (position.row < self.geometry.rows && position.col < self.geometry.cols)
            .then(|| position.row * self.geometry.cols + position.col)
    }

    /// Row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cube_assignment(&self) -> &[usize] {
        &self.cube_assignment
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn display(&self) -> &DisplayRegions {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplayRegions {
        &mut self.display
    }
}

impl fmt::Display for BoggleBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.geometry.cols) {
            for cell in row {
                write!(f, "[{}:{}] ", cell.letter(), cell.style())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn board(seed: u64) -> (BoggleBoard, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = BoggleBoard::new(GridGeometry::default(), &mut rng);
        (board, rng)
    }

    #[test]
    fn test_board_is_four_by_four() {
        let geometry = GridGeometry {
            rows: 7,
            cols: 2,
            ..GridGeometry::default()
        };
        let board = BoggleBoard::new(geometry, &mut StdRng::seed_from_u64(1));
        assert_eq!(board.geometry().rows, 4);
        assert_eq!(board.geometry().cols, 4);
        assert_eq!(board.cells().len(), 16);
    }

    #[test]
    fn test_shake_uses_every_cube_once() {
        let (mut board, mut rng) = board(7);
        for _ in 0..20 {
            board.shake(&mut rng);
            let used: HashSet<usize> = board.cube_assignment().iter().copied().collect();
            assert_eq!(board.cube_assignment().len(), 16);
            assert_eq!(used.len(), 16);
        }
    }

    #[test]
    fn test_shake_letters_come_from_assigned_cube() {
        let (board, _) = board(11);
        for (cell, &cube) in board.cells().iter().zip(board.cube_assignment()) {
            assert!(
                CUBES[cube].contains(&cell.letter()),
                "{} not on cube {:?}",
                cell,
                CUBES[cube]
            );
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let (first, _) = board(42);
        let (second, _) = board(42);
        let letters = |b: &BoggleBoard| {
            b.cells()
                .iter()
                .map(|c| c.letter().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(letters(&first), letters(&second));
    }

    #[test]
    fn test_shake_keeps_styles() {
        let (mut board, mut rng) = board(3);
        board.set_style(Position::new(1, 1), CellStyle::Head);
        board.shake(&mut rng);
        assert_eq!(board.cell(Position::new(1, 1)).unwrap().style(), CellStyle::Head);
    }

    #[test]
    fn test_reset_visual_keeps_letters() {
        let (mut board, _) = board(5);
        let before: Vec<String> = board.cells().iter().map(|c| c.letter().to_string()).collect();
        board.set_style(Position::new(0, 0), CellStyle::Trail);
        board.set_style(Position::new(0, 1), CellStyle::Head);

        board.reset_visual();

        assert!(board.cells().iter().all(|c| c.style() == CellStyle::Default));
        let after: Vec<String> = board.cells().iter().map(|c| c.letter().to_string()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_reset_clears_display_and_reshakes() {
        let (mut board, mut rng) = board(9);
        board.display_mut().in_progress = "ab".to_string();
        board.display_mut().found_words = "CAT".to_string();
        board.display_mut().status = "Score: 1".to_string();
        board.set_style(Position::new(2, 2), CellStyle::Head);

        board.reset(&mut rng);

        assert_eq!(board.display(), &DisplayRegions::default());
        assert!(board.cells().iter().all(|c| !c.is_selected()));
        assert!(board.cells().iter().all(|c| !c.letter().is_empty()));
    }

    #[test]
    fn test_cell_at_maps_points() {
        let (board, _) = board(1);
        let cell = board.cell_at(Point::new(125.0, 175.0)).unwrap();
        assert_eq!(cell.position(), Position::new(2, 1));
        assert!(board.cell_at(Point::new(5.0, 5.0)).is_none());
    }

    #[test]
    fn test_display_renders_rows() {
        let (board, _) = board(2);
        let text = board.to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().all(|line| line.matches(":default]").count() == 4));
    }
}
