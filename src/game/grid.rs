use serde::{Deserialize, Serialize};

use crate::models::Position;

/// Gap between the reset and exit buttons
const BUTTON_GAP: f64 = 10.0;

/// A screen coordinate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned region; contains its top/left edges but not its bottom/right ones
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Layout of a rectangular grid of square cells plus the reset and exit
/// controls drawn beneath it. Knows nothing about letters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GridGeometry {
    pub rows: usize,
    pub cols: usize,
    pub x_inset: f64,
    pub y_inset: f64,
    pub cell_size: f64,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            x_inset: 50.0,
            y_inset: 50.0,
            cell_size: 50.0,
        }
    }
}

impl GridGeometry {
    pub fn grid_rect(&self) -> Rect {
        Rect {
            x: self.x_inset,
            y: self.y_inset,
            width: self.cell_size * self.cols as f64,
            height: self.cell_size * self.rows as f64,
        }
    }

    pub fn cell_rect(&self, position: Position) -> Rect {
        Rect {
            x: self.x_inset + self.cell_size * position.col as f64,
            y: self.y_inset + self.cell_size * position.row as f64,
            width: self.cell_size,
            height: self.cell_size,
        }
    }

    pub fn reset_rect(&self) -> Rect {
        let (width, top, height) = self.button_band();
        Rect {
            x: self.x_inset,
            y: top,
            width,
            height,
        }
    }

    pub fn exit_rect(&self) -> Rect {
        let (width, top, height) = self.button_band();
        Rect {
            x: self.x_inset + width + BUTTON_GAP,
            y: top,
            width,
            height,
        }
    }

    /// (button width, top edge, height) of the row of controls under the grid
    fn button_band(&self) -> (f64, f64, f64) {
        let grid = self.grid_rect();
        let width = ((grid.width - BUTTON_GAP) / 2.0).max(0.0);
        let top = grid.y + grid.height + self.cell_size / 2.0;
        (width, top, self.cell_size * 0.6)
    }

    pub fn in_grid(&self, point: Point) -> bool {
        self.grid_rect().contains(point)
    }

    pub fn in_reset(&self, point: Point) -> bool {
        self.reset_rect().contains(point)
    }

    pub fn in_exit(&self, point: Point) -> bool {
        self.exit_rect().contains(point)
    }

    /// Map a screen coordinate to the grid position under it
    pub fn position_at(&self, point: Point) -> Option<Position> {
        if !self.in_grid(point) || self.cell_size <= 0.0 {
            return None;
        }

        let col = ((point.x - self.x_inset) / self.cell_size) as usize;
        let row = ((point.y - self.y_inset) / self.cell_size) as usize;

        // Guard against float rounding at the far edges
        (row < self.rows && col < self.cols).then(|| Position::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_at_cell_centers() {
        let geometry = GridGeometry::default();
        let center_0_0 = Point::new(75.0, 75.0);
        let center_1_2 = Point::new(50.0 + 50.0 * 1.5, 50.0 + 50.0 * 2.5);

        assert_eq!(geometry.position_at(center_0_0), Some(Position::new(0, 0)));
        // x selects the column, y the row
        assert_eq!(geometry.position_at(center_1_2), Some(Position::new(2, 1)));
    }

    #[test]
    fn test_position_at_outside_grid() {
        let geometry = GridGeometry::default();
        assert_eq!(geometry.position_at(Point::new(10.0, 10.0)), None);
        assert_eq!(geometry.position_at(Point::new(250.0, 100.0)), None);
        assert_eq!(geometry.position_at(Point::new(100.0, 250.0)), None);
        assert_eq!(geometry.position_at(Point::new(249.9, 249.9)), Some(Position::new(3, 3)));
    }

    #[test]
    fn test_controls_do_not_overlap_grid() {
        let geometry = GridGeometry::default();
        let reset = geometry.reset_rect().center();
        let exit = geometry.exit_rect().center();

        assert!(geometry.in_reset(reset));
        assert!(!geometry.in_exit(reset));
        assert!(!geometry.in_grid(reset));

        assert!(geometry.in_exit(exit));
        assert!(!geometry.in_reset(exit));
        assert!(!geometry.in_grid(exit));
    }

    #[test]
    fn test_cell_rect_round_trips_through_position_at() {
        let geometry = GridGeometry::default();
        for row in 0..geometry.rows {
            for col in 0..geometry.cols {
                let position = Position::new(row, col);
                let center = geometry.cell_rect(position).center();
                assert_eq!(geometry.position_at(center), Some(position));
            }
        }
    }
}
