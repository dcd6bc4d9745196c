pub mod cell;
pub mod game;

pub use cell::{Cell, CellStyle, Position};
pub use game::{BoardSnapshot, CellView};
