// Game engine modules

pub mod board;
pub mod grid;
pub mod scorer;
pub mod session;
pub mod validator;

pub use grid::{GridGeometry, Point};
pub use session::{BoggleGame, ClickOutcome, GameOptions};
