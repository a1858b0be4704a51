pub mod board;
pub mod error;
pub mod r#move;
pub mod piece;
pub mod serialization;
pub mod setup;
pub mod types;

pub use board::Board;
pub use error::RuleError;
pub use piece::Piece;
pub use r#move::Move;
pub use setup::{initial_board, setup_from_strings};
pub use types::{Color, Square, BOARD_SIZE};
