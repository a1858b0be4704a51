//! Checkers rules engine with a one-ply adversarial planner.
//!
//! - [`logic::legal_moves`] generates moves with mandatory, chained captures.
//! - [`logic::apply_move`] produces the next board without touching the old one.
//! - [`logic::is_legal_transition`] checks a before/after pair of boards.
//! - [`player::ai::select_move`] picks a move by looking one reply ahead.

pub mod core;
pub mod display;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;


pub use crate::core::{initial_board, Board, Color, Move, Piece, RuleError, Square};
pub use crate::logic::{apply_move, is_legal_transition, legal_moves};
pub use crate::player::ai::eval::evaluate;
pub use crate::player::ai::select_move;
