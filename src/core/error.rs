use super::r#move::Move;
use super::types::Color;
use thiserror::Error;

/// Errors raised by the rules core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    /// The move does not fit the board it was applied to.
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: &'static str },

    /// Wrong dimensions or an unknown token while building a board.
    #[error("malformed board: {0}")]
    MalformedBoard(String),

    /// An externally supplied position is not reachable in one legal move.
    #[error("board is not a legal {color} move from the current position")]
    IllegalTransition { color: Color },
}
