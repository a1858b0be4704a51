use crate::core::{Board, Color, Move};

/// プレイヤー操作のtrait
///
/// `legal_moves` is never empty when the driver asks. Returning `None`
/// resigns the game.
pub trait PlayerController {
    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move>;
    fn name(&self) -> &str;
    fn color(&self) -> Color;
}
