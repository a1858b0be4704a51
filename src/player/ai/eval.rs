//! # Evaluation Module
//!
//! Static evaluation of a board from White's point of view
//! (positive = White advantage, negative = Black advantage).
//!
//! The score is material (men and kings weighted separately) plus a small
//! advancement bonus per piece for every rank it has moved away from its
//! own home row. Weights come from [`EvaluationConfig`]; [`evaluate`] always
//! uses the built-in defaults so it does not depend on `planner_config.json`.

use super::config::EvaluationConfig;
use crate::core::{Board, Color, Square};

/// Evaluates the board with the default weights.
pub fn evaluate(board: &Board) -> f64 {
    evaluate_with(board, &EvaluationConfig::default())
}

pub fn evaluate_with(board: &Board, weights: &EvaluationConfig) -> f64 {
    let mut score = 0.0;

    for sq in Square::all() {
        let piece = board.get(sq);
        let Some(color) = piece.color() else {
            continue;
        };

        let material = if piece.is_king() {
            weights.king_value
        } else {
            weights.man_value
        };
        let advancement = sq.row.abs_diff(color.home_row()) as f64 * weights.advancement_weight;

        match color {
            Color::White => score += material + advancement,
            Color::Black => score -= material + advancement,
        }
    }

    score
}

/// The same evaluation seen from `color`'s side.
pub fn score_for(board: &Board, color: Color, weights: &EvaluationConfig) -> f64 {
    let score = evaluate_with(board, weights);
    match color {
        Color::White => score,
        Color::Black => -score,
    }
}
