//! One-ply adversarial move selection.
//!
//! Every candidate is scored by the quality of the position it leaves,
//! minus the lowest quality the opponent can force with a single reply.
//! A candidate after which the opponent has no legal move is a forced win
//! and scores above anything else.

use super::config::{EvaluationConfig, PlannerConfig};
use super::eval::score_for;
use crate::core::{Board, Color, Move, RuleError};
use crate::logic::{apply_move, legal_moves};
use crate::player::PlayerController;
use log::{debug, error};

/// The chosen candidate and how it scored.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub mv: Move,
    pub score: f64,
    pub winning: bool,
}

#[derive(Debug, Clone)]
pub struct Planner {
    weights: EvaluationConfig,
    win_score: f64,
}

impl Default for Planner {
    fn default() -> Self {
        Planner::new(PlannerConfig::get())
    }
}

impl Planner {
    pub fn new(config: &PlannerConfig) -> Self {
        Planner {
            weights: config.evaluation.clone(),
            win_score: config.search.win_score,
        }
    }

    /// Applies the best move for `color`, returning the new board and
    /// whether that move leaves the opponent without a reply.
    ///
    /// With no legal move the board comes back unchanged with `false`.
    pub fn select_move(&self, board: &Board, color: Color) -> Result<(Board, bool), RuleError> {
        let moves = legal_moves(board, color);
        match self.best_move(board, color, &moves)? {
            Some(plan) => {
                debug!(
                    "{} plays {} (score {:.3}{})",
                    color,
                    plan.mv,
                    plan.score,
                    if plan.winning { ", winning" } else { "" }
                );
                Ok((apply_move(board, &plan.mv, color)?, plan.winning))
            }
            None => Ok((*board, false)),
        }
    }

    /// Highest scoring candidate; ties keep the earliest one.
    pub fn best_move(
        &self,
        board: &Board,
        color: Color,
        moves: &[Move],
    ) -> Result<Option<Plan>, RuleError> {
        let mut best: Option<Plan> = None;
        for mv in moves {
            let (score, winning) = self.score_move(board, mv, color)?;
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(Plan {
                    mv: mv.clone(),
                    score,
                    winning,
                });
            }
        }
        Ok(best)
    }

    pub fn score_move(
        &self,
        board: &Board,
        mv: &Move,
        color: Color,
    ) -> Result<(f64, bool), RuleError> {
        let next = apply_move(board, mv, color)?;
        let quality = score_for(&next, color, &self.weights);

        let opponent = color.opponent();
        let replies = legal_moves(&next, opponent);
        if replies.is_empty() {
            return Ok((self.win_score + quality, true));
        }

        let mut worst = f64::INFINITY;
        for reply in &replies {
            let after = apply_move(&next, reply, opponent)?;
            worst = worst.min(score_for(&after, color, &self.weights));
        }
        Ok((quality - worst, false))
    }
}

/// 設定ファイルの重みで一手先を読む
pub fn select_move(board: &Board, color: Color) -> Result<(Board, bool), RuleError> {
    Planner::default().select_move(board, color)
}

pub struct PlannerAI {
    pub color: Color,
    pub name: String,
    planner: Planner,
}

impl PlannerAI {
    pub fn new(color: Color, name: &str) -> Self {
        Self::with_planner(color, name, Planner::default())
    }

    pub fn with_planner(color: Color, name: &str, planner: Planner) -> Self {
        Self {
            color,
            name: name.to_string(),
            planner,
        }
    }
}

impl PlayerController for PlannerAI {
    fn choose_move(&self, board: &Board, moves: &[Move]) -> Option<Move> {
        match self.planner.best_move(board, self.color, moves) {
            Ok(plan) => plan.map(|p| p.mv),
            Err(e) => {
                error!("{}: planner rejected its own candidate: {}", self.name, e);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }
}
