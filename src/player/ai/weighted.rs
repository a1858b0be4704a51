use super::config::{EvaluationConfig, PlannerConfig};
use super::eval::score_for;
use crate::core::{Board, Color, Move};
use crate::logic::apply_move;
use crate::player::PlayerController;
use rand::prelude::*;

/// 評価値の softmax で手を選ぶ。自己対局に揺らぎを入れるのに使う
pub struct WeightedRandomAI {
    pub color: Color,
    pub name: String,
    pub temperature: f64,
    weights: EvaluationConfig,
}

impl WeightedRandomAI {
    pub fn new(color: Color, name: &str) -> Self {
        Self {
            color,
            name: name.to_string(),
            temperature: 0.25,
            weights: PlannerConfig::get().evaluation.clone(),
        }
    }

    /// Softmax-like probability distribution from scores
    fn get_probabilities(&self, board: &Board, moves: &[Move]) -> Vec<f64> {
        let scores: Vec<f64> = moves
            .iter()
            .map(|mv| match apply_move(board, mv, self.color) {
                Ok(next) => score_for(&next, self.color, &self.weights),
                Err(_) => f64::NEG_INFINITY,
            })
            .collect();

        if scores.is_empty() {
            return vec![];
        }

        let max_score = scores.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        if max_score == f64::NEG_INFINITY {
            return vec![0.0; scores.len()];
        }
        let exps: Vec<f64> = scores
            .iter()
            .map(|&s| ((s - max_score) / self.temperature).exp())
            .collect();
        let sum_exp: f64 = exps.iter().sum();

        exps.iter().map(|&e| e / sum_exp).collect()
    }
}

impl PlayerController for WeightedRandomAI {
    fn choose_move(&self, board: &Board, moves: &[Move]) -> Option<Move> {
        let probs = self.get_probabilities(board, moves);
        let dist = rand::distributions::WeightedIndex::new(&probs).ok()?;
        let mut rng = thread_rng();
        moves.get(dist.sample(&mut rng)).cloned()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }
}
