use crate::core::{Board, Color, Move};
use crate::player::PlayerController;
use rand::seq::SliceRandom;

pub struct RandomAI {
    pub color: Color,
    pub name: String,
}

impl RandomAI {
    pub fn new(color: Color, name: &str) -> Self {
        RandomAI {
            color,
            name: name.to_string(),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, _board: &Board, legal_moves: &[Move]) -> Option<Move> {
        let mut rng = rand::thread_rng();
        legal_moves.choose(&mut rng).cloned()
    }

    fn color(&self) -> Color {
        self.color
    }
}
