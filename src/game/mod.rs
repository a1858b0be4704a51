pub mod record;

pub use record::GameRecord;

use crate::core::{initial_board, Board, Color, Move, RuleError};
use crate::logic::zobrist::ZobristHasher;
use crate::logic::{apply_move, is_legal_transition, legal_moves};
use crate::player::ai::config::{GameConfig, PlannerConfig};
use crate::player::PlayerController;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawReason {
    MoveLimit,
    Repetition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Color),
    Draw(DrawReason),
}

impl GameOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Win(color) => Some(color),
            GameOutcome::Draw(_) => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameOutcome::Win(color) => write!(f, "{} wins", color),
            GameOutcome::Draw(DrawReason::MoveLimit) => write!(f, "Draw (move limit)"),
            GameOutcome::Draw(DrawReason::Repetition) => write!(f, "Draw (repetition)"),
        }
    }
}

/// 1手進めた結果
#[derive(Debug, Clone, PartialEq)]
pub enum PlyResult {
    Moved(Move),
    Finished(GameOutcome),
}

/// 対局の進行。白から交互に指す
pub struct Game {
    pub board: Board,
    pub current_player: Color,
    pub history: Vec<Move>,
    initial: Board,
    positions: HashMap<u64, usize>,
    config: GameConfig,
    outcome: Option<GameOutcome>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(initial_board())
    }
}

impl Game {
    pub fn new(board: Board) -> Self {
        Game::with_config(board, PlannerConfig::get().game.clone())
    }

    pub fn with_config(board: Board, config: GameConfig) -> Self {
        let mut positions = HashMap::new();
        positions.insert(ZobristHasher::compute_hash(&board, Color::White), 1);
        Game {
            board,
            current_player: Color::White,
            history: Vec::new(),
            initial: board,
            positions,
            config,
            outcome: None,
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn plies(&self) -> usize {
        self.history.len()
    }

    /// Asks the side to move for a move and plays it, or reports why the game
    /// is over.
    pub fn step(
        &mut self,
        white: &dyn PlayerController,
        black: &dyn PlayerController,
    ) -> Result<PlyResult, RuleError> {
        if let Some(outcome) = self.outcome {
            return Ok(PlyResult::Finished(outcome));
        }

        let color = self.current_player;
        let moves = legal_moves(&self.board, color);
        if moves.is_empty() {
            debug!("{} has no legal moves", color);
            return Ok(self.finish(GameOutcome::Win(color.opponent())));
        }
        if self.plies() >= self.config.max_plies {
            return Ok(self.finish(GameOutcome::Draw(DrawReason::MoveLimit)));
        }

        let controller = match color {
            Color::White => white,
            Color::Black => black,
        };
        let Some(mv) = controller.choose_move(&self.board, &moves) else {
            info!("{} ({}) resigned", controller.name(), color);
            return Ok(self.finish(GameOutcome::Win(color.opponent())));
        };
        if !moves.contains(&mv) {
            return Err(RuleError::IllegalMove {
                mv,
                reason: "not among the legal moves",
            });
        }

        let next = apply_move(&self.board, &mv, color)?;
        debug!("ply {}: {} {}", self.plies() + 1, color, mv);
        self.advance(mv.clone(), next);
        Ok(PlyResult::Moved(mv))
    }

    /// 終局まで進める
    pub fn play(
        &mut self,
        white: &dyn PlayerController,
        black: &dyn PlayerController,
    ) -> Result<GameOutcome, RuleError> {
        loop {
            if let PlyResult::Finished(outcome) = self.step(white, black)? {
                return Ok(outcome);
            }
        }
    }

    /// Accepts a position produced outside the engine for the side to move.
    ///
    /// The board must be one legal move away from the current one.
    pub fn submit_board(&mut self, after: Board) -> Result<(), RuleError> {
        let color = self.current_player;
        if self.outcome.is_some() || !is_legal_transition(&self.board, &after, color) {
            return Err(RuleError::IllegalTransition { color });
        }

        // 棋譜に残すため、同じ局面になる生成手を探す
        let mv = legal_moves(&self.board, color)
            .into_iter()
            .find(|mv| apply_move(&self.board, mv, color).ok() == Some(after))
            .ok_or(RuleError::IllegalTransition { color })?;

        debug!("ply {}: {} {} (submitted)", self.plies() + 1, color, mv);
        self.advance(mv, after);
        Ok(())
    }

    pub fn record(&self) -> GameRecord {
        GameRecord {
            initial: self.initial,
            moves: self.history.clone(),
            outcome: self.outcome,
        }
    }

    fn advance(&mut self, mv: Move, next: Board) {
        self.board = next;
        self.history.push(mv);
        self.current_player = self.current_player.opponent();

        let hash = ZobristHasher::compute_hash(&self.board, self.current_player);
        let seen = self.positions.entry(hash).or_insert(0);
        *seen += 1;
        if *seen >= self.config.repetition_limit {
            self.finish(GameOutcome::Draw(DrawReason::Repetition));
        }
    }

    fn finish(&mut self, outcome: GameOutcome) -> PlyResult {
        info!("{} after {} plies", outcome, self.plies());
        self.outcome = Some(outcome);
        PlyResult::Finished(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{setup_from_strings, Square};
    use crate::player::{PlannerAI, RandomAI};

    /// 決まった手順を返すだけのプレイヤー
    struct Scripted {
        color: Color,
        moves: std::cell::RefCell<Vec<Move>>,
    }

    impl PlayerController for Scripted {
        fn choose_move(&self, _board: &Board, _legal: &[Move]) -> Option<Move> {
            let mut moves = self.moves.borrow_mut();
            if moves.is_empty() {
                None
            } else {
                Some(moves.remove(0))
            }
        }
        fn name(&self) -> &str {
            "scripted"
        }
        fn color(&self) -> Color {
            self.color
        }
    }

    fn scripted(color: Color, moves: Vec<Move>) -> Scripted {
        Scripted {
            color,
            moves: std::cell::RefCell::new(moves),
        }
    }

    #[test]
    fn test_side_without_moves_loses() {
        let board = setup_from_strings(&[
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . b . . . .",
            ". . . . w . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
        ])
        .unwrap();
        let mut game = Game::with_config(board, GameConfig::default());
        let white = PlannerAI::new(Color::White, "white");
        let black = PlannerAI::new(Color::Black, "black");
        let outcome = game.play(&white, &black).unwrap();
        assert_eq!(outcome, GameOutcome::Win(Color::White));
        assert_eq!(game.plies(), 1);
        assert_eq!(game.outcome().and_then(GameOutcome::winner), Some(Color::White));
    }

    #[test]
    fn test_illegal_choice_is_an_error() {
        let mut game = Game::with_config(initial_board(), GameConfig::default());
        let white = scripted(
            Color::White,
            vec![Move::slide(Square::new(5, 0), Square::new(3, 2))],
        );
        let black = RandomAI::new(Color::Black, "black");
        assert!(matches!(
            game.step(&white, &black),
            Err(RuleError::IllegalMove { .. })
        ));
        assert_eq!(game.board, initial_board());
    }

    #[test]
    fn test_resignation() {
        let mut game = Game::with_config(initial_board(), GameConfig::default());
        let white = scripted(Color::White, vec![]);
        let black = RandomAI::new(Color::Black, "black");
        assert_eq!(
            game.step(&white, &black).unwrap(),
            PlyResult::Finished(GameOutcome::Win(Color::Black))
        );
    }

    #[test]
    fn test_move_limit() {
        let config = GameConfig {
            max_plies: 4,
            repetition_limit: 100,
        };
        let mut game = Game::with_config(initial_board(), config);
        let white = RandomAI::new(Color::White, "white");
        let black = RandomAI::new(Color::Black, "black");
        let outcome = game.play(&white, &black).unwrap();
        // 4手では駒がなくならない
        assert_eq!(outcome, GameOutcome::Draw(DrawReason::MoveLimit));
        assert_eq!(game.plies(), 4);
    }

    #[test]
    fn test_repetition_draw() {
        let board = setup_from_strings(&[
            "B . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . W",
        ])
        .unwrap();
        let config = GameConfig {
            max_plies: 100,
            repetition_limit: 3,
        };
        let mut game = Game::with_config(board, config);
        let (a, b) = (Square::new(7, 7), Square::new(6, 6));
        let (c, d) = (Square::new(0, 0), Square::new(1, 1));
        let white = scripted(
            Color::White,
            vec![Move::slide(a, b), Move::slide(b, a), Move::slide(a, b), Move::slide(b, a)],
        );
        let black = scripted(
            Color::Black,
            vec![Move::slide(c, d), Move::slide(d, c), Move::slide(c, d), Move::slide(d, c)],
        );
        let outcome = game.play(&white, &black).unwrap();
        assert_eq!(outcome, GameOutcome::Draw(DrawReason::Repetition));
        assert_eq!(game.plies(), 8);
    }

    #[test]
    fn test_submit_board() {
        let mut game = Game::with_config(initial_board(), GameConfig::default());
        let mut after = initial_board();
        after.remove(Square::new(5, 2));
        after.set(Square::new(4, 3), crate::core::Piece::WhiteMan);
        game.submit_board(after).unwrap();
        assert_eq!(game.current_player, Color::Black);
        assert_eq!(
            game.history,
            vec![Move::slide(Square::new(5, 2), Square::new(4, 3))]
        );

        // 黒の番に白の駒を動かすのは不正
        let mut wrong = after;
        wrong.remove(Square::new(5, 0));
        wrong.set(Square::new(4, 1), crate::core::Piece::WhiteMan);
        assert_eq!(
            game.submit_board(wrong),
            Err(RuleError::IllegalTransition {
                color: Color::Black
            })
        );
        assert_eq!(game.board, after);
    }
}
