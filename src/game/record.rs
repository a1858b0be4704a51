use super::GameOutcome;
use crate::core::{Board, Color, Move, RuleError};
use crate::logic::{apply_move, legal_moves};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 棋譜。開始局面と指し手の列 (白から交互)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl GameRecord {
    /// Rebuilds every position of the game, starting with the initial one.
    ///
    /// Fails on the first move that is not legal where it was played.
    pub fn replay(&self) -> Result<Vec<Board>, RuleError> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut current_board = self.initial;
        let mut current_player = Color::White;
        boards.push(current_board);

        for mv in &self.moves {
            if !legal_moves(&current_board, current_player).contains(mv) {
                return Err(RuleError::IllegalMove {
                    mv: mv.clone(),
                    reason: "not legal at this point of the record",
                });
            }
            current_board = apply_move(&current_board, mv, current_player)?;
            boards.push(current_board);
            current_player = current_player.opponent();
        }

        Ok(boards)
    }

    /// Writes the record as JSON under `dir` with a timestamped file name.
    pub fn save(&self, dir: impl AsRef<Path>, label: &str) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(dir.as_ref())?;
        let filename = dir.as_ref().join(format!(
            "{}_{}.json",
            label,
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        ));
        let file = std::fs::File::create(&filename)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(filename)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        let record = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(record)
    }
}
