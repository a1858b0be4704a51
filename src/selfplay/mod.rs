use crate::core::{initial_board, Color};
use crate::game::{Game, GameOutcome, GameRecord};
use crate::player::PlayerKind;
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// 棋譜の保存先。`None` なら保存しない
    pub record_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub plies: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub white_wins: usize,
    pub black_wins: usize,
    pub draws: usize,
    pub avg_plies: f64,
    pub avg_time_ms: f64,
    pub white_player: String,
    pub black_player: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.outcome.winner() {
            Some(Color::White) => self.white_wins += 1,
            Some(Color::Black) => self.black_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_plies: usize = self.games.iter().map(|g| g.plies).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_plies = total_plies as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }
}

/// 自己対局をまとめて並列に実行する。各対局は独立した盤面を持つ
pub fn run_selfplay(config: SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let mut stats = SelfPlayStats::new();
    stats.white_player = config.white.to_string();
    stats.black_player = config.black.to_string();

    let played: Vec<(GameResult, GameRecord)> = (1..=config.num_games)
        .into_par_iter()
        .map(|game_num| play_one(game_num, config.white, config.black))
        .collect::<anyhow::Result<_>>()?;

    for (game_num, (result, record)) in played.into_iter().enumerate() {
        if let Some(dir) = &config.record_dir {
            let path = record.save(dir, &format!("game_{:04}", game_num + 1))?;
            info!("saved record to {}", path.display());
        }
        stats.add_result(result);
    }

    info!(
        "self-play finished: {} games, White {} / Black {} / Draw {}",
        stats.total_games, stats.white_wins, stats.black_wins, stats.draws
    );
    Ok(stats)
}

fn play_one(
    game_num: usize,
    white: PlayerKind,
    black: PlayerKind,
) -> anyhow::Result<(GameResult, GameRecord)> {
    let start_time = Instant::now();

    let p1 = white.build(Color::White);
    let p2 = black.build(Color::Black);
    let mut game = Game::new(initial_board());
    let outcome = game.play(p1.as_ref(), p2.as_ref())?;

    let result = GameResult {
        outcome,
        plies: game.plies(),
        time_ms: start_time.elapsed().as_millis(),
    };
    info!("game {}: {} in {} plies", game_num, outcome, result.plies);
    Ok((result, game.record()))
}
