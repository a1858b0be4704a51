use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_PATH: &str = "planner_config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub version: String,
    pub evaluation: EvaluationConfig,
    pub search: SearchConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub man_value: f64,
    pub king_value: f64,
    /// Bonus per rank a piece has left its home row behind.
    pub advancement_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Must stay above any reachable evaluation difference; see [`PlannerConfig::validate`].
    pub win_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_plies: usize,
    pub repetition_limit: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        EvaluationConfig {
            man_value: 1.0,
            king_value: 1.5,
            advancement_weight: 0.01,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { win_score: 1e6 }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_plies: 400,
            repetition_limit: 3,
        }
    }
}

static CONFIG: Lazy<PlannerConfig> = Lazy::new(PlannerConfig::load_or_default);

impl PlannerConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: PlannerConfig = serde_json::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// 勝ちの点数が評価値の差をすべて上回ることを確認する
    ///
    /// A side holds at most 12 pieces, each worth at most
    /// `max(man, king) + 7 * advancement`, so any quality lies in `[-m, m]`
    /// and a non-winning score in `[-2m, 2m]`. A winning score is at least
    /// `win_score - m`, so it must exceed `3m`.
    pub fn validate(&self) -> anyhow::Result<()> {
        let eval = &self.evaluation;
        if [eval.man_value, eval.king_value, eval.advancement_weight]
            .iter()
            .any(|w| !w.is_finite() || *w < 0.0)
        {
            anyhow::bail!("evaluation weights must be finite and non-negative");
        }
        let per_piece = eval.man_value.max(eval.king_value) + 7.0 * eval.advancement_weight;
        let bound = 3.0 * 12.0 * per_piece;
        if !(self.search.win_score > bound) {
            anyhow::bail!(
                "search.win_score {} must exceed {} for these evaluation weights",
                self.search.win_score,
                bound
            );
        }
        if self.game.repetition_limit == 0 {
            anyhow::bail!("game.repetition_limit must be at least 1");
        }
        Ok(())
    }

    pub fn load_or_default() -> Self {
        if !Path::new(CONFIG_PATH).exists() {
            debug!("{} not found, using default planner config", CONFIG_PATH);
            return Self::default();
        }
        Self::load().unwrap_or_else(|e| {
            warn!("failed to load {}: {}; using defaults", CONFIG_PATH, e);
            Self::default()
        })
    }

    /// Process-wide config, read once on first use.
    pub fn get() -> &'static PlannerConfig {
        &CONFIG
    }
}
