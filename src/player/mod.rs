pub mod ai;
pub mod controller;

use crate::core::Color;
pub use ai::{PlannerAI, RandomAI, WeightedRandomAI};
pub use controller::PlayerController;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// コマンドラインや自己対局設定から選べるプレイヤーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Planner,
    Random,
    Weighted,
}

impl PlayerKind {
    pub fn build(self, color: Color) -> Box<dyn PlayerController> {
        let name = format!("{} {}", self, color);
        match self {
            PlayerKind::Planner => Box::new(PlannerAI::new(color, &name)),
            PlayerKind::Random => Box::new(RandomAI::new(color, &name)),
            PlayerKind::Weighted => Box::new(WeightedRandomAI::new(color, &name)),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerKind::Planner => write!(f, "planner"),
            PlayerKind::Random => write!(f, "random"),
            PlayerKind::Weighted => write!(f, "weighted"),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "planner" => Ok(PlayerKind::Planner),
            "random" => Ok(PlayerKind::Random),
            "weighted" => Ok(PlayerKind::Weighted),
            other => anyhow::bail!("unknown player kind {:?} (planner, random, weighted)", other),
        }
    }
}
