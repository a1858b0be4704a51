use super::types::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 指し手。`captured` は跳び越した相手の駒を順番通りに並べたもの
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    #[serde(default)]
    pub captured: Vec<Square>,
}

impl Move {
    pub fn slide(start: Square, end: Square) -> Self {
        Move {
            start,
            end,
            captured: Vec::new(),
        }
    }

    pub fn capture(start: Square, end: Square, captured: Vec<Square>) -> Self {
        Move {
            start,
            end,
            captured,
        }
    }

    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.captured.is_empty() {
            write!(f, "{} -> {}", self.start, self.end)
        } else {
            write!(f, "{} x {}", self.start, self.end)?;
            let jumped: Vec<String> = self.captured.iter().map(|sq| sq.to_string()).collect();
            write!(f, " [{}]", jumped.join(", "))
        }
    }
}
