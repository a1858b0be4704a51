use super::error::RuleError;
use super::piece::Piece;
use super::types::{Color, Square, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// 盤面。公開後は書き換えず、指し手ごとに新しい値を作る
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    #[serde(with = "crate::core::serialization")]
    squares: [[Piece; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[Piece::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, sq: Square) -> Piece {
        self.squares[sq.row][sq.col]
    }

    /// Only meant for boards the caller has just built or copied.
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.row][sq.col] = piece;
    }

    pub fn remove(&mut self, sq: Square) -> Piece {
        std::mem::take(&mut self.squares[sq.row][sq.col])
    }

    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.get(sq).is_empty()
    }

    /// Occupied squares of `color`, row-major.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            let piece = self.get(sq);
            piece.belongs_to(color).then_some((sq, piece))
        })
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    pub fn count_kings(&self, color: Color) -> usize {
        self.pieces(color).filter(|(_, p)| p.is_king()).count()
    }

    /// `piece` standing on `from` could jump an adjacent opponent right now.
    pub fn has_jump_from(&self, from: Square, piece: Piece) -> bool {
        let Some(color) = piece.color() else {
            return false;
        };
        piece.directions().iter().any(|&(dr, dc)| {
            match (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) {
                (Some(over), Some(land)) => {
                    self.get(over).belongs_to(color.opponent()) && self.is_empty_at(land)
                }
                _ => false,
            }
        })
    }

    pub fn rows(&self) -> Vec<String> {
        self.squares
            .iter()
            .map(|row| {
                row.iter()
                    .map(|p| p.token())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec<Piece>>> for Board {
    type Error = RuleError;

    fn try_from(grid: Vec<Vec<Piece>>) -> Result<Self, Self::Error> {
        if grid.len() != BOARD_SIZE {
            return Err(RuleError::MalformedBoard(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                grid.len()
            )));
        }
        let mut board = Board::empty();
        for (row, cells) in grid.into_iter().enumerate() {
            if cells.len() != BOARD_SIZE {
                return Err(RuleError::MalformedBoard(format!(
                    "row {} has {} squares, expected {}",
                    row,
                    cells.len(),
                    BOARD_SIZE
                )));
            }
            for (col, piece) in cells.into_iter().enumerate() {
                board.squares[row][col] = piece;
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_shape() {
        let short = vec![vec![Piece::Empty; 8]; 7];
        assert!(matches!(
            Board::try_from(short),
            Err(RuleError::MalformedBoard(_))
        ));

        let mut ragged = vec![vec![Piece::Empty; 8]; 8];
        ragged[3].push(Piece::WhiteMan);
        assert!(Board::try_from(ragged).is_err());

        assert_eq!(
            Board::try_from(vec![vec![Piece::Empty; 8]; 8]),
            Ok(Board::empty())
        );
    }

    #[test]
    fn test_has_jump_from() {
        let mut board = Board::empty();
        board.set(Square::new(3, 4), Piece::WhiteMan);
        board.set(Square::new(2, 3), Piece::BlackMan);
        assert!(board.has_jump_from(Square::new(3, 4), Piece::WhiteMan));

        // 着地点が埋まっていれば取れない
        board.set(Square::new(1, 2), Piece::BlackMan);
        assert!(!board.has_jump_from(Square::new(3, 4), Piece::WhiteMan));

        // 後ろ向きは王だけ
        let mut board = Board::empty();
        board.set(Square::new(3, 4), Piece::WhiteMan);
        board.set(Square::new(4, 5), Piece::BlackMan);
        assert!(!board.has_jump_from(Square::new(3, 4), Piece::WhiteMan));
        assert!(board.has_jump_from(Square::new(3, 4), Piece::WhiteKing));
    }
}
