use super::types::Color;
use serde::{Deserialize, Serialize};

const KING_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const WHITE_MAN_DIRECTIONS: [(i32, i32); 2] = [(-1, -1), (-1, 1)];
const BLACK_MAN_DIRECTIONS: [(i32, i32); 2] = [(1, -1), (1, 1)];

/// マスの中身
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Piece {
    #[default]
    Empty,
    WhiteMan,
    WhiteKing,
    BlackMan,
    BlackKing,
}

impl Piece {
    pub fn man(color: Color) -> Self {
        match color {
            Color::White => Piece::WhiteMan,
            Color::Black => Piece::BlackMan,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::WhiteMan | Piece::WhiteKing => Some(Color::White),
            Piece::BlackMan | Piece::BlackKing => Some(Color::Black),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    pub fn is_king(self) -> bool {
        matches!(self, Piece::WhiteKing | Piece::BlackKing)
    }

    pub fn belongs_to(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// 成った後の駒 (王はそのまま)
    pub fn promoted(self) -> Self {
        match self {
            Piece::WhiteMan => Piece::WhiteKing,
            Piece::BlackMan => Piece::BlackKing,
            other => other,
        }
    }

    /// Diagonal `(row, col)` steps this piece may take. Men only go forward.
    pub fn directions(self) -> &'static [(i32, i32)] {
        match self {
            Piece::Empty => &[],
            Piece::WhiteMan => &WHITE_MAN_DIRECTIONS,
            Piece::BlackMan => &BLACK_MAN_DIRECTIONS,
            Piece::WhiteKing | Piece::BlackKing => &KING_DIRECTIONS,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Piece::Empty => ".",
            Piece::WhiteMan => "w",
            Piece::WhiteKing => "W",
            Piece::BlackMan => "b",
            Piece::BlackKing => "B",
        }
    }

    /// 文字列表記から駒を復元する (`o`, `kw`, `kb` も受け付ける)
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "." | "o" => Some(Piece::Empty),
            "w" => Some(Piece::WhiteMan),
            "b" => Some(Piece::BlackMan),
            "W" | "kw" => Some(Piece::WhiteKing),
            "B" | "kb" => Some(Piece::BlackKing),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_is_idempotent() {
        assert_eq!(Piece::WhiteMan.promoted(), Piece::WhiteKing);
        assert_eq!(Piece::WhiteKing.promoted(), Piece::WhiteKing);
        assert_eq!(Piece::BlackMan.promoted().promoted(), Piece::BlackKing);
        assert_eq!(Piece::Empty.promoted(), Piece::Empty);
    }

    #[test]
    fn test_men_move_toward_promotion_row() {
        for &(dr, _) in Piece::WhiteMan.directions() {
            assert_eq!(dr, Color::White.forward());
        }
        for &(dr, _) in Piece::BlackMan.directions() {
            assert_eq!(dr, Color::Black.forward());
        }
        assert_eq!(Piece::BlackKing.directions().len(), 4);
        assert!(Piece::Empty.directions().is_empty());
    }

    #[test]
    fn test_tokens() {
        for piece in [
            Piece::Empty,
            Piece::WhiteMan,
            Piece::WhiteKing,
            Piece::BlackMan,
            Piece::BlackKing,
        ] {
            assert_eq!(Piece::from_token(piece.token()), Some(piece));
        }
        assert_eq!(Piece::from_token("kb"), Some(Piece::BlackKing));
        assert_eq!(Piece::from_token("o"), Some(Piece::Empty));
        assert_eq!(Piece::from_token("x"), None);
    }
}
