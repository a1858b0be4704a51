use super::piece::Piece;
use super::setup::parse_rows;
use super::types::BOARD_SIZE;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

type Grid = [[Piece; BOARD_SIZE]; BOARD_SIZE];

/// 盤面は "b . b ..." 形式の行の配列として保存する
pub fn serialize<S>(grid: &Grid, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rows: Vec<String> = grid
        .iter()
        .map(|row| {
            row.iter()
                .map(|p| p.token())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    rows.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Grid, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Vec<String> = Vec::deserialize(deserializer)?;
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let grid = parse_rows(&refs).map_err(D::Error::custom)?;
    let mut out = [[Piece::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, cells) in grid.into_iter().enumerate() {
        for (col, piece) in cells.into_iter().enumerate() {
            out[row][col] = piece;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use crate::core::setup::initial_board;
    use crate::core::Board;

    #[test]
    fn test_board_json_uses_text_rows() {
        let board = initial_board();
        let json = serde_json::to_string(&board).unwrap();
        assert!(json.contains("\". b . b . b . b\""));

        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_bad_json_board_is_rejected() {
        let json = r#"{"squares":[". . . . . . . ."]}"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }
}
