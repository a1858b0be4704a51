use crate::core::{Board, Color, Piece, RuleError, Square, BOARD_SIZE};

/// 文字列配列から盤面を組み立てる
///
/// Each row holds eight whitespace-separated tokens (`.`/`o` empty, `w`/`b`
/// men, `W`/`B` or `kw`/`kb` kings). Any other shape is rejected.
pub fn setup_from_strings(setup: &[&str]) -> Result<Board, RuleError> {
    Board::try_from(parse_rows(setup)?)
}

pub(crate) fn parse_rows(setup: &[&str]) -> Result<Vec<Vec<Piece>>, RuleError> {
    if setup.len() != BOARD_SIZE {
        return Err(RuleError::MalformedBoard(format!(
            "expected {} rows, got {}",
            BOARD_SIZE,
            setup.len()
        )));
    }
    setup
        .iter()
        .enumerate()
        .map(|(y, row)| {
            let cells = row
                .split_whitespace()
                .map(|s| {
                    Piece::from_token(s).ok_or_else(|| {
                        RuleError::MalformedBoard(format!("unknown token {:?} in row {}", s, y))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if cells.len() != BOARD_SIZE {
                return Err(RuleError::MalformedBoard(format!(
                    "row {} has {} squares, expected {}",
                    y,
                    cells.len(),
                    BOARD_SIZE
                )));
            }
            Ok(cells)
        })
        .collect()
}

pub fn get_standard_setup() -> Vec<&'static str> {
    vec![
        ". b . b . b . b", // 後手 (Black)
        "b . b . b . b .",
        ". b . b . b . b",
        ". . . . . . . .",
        ". . . . . . . .",
        "w . w . w . w .", // 先手 (White)
        ". w . w . w . w",
        "w . w . w . w .",
    ]
}

/// 開始局面
pub fn initial_board() -> Board {
    let mut board = Board::empty();
    for sq in Square::all() {
        if (sq.row + sq.col) % 2 == 0 {
            continue;
        }
        if sq.row < 3 {
            board.set(sq, Piece::man(Color::Black));
        } else if sq.row >= BOARD_SIZE - 3 {
            board.set(sq, Piece::man(Color::White));
        }
    }
    board
}
