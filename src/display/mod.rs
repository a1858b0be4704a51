use crate::core::{Board, Color, Move, Square, BOARD_SIZE};
use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    pub status_msg: Option<String>,
    pub last_move: Option<Move>,
    pub perspective: Color,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 盤面を文字列にする。直前の手の始点と終点は `{}` で囲む
pub fn render_board(board: &Board, state: &DisplayState) -> String {
    let mut out = String::new();

    if let Some(msg) = &state.status_msg {
        out.push_str(msg);
        out.push('\n');
    }

    let flip = state.perspective == Color::Black;
    let index = |i: usize| if flip { BOARD_SIZE - 1 - i } else { i };

    // 列ラベル
    out.push_str("   ");
    for i in 0..BOARD_SIZE {
        out.push_str(&format!(" {} ", index(i)));
    }
    out.push('\n');
    out.push_str(&format!("  +{}+\n", "---".repeat(BOARD_SIZE)));

    for i in 0..BOARD_SIZE {
        let row = index(i);
        out.push_str(&format!("{} |", row));
        for j in 0..BOARD_SIZE {
            let sq = Square::new(row, index(j));
            let token = board.get(sq).token();
            let is_last_move = state
                .last_move
                .as_ref()
                .map_or(false, |mv| mv.start == sq || mv.end == sq);
            if is_last_move {
                out.push_str(&format!("{{{}}}", token));
            } else {
                out.push_str(&format!(" {} ", token));
            }
        }
        out.push_str("|\n");
    }
    out.push_str(&format!("  +{}+\n", "---".repeat(BOARD_SIZE)));
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
