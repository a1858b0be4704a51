pub mod validate;
pub mod zobrist;

pub use validate::is_legal_transition;

use crate::core::{Board, Color, Move, Piece, RuleError, Square};

/// 合法手生成 (取りがあれば取りのみ)
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let captures = capture_moves(board, color);
    if !captures.is_empty() {
        return captures;
    }
    slide_moves(board, color)
}

/// `color` に取りがあるか
pub fn has_any_capture(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|(sq, piece)| board.has_jump_from(sq, piece))
}

/// Every maximal capture chain for every piece of `color`.
pub fn capture_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces(color) {
        let mut captured = Vec::new();
        collect_jumps(board, from, from, piece, &mut captured, &mut moves);
    }
    moves
}

/// One-step moves into empty diagonal neighbours, ignoring captures.
pub fn slide_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces(color) {
        for &(dr, dc) in piece.directions() {
            if let Some(to) = from.offset(dr, dc) {
                if board.is_empty_at(to) {
                    moves.push(Move::slide(from, to));
                }
            }
        }
    }
    moves
}

// 連続取りの探索。分岐ごとに盤面のコピーを持つので兄弟の枝に影響しない。
// 途中で成らないよう、駒は最後まで元の種類のまま動かす。
fn collect_jumps(
    board: &Board,
    start: Square,
    at: Square,
    piece: Piece,
    captured: &mut Vec<Square>,
    moves: &mut Vec<Move>,
) {
    let Some(color) = piece.color() else {
        return;
    };
    let mut extended = false;

    for &(dr, dc) in piece.directions() {
        let (Some(over), Some(land)) = (at.offset(dr, dc), at.offset(2 * dr, 2 * dc)) else {
            continue;
        };
        if !board.get(over).belongs_to(color.opponent())
            || !board.is_empty_at(land)
            || captured.contains(&over)
        {
            continue;
        }

        let mut scratch = *board;
        scratch.remove(at);
        scratch.remove(over);
        scratch.set(land, piece);

        captured.push(over);
        collect_jumps(&scratch, start, land, piece, captured, moves);
        captured.pop();
        extended = true;
    }

    if !extended && !captured.is_empty() {
        moves.push(Move::capture(start, at, captured.clone()));
    }
}

/// 移動適用。入力の盤面は変更せず、新しい盤面を返す
pub fn apply_move(board: &Board, mv: &Move, color: Color) -> Result<Board, RuleError> {
    let illegal = |reason| RuleError::IllegalMove {
        mv: mv.clone(),
        reason,
    };

    let piece = board.get(mv.start);
    if !piece.belongs_to(color) {
        return Err(illegal("start square does not hold a piece of the mover"));
    }
    if mv.end == mv.start {
        // 王の周回取りだけが元のマスに戻れる
        if !piece.is_king() || mv.captured.is_empty() {
            return Err(illegal("move does not leave its start square"));
        }
    } else if !board.is_empty_at(mv.end) {
        return Err(illegal("destination square is occupied"));
    }

    let mut seen = 0u64;
    for &sq in &mv.captured {
        if !board.get(sq).belongs_to(color.opponent()) {
            return Err(illegal("captured square does not hold an opponent piece"));
        }
        let bit = 1u64 << sq.index();
        if seen & bit != 0 {
            return Err(illegal("square captured twice"));
        }
        seen |= bit;
    }

    let mut next = *board;
    next.remove(mv.start);
    for &sq in &mv.captured {
        next.remove(sq);
    }

    let placed = if mv.end.row == color.promotion_row() {
        piece.promoted()
    } else {
        piece
    };
    next.set(mv.end, placed);

    Ok(next)
}
