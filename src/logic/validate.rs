//! Move validation from a pair of positions.
//!
//! Used when a move arrives as "the board before" and "the board after"
//! instead of a [`Move`](crate::core::Move) value. The check does not call
//! the generator: it reconstructs the jump order from the captured squares
//! and accepts exactly the transitions the generator and
//! [`apply_move`](super::apply_move) can produce.

use crate::core::{Board, Color, Piece, Square};
use log::debug;
use std::collections::HashMap;

/// `after` を `color` の一手で `before` から作れるか
pub fn is_legal_transition(before: &Board, after: &Board, color: Color) -> bool {
    match check_transition(before, after, color) {
        Ok(()) => true,
        Err(reason) => {
            debug!("rejected {} transition: {}", color, reason);
            false
        }
    }
}

fn check_transition(before: &Board, after: &Board, color: Color) -> Result<(), &'static str> {
    let mut from = None;
    let mut to = None;
    let mut captures: u64 = 0;

    for sq in Square::all() {
        let (old, new) = (before.get(sq), after.get(sq));
        if old == new {
            continue;
        }
        if new.is_empty() && old.belongs_to(color) {
            if from.replace(sq).is_some() {
                return Err("more than one piece left its square");
            }
        } else if new.is_empty() && old.belongs_to(color.opponent()) {
            captures |= 1 << sq.index();
        } else if old.is_empty() && new.belongs_to(color) {
            if to.replace(sq).is_some() {
                return Err("more than one piece arrived");
            }
        } else {
            return Err("square changed in place");
        }
    }

    match (from, to) {
        (Some(from), Some(to)) => check_move(before, color, from, to, after.get(to), captures),
        // 王が一周して元のマスに戻る連続取り
        (None, None) if captures != 0 => {
            let looped = before
                .pieces(color)
                .filter(|(_, piece)| piece.is_king())
                .any(|(sq, piece)| chain_exists(before, sq, sq, piece, captures));
            if looped {
                Ok(())
            } else {
                Err("pieces vanished without a capturing move")
            }
        }
        _ => Err("expected exactly one piece to move"),
    }
}

fn check_move(
    before: &Board,
    color: Color,
    from: Square,
    to: Square,
    placed: Piece,
    captures: u64,
) -> Result<(), &'static str> {
    let moving = before.get(from);
    check_promotion(color, moving, placed, to)?;

    if captures == 0 {
        let dr = to.row as i32 - from.row as i32;
        let dc = to.col as i32 - from.col as i32;
        if dr.abs() != 1 || dc.abs() != 1 {
            return Err("a slide must be a single diagonal step");
        }
        if !moving.is_king() && dr != color.forward() {
            return Err("men only slide forward");
        }
        if super::has_any_capture(before, color) {
            return Err("a capture was available");
        }
        return Ok(());
    }

    if chain_exists(before, from, to, moving, captures) {
        Ok(())
    } else {
        Err("captured pieces do not form a complete jump chain")
    }
}

fn check_promotion(
    color: Color,
    moving: Piece,
    placed: Piece,
    to: Square,
) -> Result<(), &'static str> {
    let expected = if to.row == color.promotion_row() {
        moving.promoted()
    } else {
        moving
    };
    if placed == expected {
        return Ok(());
    }
    match (moving.is_king(), placed.is_king()) {
        (true, false) => Err("kings cannot be demoted"),
        (false, true) => Err("a man may only be crowned on the promotion rank"),
        _ => Err("a man reaching the promotion rank must be crowned"),
    }
}

/// Whether the captured set can be ordered into a maximal chain from
/// `origin` to `target`.
fn chain_exists(before: &Board, origin: Square, target: Square, piece: Piece, captures: u64) -> bool {
    let mut search = ChainSearch {
        before,
        origin,
        target,
        piece,
        memo: HashMap::new(),
    };
    if !search.reaches_target(origin, captures) {
        return false;
    }

    // 取り切った後にさらに取れるなら途中で止まったことになる
    let mut landed = *before;
    landed.remove(origin);
    for sq in Square::all().filter(|sq| captures & (1 << sq.index()) != 0) {
        landed.remove(sq);
    }
    landed.set(target, piece);
    !landed.has_jump_from(target, piece)
}

struct ChainSearch<'a> {
    before: &'a Board,
    origin: Square,
    target: Square,
    piece: Piece,
    memo: HashMap<(Square, u64), bool>,
}

impl ChainSearch<'_> {
    fn reaches_target(&mut self, at: Square, remaining: u64) -> bool {
        if remaining == 0 {
            return at == self.target;
        }
        if let Some(&known) = self.memo.get(&(at, remaining)) {
            return known;
        }

        let mut found = false;
        for &(dr, dc) in self.piece.directions() {
            let (Some(over), Some(land)) = (at.offset(dr, dc), at.offset(2 * dr, 2 * dc)) else {
                continue;
            };
            let bit = 1u64 << over.index();
            if remaining & bit == 0 {
                continue;
            }
            // 動かす駒の元のマスと最終マスは空いているものとして扱う
            if land != self.target && land != self.origin && !self.before.is_empty_at(land) {
                continue;
            }
            if self.reaches_target(land, remaining & !bit) {
                found = true;
                break;
            }
        }

        self.memo.insert((at, remaining), found);
        found
    }
}
