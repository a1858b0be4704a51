use crate::core::{Board, Color, Piece, Square, BOARD_SIZE};
use rand::Rng;
use std::sync::OnceLock;

const SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const PIECE_TYPES: usize = 4; // 空マスは除く

// Zobrist Hash用の乱数テーブル
struct ZobristTable {
    pieces: [[u64; PIECE_TYPES]; SQUARES],
    side_to_move: u64,
}

static ZOBRIST_TABLE: OnceLock<ZobristTable> = OnceLock::new();

fn get_zobrist_table() -> &'static ZobristTable {
    ZOBRIST_TABLE.get_or_init(|| {
        let mut rng = rand::thread_rng();
        let mut table = ZobristTable {
            pieces: [[0; PIECE_TYPES]; SQUARES],
            side_to_move: rng.gen(),
        };

        for square in table.pieces.iter_mut() {
            for key in square.iter_mut() {
                *key = rng.gen();
            }
        }

        table
    })
}

fn piece_to_index(piece: Piece) -> Option<usize> {
    match piece {
        Piece::Empty => None,
        Piece::WhiteMan => Some(0),
        Piece::WhiteKing => Some(1),
        Piece::BlackMan => Some(2),
        Piece::BlackKing => Some(3),
    }
}

pub struct ZobristHasher;

impl ZobristHasher {
    /// 盤面と手番のハッシュ (千日手の検出に使う)
    pub fn compute_hash(board: &Board, side_to_move: Color) -> u64 {
        let table = get_zobrist_table();
        let mut hash = 0;

        for sq in Square::all() {
            if let Some(k_idx) = piece_to_index(board.get(sq)) {
                hash ^= table.pieces[sq.index()][k_idx];
            }
        }

        if side_to_move == Color::Black {
            hash ^= table.side_to_move;
        }

        hash
    }
}
