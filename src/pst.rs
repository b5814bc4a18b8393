//! Piece-square tables: per-piece, per-square positional bonuses folded into
//! the incremental midgame/endgame score accumulators.
//!
//! Raw delta tables are written from White's perspective (index 0 = a8,
//! reading left-to-right, top-to-bottom, matching board square indexing)
//! and mirrored for Black by swapping rank `r` with rank `7 - r`. Each
//! entry is pre-packed with [`crate::bits::pack`] so a lookup during
//! `perform_move`/`undo_move` is a single array read, no arithmetic.

use once_cell::sync::Lazy;

use crate::bits::pack;
use crate::piece::{EG_PIECE_VALUES, PIECE_VALUES, PST_MULT};

#[rustfmt::skip]
const PAWN_MG: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const PAWN_EG: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    80, 80, 80, 80, 80, 80, 80, 80,
    50, 50, 50, 50, 50, 50, 50, 50,
    30, 30, 30, 30, 30, 30, 30, 30,
    20, 20, 20, 20, 20, 20, 20, 20,
    10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_MG: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

const KNIGHT_EG: [i32; 64] = KNIGHT_MG;

#[rustfmt::skip]
const BISHOP_MG: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

const BISHOP_EG: [i32; 64] = BISHOP_MG;

#[rustfmt::skip]
const ROOK_MG: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

const ROOK_EG: [i32; 64] = ROOK_MG;

#[rustfmt::skip]
const QUEEN_MG: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

const QUEEN_EG: [i32; 64] = QUEEN_MG;

#[rustfmt::skip]
const KING_MG: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

#[rustfmt::skip]
const KING_EG: [i32; 64] = [
    -50,-40,-30,-20,-20,-30,-40,-50,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-30,  0,  0,  0,  0,-30,-30,
    -50,-30,-30,-30,-30,-30,-30,-50,
];

const RAW_TABLES: [([i32; 64], [i32; 64]); 7] = [
    ([0; 64], [0; 64]), // unused, index 0
    (PAWN_MG, PAWN_EG),
    (KNIGHT_MG, KNIGHT_EG),
    (BISHOP_MG, BISHOP_EG),
    (ROOK_MG, ROOK_EG),
    (QUEEN_MG, QUEEN_EG),
    (KING_MG, KING_EG),
];

fn mirror(sq: usize) -> usize {
    let r = sq / 8;
    let f = sq & 7;
    (7 - r) * 8 + f
}

fn build_side(mirrored: bool) -> [u32; 7 * 64] {
    let mut table = [0u32; 7 * 64];
    let sign = if mirrored { -1 } else { 1 };
    for kind in 1..=6usize {
        let (mg_table, eg_table) = &RAW_TABLES[kind];
        for sq in 0..64 {
            let src = if mirrored { mirror(sq) } else { sq };
            let mg = sign * (PIECE_VALUES[kind] + mg_table[src] * PST_MULT[kind]);
            let eg = sign * (EG_PIECE_VALUES[kind] + eg_table[src] * PST_MULT[kind]);
            table[kind * 64 + sq] = pack(mg as i16, eg as i16);
        }
    }
    table
}

/// `[piece_kind * 64 + square] -> pack(mg, eg)` for White pieces, signed
/// positive.
pub static WHITE_PST: Lazy<[u32; 7 * 64]> = Lazy::new(|| build_side(false));

/// `[piece_kind * 64 + square] -> pack(mg, eg)` for Black pieces, mirrored
/// across the board's horizontal centre and negated so a caller can add
/// both colours' contributions directly into a side-independent score.
pub static BLACK_PST: Lazy<[u32; 7 * 64]> = Lazy::new(|| build_side(true));

/// Packed (mg, eg) bonus for a piece kind (1..6) of the given colour
/// (`color > 0` White) standing on `sq`.
#[inline]
#[must_use]
pub fn pst_value(kind: usize, color: i8, sq: usize) -> u32 {
    if color > 0 {
        WHITE_PST[kind * 64 + sq]
    } else {
        BLACK_PST[kind * 64 + sq]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::unpack;

    #[test]
    fn white_and_black_pawn_on_mirrored_squares_are_negated() {
        // e2 (index 52) for White vs e7 (index 12) for Black sit on
        // mirrored squares, so Black's packed value is White's negated.
        let (white_mg, white_eg) = unpack(pst_value(1, 1, 52));
        let (black_mg, black_eg) = unpack(pst_value(1, -1, 12));
        assert_eq!(black_mg, -white_mg);
        assert_eq!(black_eg, -white_eg);
    }

    #[test]
    fn king_start_square_is_not_penalized_like_center() {
        let (mg_corner, _) = unpack(pst_value(6, 1, 60)); // e1
        let (mg_center, _) = unpack(pst_value(6, 1, 28)); // e4
        assert!(mg_corner > mg_center);
    }

    #[test]
    fn pst_includes_base_material_value() {
        let (mg, eg) = unpack(pst_value(5, 1, 0));
        assert!(mg >= PIECE_VALUES[5] as i16 - 100);
        assert!(eg >= EG_PIECE_VALUES[5] as i16 - 100);
    }
}
