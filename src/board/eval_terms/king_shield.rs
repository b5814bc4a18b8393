//! King-shield bonus: own pawns standing directly in front of the king.

use crate::patterns::{BLACK_KING_SHIELD_PATTERNS, WHITE_KING_SHIELD_PATTERNS};

use super::tables::KING_SHIELD_BONUS;
use crate::board::Board;

impl Board {
    /// Midgame-only bonus for `color`'s pawns occupying its king-shield
    /// squares, already signed for that colour (positive contribution for
    /// White, negative for Black).
    pub(in crate::board) fn eval_king_shield(&self, color: i8) -> i32 {
        let king_sq = self.find_king_position(color);
        let shield = if color > 0 {
            WHITE_KING_SHIELD_PATTERNS[king_sq]
        } else {
            BLACK_KING_SHIELD_PATTERNS[king_sq]
        };
        let own_pawns = self.get_bitboard(crate::piece::PAWN * color);
        let bonus = (own_pawns & shield).count_ones() as i32 * KING_SHIELD_BONUS;
        bonus * color as i32
    }
}
