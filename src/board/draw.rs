//! Draw detection: repetition (delegated to the external
//! [`PositionHistory`](crate::repetition::PositionHistory)), the fifty-move
//! clock, and insufficient-material heuristics.

use crate::bits::popcount;
use crate::patterns::{distance_to_promotion, DARK_COLORED_FIELD_PATTERN, LIGHT_COLORED_FIELD_PATTERN};
use crate::piece::{BISHOP, KNIGHT};

use super::Board;

impl Board {
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.position_history.is_threefold_repetition(self.hash)
    }

    /// Two kings only, three total pieces with a single lone minor, or four
    /// pieces split K+B vs K+B with both bishops on same-coloured squares.
    #[must_use]
    pub fn is_insufficient_material_draw(&self) -> bool {
        let total = popcount(self.all_occupied());
        if total == 2 {
            return true;
        }
        if total == 3 {
            let minors = self.get_bitboard(KNIGHT)
                | self.get_bitboard(-KNIGHT)
                | self.get_bitboard(BISHOP)
                | self.get_bitboard(-BISHOP);
            return popcount(minors) == 1;
        }
        if total == 4 {
            let white_bishops = self.get_bitboard(BISHOP);
            let black_bishops = self.get_bitboard(-BISHOP);
            if popcount(white_bishops) == 1 && popcount(black_bishops) == 1 {
                let both_light =
                    white_bishops & LIGHT_COLORED_FIELD_PATTERN != 0
                        && black_bishops & LIGHT_COLORED_FIELD_PATTERN != 0;
                let both_dark = white_bishops & DARK_COLORED_FIELD_PATTERN != 0
                    && black_bishops & DARK_COLORED_FIELD_PATTERN != 0;
                return both_light || both_dark;
            }
        }
        false
    }

    /// Single repetition, fifty-move clock, or insufficient material —
    /// anything the engine is willing to call a draw outright rather than
    /// leaving to the search to discover by depth.
    #[must_use]
    pub fn is_engine_draw(&self) -> bool {
        self.position_history.is_single_repetition(self.hash)
            || self.is_fifty_move_draw()
            || self.is_insufficient_material_draw()
    }

    /// Whether `color` has a pawn within two pushes of promoting —
    /// a cheap signal the search driver can use to extend depth near the
    /// endgame's sharpest moments.
    #[must_use]
    pub fn is_pawn_move_close_to_promotion(&self, color: i8) -> bool {
        let forward = if color > 0 { -1 } else { 1 };
        let mut pawns = self.get_bitboard(crate::piece::PAWN * color);
        while pawns != 0 {
            let sq = crate::bits::pop_lsb(&mut pawns) as usize;
            if distance_to_promotion(sq, forward) <= 2 {
                return true;
            }
        }
        false
    }
}
