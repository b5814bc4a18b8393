//! The evaluator: combines the incrementally-maintained material+PST score
//! with the additive terms in `eval_terms`, in the fixed order the design
//! prescribes.

use crate::piece::QUEEN;

use super::eval_terms::tables::{PHASE_TOTAL, QUEEN_PHASE_WEIGHT};
use super::Board;

impl Board {
    /// Side-independent signed score: positive favours White. Callers
    /// negate for Black-to-move as needed.
    #[must_use]
    pub fn get_score(&self) -> i32 {
        let mut mid = self.score_mid;

        mid += self.eval_king_shield(1) + self.eval_king_shield(-1);
        mid += self.eval_castling(1) + self.eval_castling(-1);

        let pawn_count = self.get_bitboard(1).count_ones() + self.get_bitboard(-1).count_ones();
        let white_queen = i32::from(self.get_bitboard(QUEEN) != 0);
        let black_queen = i32::from(self.get_bitboard(-QUEEN) != 0);
        let phase = pawn_count as i32 + QUEEN_PHASE_WEIGHT * white_queen + QUEEN_PHASE_WEIGHT * black_queen;
        let eg_phase = PHASE_TOTAL - phase;
        let mut score = (mid * phase + self.score_eg * eg_phase) / PHASE_TOTAL;

        score += self.eval_pawn_cover(1) + self.eval_pawn_cover(-1);
        score += self.eval_mobility();
        score += self.eval_doubled_pawns(1) + self.eval_doubled_pawns(-1);
        score += self.eval_passed_pawns(1) + self.eval_passed_pawns(-1);
        score += self.eval_king_danger(1) + self.eval_king_danger(-1);

        self.dampen_pawnless_draw(score)
    }
}
