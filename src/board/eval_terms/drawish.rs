//! Pawnless-draw dampening: a small material edge in a pawnless position is
//! often drawish, so shrink the interpolated score toward zero as the
//! fifty-move clock runs out.

use super::tables::{DRAWISH_CLOCK_DIVISOR, DRAWISH_HIGH, DRAWISH_LOW};
use crate::board::Board;
use crate::piece::PAWN;

impl Board {
    /// Applied to the already phase-interpolated score; a no-op unless one
    /// side is pawnless and up by a small, ambiguous margin.
    pub(in crate::board) fn dampen_pawnless_draw(&self, interpolated: i32) -> i32 {
        let white_pawnless = self.get_bitboard(PAWN) == 0;
        let black_pawnless = self.get_bitboard(-PAWN) == 0;

        let white_ahead_by_a_little =
            white_pawnless && interpolated > DRAWISH_LOW && interpolated < DRAWISH_HIGH;
        let black_ahead_by_a_little =
            black_pawnless && interpolated < -DRAWISH_LOW && interpolated > -DRAWISH_HIGH;

        if !white_ahead_by_a_little && !black_ahead_by_a_little {
            return interpolated;
        }

        let factor = (DRAWISH_CLOCK_DIVISOR - self.get_halfmove_clock() as i32).max(0);
        interpolated * factor / DRAWISH_CLOCK_DIVISOR
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::piece::{BISHOP, EMPTY, KING};

    fn board_with(pieces: &[(usize, crate::piece::Piece)], halfmove_clock: i32) -> Board {
        let mut mailbox = [EMPTY; 64];
        for &(sq, piece) in pieces {
            mailbox[sq] = piece;
        }
        let mut data: Vec<i32> = mailbox.iter().map(|&p| p as i32).collect();
        data.push(halfmove_clock);
        data.push(0);
        data.push(0);
        Board::new(&data).unwrap()
    }

    #[test]
    fn pawnless_small_edge_is_dampened_toward_zero() {
        let board = board_with(&[(60, KING), (4, -KING), (59, BISHOP)], 32);
        // Halfway through the clock, a 200cp edge should shrink to half.
        assert_eq!(board.dampen_pawnless_draw(200), 100);
    }

    #[test]
    fn fresh_clock_leaves_the_score_untouched() {
        let board = board_with(&[(60, KING), (4, -KING), (59, BISHOP)], 0);
        assert_eq!(board.dampen_pawnless_draw(200), 200);
    }

    #[test]
    fn large_advantage_is_not_dampened() {
        let board = board_with(&[(60, KING), (4, -KING), (59, BISHOP)], 32);
        assert_eq!(board.dampen_pawnless_draw(500), 500);
    }

    #[test]
    fn pawn_on_board_disables_dampening() {
        let board = board_with(&[(60, KING), (4, -KING), (52, crate::piece::PAWN)], 32);
        assert_eq!(board.dampen_pawnless_draw(200), 200);
    }
}
