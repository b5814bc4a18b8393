//! Static Exchange Evaluation: an alternating cheapest-attacker swap-off on
//! a single target square, with asymmetric early-exit "stand-pat" cutoffs.

use crate::piece::{kind_of, Piece, PIECE_VALUES};

use super::Board;

#[inline]
fn piece_value(kind: Piece) -> i32 {
    PIECE_VALUES[kind as usize]
}

impl Board {
    /// Evaluates the exchange sequence starting with `own_piece_id` capturing
    /// `captured_piece_id` on `target` from `from`, alternating cheapest
    /// attackers starting with `opp_color`. Returns the net material gain
    /// for the side making the initial capture (positive = good trade).
    ///
    /// The two early-exit inequalities are asymmetric by design: the
    /// opponent's continuation bails out on `score + trophy < 0`, the
    /// capturing side's on `score - trophy > 0`. This is the "stand-pat"
    /// cutoff — whichever side is to move can refuse to continue once the
    /// running score already dominates the best remaining continuation.
    #[must_use]
    pub fn see_score(
        &self,
        opp_color: i8,
        from: usize,
        target: usize,
        own_piece_id: Piece,
        captured_piece_id: Piece,
    ) -> i32 {
        let mut occupied = self.all_occupied() & !(1u64 << from);
        let mut score = piece_value(kind_of(captured_piece_id));
        let mut trophy = piece_value(kind_of(own_piece_id));
        let own_color = -opp_color;

        loop {
            let attacker = self.find_smallest_attacker(occupied, opp_color, target);
            if attacker < 0 {
                return score;
            }
            let attacker_sq = attacker as usize;
            score -= trophy;
            trophy = piece_value(kind_of(self.get_item(attacker_sq)));
            occupied &= !(1u64 << attacker_sq);
            if score + trophy < 0 {
                return score;
            }

            let attacker = self.find_smallest_attacker(occupied, own_color, target);
            if attacker < 0 {
                return score;
            }
            let attacker_sq = attacker as usize;
            score += trophy;
            trophy = piece_value(kind_of(self.get_item(attacker_sq)));
            occupied &= !(1u64 << attacker_sq);
            if score - trophy > 0 {
                return score;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{BISHOP, EMPTY, KING, KNIGHT, PAWN};

    fn board_with(pieces: &[(usize, crate::piece::Piece)]) -> crate::board::Board {
        let mut mailbox = [EMPTY; 64];
        for &(sq, piece) in pieces {
            mailbox[sq] = piece;
        }
        let mut data: Vec<i32> = mailbox.iter().map(|&p| p as i32).collect();
        data.push(0);
        data.push(0);
        data.push(0);
        crate::board::Board::new(&data).unwrap()
    }

    #[test]
    fn losing_knight_for_defended_pawn_scores_negative() {
        // Knight captures a pawn on the target square, defended once by a
        // pawn standing one rank further back.
        let board = board_with(&[
            (60, KING),
            (4, -KING),
            (43, KNIGHT),
            (35, -PAWN),
            (26, -PAWN),
        ]);
        let score = board.see_score(-1, 43, 35, KNIGHT, PAWN);
        assert_eq!(score, 100 - 320);
    }

    #[test]
    fn undefended_capture_keeps_full_value() {
        let board = board_with(&[(60, KING), (4, -KING), (43, KNIGHT), (35, -PAWN)]);
        let score = board.see_score(-1, 43, 35, KNIGHT, PAWN);
        assert_eq!(score, 100);
    }

    #[test]
    fn bishop_recapture_still_loses_the_exchange_against_two_defenders() {
        // Bishop captures a pawn on the target square, defended by two
        // enemy pawns standing one rank further back on either side of it;
        // the stand-pat cutoff fires after the first recapture already
        // puts the exchange underwater, so the second defender is never
        // reached.
        let board = board_with(&[
            (60, KING),
            (4, -KING),
            (43, BISHOP),
            (35, -PAWN),
            (26, -PAWN),
            (28, -PAWN),
        ]);
        let score = board.see_score(-1, 43, 35, BISHOP, PAWN);
        assert_eq!(score, 100 - 330);
    }
}
