//! Castling bonus/penalty: reward having castled, penalize having lost
//! rights without castling.

use crate::state_bits::{
    BLACK_HAS_CASTLED, BLACK_KING_SIDE_RIGHT, BLACK_QUEEN_SIDE_RIGHT, WHITE_HAS_CASTLED,
    WHITE_KING_SIDE_RIGHT, WHITE_QUEEN_SIDE_RIGHT,
};

use super::tables::{CASTLE_BONUS, LOST_KING_SIDE_RIGHT_PENALTY, LOST_QUEEN_SIDE_RIGHT_PENALTY};
use crate::board::Board;

impl Board {
    /// Midgame-only; signed for `color`.
    pub(in crate::board) fn eval_castling(&self, color: i8) -> i32 {
        let state = self.get_state();
        let (castled, king_side_right, queen_side_right) = if color > 0 {
            (WHITE_HAS_CASTLED, WHITE_KING_SIDE_RIGHT, WHITE_QUEEN_SIDE_RIGHT)
        } else {
            (BLACK_HAS_CASTLED, BLACK_KING_SIDE_RIGHT, BLACK_QUEEN_SIDE_RIGHT)
        };

        let value = if state & castled != 0 {
            CASTLE_BONUS
        } else {
            let mut penalty = 0;
            if state & king_side_right == 0 {
                penalty -= LOST_KING_SIDE_RIGHT_PENALTY;
            }
            if state & queen_side_right == 0 {
                penalty -= LOST_QUEEN_SIDE_RIGHT_PENALTY;
            }
            penalty
        };

        value * color as i32
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::piece::{EMPTY, KING};
    use crate::state_bits::{WHITE_KING_SIDE_RIGHT, WHITE_QUEEN_SIDE_RIGHT};

    fn board_with_state(state: u32) -> Board {
        let mut mailbox = [EMPTY; 64];
        mailbox[60] = KING;
        mailbox[4] = -KING;
        let mut data: Vec<i32> = mailbox.iter().map(|&p| p as i32).collect();
        data.push(0);
        data.push(0);
        data.push(state as i32);
        Board::new(&data).unwrap()
    }

    #[test]
    fn having_all_rights_scores_zero() {
        let board = board_with_state(WHITE_KING_SIDE_RIGHT | WHITE_QUEEN_SIDE_RIGHT);
        assert_eq!(board.eval_castling(1), 0);
    }

    #[test]
    fn losing_both_rights_without_castling_penalizes_both() {
        let board = board_with_state(0);
        assert_eq!(
            board.eval_castling(1),
            -(super::super::tables::LOST_KING_SIDE_RIGHT_PENALTY
                + super::super::tables::LOST_QUEEN_SIDE_RIGHT_PENALTY)
        );
    }

    #[test]
    fn having_castled_scores_the_bonus_regardless_of_rights() {
        let board = board_with_state(crate::state_bits::WHITE_HAS_CASTLED);
        assert_eq!(board.eval_castling(1), super::super::tables::CASTLE_BONUS);
    }
}
