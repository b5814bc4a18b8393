//! King-danger penalty: enemy non-pawn pieces crowding the king's zone,
//! amplified by how many of them are queens.

use crate::patterns::KING_DANGER_ZONE_PATTERNS;

use super::tables::{KING_DANGER_BASE, KING_DANGER_CAP};
use crate::board::Board;
use crate::piece::{BISHOP, KNIGHT, QUEEN, ROOK};

impl Board {
    /// Penalty charged against `color` for enemy pieces crowding its king's
    /// zone, capped so a five-piece pile-up doesn't blow past all reason.
    pub(in crate::board) fn eval_king_danger(&self, color: i8) -> i32 {
        let zone = KING_DANGER_ZONE_PATTERNS[self.find_king_position(color)];
        let enemy = -color;
        let enemy_non_pawns = self.get_bitboard(KNIGHT * enemy)
            | self.get_bitboard(BISHOP * enemy)
            | self.get_bitboard(ROOK * enemy)
            | self.get_bitboard(QUEEN * enemy);

        let count = (enemy_non_pawns & zone).count_ones() as i32;
        if count == 0 {
            return 0;
        }
        let q = (self.get_bitboard(QUEEN * enemy) & zone).count_ones() as i32;
        let danger = (KING_DANGER_BASE << (count + q - 1)).min(KING_DANGER_CAP);
        -danger * color as i32
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::piece::{EMPTY, KING, KNIGHT, QUEEN};

    fn board_with(pieces: &[(usize, crate::piece::Piece)]) -> Board {
        let mut mailbox = [EMPTY; 64];
        for &(sq, piece) in pieces {
            mailbox[sq] = piece;
        }
        let mut data: Vec<i32> = mailbox.iter().map(|&p| p as i32).collect();
        data.push(0);
        data.push(0);
        data.push(0);
        Board::new(&data).unwrap()
    }

    #[test]
    fn empty_zone_scores_zero() {
        let board = board_with(&[(60, KING), (4, -KING)]);
        assert_eq!(board.eval_king_danger(1), 0);
    }

    #[test]
    fn single_knight_in_zone_charges_base_penalty() {
        // Knight a file away from the king, within the zone.
        let board = board_with(&[(60, KING), (4, -KING), (45, -KNIGHT)]);
        assert_eq!(board.eval_king_danger(1), -super::super::tables::KING_DANGER_BASE);
    }

    #[test]
    fn queen_in_zone_doubles_the_shift() {
        let board = board_with(&[(60, KING), (4, -KING), (45, -QUEEN)]);
        // count = 1, q = 1 -> base << (1 + 1 - 1) = base << 1
        assert_eq!(board.eval_king_danger(1), -(super::super::tables::KING_DANGER_BASE << 1));
    }
}
