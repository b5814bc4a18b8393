//! Passed-pawn bonus: escalating reward the closer an unopposed pawn is to
//! promotion, with an extra bonus once both neighbouring files are clear
//! too.

use crate::patterns::{
    distance_to_promotion, BLACK_PAWN_FREEPATH_PATTERNS, WHITE_PAWN_FREEPATH_PATTERNS,
};
use crate::piece::file_of;

use super::tables::PASSED_PAWN_STEP;
use crate::board::Board;

impl Board {
    pub(in crate::board) fn eval_passed_pawns(&self, color: i8) -> i32 {
        let own_pawns = self.get_bitboard(crate::piece::PAWN * color);
        let enemy_pawns = self.get_bitboard(crate::piece::PAWN * -color);
        let enemy_pieces = self.get_occupancy_bitboard(-color);
        let freepaths = if color > 0 {
            &WHITE_PAWN_FREEPATH_PATTERNS
        } else {
            &BLACK_PAWN_FREEPATH_PATTERNS
        };
        let forward = if color > 0 { -1 } else { 1 };

        let mut total = 0i32;
        let mut pawns = own_pawns;
        while pawns != 0 {
            let sq = crate::bits::pop_lsb(&mut pawns) as usize;
            let distance = distance_to_promotion(sq, forward);
            if distance > 4 {
                continue;
            }
            let own_path = freepaths[sq];
            if own_path & enemy_pieces != 0 {
                continue;
            }

            let file = file_of(sq);
            let mut neighbour_clear = true;
            for neighbour_file in [file.wrapping_sub(1), file + 1] {
                if neighbour_file >= 8 {
                    continue;
                }
                let neighbour_sq = crate::piece::rank_of(sq) * 8 + neighbour_file;
                if freepaths[neighbour_sq] & enemy_pawns != 0 {
                    neighbour_clear = false;
                }
            }
            if !neighbour_clear {
                continue;
            }

            let step = 5 - distance as i32;
            total += PASSED_PAWN_STEP * step;
            if file != 0 && file != 7 {
                total += (1 << step) + step;
            }
        }
        total * color as i32
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::piece::{EMPTY, KING, PAWN};

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
    fn unopposed_pawn_near_promotion_scores_positive() {
        // White pawn at rank 2, file 4 (two squares from promotion), with
        // both kings tucked away on file 0 so they don't block the path.
        let board = board_with(&[(56, KING), (0, -KING), (20, PAWN)]);
        assert!(board.eval_passed_pawns(1) > 0);
    }

    #[test]
    fn blocked_file_scores_zero() {
        let board = board_with(&[(56, KING), (0, -KING), (20, PAWN), (12, -PAWN)]);
        // enemy pawn directly ahead on the same file
        assert_eq!(board.eval_passed_pawns(1), 0);
    }

    #[test]
    fn far_from_promotion_scores_zero() {
        let board = board_with(&[(56, KING), (0, -KING), (52, PAWN)]);
        assert_eq!(board.eval_passed_pawns(1), 0);
    }
}
