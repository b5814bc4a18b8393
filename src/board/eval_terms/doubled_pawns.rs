//! Doubled-pawn penalty: any two pawns of the same colour sharing a file
//! within four ranks of each other, found via rotate-right self-overlap
//! rather than a per-file loop.

use crate::bits::{popcount, rotr};

use super::tables::DOUBLED_PAWN_PENALTY;
use crate::board::Board;

impl Board {
    pub(in crate::board) fn eval_doubled_pawns(&self, color: i8) -> i32 {
        let pawns = self.get_bitboard(crate::piece::PAWN * color);
        let doubled_mask = rotr(pawns, 8) | rotr(pawns, 16) | rotr(pawns, 24) | rotr(pawns, 32);
        let penalty = popcount(pawns & doubled_mask) as i32 * DOUBLED_PAWN_PENALTY;
        -penalty * color as i32
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
    fn two_pawns_same_file_within_four_ranks_are_doubled() {
        // Both on the e-file, four ranks apart.
        let board = board_with(&[(60, KING), (4, -KING), (52, PAWN), (20, PAWN)]);
        assert_eq!(board.eval_doubled_pawns(1), -super::super::tables::DOUBLED_PAWN_PENALTY);
    }

    #[test]
    fn pawns_on_different_files_are_not_doubled() {
        let board = board_with(&[(60, KING), (4, -KING), (52, PAWN), (21, PAWN)]);
        assert_eq!(board.eval_doubled_pawns(1), 0);
    }
}
