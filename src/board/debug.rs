//! Debug-only invariant checks. Compiled out entirely in release builds;
//! `perform_move`/`undo_move` call [`Board::assert_consistent`] after every
//! mutation in test/debug builds so a broken incremental update fails fast
//! instead of silently drifting.

use crate::piece::{piece_bb_index, KING};

use super::Board;

impl Board {
    pub(super) fn assert_consistent(&self) {
        for sq in 0..64 {
            let piece = self.mailbox[sq];
            if piece == 0 {
                debug_assert!(
                    self.occ_bb[1] & (1u64 << sq) != 0,
                    "square {sq} is empty in the mailbox but not in the empty-square bitboard"
                );
            } else {
                let bb = self.piece_bb[piece_bb_index(piece)];
                debug_assert!(
                    bb & (1u64 << sq) != 0,
                    "square {sq} holds {piece} in the mailbox but is absent from its piece bitboard"
                );
                let color_slot = (crate::piece::color_of(piece) + 1) as usize;
                debug_assert!(
                    self.occ_bb[color_slot] & (1u64 << sq) != 0,
                    "square {sq} is missing from its colour's occupancy bitboard"
                );
            }
        }

        debug_assert_eq!(
            self.piece_bb[piece_bb_index(KING)].count_ones(),
            1,
            "exactly one white king must be on the board"
        );
        debug_assert_eq!(
            self.piece_bb[piece_bb_index(-KING)].count_ones(),
            1,
            "exactly one black king must be on the board"
        );
        debug_assert_eq!(
            self.mailbox[self.white_king_sq],
            KING,
            "cached white king square out of sync with the mailbox"
        );
        debug_assert_eq!(
            self.mailbox[self.black_king_sq],
            -KING,
            "cached black king square out of sync with the mailbox"
        );

        debug_assert_eq!(
            self.occ_bb[0] & self.occ_bb[2],
            0,
            "white and black occupancy bitboards must not overlap"
        );
        debug_assert_eq!(
            self.occ_bb[0] | self.occ_bb[1] | self.occ_bb[2],
            u64::MAX,
            "occupancy bitboards must partition the full board"
        );
    }
}
