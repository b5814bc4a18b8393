//! `perform_move`/`undo_move` and their null-move twins.
//!
//! Incremental score and hash bookkeeping lives entirely in
//! `add_piece`/`remove_piece` (used only going forward) and the raw
//! `place_raw`/`clear_raw` primitives (used on undo, where the score and
//! hash are instead restored wholesale from the popped history frame).

use crate::bits::{pack, unpack};
use crate::piece::{
    color_of, kind_of, piece_bb_index, Piece, BLACK_KING_SIDE_ROOK_START,
    BLACK_QUEEN_SIDE_ROOK_START, EMPTY, KING, PAWN, ROOK, WHITE_KING_SIDE_ROOK_START,
    WHITE_QUEEN_SIDE_ROOK_START,
};
use crate::pst::pst_value;
use crate::state_bits::{
    black_ep_flag, castling_index, en_passant_zobrist_index, white_ep_flag,
    BLACK_HAS_CASTLED, BLACK_KING_SIDE_RIGHT, BLACK_QUEEN_SIDE_RIGHT, EP_MASK,
    WHITE_HAS_CASTLED, WHITE_KING_SIDE_RIGHT, WHITE_QUEEN_SIDE_RIGHT,
};
use crate::zobrist::{CASTLING_RNG_NUMBERS, EN_PASSANT_RNG_NUMBERS, PIECE_RNG_NUMBERS, PLAYER_RNG_NUMBER};
use crate::move_codec::{decode_end, decode_piece, decode_start};

use super::{Board, HistoryFrame, EN_PASSANT_BIT, MAX_GAME_HALFMOVES};

/// Maps a king's castling destination square to the rook's (from, to) pair.
fn castle_rook_squares(moving_color: i8, king_to: usize) -> (usize, usize) {
    match (moving_color > 0, king_to) {
        (true, 62) => (WHITE_KING_SIDE_ROOK_START, 61),
        (true, 58) => (WHITE_QUEEN_SIDE_ROOK_START, 59),
        (false, 6) => (BLACK_KING_SIDE_ROOK_START, 5),
        (false, 2) => (BLACK_QUEEN_SIDE_ROOK_START, 3),
        _ => unreachable!("perform_move only calls this for a legal castling destination"),
    }
}

impl Board {
    fn place_raw(&mut self, piece: Piece, sq: usize) {
        let bit = 1u64 << sq;
        self.mailbox[sq] = piece;
        self.piece_bb[piece_bb_index(piece)] |= bit;
        self.occ_bb[(color_of(piece) + 1) as usize] |= bit;
        self.occ_bb[1] &= !bit;
    }

    fn clear_raw(&mut self, sq: usize) -> Piece {
        let piece = self.mailbox[sq];
        if piece != EMPTY {
            let bit = 1u64 << sq;
            self.piece_bb[piece_bb_index(piece)] &= !bit;
            self.occ_bb[(color_of(piece) + 1) as usize] &= !bit;
            self.occ_bb[1] |= bit;
            self.mailbox[sq] = EMPTY;
        }
        piece
    }

    fn clear_castling_right(&mut self, bit: u32) {
        if self.state & bit != 0 {
            let old_index = castling_index(self.state);
            self.state &= !bit;
            let new_index = castling_index(self.state);
            self.hash ^= CASTLING_RNG_NUMBERS[old_index];
            self.hash ^= CASTLING_RNG_NUMBERS[new_index];
        }
    }

    fn clear_castling_rights_for_color(&mut self, color: i8) {
        if color > 0 {
            self.clear_castling_right(WHITE_KING_SIDE_RIGHT);
            self.clear_castling_right(WHITE_QUEEN_SIDE_RIGHT);
        } else {
            self.clear_castling_right(BLACK_KING_SIDE_RIGHT);
            self.clear_castling_right(BLACK_QUEEN_SIDE_RIGHT);
        }
    }

    fn clear_castling_right_for_corner(&mut self, sq: usize) {
        let bit = match sq {
            WHITE_KING_SIDE_ROOK_START => WHITE_KING_SIDE_RIGHT,
            WHITE_QUEEN_SIDE_ROOK_START => WHITE_QUEEN_SIDE_RIGHT,
            BLACK_KING_SIDE_ROOK_START => BLACK_KING_SIDE_RIGHT,
            BLACK_QUEEN_SIDE_ROOK_START => BLACK_QUEEN_SIDE_RIGHT,
            _ => return,
        };
        self.clear_castling_right(bit);
    }

    fn set_castled(&mut self, color: i8) {
        if color > 0 {
            self.state |= WHITE_HAS_CASTLED;
        } else {
            self.state |= BLACK_HAS_CASTLED;
        }
    }

    fn clear_en_passant(&mut self) {
        if let Some(idx) = en_passant_zobrist_index(self.state) {
            self.hash ^= EN_PASSANT_RNG_NUMBERS[idx];
        }
        self.state &= !EP_MASK;
    }

    fn set_en_passant(&mut self, flag: u32) {
        self.state |= flag;
        if let Some(idx) = en_passant_zobrist_index(self.state) {
            self.hash ^= EN_PASSANT_RNG_NUMBERS[idx];
        }
    }

    /// Places `piece` on `sq`, incrementally updating the hash and the
    /// material+PST score. Used going forward only: undo restores the
    /// score/hash wholesale from the history frame instead.
    pub(super) fn add_piece(&mut self, piece: Piece, sq: usize) {
        self.place_raw(piece, sq);
        self.hash ^= PIECE_RNG_NUMBERS[piece_bb_index(piece) * 64 + sq];
        let (mg, eg) = unpack(pst_value(kind_of(piece) as usize, color_of(piece), sq));
        self.score_mid += mg as i32;
        self.score_eg += eg as i32;
    }

    /// Removes whatever piece sits on `sq`, incrementally undoing the hash
    /// and score contribution, and clearing the corresponding castling
    /// right if a rook just left (or was captured on) its home corner.
    pub(super) fn remove_piece(&mut self, sq: usize) -> Piece {
        let piece = self.clear_raw(sq);
        if piece != EMPTY {
            self.hash ^= PIECE_RNG_NUMBERS[piece_bb_index(piece) * 64 + sq];
            let (mg, eg) = unpack(pst_value(kind_of(piece) as usize, color_of(piece), sq));
            self.score_mid -= mg as i32;
            self.score_eg -= eg as i32;
            if kind_of(piece) == ROOK {
                self.clear_castling_right_for_corner(sq);
            }
        }
        piece
    }

    fn push_history_frame(&mut self) {
        debug_assert!(
            self.history_len < MAX_GAME_HALFMOVES,
            "history stack exhausted"
        );
        self.history_stack[self.history_len] = HistoryFrame {
            state: self.state,
            halfmove_clock: self.halfmove_clock,
            hash: self.hash,
            packed_score: pack(self.score_mid as i16, self.score_eg as i16),
        };
        self.history_len += 1;
    }

    fn pop_history_frame(&mut self) {
        self.history_len -= 1;
        let frame = self.history_stack[self.history_len];
        self.state = frame.state;
        self.halfmove_clock = frame.halfmove_clock;
        self.hash = frame.hash;
        let (mg, eg) = unpack(frame.packed_score);
        self.score_mid = mg as i32;
        self.score_eg = eg as i32;
    }

    /// Applies a move: `piece_id` is the moved piece's magnitude (1..6,
    /// already reflecting any promotion choice); colour is inferred from
    /// the mover's current square. Returns `EMPTY` for a quiet move, the
    /// captured piece's magnitude for a normal capture, or
    /// [`EN_PASSANT_BIT`] for an en-passant capture.
    pub fn perform_move(&mut self, piece_id: Piece, from: usize, to: usize) -> i32 {
        self.push_history_frame();

        let moving_color = color_of(self.mailbox[from]);
        self.clear_en_passant();

        let captured_at_to = self.mailbox[to];
        let is_capture = captured_at_to != EMPTY;

        self.remove_piece(from);

        let mut result = EMPTY as i32;
        let mut resets_clock = is_capture;

        if is_capture {
            result = kind_of(captured_at_to) as i32;
            self.remove_piece(to);
        } else if kind_of(piece_id) == PAWN {
            resets_clock = true;
            let diff = from as isize - to as isize;
            if diff.abs() == 16 {
                if moving_color > 0 {
                    self.set_en_passant(black_ep_flag(crate::piece::file_of(from)));
                } else {
                    self.set_en_passant(white_ep_flag(crate::piece::file_of(from)));
                }
            } else if diff.abs() == 7 || diff.abs() == 9 {
                let captured_sq = (to as isize + 8 * moving_color as isize) as usize;
                self.remove_piece(captured_sq);
                result = EN_PASSANT_BIT;
            }
        }

        self.add_piece(piece_id * moving_color, to);

        if kind_of(piece_id) == KING {
            if moving_color > 0 {
                self.white_king_sq = to;
            } else {
                self.black_king_sq = to;
            }
            let diff = from as isize - to as isize;
            if diff.abs() == 2 {
                let (rook_from, rook_to) = castle_rook_squares(moving_color, to);
                self.remove_piece(rook_from);
                self.add_piece(ROOK * moving_color, rook_to);
                self.set_castled(moving_color);
            }
            self.clear_castling_rights_for_color(moving_color);
        }

        self.halfmove_clock = if resets_clock { 0 } else { self.halfmove_clock + 1 };
        self.halfmove_count += 1;
        self.hash ^= *PLAYER_RNG_NUMBER;

        #[cfg(debug_assertions)]
        self.assert_consistent();

        result
    }

    /// Inverse of [`Board::perform_move`]: `removed` is the value it
    /// returned. State, clock, hash, and score are restored wholesale from
    /// the popped history frame rather than incrementally reversed.
    pub fn undo_move(&mut self, piece_id: Piece, from: usize, to: usize, removed: i32) {
        let placed = self.mailbox[to];
        let moving_color = color_of(placed);

        self.clear_raw(to);
        self.place_raw(piece_id * moving_color, from);

        if kind_of(piece_id) == KING {
            if moving_color > 0 {
                self.white_king_sq = from;
            } else {
                self.black_king_sq = from;
            }
            let diff = from as isize - to as isize;
            if diff.abs() == 2 {
                let (rook_from, rook_to) = castle_rook_squares(moving_color, to);
                self.clear_raw(rook_to);
                self.place_raw(ROOK * moving_color, rook_from);
            }
        }

        if removed == EN_PASSANT_BIT {
            let captured_sq = (to as isize + 8 * moving_color as isize) as usize;
            self.place_raw(-moving_color, captured_sq);
        } else if removed != EMPTY as i32 {
            self.place_raw((removed as Piece) * -moving_color, to);
        }

        self.pop_history_frame();
        self.halfmove_count -= 1;

        #[cfg(debug_assertions)]
        self.assert_consistent();
    }

    /// Passes the turn without moving a piece: pushes a history frame,
    /// clears en-passant rights, and flips the side-to-move hash.
    pub fn perform_null_move(&mut self) {
        self.push_history_frame();
        self.clear_en_passant();
        self.halfmove_clock += 1;
        self.halfmove_count += 1;
        self.hash ^= *PLAYER_RNG_NUMBER;
    }

    /// Inverse of [`Board::perform_null_move`].
    pub fn undo_null_move(&mut self) {
        self.pop_history_frame();
        self.halfmove_count -= 1;
    }

    /// Decodes `encoded` via [`crate::move_codec`] and applies it through
    /// [`Board::perform_move`].
    pub fn perform_encoded_move(&mut self, encoded: u32) -> i32 {
        let piece = kind_of(decode_piece(encoded));
        let from = decode_start(encoded);
        let to = decode_end(encoded);
        self.perform_move(piece, from, to)
    }
}
