//! The board core: mailbox + bitboard dual representation, incremental
//! Zobrist hash and material/PST score, make/unmake, SEE, and evaluation.
//!
//! Lifecycle and the aggregate itself live here; make/unmake, queries, SEE,
//! draw detection, and the evaluator each get their own file.

mod draw;
mod eval;
pub mod eval_terms;
mod make_unmake;
mod query;
mod see;

#[cfg(debug_assertions)]
mod debug;

use std::fmt;

#[cfg(test)]
use crate::bits::unpack;
use crate::piece::{piece_bb_index, Piece, EMPTY, KING};
#[cfg(test)]
use crate::piece::color_of;
use crate::repetition::PositionHistory;

/// Sentinel returned by [`Board::perform_move`] on an en-passant capture.
/// Distinct from every possible captured-piece magnitude (0..6).
pub const EN_PASSANT_BIT: i32 = 1 << 31;

/// Upper bound on plies a single game can contain; `history_stack` is
/// preallocated to this size and never grows.
pub const MAX_GAME_HALFMOVES: usize = 11_796;

#[derive(Debug, Clone, Copy, Default)]
struct HistoryFrame {
    state: u32,
    halfmove_clock: u32,
    hash: u64,
    packed_score: u32,
}

/// Construction-time failure: the input vector was malformed or a king is
/// missing. Never produced once a `Board` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructionError {
    /// The input vector had fewer than 67 entries.
    TooShort { len: usize },
    /// No White king (`+6`) present on the 64-square mailbox.
    MissingWhiteKing,
    /// No Black king (`-6`) present on the 64-square mailbox.
    MissingBlackKing,
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::TooShort { len } => write!(
                f,
                "board construction vector has {len} entries, need at least 67"
            ),
            ConstructionError::MissingWhiteKing => {
                write!(f, "no White king present on the board")
            }
            ConstructionError::MissingBlackKing => {
                write!(f, "no Black king present on the board")
            }
        }
    }
}

impl std::error::Error for ConstructionError {}

/// The board entity: mailbox, piece bitboards, colour-occupancy bitboards,
/// incremental hash/score accumulators, and a preallocated undo history.
///
/// Every public operation must leave the mailbox/bitboard/king-cache
/// invariants holding; see `board::debug` for the debug-only checks.
pub struct Board {
    mailbox: [Piece; 64],
    /// Indexed by `piece + 6`: one bitboard per signed piece type.
    piece_bb: [u64; 13],
    /// `[Black, empty, White]`, indexed by `color + 1` for the two
    /// occupied slots; index 1 is the complement of the other two.
    occ_bb: [u64; 3],
    white_king_sq: usize,
    black_king_sq: usize,
    score_mid: i32,
    score_eg: i32,
    hash: u64,
    halfmove_count: u32,
    halfmove_clock: u32,
    state: u32,
    endgame: bool,
    history_stack: Box<[HistoryFrame; MAX_GAME_HALFMOVES]>,
    history_len: usize,
    position_history: PositionHistory,
}

impl Board {
    /// Builds a board from a 67-entry vector: 64 mailbox entries (signed
    /// piece codes, possibly `0`), then `halfmove_clock`, `halfmove_count`,
    /// and `state`.
    pub fn new(data: &[i32]) -> Result<Self, ConstructionError> {
        if data.len() < 67 {
            let err = ConstructionError::TooShort { len: data.len() };
            #[cfg(feature = "logging")]
            log::warn!("board construction rejected: {err}");
            return Err(err);
        }

        let mut mailbox = [EMPTY; 64];
        let mut white_king_sq = None;
        let mut black_king_sq = None;
        for (sq, &value) in data[0..64].iter().enumerate() {
            let piece = value as Piece;
            mailbox[sq] = piece;
            if piece == KING {
                white_king_sq = Some(sq);
            } else if piece == -KING {
                black_king_sq = Some(sq);
            }
        }

        let white_king_sq = white_king_sq.ok_or_else(|| {
            let err = ConstructionError::MissingWhiteKing;
            #[cfg(feature = "logging")]
            log::warn!("board construction rejected: {err}");
            err
        })?;
        let black_king_sq = black_king_sq.ok_or_else(|| {
            let err = ConstructionError::MissingBlackKing;
            #[cfg(feature = "logging")]
            log::warn!("board construction rejected: {err}");
            err
        })?;

        let mut board = Board {
            mailbox: [EMPTY; 64],
            piece_bb: [0; 13],
            occ_bb: [0, u64::MAX, 0],
            white_king_sq,
            black_king_sq,
            score_mid: 0,
            score_eg: 0,
            hash: 0,
            halfmove_count: data[65] as u32,
            halfmove_clock: data[64] as u32,
            state: data[66] as u32,
            endgame: false,
            history_stack: Box::new([HistoryFrame::default(); MAX_GAME_HALFMOVES]),
            history_len: 0,
            position_history: PositionHistory::new(),
        };

        for (sq, &piece) in mailbox.iter().enumerate() {
            if piece != EMPTY {
                board.add_piece(piece, sq);
            }
        }
        board.recalculate_hash();
        board.update_endgame_status();

        #[cfg(feature = "logging")]
        log::debug!("board constructed: hash={:#x}", board.hash);

        Ok(board)
    }

    /// Rebuilds `hash` from scratch from the current mailbox and state.
    /// Used after bulk mutation (e.g. `set_state`) where incremental XOR
    /// bookkeeping was bypassed.
    pub fn recalculate_hash(&mut self) {
        let mut hash = 0u64;
        for (sq, &piece) in self.mailbox.iter().enumerate() {
            if piece != EMPTY {
                hash ^= crate::zobrist::PIECE_RNG_NUMBERS[piece_bb_index(piece) * 64 + sq];
            }
        }
        hash ^= crate::zobrist::CASTLING_RNG_NUMBERS[crate::state_bits::castling_index(self.state)];
        if let Some(idx) = crate::state_bits::en_passant_zobrist_index(self.state) {
            hash ^= crate::zobrist::EN_PASSANT_RNG_NUMBERS[idx];
        }
        if self.get_active_player() < 0 {
            hash ^= *crate::zobrist::PLAYER_RNG_NUMBER;
        }
        self.hash = hash;
    }

    /// Recomputes `score_mid`/`score_eg` from scratch via the PST tables.
    /// Not part of the public contract (incremental updates keep the score
    /// current); used by tests to check the incremental bookkeeping against
    /// a from-scratch rebuild (§8 property 2's score analogue).
    #[cfg(test)]
    fn recalculate_score(&mut self) {
        let mut mid = 0i32;
        let mut eg = 0i32;
        for (sq, &piece) in self.mailbox.iter().enumerate() {
            if piece != EMPTY {
                let (mg, eg_delta) = unpack(crate::pst::pst_value(
                    crate::piece::kind_of(piece) as usize,
                    color_of(piece),
                    sq,
                ));
                mid += mg as i32;
                eg += eg_delta as i32;
            }
        }
        self.score_mid = mid;
        self.score_eg = eg;
    }

    pub fn set_state(&mut self, state: u32) {
        self.state = state;
    }

    pub fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    pub fn initialize_halfmove_count(&mut self, count: u32) {
        self.halfmove_count = count;
    }

    pub fn set_history(&mut self, history: PositionHistory) {
        self.position_history = history;
    }

    #[must_use]
    pub fn get_hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn get_active_player(&self) -> i8 {
        if self.halfmove_count % 2 == 0 {
            1
        } else {
            -1
        }
    }

    #[must_use]
    pub fn get_halfmove_count(&self) -> u32 {
        self.halfmove_count
    }

    #[must_use]
    pub fn get_halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn get_full_move_count(&self) -> u32 {
        self.halfmove_count / 2 + 1
    }

    #[must_use]
    pub fn get_state(&self) -> u32 {
        self.state
    }

    #[must_use]
    pub fn find_king_position(&self, color: i8) -> usize {
        if color > 0 {
            self.white_king_sq
        } else {
            self.black_king_sq
        }
    }

    #[must_use]
    pub fn get_item(&self, sq: usize) -> Piece {
        self.mailbox[sq]
    }

    #[must_use]
    pub fn get_bitboard(&self, piece: Piece) -> u64 {
        self.piece_bb[piece_bb_index(piece)]
    }

    #[must_use]
    pub fn get_all_piece_bitboard(&self, color: i8) -> u64 {
        (1..=6i8).fold(0u64, |acc, kind| acc | self.get_bitboard(kind * color))
    }

    #[must_use]
    pub fn get_occupancy_bitboard(&self, color: i8) -> u64 {
        self.occ_bb[(color + 1) as usize]
    }

    #[must_use]
    pub(crate) fn all_occupied(&self) -> u64 {
        !self.occ_bb[1]
    }

    #[must_use]
    pub fn is_endgame(&self) -> bool {
        self.endgame
    }

    /// Recomputes the cached `endgame` flag: "pawn-count ≤ 3 OR
    /// non-king-non-pawn count ≤ 3". Not called automatically by
    /// `perform_move`/`undo_move` — see the design notes on this being a
    /// latent hazard kept intentionally.
    pub fn update_endgame_status(&mut self) {
        let pawn_count = self.get_bitboard(1).count_ones() + self.get_bitboard(-1).count_ones();
        let non_king_non_pawn = (2..6)
            .map(|kind| self.get_bitboard(kind).count_ones() + self.get_bitboard(-kind).count_ones())
            .sum::<u32>();
        self.endgame = pawn_count <= 3 || non_king_non_pawn <= 3;
    }
}
