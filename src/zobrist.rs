//! Zobrist random tables.
//!
//! Treated by the board core as a pre-populated constant table (see the
//! crate-level scope notes): the core only ever XORs into these, it never
//! computes them. Filled once from a fixed seed behind a
//! [`once_cell::sync::Lazy`] so hashes are stable across runs, which the
//! repetition/threefold tests rely on.

use once_cell::sync::Lazy;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fixed seed: hashes must be reproducible across process runs for the
/// repetition-detection test scenarios.
const ZOBRIST_SEED: u64 = 0x5EED_C0DE_C4E5_5B0A;

/// One random key per (piece+6, square) pair, i.e. 13 piece slots × 64
/// squares. Index with `piece_bb_index(piece) * 64 + square`.
pub static PIECE_RNG_NUMBERS: Lazy<[u64; 13 * 64]> = Lazy::new(|| {
    let mut rng = ChaCha8Rng::seed_from_u64(ZOBRIST_SEED);
    let mut table = [0u64; 13 * 64];
    for slot in &mut table {
        *slot = rng.next_u64();
    }
    table
});

/// 16-entry table indexed by the 4-bit castling-rights index (§ state bits).
pub static CASTLING_RNG_NUMBERS: Lazy<[u64; 16]> = Lazy::new(|| {
    let mut rng = ChaCha8Rng::seed_from_u64(ZOBRIST_SEED ^ 0x1111_1111_1111_1111);
    let mut table = [0u64; 16];
    for slot in &mut table {
        *slot = rng.next_u64();
    }
    table
});

/// 16-entry table indexed by the trailing-zero count of the en-passant bits.
pub static EN_PASSANT_RNG_NUMBERS: Lazy<[u64; 16]> = Lazy::new(|| {
    let mut rng = ChaCha8Rng::seed_from_u64(ZOBRIST_SEED ^ 0x2222_2222_2222_2222);
    let mut table = [0u64; 16];
    for slot in &mut table {
        *slot = rng.next_u64();
    }
    table
});

pub static PLAYER_RNG_NUMBER: Lazy<u64> = Lazy::new(|| {
    let mut rng = ChaCha8Rng::seed_from_u64(ZOBRIST_SEED ^ 0x3333_3333_3333_3333);
    rng.next_u64()
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tables_are_deterministic_across_accesses() {
        let a = PIECE_RNG_NUMBERS[5];
        let b = PIECE_RNG_NUMBERS[5];
        assert_eq!(a, b);
    }

    #[test]
    fn piece_keys_are_distinct() {
        let set: HashSet<u64> = PIECE_RNG_NUMBERS.iter().copied().collect();
        assert_eq!(set.len(), PIECE_RNG_NUMBERS.len());
    }

    #[test]
    fn player_key_is_nonzero() {
        assert_ne!(*PLAYER_RNG_NUMBER, 0);
    }
}
