//! SHA-256 hash function
//! Pads the input, schedules each block and folds it through the compression
//! function; the final state, serialized big-endian, is the digest.

use crate::compress::{compress, INITIAL_STATE};
use crate::digest::Digest;
use crate::padding::Blocks;
use crate::schedule::message_schedule;

/// Compute the SHA-256 hash of `data`.
///
/// Total for every input length; the same input always produces the same
/// 32-byte digest.
#[must_use]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut state = INITIAL_STATE;

    // Blocks carry a hard sequential dependency: each compression consumes
    // the state produced by the previous one.
    for block in Blocks::new(data) {
        compress(&mut state, &message_schedule(&block));
    }

    let mut out = [0u8; 32];
    for (i, word) in state.iter().enumerate() {
        out[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// Compute the SHA-256 hash of `data`, wrapped as a [`Digest`].
#[must_use]
#[inline]
pub fn digest(data: &[u8]) -> Digest {
    Digest::new(sha256(data))
}
