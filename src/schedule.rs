//! SHA-256 message schedule
//! Expands one 64-byte block into the 64 words that drive the compression
//! rounds.

use crate::padding::BLOCK_SIZE;

#[inline]
fn gamma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn gamma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand a block into the 64-word message schedule.
///
/// The first 16 words are the big-endian words of the block; the remaining 48
/// mix earlier words with the gamma functions, wrapping modulo 2^32.
#[must_use]
pub fn message_schedule(block: &[u8; BLOCK_SIZE]) -> [u32; 64] {
    let mut w = [0u32; 64];

    for i in 0..16 {
        let j = i * 4;
        w[i] = u32::from_be_bytes([block[j], block[j + 1], block[j + 2], block[j + 3]]);
    }

    for t in 16..64 {
        w[t] = gamma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(gamma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::Blocks;

    #[test]
    fn test_first_sixteen_words_are_big_endian() {
        let mut block = [0u8; 64];
        for (i, b) in block.iter_mut().enumerate() {
            *b = i as u8;
        }
        let w = message_schedule(&block);
        assert_eq!(w[0], 0x00010203);
        assert_eq!(w[1], 0x04050607);
        assert_eq!(w[15], 0x3c3d3e3f);
    }

    #[test]
    fn test_expansion_of_abc_block() {
        // Padded "abc" is a single block; its schedule starts with the
        // message word, the length word, and two expansion words that can be
        // checked by hand.
        let block = Blocks::new(b"abc").next().unwrap();
        let w = message_schedule(&block);

        assert_eq!(w[0], 0x61626380);
        assert_eq!(w[1..15], [0u32; 14]);
        assert_eq!(w[15], 0x00000018);

        // w[16] = gamma1(0) + 0 + gamma0(0) + w[0]
        assert_eq!(w[16], 0x61626380);
        // w[17] = gamma1(w[15]) with every other term zero
        assert_eq!(w[17], 0x000f0000);
    }

    #[test]
    fn test_gamma_functions() {
        assert_eq!(gamma0(0), 0);
        assert_eq!(gamma1(0), 0);
        assert_eq!(gamma1(0x18), 0x000f0000);
        // rotations only, the shift discards low bits
        assert_eq!(gamma0(1), 1u32.rotate_right(7) ^ 1u32.rotate_right(18));
    }
}
