//! Demonstrate the SHA-256 hash function
//!
//! Run with: cargo run --example hash_demo

use ::sha256::padding::Blocks;
use sha256::{digest, sha256};

fn main() {
    println!("=== SHA-256 ===\n");

    let data = b"Hello, SHA-256!";
    println!("Input: {:?}\n", String::from_utf8_lossy(data));

    println!("Digest:");
    println!("  {}\n", hex::encode(sha256(data)));

    // The empty input still produces a digest: a single all-padding block.
    println!("Empty input:");
    println!("  {}\n", digest(b""));

    // Show how padding shapes the block sequence
    println!("=== Padding ===\n");

    for input in [&b""[..], &[b'a'; 3], &[b'a'; 55], &[b'a'; 56], &[b'a'; 64]] {
        let blocks = Blocks::new(input).count();
        println!("{:>3} input bytes -> {blocks} block(s)", input.len());
    }

    // A single flipped bit changes the whole digest
    println!("\n=== Avalanche ===\n");

    let mut flipped = *data;
    flipped[0] ^= 0x01;
    println!("original: {}", digest(data));
    println!("bit flip: {}", digest(&flipped));
}
