//! From-scratch SHA-256 - Rust Implementation
//!
//! Hashes each command-line argument, or the string "abc" when none are
//! given, and prints the lowercase hex digest.

use sha256::digest;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        println!("{}", digest(b"abc"));
        return;
    }

    for arg in &args {
        println!("{}  {arg}", digest(arg.as_bytes()));
    }
}
