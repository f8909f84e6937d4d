//! From-scratch SHA-256 - Rust implementation
//!
//! An educational SHA-256 implementation built from the padding, message
//! schedule and compression stages, for learning purposes.

pub mod compress;
pub mod digest;
pub mod error;
pub mod padding;
pub mod schedule;
pub mod sha256;

pub use error::{Result, Sha256Error};

pub use digest::Digest;
pub use sha256::{digest, sha256};
