//! Constants for hash functions and key derivation

pub mod hash;
pub mod kdf;
