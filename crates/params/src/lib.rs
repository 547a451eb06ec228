//! Constant values for zkem cryptographic operations
//!
//! Key, ciphertext and secret sizes, registry identifiers and the fixed
//! labels of the ZRTP KEM secret derivation.

#![no_std]

pub mod pqc;
pub mod traditional;
pub mod utils;
