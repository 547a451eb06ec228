//! Constants for ML-KEM (FIPS 203)
//!
//! Encoded sizes match round-3 Kyber at the same level; the two differ in
//! how the shared secret is derived, so the encodings are not interchangeable.

use super::kyber::{KYBER1024, KYBER512, KYBER768};
use super::KemParams;

/// ML-KEM-512 parameters
pub const ML_KEM_512: KemParams = KYBER512;

/// ML-KEM-768 parameters
pub const ML_KEM_768: KemParams = KYBER768;

/// ML-KEM-1024 parameters
pub const ML_KEM_1024: KemParams = KYBER1024;

/// Registry identifier of ML-KEM-512
pub const ML_KEM_512_ALGORITHM_ID: u8 = 0x40;

/// Registry identifier of ML-KEM-768
pub const ML_KEM_768_ALGORITHM_ID: u8 = 0x41;

/// Registry identifier of ML-KEM-1024
pub const ML_KEM_1024_ALGORITHM_ID: u8 = 0x42;
