//! Key Encapsulation Mechanisms for zkem
//!
//! This crate provides the building blocks a hybrid combiner folds together:
//!
//! - [`kdf`]: the ZRTP KEM secret derivation and the HMAC/HKDF helpers
//! - [`ecdh`]: the Diffie-Hellman exchange context and the classical KEM
//!   adapter built on it (X25519, X448)
//! - [`pq`]: post-quantum KEM adapters (Kyber, ML-KEM, HQC)
//! - [`registry`]: the closed set of algorithms with their identifiers and
//!   fixed sizes

pub mod ecdh;
pub mod kdf;
pub mod pq;
pub mod registry;

// Re-exports
pub use ecdh::{EcdhAlgorithm, EcdhContext, EcdhKem};
pub use pq::{PqAlgorithm, PqKem};
pub use registry::{KemAlgorithm, KemInstance};
