//! Hybrid key encapsulation
//!
//! This crate combines an ordered list of classical and post-quantum KEMs
//! into one KEM whose shared secret stays secure as long as at least one
//! component is secure.

pub mod kem;

pub use kem::{HybridConfig, HybridKem, NestedPrf};
