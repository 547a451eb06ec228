//! Trait definitions for the zkem API

pub mod kem;

pub use kem::Kem;
