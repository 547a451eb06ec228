//! Public API traits and types for the zkem library
//!
//! This crate provides the public API surface shared by every zkem crate:
//! the [`Kem`] capability trait, the byte-exact key/ciphertext/secret
//! containers, the hash selector and the error taxonomy.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::*;

pub use traits::Kem;
pub use traits::kem;
