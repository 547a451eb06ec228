//! # zkem
//!
//! Hybrid key encapsulation: one shared secret derived from an ordered list of
//! classical ECDH and post-quantum KEMs, folded through a nested dual PRF.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! zkem = "0.3"
//! ```
//!
//! ```
//! use zkem::prelude::*;
//!
//! let config: HybridConfig = "x25519+kyber512/sha256".parse()?;
//! let kem = HybridKem::from_config(&config)?;
//!
//! let mut rng = zkem::rand::rngs::OsRng;
//! let (pk, sk) = kem.keypair(&mut rng)?;
//! let (ct, ss) = kem.encapsulate(&mut rng, &pk)?;
//! assert_eq!(kem.decapsulate(&sk, &ct)?, ss);
//! # Ok::<(), zkem::prelude::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `hybrid` (default): the hybrid combiner, implies `kem`
//! - `kem`: secret derivation, ECDH context and the component KEM adapters
//! - `x448`: the X448 classical backend
//! - `serde`: serde support for algorithm names and hybrid configuration
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`zkem-api`]: `Kem` trait, buffer types, hash selector and errors
//! - [`zkem-common`]: zeroizing secret containers
//! - [`zkem-params`]: sizes, identifiers and derivation labels
//! - [`zkem-kem`]: secret derivation and the classical/post-quantum adapters
//! - [`zkem-hybrid`]: the hybrid combiner

// Core re-exports (always available)
pub use zkem_api as api;
pub use zkem_common as common;
pub use zkem_params as params;

// Feature-gated re-exports
#[cfg(feature = "kem")]
pub use zkem_kem as kem;

#[cfg(feature = "hybrid")]
pub use zkem_hybrid as hybrid;

pub use rand;

/// Common imports for zkem users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits and buffer types
    pub use crate::api::{
        Ciphertext, HashAlgorithm, Kem, KemDescriptor, KemSizes, PublicKey, SecretKey,
        SharedSecret,
    };

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecretVec, SecureCompare, ZeroizeGuard};
    pub use zeroize::Zeroize;

    #[cfg(feature = "kem")]
    pub use crate::kem::{EcdhAlgorithm, EcdhContext, EcdhKem, KemAlgorithm, KemInstance, PqAlgorithm, PqKem};

    #[cfg(feature = "hybrid")]
    pub use crate::hybrid::{HybridConfig, HybridKem, NestedPrf};
}
