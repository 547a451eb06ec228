//! Core buffer types with security guarantees
//!
//! Public values (`PublicKey`, `Ciphertext`) are plain owned byte vectors.
//! Secret values (`SecretKey`, `SharedSecret`) are backed by
//! [`SecretVec`] and are overwritten with zeros when dropped.

use core::fmt;
use core::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};
use zkem_common::{SecretVec, SecureCompare};
use zkem_params::utils::hash as hash_params;

use crate::{Error, Result};

/// Fixed per-algorithm sizes published by every KEM
///
/// Sizes never depend on input: a KEM always produces and accepts buffers
/// of exactly these lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KemSizes {
    pub public_key: usize,
    pub secret_key: usize,
    pub ciphertext: usize,
    pub shared_secret: usize,
}

impl KemSizes {
    /// Sizes of the empty KEM, the neutral element for [`KemSizes::concat`]
    pub const EMPTY: KemSizes = KemSizes {
        public_key: 0,
        secret_key: 0,
        ciphertext: 0,
        shared_secret: 0,
    };

    /// Sum key and ciphertext sizes, keeping `shared_secret` from `self`
    pub const fn concat(self, other: KemSizes) -> KemSizes {
        KemSizes {
            public_key: self.public_key + other.public_key,
            secret_key: self.secret_key + other.secret_key,
            ciphertext: self.ciphertext + other.ciphertext,
            shared_secret: self.shared_secret,
        }
    }
}

/// Immutable description of one registered KEM algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KemDescriptor {
    /// One-byte identifier used in the domain separation of secret derivation
    pub id: u8,
    /// Canonical lowercase name
    pub name: &'static str,
    pub sizes: KemSizes,
}

/// Hash function used by secret derivation and by the hybrid PRF chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// All supported hash algorithms
    pub const ALL: [HashAlgorithm; 3] = [Self::Sha256, Self::Sha384, Self::Sha512];

    /// Digest (and HMAC tag) size in bytes
    pub const fn output_size(self) -> usize {
        match self {
            Self::Sha256 => hash_params::SHA256_OUTPUT_SIZE,
            Self::Sha384 => hash_params::SHA384_OUTPUT_SIZE,
            Self::Sha512 => hash_params::SHA512_OUTPUT_SIZE,
        }
    }

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "");
        Self::ALL
            .into_iter()
            .find(|h| h.name() == normalized)
            .ok_or_else(|| Error::unsupported("HashAlgorithm::from_str", s))
    }
}

macro_rules! public_bytes {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(Vec<u8>);

        impl $name {
            /// Wrap an owned byte vector
            pub fn new(bytes: Vec<u8>) -> Self {
                Self(bytes)
            }

            /// Copy from a slice
            pub fn from_slice(bytes: &[u8]) -> Self {
                Self(bytes.to_vec())
            }

            /// Borrow the raw bytes
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// Consume and return the raw bytes
            pub fn into_bytes(self) -> Vec<u8> {
                self.0
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({} bytes)", stringify!($name), self.0.len())
            }
        }
    };
}

macro_rules! secret_bytes {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $name(SecretVec);

        impl $name {
            /// Take ownership of secret bytes
            pub fn new(secret: SecretVec) -> Self {
                Self(secret)
            }

            /// Copy from a slice; the caller remains responsible for the source
            pub fn from_slice(bytes: &[u8]) -> Self {
                Self(SecretVec::from_slice(bytes))
            }

            /// Borrow the raw bytes
            pub fn as_bytes(&self) -> &[u8] {
                self.0.as_slice()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                self.0.as_slice()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0.as_slice().secure_eq(other.0.as_slice())
            }
        }

        impl Eq for $name {}

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}([REDACTED; {}])", stringify!($name), self.0.len())
            }
        }
    };
}

public_bytes!(
    /// KEM public (encapsulation) key
    PublicKey
);

public_bytes!(
    /// KEM ciphertext
    Ciphertext
);

secret_bytes!(
    /// KEM secret (decapsulation) key, zeroized on drop
    SecretKey
);

secret_bytes!(
    /// Shared secret produced by encapsulation/decapsulation, zeroized on drop
    SharedSecret
);
