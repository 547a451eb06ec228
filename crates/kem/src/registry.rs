//! Closed registry of KEM algorithms
//!
//! Every algorithm the library knows is a variant of [`KemAlgorithm`], with
//! a fixed one-byte identifier and fixed sizes. Identifiers are never reused.
//!
//! | Algorithm  | id   | pk   | sk   | ct   | ss |
//! |------------|------|------|------|------|----|
//! | x25519     | 0x20 | 32   | 32   | 32   | 32 |
//! | x448       | 0x21 | 56   | 56   | 56   | 56 |
//! | kyber512   | 0x30 | 800  | 1632 | 768  | 32 |
//! | kyber768   | 0x31 | 1184 | 2400 | 1088 | 32 |
//! | kyber1024  | 0x32 | 1568 | 3168 | 1568 | 32 |
//! | mlkem512   | 0x40 | 800  | 1632 | 768  | 32 |
//! | mlkem768   | 0x41 | 1184 | 2400 | 1088 | 32 |
//! | mlkem1024  | 0x42 | 1568 | 3168 | 1568 | 32 |
//! | hqc128     | 0x50 | 2249 | 2305 | 4433 | 64 |
//! | hqc192     | 0x51 | 4522 | 4586 | 8978 | 64 |
//! | hqc256     | 0x52 | 7245 | 7317 | 14421 | 64 |

use core::fmt;
use core::str::FromStr;
use rand::{CryptoRng, RngCore};
use zkem_api::{
    Ciphertext, Error, HashAlgorithm, Kem, KemDescriptor, KemSizes, PublicKey, Result, SecretKey,
    SharedSecret,
};

use crate::ecdh::{EcdhAlgorithm, EcdhKem};
use crate::pq::{PqAlgorithm, PqKem};

/// Registered KEM algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KemAlgorithm {
    X25519,
    X448,
    Kyber512,
    Kyber768,
    Kyber1024,
    MlKem512,
    MlKem768,
    MlKem1024,
    Hqc128,
    Hqc192,
    Hqc256,
}

impl KemAlgorithm {
    pub const ALL: [KemAlgorithm; 11] = [
        Self::X25519,
        Self::X448,
        Self::Kyber512,
        Self::Kyber768,
        Self::Kyber1024,
        Self::MlKem512,
        Self::MlKem768,
        Self::MlKem1024,
        Self::Hqc128,
        Self::Hqc192,
        Self::Hqc256,
    ];

    const fn family(self) -> Family {
        match self {
            Self::X25519 => Family::Classical(EcdhAlgorithm::X25519),
            Self::X448 => Family::Classical(EcdhAlgorithm::X448),
            Self::Kyber512 => Family::PostQuantum(PqAlgorithm::Kyber512),
            Self::Kyber768 => Family::PostQuantum(PqAlgorithm::Kyber768),
            Self::Kyber1024 => Family::PostQuantum(PqAlgorithm::Kyber1024),
            Self::MlKem512 => Family::PostQuantum(PqAlgorithm::MlKem512),
            Self::MlKem768 => Family::PostQuantum(PqAlgorithm::MlKem768),
            Self::MlKem1024 => Family::PostQuantum(PqAlgorithm::MlKem1024),
            Self::Hqc128 => Family::PostQuantum(PqAlgorithm::Hqc128),
            Self::Hqc192 => Family::PostQuantum(PqAlgorithm::Hqc192),
            Self::Hqc256 => Family::PostQuantum(PqAlgorithm::Hqc256),
        }
    }

    /// Curve of a classical algorithm
    pub const fn classical(self) -> Option<EcdhAlgorithm> {
        match self.family() {
            Family::Classical(curve) => Some(curve),
            Family::PostQuantum(_) => None,
        }
    }

    /// Backend of a post-quantum algorithm
    pub const fn post_quantum(self) -> Option<PqAlgorithm> {
        match self.family() {
            Family::Classical(_) => None,
            Family::PostQuantum(pq) => Some(pq),
        }
    }

    pub fn id(self) -> u8 {
        self.descriptor().id
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn sizes(self) -> KemSizes {
        self.descriptor().sizes
    }

    pub fn descriptor(self) -> KemDescriptor {
        match self.family() {
            Family::Classical(curve) => {
                let point = curve.point_coordinate_length();
                KemDescriptor {
                    id: curve.id(),
                    name: curve.name(),
                    sizes: KemSizes {
                        public_key: point,
                        secret_key: curve.secret_length(),
                        ciphertext: point,
                        shared_secret: point,
                    },
                }
            }
            Family::PostQuantum(pq) => KemDescriptor {
                id: pq.id(),
                name: pq.name(),
                sizes: pq.sizes(),
            },
        }
    }

    /// Whether the backend is compiled into this build
    pub fn is_available(self) -> bool {
        self.classical().map_or(true, EcdhAlgorithm::is_available)
    }

    /// Resolve a registry identifier
    pub fn from_id(id: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| Error::unsupported("KemAlgorithm::from_id", format_args!("0x{:02x}", id)))
    }

    /// Build a KEM instance.
    ///
    /// `hash` selects the secret derivation of classical adapters and is
    /// ignored by post-quantum ones. Fails with `UnsupportedAlgorithm` when the
    /// backend is not compiled in.
    pub fn instantiate(self, hash: HashAlgorithm) -> Result<KemInstance> {
        match self.family() {
            Family::Classical(curve) => Ok(KemInstance::Classical(EcdhKem::new(curve, hash)?)),
            Family::PostQuantum(pq) => Ok(KemInstance::PostQuantum(PqKem::new(pq))),
        }
    }
}

#[derive(Clone, Copy)]
enum Family {
    Classical(EcdhAlgorithm),
    PostQuantum(PqAlgorithm),
}

impl fmt::Display for KemAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KemAlgorithm {
    type Err = Error;

    /// Case-insensitive; `-` and `_` are ignored, so `ML-KEM-768` parses
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == normalized)
            .ok_or_else(|| Error::unsupported("KemAlgorithm::from_str", s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for KemAlgorithm {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for KemAlgorithm {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// A KEM capability instance: one of the closed set of adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KemInstance {
    Classical(EcdhKem),
    PostQuantum(PqKem),
}

impl KemInstance {
    pub fn algorithm(&self) -> KemAlgorithm {
        match self {
            Self::Classical(kem) => match kem.algorithm() {
                EcdhAlgorithm::X25519 => KemAlgorithm::X25519,
                EcdhAlgorithm::X448 => KemAlgorithm::X448,
            },
            Self::PostQuantum(kem) => match kem.algorithm() {
                PqAlgorithm::Kyber512 => KemAlgorithm::Kyber512,
                PqAlgorithm::Kyber768 => KemAlgorithm::Kyber768,
                PqAlgorithm::Kyber1024 => KemAlgorithm::Kyber1024,
                PqAlgorithm::MlKem512 => KemAlgorithm::MlKem512,
                PqAlgorithm::MlKem768 => KemAlgorithm::MlKem768,
                PqAlgorithm::MlKem1024 => KemAlgorithm::MlKem1024,
                PqAlgorithm::Hqc128 => KemAlgorithm::Hqc128,
                PqAlgorithm::Hqc192 => KemAlgorithm::Hqc192,
                PqAlgorithm::Hqc256 => KemAlgorithm::Hqc256,
            },
        }
    }
}

impl Kem for KemInstance {
    fn name(&self) -> &'static str {
        match self {
            Self::Classical(kem) => kem.name(),
            Self::PostQuantum(kem) => kem.name(),
        }
    }

    fn sizes(&self) -> KemSizes {
        match self {
            Self::Classical(kem) => kem.sizes(),
            Self::PostQuantum(kem) => kem.sizes(),
        }
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<(PublicKey, SecretKey)> {
        match self {
            Self::Classical(kem) => kem.keypair(rng),
            Self::PostQuantum(kem) => kem.keypair(rng),
        }
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &PublicKey,
    ) -> Result<(Ciphertext, SharedSecret)> {
        match self {
            Self::Classical(kem) => kem.encapsulate(rng, public_key),
            Self::PostQuantum(kem) => kem.encapsulate(rng, public_key),
        }
    }

    fn decapsulate(&self, secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<SharedSecret> {
        match self {
            Self::Classical(kem) => kem.decapsulate(secret_key, ciphertext),
            Self::PostQuantum(kem) => kem.decapsulate(secret_key, ciphertext),
        }
    }
}
