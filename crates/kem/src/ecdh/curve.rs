//! RFC 7748 curve backends
//!
//! X25519 is provided by `x25519-dalek`; X448 by the `x448` crate when the
//! `x448` cargo feature is enabled.

use core::fmt;
use zkem_api::error::validate;
use zkem_api::{Error, Result};
use zkem_common::{SecretBuffer, SecretVec};
use zkem_params::traditional::ecdh::{
    X25519_ALGORITHM_ID, X25519_POINT_SIZE, X25519_SCALAR_SIZE, X448_ALGORITHM_ID,
    X448_POINT_SIZE, X448_SCALAR_SIZE,
};

/// Curve used by an exchange context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcdhAlgorithm {
    X25519,
    X448,
}

impl EcdhAlgorithm {
    /// Resolve a registry identifier
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            X25519_ALGORITHM_ID => Ok(Self::X25519),
            X448_ALGORITHM_ID => Ok(Self::X448),
            other => Err(Error::unsupported(
                "EcdhAlgorithm::from_tag",
                format_args!("0x{:02x}", other),
            )),
        }
    }

    pub const fn id(self) -> u8 {
        match self {
            Self::X25519 => X25519_ALGORITHM_ID,
            Self::X448 => X448_ALGORITHM_ID,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::X25519 => "x25519",
            Self::X448 => "x448",
        }
    }

    /// Length of a u-coordinate: public keys and the raw shared secret
    pub const fn point_coordinate_length(self) -> usize {
        match self {
            Self::X25519 => X25519_POINT_SIZE,
            Self::X448 => X448_POINT_SIZE,
        }
    }

    /// Length of a private scalar
    pub const fn secret_length(self) -> usize {
        match self {
            Self::X25519 => X25519_SCALAR_SIZE,
            Self::X448 => X448_SCALAR_SIZE,
        }
    }

    /// Whether a backend for this curve is compiled in
    pub const fn is_available(self) -> bool {
        match self {
            Self::X25519 => true,
            Self::X448 => cfg!(feature = "x448"),
        }
    }
}

impl fmt::Display for EcdhAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the public u-coordinate for `secret`
pub(crate) fn public_key(algorithm: EcdhAlgorithm, secret: &[u8]) -> Result<Vec<u8>> {
    validate::length("ecdh::public_key", secret.len(), algorithm.secret_length())?;
    match algorithm {
        EcdhAlgorithm::X25519 => x25519::public_key(secret),
        EcdhAlgorithm::X448 => x448_backend::public_key(secret),
    }
}

/// Compute the raw shared u-coordinate of `secret` and `peer`
///
/// Fails with `KeyAgreementFailed` when the peer point is rejected, e.g. a
/// low-order point yielding the all-zero output.
pub(crate) fn agree(algorithm: EcdhAlgorithm, secret: &[u8], peer: &[u8]) -> Result<SecretVec> {
    validate::length("ecdh::agree", secret.len(), algorithm.secret_length())?;
    validate::length("ecdh::agree", peer.len(), algorithm.point_coordinate_length())?;
    match algorithm {
        EcdhAlgorithm::X25519 => x25519::agree(secret, peer),
        EcdhAlgorithm::X448 => x448_backend::agree(secret, peer),
    }
}

mod x25519 {
    use super::*;
    use x25519_dalek::{PublicKey, StaticSecret};

    fn static_secret(secret: &[u8]) -> Result<StaticSecret> {
        let buffer = SecretBuffer::<X25519_SCALAR_SIZE>::from_slice(secret).ok_or(
            Error::LengthMismatch {
                context: "x25519 secret",
                expected: X25519_SCALAR_SIZE,
                actual: secret.len(),
            },
        )?;
        Ok(StaticSecret::from(*buffer.as_array()))
    }

    pub(super) fn public_key(secret: &[u8]) -> Result<Vec<u8>> {
        let secret = static_secret(secret)?;
        Ok(PublicKey::from(&secret).as_bytes().to_vec())
    }

    pub(super) fn agree(secret: &[u8], peer: &[u8]) -> Result<SecretVec> {
        let secret = static_secret(secret)?;
        let peer: [u8; X25519_POINT_SIZE] =
            peer.try_into().map_err(|_| Error::LengthMismatch {
                context: "x25519 peer point",
                expected: X25519_POINT_SIZE,
                actual: peer.len(),
            })?;
        let shared = secret.diffie_hellman(&PublicKey::from(peer));
        if !shared.was_contributory() {
            return Err(Error::KeyAgreementFailed { context: "x25519" });
        }
        Ok(SecretVec::from_slice(shared.as_bytes()))
    }
}

#[cfg(feature = "x448")]
mod x448_backend {
    use super::*;
    use x448::{x448, X448_BASEPOINT_BYTES};
    use zkem_common::ZeroizeGuard;

    fn scalar(secret: &[u8]) -> Result<SecretBuffer<X448_SCALAR_SIZE>> {
        SecretBuffer::from_slice(secret).ok_or(Error::LengthMismatch {
            context: "x448 secret",
            expected: X448_SCALAR_SIZE,
            actual: secret.len(),
        })
    }

    /// Clamped scalar multiplication of `point`; rejects the low-order points
    fn multiply(secret: &[u8], point: [u8; X448_POINT_SIZE]) -> Result<SecretVec> {
        let scalar = scalar(secret)?;
        let mut output =
            x448(*scalar.as_array(), point).ok_or(Error::KeyAgreementFailed { context: "x448" })?;
        let output = ZeroizeGuard::new(&mut output);
        Ok(SecretVec::from_slice(&output[..]))
    }

    pub(super) fn public_key(secret: &[u8]) -> Result<Vec<u8>> {
        Ok(multiply(secret, X448_BASEPOINT_BYTES)?.as_slice().to_vec())
    }

    pub(super) fn agree(secret: &[u8], peer: &[u8]) -> Result<SecretVec> {
        let peer: [u8; X448_POINT_SIZE] = peer.try_into().map_err(|_| Error::LengthMismatch {
            context: "x448 peer point",
            expected: X448_POINT_SIZE,
            actual: peer.len(),
        })?;
        multiply(secret, peer)
    }
}

#[cfg(not(feature = "x448"))]
mod x448_backend {
    use super::*;

    pub(super) fn public_key(_secret: &[u8]) -> Result<Vec<u8>> {
        Err(Error::unsupported("ecdh::public_key", EcdhAlgorithm::X448))
    }

    pub(super) fn agree(_secret: &[u8], _peer: &[u8]) -> Result<SecretVec> {
        Err(Error::unsupported("ecdh::agree", EcdhAlgorithm::X448))
    }
}
