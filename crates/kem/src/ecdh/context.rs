//! Elliptic curve exchange context
//!
//! One context holds the state of a single Diffie-Hellman exchange. Each of
//! the four buffers is independently optional and has a length fixed by the
//! curve once present.

use rand::{CryptoRng, RngCore};
use tracing::warn;
use zkem_api::error::validate;
use zkem_api::Result;
use zkem_common::SecretVec;

use super::curve::{self, EcdhAlgorithm};

/// State of one Diffie-Hellman exchange
///
/// `secret` and `shared_secret` are wiped in place and released by
/// [`EcdhContext::destroy`], which also runs on drop.
pub struct EcdhContext {
    algorithm: EcdhAlgorithm,
    point_coordinate_length: usize,
    secret_length: usize,
    secret: Option<SecretVec>,
    self_public: Option<Vec<u8>>,
    peer_public: Option<Vec<u8>>,
    shared_secret: Option<SecretVec>,
}

impl EcdhContext {
    /// Create an empty context from a registry identifier.
    ///
    /// Fails with `UnsupportedAlgorithm` for unknown tags and for curves whose
    /// backend is not compiled in.
    pub fn create(tag: u8) -> Result<Self> {
        Self::new(EcdhAlgorithm::from_tag(tag)?)
    }

    /// Create an empty context for `algorithm`
    pub fn new(algorithm: EcdhAlgorithm) -> Result<Self> {
        if !algorithm.is_available() {
            return Err(zkem_api::Error::unsupported("EcdhContext::new", algorithm));
        }
        Ok(Self {
            algorithm,
            point_coordinate_length: algorithm.point_coordinate_length(),
            secret_length: algorithm.secret_length(),
            secret: None,
            self_public: None,
            peer_public: None,
            shared_secret: None,
        })
    }

    pub fn algorithm(&self) -> EcdhAlgorithm {
        self.algorithm
    }

    pub fn point_coordinate_length(&self) -> usize {
        self.point_coordinate_length
    }

    pub fn secret_length(&self) -> usize {
        self.secret_length
    }

    /// Store an owned copy of a private scalar.
    ///
    /// A shared secret computed from the previous scalar is wiped and cleared.
    pub fn set_secret(&mut self, secret: &[u8]) -> Result<()> {
        validate::length("EcdhContext::set_secret", secret.len(), self.secret_length)?;
        self.replace_secret(SecretVec::from_slice(secret));
        self.clear_shared_secret();
        Ok(())
    }

    /// Compute `self_public` from `secret`, overwriting any previous value
    pub fn derive_public_key(&mut self) -> Result<&[u8]> {
        let secret = self.secret.as_ref().ok_or(zkem_api::Error::PreconditionViolated {
            context: "EcdhContext::derive_public_key",
            requirement: "secret must be set",
        })?;
        let public = curve::public_key(self.algorithm, secret.as_slice())?;
        Ok(self.self_public.insert(public).as_slice())
    }

    /// Fill `secret` with fresh random bytes, then derive the public key
    pub fn create_key_pair<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<&[u8]> {
        let mut secret = SecretVec::zeroed(self.secret_length);
        rng.fill_bytes(secret.as_mut_slice());
        self.replace_secret(secret);
        self.clear_shared_secret();
        self.derive_public_key()
    }

    /// Store the peer's public u-coordinate, dropping any shared secret
    /// computed from the previous one
    pub fn set_peer_public_key(&mut self, peer: &[u8]) -> Result<()> {
        validate::length(
            "EcdhContext::set_peer_public_key",
            peer.len(),
            self.point_coordinate_length,
        )?;
        self.peer_public = Some(peer.to_vec());
        self.clear_shared_secret();
        Ok(())
    }

    /// Compute `shared_secret` from `secret` and `peer_public`.
    ///
    /// On a rejected peer point the shared secret stays absent and the call
    /// fails with `KeyAgreementFailed`.
    pub fn compute_shared_secret(&mut self) -> Result<&[u8]> {
        let (secret, peer) = match (self.secret.as_ref(), self.peer_public.as_ref()) {
            (Some(secret), Some(peer)) => (secret, peer),
            _ => {
                return Err(zkem_api::Error::PreconditionViolated {
                    context: "EcdhContext::compute_shared_secret",
                    requirement: "secret and peer public key must be set",
                })
            }
        };

        if let Some(mut previous) = self.shared_secret.take() {
            previous.wipe();
        }

        match curve::agree(self.algorithm, secret.as_slice(), peer) {
            Ok(shared) => Ok(self.shared_secret.insert(shared).as_slice()),
            Err(e) => {
                warn!(algorithm = %self.algorithm, "peer public key rejected by key agreement");
                Err(e)
            }
        }
    }

    pub fn secret(&self) -> Option<&[u8]> {
        self.secret.as_ref().map(SecretVec::as_slice)
    }

    pub fn self_public(&self) -> Option<&[u8]> {
        self.self_public.as_deref()
    }

    pub fn peer_public(&self) -> Option<&[u8]> {
        self.peer_public.as_deref()
    }

    pub fn shared_secret(&self) -> Option<&[u8]> {
        self.shared_secret.as_ref().map(SecretVec::as_slice)
    }

    /// Zero-fill `secret` and `shared_secret`, then release every buffer
    pub fn destroy(&mut self) {
        self.wipe_secrets();
        #[cfg(test)]
        inspect::record(self.secret(), self.shared_secret());
        self.secret = None;
        self.shared_secret = None;
        self.self_public = None;
        self.peer_public = None;
    }

    /// Overwrite the secret buffers with zeros in place, keeping their length
    fn wipe_secrets(&mut self) {
        if let Some(secret) = self.secret.as_mut() {
            secret.wipe();
        }
        if let Some(shared) = self.shared_secret.as_mut() {
            shared.wipe();
        }
    }

    fn replace_secret(&mut self, secret: SecretVec) {
        if let Some(mut previous) = self.secret.replace(secret) {
            previous.wipe();
        }
    }

    fn clear_shared_secret(&mut self) {
        if let Some(mut stale) = self.shared_secret.take() {
            stale.wipe();
        }
    }
}

impl Drop for EcdhContext {
    fn drop(&mut self) {
        self.destroy();
    }
}
