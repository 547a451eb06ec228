//! ECDH-KEM over the RFC 7748 curves
//!
//! [`EcdhKem`] turns a Diffie-Hellman exchange into a KEM: the ciphertext is
//! a fresh ephemeral public key, and the shared secret is the raw agreement
//! output passed through [`crate::kdf::derive`], bound to the ciphertext and
//! the recipient public key.

mod context;
mod curve;

pub use context::EcdhContext;
pub use curve::EcdhAlgorithm;

use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zkem_api::error::validate;
use zkem_api::{
    Ciphertext, Error, HashAlgorithm, Kem, KemSizes, PublicKey, Result, SecretKey, SharedSecret,
};

use crate::kdf;

/// Classical KEM adapter driving an [`EcdhContext`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcdhKem {
    algorithm: EcdhAlgorithm,
    hash: HashAlgorithm,
}

impl EcdhKem {
    /// Fails with `UnsupportedAlgorithm` when the curve backend is not compiled in
    pub fn new(algorithm: EcdhAlgorithm, hash: HashAlgorithm) -> Result<Self> {
        if !algorithm.is_available() {
            return Err(Error::unsupported("EcdhKem::new", algorithm));
        }
        Ok(Self { algorithm, hash })
    }

    pub fn algorithm(&self) -> EcdhAlgorithm {
        self.algorithm
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    fn derive(&self, raw: &[u8], ciphertext: &[u8], public_key: &[u8]) -> Result<SharedSecret> {
        let ss = kdf::derive(
            self.hash,
            raw,
            ciphertext,
            public_key,
            self.algorithm.id(),
            self.algorithm.point_coordinate_length(),
        )?;
        Ok(SharedSecret::new(ss))
    }
}

impl Kem for EcdhKem {
    fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    fn sizes(&self) -> KemSizes {
        let point = self.algorithm.point_coordinate_length();
        KemSizes {
            public_key: point,
            secret_key: self.algorithm.secret_length(),
            ciphertext: point,
            shared_secret: point,
        }
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<(PublicKey, SecretKey)> {
        let mut ctx = EcdhContext::new(self.algorithm)?;
        let public_key = PublicKey::from_slice(ctx.create_key_pair(rng)?);
        let secret_key = match ctx.secret() {
            Some(secret) => SecretKey::from_slice(secret),
            None => {
                return Err(Error::PreconditionViolated {
                    context: "EcdhKem::keypair",
                    requirement: "context secret present after key generation",
                })
            }
        };
        ctx.destroy();
        trace!(algorithm = %self.algorithm, "generated ECDH key pair");
        Ok((public_key, secret_key))
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &PublicKey,
    ) -> Result<(Ciphertext, SharedSecret)> {
        let sizes = self.sizes();
        validate::length("EcdhKem::encapsulate public key", public_key.len(), sizes.public_key)?;

        // 1. Fresh context holding the recipient key
        let mut ctx = EcdhContext::new(self.algorithm)?;
        ctx.set_peer_public_key(public_key.as_bytes())?;

        // 2. Ephemeral key pair; its public half is the ciphertext
        let ciphertext = Ciphertext::from_slice(ctx.create_key_pair(rng)?);

        // 3. Raw agreement, rejected peer points surface as KeyAgreementFailed
        let raw = ctx.compute_shared_secret()?;

        // 4. Bind the raw secret to this exchange
        let shared_secret = self.derive(raw, ciphertext.as_bytes(), public_key.as_bytes())?;

        ctx.destroy();
        debug!(algorithm = %self.algorithm, ct_len = ciphertext.len(), "ECDH encapsulation complete");
        Ok((ciphertext, shared_secret))
    }

    fn decapsulate(&self, secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<SharedSecret> {
        let sizes = self.sizes();
        validate::length("EcdhKem::decapsulate secret key", secret_key.len(), sizes.secret_key)?;
        validate::length("EcdhKem::decapsulate ciphertext", ciphertext.len(), sizes.ciphertext)?;

        let mut ctx = EcdhContext::new(self.algorithm)?;
        ctx.set_secret(secret_key.as_bytes())?;
        ctx.set_peer_public_key(ciphertext.as_bytes())?;
        ctx.compute_shared_secret()?;

        // The recipient public key is bound into the derivation but not
        // transmitted, so it is recomputed from the secret key.
        let public_key = ctx.derive_public_key()?.to_vec();
        let raw = ctx.shared_secret().ok_or(Error::PreconditionViolated {
            context: "EcdhKem::decapsulate",
            requirement: "shared secret present after key agreement",
        })?;
        let shared_secret = self.derive(raw, ciphertext.as_bytes(), &public_key)?;

        ctx.destroy();
        debug!(algorithm = %self.algorithm, "ECDH decapsulation complete");
        Ok(shared_secret)
    }
}
