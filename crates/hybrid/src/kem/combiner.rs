//! Nested dual PRF over HMAC

use zkem_api::{Error, HashAlgorithm, Result, SharedSecret};
use zkem_common::SecretVec;
use zkem_kem::kdf;

/// Chain of HMAC applications folding component secrets into one
///
/// Each absorbed secret is keyed by the previous chaining value; the final
/// step keys the concatenated ciphertext with the last chaining value. The
/// chaining value is zeroized whenever it is replaced or dropped.
pub struct NestedPrf {
    hash: HashAlgorithm,
    chain: Option<SecretVec>,
    absorbed: usize,
}

impl NestedPrf {
    pub fn new(hash: HashAlgorithm) -> Self {
        Self {
            hash,
            chain: None,
            absorbed: 0,
        }
    }

    /// Number of secrets folded in so far
    pub fn absorbed(&self) -> usize {
        self.absorbed
    }

    /// Fold one component secret into the chain; the secret is erased on return.
    pub fn absorb(&mut self, secret: SharedSecret) -> Result<()> {
        let key = self.chain.as_ref().map_or(&[][..], SecretVec::as_slice);
        let next = kdf::hmac(self.hash, key, secret.as_bytes())?;
        drop(secret);

        // The previous chaining value is zeroized on drop
        self.chain = Some(next);
        self.absorbed += 1;
        Ok(())
    }

    /// Key the concatenated ciphertext with the final chaining value.
    ///
    /// Fails with `PreconditionViolated` if nothing was absorbed.
    pub fn finalize(self, ciphertext: &[u8]) -> Result<SharedSecret> {
        let chain = self.chain.as_ref().ok_or(Error::PreconditionViolated {
            context: "NestedPrf::finalize",
            requirement: "at least one component secret absorbed",
        })?;
        let ss = kdf::hmac(self.hash, chain.as_slice(), ciphertext)?;
        Ok(SharedSecret::new(ss))
    }
}
