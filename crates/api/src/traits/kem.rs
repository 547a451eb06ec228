//! Trait definition for Key Encapsulation Mechanisms (KEM)
//!
//! Every concrete KEM (classical ECDH adapter, post-quantum adapter, or the
//! hybrid combiner itself) implements this one capability.

use crate::{Ciphertext, KemSizes, PublicKey, Result, SecretKey, SharedSecret};
use rand::{CryptoRng, RngCore};

/// Key Encapsulation Mechanism capability
///
/// # Contract
///
/// - `keypair` returns buffers of exactly `sizes().public_key` and
///   `sizes().secret_key` bytes.
/// - `encapsulate` returns a ciphertext of `sizes().ciphertext` bytes and a
///   shared secret of `sizes().shared_secret` bytes.
/// - `decapsulate(sk, encapsulate(pk).0) == encapsulate(pk).1` for any pair
///   produced by `keypair`.
///
/// Implementations hold no mutable state; one instance may serve
/// concurrent calls from several threads.
pub trait Kem {
    /// Returns the KEM algorithm name.
    fn name(&self) -> &'static str;

    /// Returns the fixed key, ciphertext and shared-secret sizes.
    fn sizes(&self) -> KemSizes;

    /// Generate a new keypair.
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<(PublicKey, SecretKey)>;

    /// Encapsulate a shared secret to the recipient's public key.
    ///
    /// Fails with `LengthMismatch` if the key has the wrong size.
    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &PublicKey,
    ) -> Result<(Ciphertext, SharedSecret)>;

    /// Recover the shared secret from a ciphertext.
    ///
    /// A wrong but well-formed ciphertext does not necessarily fail: it may
    /// yield a secret that simply does not match the sender's.
    fn decapsulate(&self, secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<SharedSecret>;
}
