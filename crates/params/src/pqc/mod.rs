//! Constants for post-quantum key encapsulation mechanisms

pub mod hqc;
pub mod kyber;
pub mod ml_kem;

/// Encoded sizes of one post-quantum KEM parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KemParams {
    /// Size of public key in bytes
    pub public_key_size: usize,

    /// Size of secret key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of shared secret in bytes
    pub shared_secret_size: usize,
}
