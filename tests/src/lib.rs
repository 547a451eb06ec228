//! Shared helpers for the zkem cross-crate tests

use rand::Rng;
use zkem_api::{HashAlgorithm, Kem, Result};
use zkem_hybrid::HybridKem;
use zkem_kem::KemAlgorithm;

/// Random trials per algorithm in the round-trip and size suites
pub const TRIALS: usize = 100;

/// Registered algorithms whose backend is compiled into this build
pub fn available_algorithms() -> Vec<KemAlgorithm> {
    KemAlgorithm::ALL
        .into_iter()
        .filter(|a| a.is_available())
        .collect()
}

/// Ordered component lists exercised by the hybrid suites
pub fn hybrid_subsets() -> Vec<Vec<KemAlgorithm>> {
    let mut subsets = vec![
        vec![KemAlgorithm::X25519],
        vec![KemAlgorithm::Kyber512],
        vec![KemAlgorithm::X25519, KemAlgorithm::Kyber512],
        vec![KemAlgorithm::Kyber512, KemAlgorithm::X25519],
        vec![KemAlgorithm::X25519, KemAlgorithm::MlKem768],
        vec![KemAlgorithm::MlKem1024, KemAlgorithm::Kyber1024],
        vec![
            KemAlgorithm::X25519,
            KemAlgorithm::Kyber768,
            KemAlgorithm::MlKem512,
        ],
        vec![KemAlgorithm::X25519, KemAlgorithm::Hqc128],
        vec![
            KemAlgorithm::X25519,
            KemAlgorithm::Kyber512,
            KemAlgorithm::Hqc128,
        ],
    ];
    if KemAlgorithm::X448.is_available() {
        subsets.push(vec![KemAlgorithm::X448, KemAlgorithm::MlKem1024]);
        subsets.push(vec![
            KemAlgorithm::X448,
            KemAlgorithm::Kyber1024,
            KemAlgorithm::Hqc256,
        ]);
    }
    subsets
}

/// Generate a key pair, encapsulate to it and decapsulate again.
///
/// Returns whether both sides agree; every buffer length is checked against
/// the published sizes on the way.
pub fn round_trip<K: Kem, R: rand::CryptoRng + rand::RngCore>(kem: &K, rng: &mut R) -> Result<bool> {
    let sizes = kem.sizes();
    let (pk, sk) = kem.keypair(rng)?;
    let (ct, ss) = kem.encapsulate(rng, &pk)?;
    let recovered = kem.decapsulate(&sk, &ct)?;

    assert_eq!(pk.len(), sizes.public_key, "{} public key", kem.name());
    assert_eq!(sk.len(), sizes.secret_key, "{} secret key", kem.name());
    assert_eq!(ct.len(), sizes.ciphertext, "{} ciphertext", kem.name());
    assert_eq!(ss.len(), sizes.shared_secret, "{} shared secret", kem.name());
    assert_eq!(recovered.len(), sizes.shared_secret, "{} recovered secret", kem.name());

    Ok(ss == recovered)
}

/// Build a hybrid combiner over `algorithms` with SHA-256
pub fn hybrid(algorithms: &[KemAlgorithm]) -> HybridKem {
    HybridKem::from_algorithms(algorithms, HashAlgorithm::Sha256)
        .unwrap_or_else(|e| panic!("building {:?}: {}", algorithms, e))
}

/// Copy of `bytes` with one randomly chosen bit flipped
pub fn flip_random_bit<R: Rng>(bytes: &[u8], rng: &mut R) -> Vec<u8> {
    let mut out = bytes.to_vec();
    let bit = rng.gen_range(0..out.len() * 8);
    out[bit / 8] ^= 1 << (bit % 8);
    out
}

/// Decode a hex vector
pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("bad test vector {:?}: {}", s, e))
}
