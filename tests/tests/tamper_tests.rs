//! Bit flips in a ciphertext never reproduce the honest secret

use rand::rngs::OsRng;
use zkem_api::{Ciphertext, Error, HashAlgorithm, Kem};
use zkem_kem::KemAlgorithm;
use zkem_tests::{available_algorithms, flip_random_bit, hybrid};

const TAMPER_TRIALS: usize = 20;

/// HQC may report a rejected ciphertext instead of deriving a rejection secret
fn is_hqc(algorithm: &KemAlgorithm) -> bool {
    matches!(
        algorithm,
        KemAlgorithm::Hqc128 | KemAlgorithm::Hqc192 | KemAlgorithm::Hqc256
    )
}

fn is_backend_rejection(e: &Error) -> bool {
    match e {
        Error::KemOperationFailed { .. } => true,
        Error::ComponentKemFailed { source, .. } => is_backend_rejection(source),
        _ => false,
    }
}

fn assert_tamper_detected<K: Kem>(kem: &K, backend_may_reject: bool) {
    let mut rng = OsRng;
    let (pk, sk) = kem.keypair(&mut rng).unwrap();

    for trial in 0..TAMPER_TRIALS {
        let (ct, ss) = kem.encapsulate(&mut rng, &pk).unwrap();
        let tampered = Ciphertext::new(flip_random_bit(ct.as_bytes(), &mut rng));

        match kem.decapsulate(&sk, &tampered) {
            Ok(ss_tampered) => assert_ne!(ss_tampered, ss, "{} trial {}", kem.name(), trial),
            Err(e) => assert!(
                e.is_key_agreement_failure() || (backend_may_reject && is_backend_rejection(&e)),
                "{} trial {}: unexpected error {}",
                kem.name(),
                trial,
                e
            ),
        }
    }
}

#[test]
fn test_classical_ciphertext_tampering() {
    for algorithm in available_algorithms().into_iter().filter(|a| a.classical().is_some()) {
        assert_tamper_detected(&algorithm.instantiate(HashAlgorithm::Sha256).unwrap(), false);
    }
}

#[test]
fn test_post_quantum_implicit_rejection() {
    for algorithm in available_algorithms().into_iter().filter(|a| a.post_quantum().is_some()) {
        let kem = algorithm.instantiate(HashAlgorithm::Sha256).unwrap();
        assert_tamper_detected(&kem, is_hqc(&algorithm));
    }
}

#[test]
fn test_hybrid_ciphertext_tampering() {
    assert_tamper_detected(&hybrid(&[KemAlgorithm::X25519, KemAlgorithm::Kyber512]), false);
    assert_tamper_detected(&hybrid(&[KemAlgorithm::MlKem768, KemAlgorithm::X25519]), false);
    assert_tamper_detected(&hybrid(&[KemAlgorithm::X25519, KemAlgorithm::Hqc128]), true);
}

#[test]
fn test_low_order_point_is_reported_with_component_index() {
    let kem = hybrid(&[KemAlgorithm::Kyber512, KemAlgorithm::X25519]);
    let mut rng = OsRng;
    let (_, sk) = kem.keypair(&mut rng).unwrap();

    let mut ct = vec![0x11u8; kem.sizes().ciphertext];
    let x25519_start = KemAlgorithm::Kyber512.sizes().ciphertext;
    ct[x25519_start..].fill(0);

    let err = kem.decapsulate(&sk, &Ciphertext::new(ct)).unwrap_err();
    assert!(matches!(err, Error::ComponentKemFailed { index: 1, .. }), "{}", err);
    assert!(err.is_key_agreement_failure());
}
