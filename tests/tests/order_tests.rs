//! Component order is part of the shared configuration

use rand::rngs::OsRng;
use zkem_api::{Ciphertext, Kem, SecretKey};
use zkem_kem::KemAlgorithm;
use zkem_tests::hybrid;

/// Swap the two halves of a two-component buffer
fn swap(bytes: &[u8], first_len: usize) -> Vec<u8> {
    [&bytes[first_len..], &bytes[..first_len]].concat()
}

#[test]
fn test_reversed_order_yields_different_secret() {
    let pairs = [
        (KemAlgorithm::X25519, KemAlgorithm::Kyber512),
        (KemAlgorithm::X25519, KemAlgorithm::MlKem768),
        (KemAlgorithm::Kyber768, KemAlgorithm::MlKem768),
    ];
    let mut rng = OsRng;

    for (a, b) in pairs {
        let forward = hybrid(&[a, b]);
        let reversed = hybrid(&[b, a]);

        for _ in 0..10 {
            let (pk, sk) = forward.keypair(&mut rng).unwrap();
            let (ct, ss) = forward.encapsulate(&mut rng, &pk).unwrap();

            // Same component key pairs and ciphertexts, reversed layout
            let sk_rev = SecretKey::from_slice(&swap(sk.as_bytes(), a.sizes().secret_key));
            let ct_rev = Ciphertext::new(swap(ct.as_bytes(), a.sizes().ciphertext));
            let ss_rev = reversed.decapsulate(&sk_rev, &ct_rev).unwrap();

            assert_ne!(ss, ss_rev, "{} and {} folded to the same secret", a, b);
        }
    }
}

#[test]
fn test_mismatched_order_fails_silently() {
    // Same sizes in both positions, so the swapped layout still parses
    let forward = hybrid(&[KemAlgorithm::Kyber512, KemAlgorithm::MlKem512]);
    let reversed = hybrid(&[KemAlgorithm::MlKem512, KemAlgorithm::Kyber512]);
    let mut rng = OsRng;

    let (pk, sk) = forward.keypair(&mut rng).unwrap();
    let (ct, ss) = forward.encapsulate(&mut rng, &pk).unwrap();

    let ss_wrong = reversed.decapsulate(&sk, &ct).unwrap();
    assert_eq!(ss_wrong.len(), ss.len());
    assert_ne!(ss_wrong, ss);
}
