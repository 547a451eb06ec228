//! End-to-end exchanges between two parties over the classical + post-quantum pairings

use rand::rngs::OsRng;
use zkem_api::{HashAlgorithm, Kem};
use zkem_hybrid::{HybridConfig, HybridKem};
use zkem_kem::KemAlgorithm;

#[test]
fn test_alice_and_bob_agree() {
    let config = HybridConfig::new(
        vec![KemAlgorithm::X25519, KemAlgorithm::Kyber512],
        HashAlgorithm::Sha256,
    );
    // Each party builds its own combiner from the shared configuration
    let alice = HybridKem::from_config(&config).unwrap();
    let bob = HybridKem::from_config(&config).unwrap();

    let (pk_a, sk_a) = alice.keypair(&mut OsRng).unwrap();
    assert_eq!(pk_a.len(), 32 + 800);
    assert_eq!(sk_a.len(), 32 + 1632);

    let (ct_b, ss_b) = bob.encapsulate(&mut OsRng, &pk_a).unwrap();
    assert_eq!(ct_b.len(), 32 + 768);
    assert_eq!(ss_b.len(), 32);

    let ss_a = alice.decapsulate(&sk_a, &ct_b).unwrap();
    assert_eq!(ss_a, ss_b);
    assert_eq!(ss_a.len(), 32);
}

#[test]
fn test_alice_and_bob_agree_over_hqc() {
    let config: HybridConfig = "x25519+kyber512+hqc128/sha512".parse().unwrap();
    let alice = HybridKem::from_config(&config).unwrap();
    let bob = HybridKem::from_config(&config).unwrap();

    let (pk_a, sk_a) = alice.keypair(&mut OsRng).unwrap();
    assert_eq!(pk_a.len(), 32 + 800 + 2249);
    assert_eq!(sk_a.len(), 32 + 1632 + 2305);

    let (ct_b, ss_b) = bob.encapsulate(&mut OsRng, &pk_a).unwrap();
    assert_eq!(ct_b.len(), 32 + 768 + 4433);
    assert_eq!(ss_b.len(), 64);
    assert_eq!(alice.decapsulate(&sk_a, &ct_b).unwrap(), ss_b);
}

#[test]
fn test_combiner_is_shared_across_threads() {
    let kem = std::sync::Arc::new(zkem_tests::hybrid(&[
        KemAlgorithm::X25519,
        KemAlgorithm::MlKem768,
    ]));
    let (pk, sk) = kem.keypair(&mut OsRng).unwrap();
    let pk = std::sync::Arc::new(pk);
    let sk = std::sync::Arc::new(sk);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let kem = kem.clone();
            let pk = pk.clone();
            let sk = sk.clone();
            std::thread::spawn(move || {
                for _ in 0..10 {
                    let (ct, ss) = kem.encapsulate(&mut OsRng, &pk).unwrap();
                    assert_eq!(kem.decapsulate(&sk, &ct).unwrap(), ss);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_independent_encapsulations_differ() {
    let kem = zkem_tests::hybrid(&[KemAlgorithm::X25519, KemAlgorithm::Kyber512]);
    let (pk, _) = kem.keypair(&mut OsRng).unwrap();

    let (ct1, ss1) = kem.encapsulate(&mut OsRng, &pk).unwrap();
    let (ct2, ss2) = kem.encapsulate(&mut OsRng, &pk).unwrap();
    assert_ne!(ct1, ct2);
    assert_ne!(ss1, ss2);
}
