//! Round-trip agreement and fixed sizes across every compiled-in algorithm

use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use zkem_api::{HashAlgorithm, Kem, KemSizes};
use zkem_kem::KemAlgorithm;
use zkem_tests::{available_algorithms, hybrid, hybrid_subsets, round_trip, TRIALS};

#[test]
fn test_every_algorithm_round_trips() {
    let mut rng = OsRng;
    for algorithm in available_algorithms() {
        let kem = algorithm.instantiate(HashAlgorithm::Sha256).unwrap();
        for trial in 0..TRIALS {
            assert!(
                round_trip(&kem, &mut rng).unwrap(),
                "{} disagreed on trial {}",
                algorithm,
                trial
            );
        }
    }
}

#[test]
fn test_classical_round_trips_under_every_hash() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for hash in HashAlgorithm::ALL {
        for algorithm in available_algorithms().into_iter().filter(|a| a.classical().is_some()) {
            let kem = algorithm.instantiate(hash).unwrap();
            for _ in 0..TRIALS / 4 {
                assert!(round_trip(&kem, &mut rng).unwrap(), "{} with {}", algorithm, hash);
            }
        }
    }
}

#[test]
fn test_hybrid_subsets_round_trip() {
    let mut rng = OsRng;
    for subset in hybrid_subsets() {
        let kem = hybrid(&subset);
        for trial in 0..TRIALS {
            assert!(
                round_trip(&kem, &mut rng).unwrap(),
                "{} disagreed on trial {}",
                kem.config(),
                trial
            );
        }
    }
}

#[test]
fn test_registry_sizes() {
    let expected = [
        (KemAlgorithm::X25519, 0x20, 32, 32, 32, 32),
        (KemAlgorithm::X448, 0x21, 56, 56, 56, 56),
        (KemAlgorithm::Kyber512, 0x30, 800, 1632, 768, 32),
        (KemAlgorithm::Kyber768, 0x31, 1184, 2400, 1088, 32),
        (KemAlgorithm::Kyber1024, 0x32, 1568, 3168, 1568, 32),
        (KemAlgorithm::MlKem512, 0x40, 800, 1632, 768, 32),
        (KemAlgorithm::MlKem768, 0x41, 1184, 2400, 1088, 32),
        (KemAlgorithm::MlKem1024, 0x42, 1568, 3168, 1568, 32),
        (KemAlgorithm::Hqc128, 0x50, 2249, 2305, 4433, 64),
        (KemAlgorithm::Hqc192, 0x51, 4522, 4586, 8978, 64),
        (KemAlgorithm::Hqc256, 0x52, 7245, 7317, 14421, 64),
    ];
    for (algorithm, id, pk, sk, ct, ss) in expected {
        assert_eq!(algorithm.id(), id, "{}", algorithm);
        assert_eq!(
            algorithm.sizes(),
            KemSizes {
                public_key: pk,
                secret_key: sk,
                ciphertext: ct,
                shared_secret: ss,
            },
            "{}",
            algorithm
        );
    }
}

#[test]
fn test_hybrid_sizes_are_component_sums() {
    for subset in hybrid_subsets() {
        for hash in HashAlgorithm::ALL {
            let kem = zkem_hybrid::HybridKem::from_algorithms(&subset, hash).unwrap();
            let sizes = kem.sizes();
            assert_eq!(sizes.public_key, subset.iter().map(|a| a.sizes().public_key).sum::<usize>());
            assert_eq!(sizes.secret_key, subset.iter().map(|a| a.sizes().secret_key).sum::<usize>());
            assert_eq!(sizes.ciphertext, subset.iter().map(|a| a.sizes().ciphertext).sum::<usize>());
            assert_eq!(sizes.shared_secret, hash.output_size());
        }
    }
}
