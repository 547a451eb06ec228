//! Properties of the ZRTP KEM secret derivation

use proptest::prelude::*;
use zkem_api::HashAlgorithm;
use zkem_kem::kdf::derive;

fn hash_algorithm() -> impl Strategy<Value = HashAlgorithm> {
    prop::sample::select(HashAlgorithm::ALL.to_vec())
}

fn bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=96)
}

/// Flip the lowest bit of the first byte, or append one byte to an empty input
fn perturb(input: &[u8]) -> Vec<u8> {
    let mut out = input.to_vec();
    match out.first_mut() {
        Some(b) => *b ^= 1,
        None => out.push(0),
    }
    out
}

proptest! {
    #[test]
    fn derivation_is_deterministic(
        hash in hash_algorithm(),
        raw in bytes(),
        ct in bytes(),
        pk in bytes(),
        id in any::<u8>(),
        out_len in 1usize..=128,
    ) {
        let a = derive(hash, &raw, &ct, &pk, id, out_len).unwrap();
        let b = derive(hash, &raw, &ct, &pk, id, out_len).unwrap();
        prop_assert_eq!(a.len(), out_len);
        prop_assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn derivation_binds_every_input(
        hash in hash_algorithm(),
        raw in bytes(),
        ct in bytes(),
        pk in bytes(),
        id in any::<u8>(),
        out_len in 16usize..=128,
    ) {
        let base = derive(hash, &raw, &ct, &pk, id, out_len).unwrap();

        let changed = [
            derive(hash, &perturb(&raw), &ct, &pk, id, out_len).unwrap(),
            derive(hash, &raw, &perturb(&ct), &pk, id, out_len).unwrap(),
            derive(hash, &raw, &ct, &perturb(&pk), id, out_len).unwrap(),
            derive(hash, &raw, &ct, &pk, id.wrapping_add(1), out_len).unwrap(),
        ];
        for other in &changed {
            prop_assert_ne!(base.as_slice(), other.as_slice());
        }

        // The length is part of the info string, so even the common prefix differs
        let longer = derive(hash, &raw, &ct, &pk, id, out_len + 1).unwrap();
        prop_assert_ne!(base.as_slice(), &longer.as_slice()[..out_len]);
    }
}

#[test]
fn test_hash_selection_changes_output() {
    let outputs: Vec<_> = HashAlgorithm::ALL
        .into_iter()
        .map(|hash| derive(hash, b"raw", b"ct", b"pk", 0x20, 32).unwrap())
        .collect();
    assert_ne!(outputs[0].as_slice(), outputs[1].as_slice());
    assert_ne!(outputs[1].as_slice(), outputs[2].as_slice());
    assert_ne!(outputs[0].as_slice(), outputs[2].as_slice());
}

#[test]
fn test_derivation_vectors() {
    let raw: Vec<u8> = (0u8..32).collect();
    let ss = derive(HashAlgorithm::Sha256, &raw, &[0xAA; 32], &[0xBB; 32], 0x20, 32).unwrap();
    assert_eq!(
        ss.as_slice(),
        zkem_tests::unhex("6bd384abe42f84f3f14e61704db6bdcc87f143655abe586301b9273c143b0119")
    );

    let ss = derive(HashAlgorithm::Sha256, &[], &[], &[], 0x30, 32).unwrap();
    assert_eq!(
        hex::encode(ss.as_slice()),
        "1dbb0643f329b53e73892c4500d137e710fd86b786ba52b2fd3e188561c41d1f"
    );
}
