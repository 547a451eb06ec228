//! Hybrid configuration loaded from TOML and compact strings

use serde::Deserialize;
use zkem_api::{Error, HashAlgorithm, Kem};
use zkem_hybrid::{HybridConfig, HybridKem};
use zkem_kem::KemAlgorithm;

#[derive(Debug, Deserialize)]
struct Settings {
    hybrid: HybridConfig,
}

#[test]
fn test_load_from_toml() {
    let settings: Settings = toml::from_str(
        r#"
        [hybrid]
        algorithms = ["x25519", "ML-KEM-768", "kyber1024"]
        hash = "sha512"
        "#,
    )
    .unwrap();

    assert_eq!(
        settings.hybrid.algorithms,
        vec![
            KemAlgorithm::X25519,
            KemAlgorithm::MlKem768,
            KemAlgorithm::Kyber1024
        ]
    );
    assert_eq!(settings.hybrid.hash, HashAlgorithm::Sha512);

    let kem = HybridKem::from_config(&settings.hybrid).unwrap();
    assert_eq!(kem.sizes().public_key, 32 + 1184 + 1568);
    assert_eq!(kem.sizes().shared_secret, 64);
}

#[test]
fn test_hash_defaults_to_sha256() {
    let config: HybridConfig = toml::from_str(r#"algorithms = ["mlkem512"]"#).unwrap();
    assert_eq!(config.hash, HashAlgorithm::Sha256);
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    let result: Result<HybridConfig, _> = toml::from_str(r#"algorithms = ["x25519", "frodo640"]"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("frodo640"), "{}", err);
}

#[test]
fn test_toml_round_trip() {
    let config: HybridConfig = "x25519+kyber512/sha384".parse().unwrap();
    let text = toml::to_string(&config).unwrap();
    let parsed: HybridConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
    assert_eq!(parsed.to_string(), "x25519+kyber512/sha384");
}

#[test]
fn test_empty_configuration_cannot_build_a_combiner() {
    let config: HybridConfig = toml::from_str("algorithms = []").unwrap();
    assert!(matches!(config.validate(), Err(Error::InvalidParameter { .. })));
    assert!(matches!(
        HybridKem::from_config(&config),
        Err(Error::InvalidParameter { .. })
    ));
}
