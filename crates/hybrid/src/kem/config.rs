//! Hybrid combiner configuration
//!
//! The compact textual form lists algorithm names joined by `+`, optionally
//! followed by `/` and a hash name: `x25519+kyber512/sha256`. Without a hash
//! suffix SHA-256 is used.

use core::fmt;
use core::str::FromStr;
use zkem_api::error::validate;
use zkem_api::{Error, HashAlgorithm, Result};
use zkem_kem::KemAlgorithm;

/// Ordered component list and hash selection of a [`super::HybridKem`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HybridConfig {
    pub algorithms: Vec<KemAlgorithm>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hash: HashAlgorithm,
}

impl HybridConfig {
    pub fn new(algorithms: Vec<KemAlgorithm>, hash: HashAlgorithm) -> Self {
        Self { algorithms, hash }
    }

    /// Fails with `InvalidParameter` on an empty algorithm list
    pub fn validate(&self) -> Result<()> {
        validate::parameter(
            !self.algorithms.is_empty(),
            "HybridConfig::validate",
            "at least one algorithm is required",
        )
    }
}

impl FromStr for HybridConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (list, hash) = match s.trim().split_once('/') {
            Some((list, hash)) => (list, hash.parse::<HashAlgorithm>()?),
            None => (s.trim(), HashAlgorithm::default()),
        };

        let algorithms = list
            .split('+')
            .map(|name| {
                if name.trim().is_empty() {
                    return Err(Error::InvalidParameter {
                        context: "HybridConfig::from_str",
                        message: format!("empty algorithm name in {:?}", s),
                    });
                }
                name.parse::<KemAlgorithm>()
            })
            .collect::<Result<Vec<_>>>()?;

        let config = Self::new(algorithms, hash);
        config.validate()?;
        Ok(config)
    }
}

impl fmt::Display for HybridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, algorithm) in self.algorithms.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "{}", algorithm)?;
        }
        write!(f, "/{}", self.hash)
    }
}
