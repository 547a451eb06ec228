//! Post-quantum KEM adapters
//!
//! The wrapped algorithms are complete KEMs, so [`PqKem`] only validates
//! buffer sizes and delegates; no further derivation is applied. Each
//! backend keeps the decapsulation behaviour its algorithm defines (implicit
//! rejection for Kyber and ML-KEM, a rejection secret or a reported failure
//! for HQC) and never masks it.

mod mlkem;
mod pqclean;

use core::fmt;
use ml_kem::{MlKem1024, MlKem512, MlKem768};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zkem_api::error::validate;
use zkem_api::{Ciphertext, Kem, KemSizes, PublicKey, Result, SecretKey, SharedSecret};
use zkem_params::pqc::hqc::{
    HQC128, HQC128_ALGORITHM_ID, HQC192, HQC192_ALGORITHM_ID, HQC256, HQC256_ALGORITHM_ID,
};
use zkem_params::pqc::kyber::{
    KYBER1024, KYBER1024_ALGORITHM_ID, KYBER512, KYBER512_ALGORITHM_ID, KYBER768,
    KYBER768_ALGORITHM_ID,
};
use zkem_params::pqc::ml_kem::{
    ML_KEM_1024, ML_KEM_1024_ALGORITHM_ID, ML_KEM_512, ML_KEM_512_ALGORITHM_ID, ML_KEM_768,
    ML_KEM_768_ALGORITHM_ID,
};
use zkem_params::pqc::KemParams;

/// Post-quantum algorithm backing a [`PqKem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PqAlgorithm {
    Kyber512,
    Kyber768,
    Kyber1024,
    MlKem512,
    MlKem768,
    MlKem1024,
    Hqc128,
    Hqc192,
    Hqc256,
}

impl PqAlgorithm {
    pub const ALL: [PqAlgorithm; 9] = [
        Self::Kyber512,
        Self::Kyber768,
        Self::Kyber1024,
        Self::MlKem512,
        Self::MlKem768,
        Self::MlKem1024,
        Self::Hqc128,
        Self::Hqc192,
        Self::Hqc256,
    ];

    pub const fn id(self) -> u8 {
        match self {
            Self::Kyber512 => KYBER512_ALGORITHM_ID,
            Self::Kyber768 => KYBER768_ALGORITHM_ID,
            Self::Kyber1024 => KYBER1024_ALGORITHM_ID,
            Self::MlKem512 => ML_KEM_512_ALGORITHM_ID,
            Self::MlKem768 => ML_KEM_768_ALGORITHM_ID,
            Self::MlKem1024 => ML_KEM_1024_ALGORITHM_ID,
            Self::Hqc128 => HQC128_ALGORITHM_ID,
            Self::Hqc192 => HQC192_ALGORITHM_ID,
            Self::Hqc256 => HQC256_ALGORITHM_ID,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Kyber512 => "kyber512",
            Self::Kyber768 => "kyber768",
            Self::Kyber1024 => "kyber1024",
            Self::MlKem512 => "mlkem512",
            Self::MlKem768 => "mlkem768",
            Self::MlKem1024 => "mlkem1024",
            Self::Hqc128 => "hqc128",
            Self::Hqc192 => "hqc192",
            Self::Hqc256 => "hqc256",
        }
    }

    const fn params(self) -> &'static KemParams {
        match self {
            Self::Kyber512 => &KYBER512,
            Self::Kyber768 => &KYBER768,
            Self::Kyber1024 => &KYBER1024,
            Self::MlKem512 => &ML_KEM_512,
            Self::MlKem768 => &ML_KEM_768,
            Self::MlKem1024 => &ML_KEM_1024,
            Self::Hqc128 => &HQC128,
            Self::Hqc192 => &HQC192,
            Self::Hqc256 => &HQC256,
        }
    }

    pub const fn sizes(self) -> KemSizes {
        let params = self.params();
        KemSizes {
            public_key: params.public_key_size,
            secret_key: params.secret_key_size,
            ciphertext: params.ciphertext_size,
            shared_secret: params.shared_secret_size,
        }
    }
}

impl fmt::Display for PqAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Post-quantum KEM adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PqKem {
    algorithm: PqAlgorithm,
}

impl PqKem {
    pub fn new(algorithm: PqAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> PqAlgorithm {
        self.algorithm
    }
}

impl Kem for PqKem {
    fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    fn sizes(&self) -> KemSizes {
        self.algorithm.sizes()
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<(PublicKey, SecretKey)> {
        let (pk, sk) = match self.algorithm {
            PqAlgorithm::Kyber512 => pqclean::kyber512::keypair(),
            PqAlgorithm::Kyber768 => pqclean::kyber768::keypair(),
            PqAlgorithm::Kyber1024 => pqclean::kyber1024::keypair(),
            PqAlgorithm::MlKem512 => mlkem::keypair::<MlKem512, R>(rng),
            PqAlgorithm::MlKem768 => mlkem::keypair::<MlKem768, R>(rng),
            PqAlgorithm::MlKem1024 => mlkem::keypair::<MlKem1024, R>(rng),
            PqAlgorithm::Hqc128 => pqclean::hqc128::keypair(),
            PqAlgorithm::Hqc192 => pqclean::hqc192::keypair(),
            PqAlgorithm::Hqc256 => pqclean::hqc256::keypair(),
        };
        let sizes = self.sizes();
        validate::length("PqKem::keypair public key", pk.len(), sizes.public_key)?;
        validate::length("PqKem::keypair secret key", sk.len(), sizes.secret_key)?;
        Ok((pk, sk))
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &PublicKey,
    ) -> Result<(Ciphertext, SharedSecret)> {
        const CONTEXT: &str = "PqKem::encapsulate";
        validate::length(CONTEXT, public_key.len(), self.sizes().public_key)?;

        let result = match self.algorithm {
            PqAlgorithm::Kyber512 => pqclean::kyber512::encapsulate(public_key, CONTEXT),
            PqAlgorithm::Kyber768 => pqclean::kyber768::encapsulate(public_key, CONTEXT),
            PqAlgorithm::Kyber1024 => pqclean::kyber1024::encapsulate(public_key, CONTEXT),
            PqAlgorithm::MlKem512 => mlkem::encapsulate::<MlKem512, R>(rng, public_key, CONTEXT),
            PqAlgorithm::MlKem768 => mlkem::encapsulate::<MlKem768, R>(rng, public_key, CONTEXT),
            PqAlgorithm::MlKem1024 => {
                mlkem::encapsulate::<MlKem1024, R>(rng, public_key, CONTEXT)
            }
            PqAlgorithm::Hqc128 => pqclean::hqc128::encapsulate(public_key, CONTEXT),
            PqAlgorithm::Hqc192 => pqclean::hqc192::encapsulate(public_key, CONTEXT),
            PqAlgorithm::Hqc256 => pqclean::hqc256::encapsulate(public_key, CONTEXT),
        };
        let (ct, ss) = result?;
        debug!(algorithm = %self.algorithm, ct_len = ct.len(), "post-quantum encapsulation complete");
        Ok((ct, ss))
    }

    fn decapsulate(&self, secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<SharedSecret> {
        const CONTEXT: &str = "PqKem::decapsulate";
        let sizes = self.sizes();
        validate::length(CONTEXT, secret_key.len(), sizes.secret_key)?;
        validate::length(CONTEXT, ciphertext.len(), sizes.ciphertext)?;

        let ss = match self.algorithm {
            PqAlgorithm::Kyber512 => {
                pqclean::kyber512::decapsulate(secret_key, ciphertext, CONTEXT)
            }
            PqAlgorithm::Kyber768 => {
                pqclean::kyber768::decapsulate(secret_key, ciphertext, CONTEXT)
            }
            PqAlgorithm::Kyber1024 => {
                pqclean::kyber1024::decapsulate(secret_key, ciphertext, CONTEXT)
            }
            PqAlgorithm::MlKem512 => mlkem::decapsulate::<MlKem512>(secret_key, ciphertext, CONTEXT),
            PqAlgorithm::MlKem768 => mlkem::decapsulate::<MlKem768>(secret_key, ciphertext, CONTEXT),
            PqAlgorithm::MlKem1024 => {
                mlkem::decapsulate::<MlKem1024>(secret_key, ciphertext, CONTEXT)
            }
            PqAlgorithm::Hqc128 => pqclean::hqc128::decapsulate(secret_key, ciphertext, CONTEXT),
            PqAlgorithm::Hqc192 => pqclean::hqc192::decapsulate(secret_key, ciphertext, CONTEXT),
            PqAlgorithm::Hqc256 => pqclean::hqc256::decapsulate(secret_key, ciphertext, CONTEXT),
        }?;
        debug!(algorithm = %self.algorithm, "post-quantum decapsulation complete");
        Ok(ss)
    }
}
