//! PQClean backends: round-3 Kyber via `pqcrypto-kyber` 0.7 and HQC via
//! `pqcrypto-hqc`
//!
//! PQClean draws its randomness from the operating system; the caller's RNG
//! is not consulted.

use zkem_api::Error;

macro_rules! pqclean_backend {
    ($package:ident :: $level:ident) => {
        pub(super) mod $level {
            use super::backend_error;
            use pqcrypto_traits::kem::{
                Ciphertext as _, PublicKey as _, SecretKey as _, SharedSecret as _,
            };
            use std::panic::{catch_unwind, AssertUnwindSafe};
            use zkem_api::{Ciphertext, Error, PublicKey, Result, SecretKey, SharedSecret};
            use $package::$level as backend;

            pub(crate) fn keypair() -> (PublicKey, SecretKey) {
                let (pk, sk) = backend::keypair();
                (
                    PublicKey::from_slice(pk.as_bytes()),
                    SecretKey::from_slice(sk.as_bytes()),
                )
            }

            pub(crate) fn encapsulate(
                public_key: &PublicKey,
                context: &'static str,
            ) -> Result<(Ciphertext, SharedSecret)> {
                let pk = backend::PublicKey::from_bytes(public_key.as_bytes())
                    .map_err(|e| backend_error(context, e))?;
                let (ss, ct) = backend::encapsulate(&pk);
                Ok((
                    Ciphertext::from_slice(ct.as_bytes()),
                    SharedSecret::from_slice(ss.as_bytes()),
                ))
            }

            /// Kyber and HQC derive a rejection secret for a tampered ciphertext.
            /// HQC also returns a failure status, which the `pqcrypto` wrapper
            /// turns into a panic; that case surfaces as `KemOperationFailed`.
            pub(crate) fn decapsulate(
                secret_key: &SecretKey,
                ciphertext: &Ciphertext,
                context: &'static str,
            ) -> Result<SharedSecret> {
                let sk = backend::SecretKey::from_bytes(secret_key.as_bytes())
                    .map_err(|e| backend_error(context, e))?;
                let ct = backend::Ciphertext::from_bytes(ciphertext.as_bytes())
                    .map_err(|e| backend_error(context, e))?;
                let ss = catch_unwind(AssertUnwindSafe(|| backend::decapsulate(&ct, &sk)))
                    .map_err(|_| Error::KemOperationFailed {
                        context,
                        message: "ciphertext rejected by the backend".into(),
                    })?;
                Ok(SharedSecret::from_slice(ss.as_bytes()))
            }
        }
    };
}

pqclean_backend!(pqcrypto_kyber::kyber512);
pqclean_backend!(pqcrypto_kyber::kyber768);
pqclean_backend!(pqcrypto_kyber::kyber1024);
pqclean_backend!(pqcrypto_hqc::hqc128);
pqclean_backend!(pqcrypto_hqc::hqc192);
pqclean_backend!(pqcrypto_hqc::hqc256);

fn backend_error(context: &'static str, e: pqcrypto_traits::Error) -> Error {
    Error::KemOperationFailed {
        context,
        message: format!("{:?}", e),
    }
}
