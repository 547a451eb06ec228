//! ML-KEM (FIPS 203) backend over the RustCrypto `ml-kem` crate

use kem::{Decapsulate, Encapsulate};
use ml_kem::{Ciphertext as MlKemCiphertext, Encoded, EncodedSizeUser, KemCore};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;
use zkem_api::{Ciphertext, Error, PublicKey, Result, SecretKey, SharedSecret};
use zkem_common::ZeroizeGuard;

pub(super) fn keypair<K: KemCore, R: CryptoRng + RngCore>(rng: &mut R) -> (PublicKey, SecretKey) {
    let (dk, ek) = K::generate(rng);
    let public_key = PublicKey::from_slice(&ek.as_bytes());

    let mut dk_bytes = dk.as_bytes();
    let dk_bytes = ZeroizeGuard::new(&mut dk_bytes[..]);
    (public_key, SecretKey::from_slice(&dk_bytes))
}

pub(super) fn encapsulate<K: KemCore, R: CryptoRng + RngCore>(
    rng: &mut R,
    public_key: &PublicKey,
    context: &'static str,
) -> Result<(Ciphertext, SharedSecret)> {
    let encoded = Encoded::<K::EncapsulationKey>::try_from(public_key.as_bytes())
        .map_err(|_| malformed(context, "encapsulation key"))?;
    let ek = K::EncapsulationKey::from_bytes(&encoded);

    let (ct, mut ss) = ek.encapsulate(rng).map_err(|e| Error::KemOperationFailed {
        context,
        message: format!("encapsulation failed: {:?}", e),
    })?;

    let ss = ZeroizeGuard::new(&mut ss[..]);
    Ok((Ciphertext::from_slice(&ct), SharedSecret::from_slice(&ss)))
}

/// Malformed but well-sized ciphertexts are implicitly rejected by ML-KEM:
/// they decapsulate to a pseudorandom secret instead of failing.
pub(super) fn decapsulate<K: KemCore>(
    secret_key: &SecretKey,
    ciphertext: &Ciphertext,
    context: &'static str,
) -> Result<SharedSecret> {
    let ct = MlKemCiphertext::<K>::try_from(ciphertext.as_bytes())
        .map_err(|_| malformed(context, "ciphertext"))?;

    let mut encoded = Encoded::<K::DecapsulationKey>::try_from(secret_key.as_bytes())
        .map_err(|_| malformed(context, "decapsulation key"))?;
    let dk = K::DecapsulationKey::from_bytes(&encoded);
    encoded[..].zeroize();

    let mut ss = dk.decapsulate(&ct).map_err(|e| Error::KemOperationFailed {
        context,
        message: format!("decapsulation failed: {:?}", e),
    })?;

    let ss = ZeroizeGuard::new(&mut ss[..]);
    Ok(SharedSecret::from_slice(&ss))
}

fn malformed(context: &'static str, what: &str) -> Error {
    Error::KemOperationFailed {
        context,
        message: format!("{} has the wrong encoded size", what),
    }
}
