//! Secret derivation for KEMs built on raw key agreement
//!
//! A raw Diffie-Hellman output is not a KEM shared secret: it is not bound to
//! the exchange that produced it. [`derive`] turns it into one with HKDF,
//! labelling the input keying material with the algorithm identifier and
//! binding the ciphertext and recipient public key into the expansion info.
//!
//! The [`hmac`] and [`hkdf`] helpers dispatch on [`HashAlgorithm`] and are
//! shared with the hybrid PRF chain.

use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use zeroize::Zeroize;
use zkem_api::error::validate;
use zkem_api::{Error, HashAlgorithm, Result};
use zkem_common::SecretVec;
use zkem_params::utils::kdf::{
    EAE_PRK_LABEL, KEM_CONTEXT_LABEL, LABEL_SEPARATOR, SHARED_SECRET_LABEL, ZRTP_KEM_LABEL,
};

/// Run `$body` with `$h` bound to the digest type selected by `$hash`
macro_rules! with_digest {
    ($hash:expr, $h:ident => $body:expr) => {
        match $hash {
            HashAlgorithm::Sha256 => {
                type $h = Sha256;
                $body
            }
            HashAlgorithm::Sha384 => {
                type $h = Sha384;
                $body
            }
            HashAlgorithm::Sha512 => {
                type $h = Sha512;
                $body
            }
        }
    };
}

/// Derive a KEM shared secret from a raw key-agreement secret.
///
/// ```text
/// ikm  = "ZRTPKEM" || 0x00 || algorithm_id || "eae_prk" || raw_secret
/// info = BE16(out_len) || "ZRTP-v1.1KEM" || 0x00 || algorithm_id
///        || "shared_secret" || ciphertext || public_key
/// ss   = HKDF(hash, salt = none, ikm, info, out_len)
/// ```
///
/// Deterministic: identical inputs always give the same output.
pub fn derive(
    hash: HashAlgorithm,
    raw_secret: &[u8],
    ciphertext: &[u8],
    public_key: &[u8],
    algorithm_id: u8,
    out_len: usize,
) -> Result<SecretVec> {
    let encoded_len = u16::try_from(out_len).map_err(|_| Error::InvalidParameter {
        context: "kdf::derive",
        message: format!("output length {} does not fit the 16-bit length field", out_len),
    })?;

    let mut ikm = SecretVec::with_capacity(
        ZRTP_KEM_LABEL.len() + 2 + EAE_PRK_LABEL.len() + raw_secret.len(),
    );
    ikm.extend_from_slice(ZRTP_KEM_LABEL);
    ikm.extend_from_slice(&[LABEL_SEPARATOR, algorithm_id]);
    ikm.extend_from_slice(EAE_PRK_LABEL);
    ikm.extend_from_slice(raw_secret);

    let mut info = Vec::with_capacity(
        2 + KEM_CONTEXT_LABEL.len()
            + 2
            + SHARED_SECRET_LABEL.len()
            + ciphertext.len()
            + public_key.len(),
    );
    info.extend_from_slice(&encoded_len.to_be_bytes());
    info.extend_from_slice(KEM_CONTEXT_LABEL);
    info.extend_from_slice(&[LABEL_SEPARATOR, algorithm_id]);
    info.extend_from_slice(SHARED_SECRET_LABEL);
    info.extend_from_slice(ciphertext);
    info.extend_from_slice(public_key);

    hkdf(hash, ikm.as_slice(), &info, out_len)
}

/// HKDF extract-then-expand with an absent salt.
///
/// Fails with `InvalidParameter` if `out_len` is zero or exceeds
/// 255 times the digest size.
pub fn hkdf(hash: HashAlgorithm, ikm: &[u8], info: &[u8], out_len: usize) -> Result<SecretVec> {
    validate::parameter(out_len > 0, "kdf::hkdf", "output length must be non-zero")?;
    validate::parameter(
        out_len <= 255 * hash.output_size(),
        "kdf::hkdf",
        "output length exceeds 255 hash blocks",
    )?;

    let mut okm = SecretVec::zeroed(out_len);
    with_digest!(hash, D => {
        Hkdf::<D>::new(None, ikm)
            .expand(info, okm.as_mut_slice())
            .map_err(|_| Error::InvalidParameter {
                context: "kdf::hkdf",
                message: "HKDF expansion rejected the output length".to_string(),
            })?
    });
    Ok(okm)
}

/// HMAC over `message` keyed with `key`; an empty key is valid.
pub fn hmac(hash: HashAlgorithm, key: &[u8], message: &[u8]) -> Result<SecretVec> {
    with_digest!(hash, D => {
        let mut mac = <Hmac<D> as Mac>::new_from_slice(key).map_err(|_| Error::InvalidParameter {
            context: "kdf::hmac",
            message: "HMAC rejected the key length".to_string(),
        })?;
        mac.update(message);
        let mut tag = mac.finalize().into_bytes();
        let out = SecretVec::from_slice(&tag);
        tag.as_mut_slice().zeroize();
        Ok(out)
    })
}
