//! Labels of the ZRTP v1.1 KEM secret derivation
//!
//! Input keying material:
//! `ZRTP_KEM_LABEL || 0x00 || algorithm id || EAE_PRK_LABEL || raw secret`
//!
//! Expansion info:
//! `BE16(length) || KEM_CONTEXT_LABEL || 0x00 || algorithm id || SHARED_SECRET_LABEL || ct || pk`

/// Leading label of the input keying material
pub const ZRTP_KEM_LABEL: &[u8] = b"ZRTPKEM";

/// Label preceding the raw key-agreement output in the input keying material
pub const EAE_PRK_LABEL: &[u8] = b"eae_prk";

/// Protocol label of the expansion info
pub const KEM_CONTEXT_LABEL: &[u8] = b"ZRTP-v1.1KEM";

/// Label preceding ciphertext and public key in the expansion info
pub const SHARED_SECRET_LABEL: &[u8] = b"shared_secret";

/// Separator byte between a label and the algorithm id
pub const LABEL_SEPARATOR: u8 = 0x00;
