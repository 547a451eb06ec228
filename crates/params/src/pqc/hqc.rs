//! Constants for the HQC code-based key encapsulation mechanism
//!
//! Sizes follow the 2023-04-30 HQC specification as packaged by PQClean.

use super::KemParams;

/// HQC shared secret size in bytes, identical for every level
pub const HQC_SS_SIZE: usize = 64;

/// HQC-128 sizes
pub const HQC128: KemParams = KemParams {
    public_key_size: 2249,
    secret_key_size: 2305,
    ciphertext_size: 4433,
    shared_secret_size: HQC_SS_SIZE,
};

/// HQC-192 sizes
pub const HQC192: KemParams = KemParams {
    public_key_size: 4522,
    secret_key_size: 4586,
    ciphertext_size: 8978,
    shared_secret_size: HQC_SS_SIZE,
};

/// HQC-256 sizes
pub const HQC256: KemParams = KemParams {
    public_key_size: 7245,
    secret_key_size: 7317,
    ciphertext_size: 14421,
    shared_secret_size: HQC_SS_SIZE,
};

/// Registry identifier of HQC-128
pub const HQC128_ALGORITHM_ID: u8 = 0x50;

/// Registry identifier of HQC-192
pub const HQC192_ALGORITHM_ID: u8 = 0x51;

/// Registry identifier of HQC-256
pub const HQC256_ALGORITHM_ID: u8 = 0x52;
