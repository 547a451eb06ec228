//! Constants for the Kyber (round 3) key encapsulation mechanism

use super::KemParams;

/// Kyber shared secret size in bytes, identical for every level
pub const KYBER_SS_SIZE: usize = 32;

/// Kyber-512 sizes
pub const KYBER512: KemParams = KemParams {
    public_key_size: 800,
    secret_key_size: 1632,
    ciphertext_size: 768,
    shared_secret_size: KYBER_SS_SIZE,
};

/// Kyber-768 sizes
pub const KYBER768: KemParams = KemParams {
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: KYBER_SS_SIZE,
};

/// Kyber-1024 sizes
pub const KYBER1024: KemParams = KemParams {
    public_key_size: 1568,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: KYBER_SS_SIZE,
};

/// Registry identifier of Kyber-512
pub const KYBER512_ALGORITHM_ID: u8 = 0x30;

/// Registry identifier of Kyber-768
pub const KYBER768_ALGORITHM_ID: u8 = 0x31;

/// Registry identifier of Kyber-1024
pub const KYBER1024_ALGORITHM_ID: u8 = 0x32;
