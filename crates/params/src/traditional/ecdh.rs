//! Constants for Elliptic Curve Diffie-Hellman on the RFC 7748 curves

/// Registry identifier of X25519
pub const X25519_ALGORITHM_ID: u8 = 0x20;

/// Registry identifier of X448
pub const X448_ALGORITHM_ID: u8 = 0x21;

/// Size of an X25519 point coordinate (public key and raw shared secret) in bytes
pub const X25519_POINT_SIZE: usize = 32;

/// Size of an X25519 scalar in bytes
pub const X25519_SCALAR_SIZE: usize = 32;

/// Size of an X448 point coordinate (public key and raw shared secret) in bytes
pub const X448_POINT_SIZE: usize = 56;

/// Size of an X448 scalar in bytes
pub const X448_SCALAR_SIZE: usize = 56;
