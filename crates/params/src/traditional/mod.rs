//! Constants for traditional (elliptic curve) key agreement

pub mod ecdh;
