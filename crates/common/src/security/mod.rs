//! Security primitives and memory safety utilities

pub mod compare;
pub mod secret;

pub use compare::SecureCompare;
pub use secret::{SecretBuffer, SecretVec, ZeroizeGuard};
