//! Common implementations and shared functionality for the zkem crates
//!
//! Every byte that is secret (private scalars, raw key-agreement output,
//! intermediate PRF chaining values, derived shared secrets) travels through
//! one of the containers defined here, which overwrite their contents with
//! zeros when dropped.

pub mod security;

pub use security::{SecretBuffer, SecretVec, SecureCompare, ZeroizeGuard};
