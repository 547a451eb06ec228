//! Hybrid Key Encapsulation Mechanisms (KEMs).
//!
//! [`HybridKem`] runs every component KEM in declared order, concatenates
//! their keys and ciphertexts without length prefixes, and folds the
//! component secrets through a [`NestedPrf`]:
//!
//! ```text
//! T_0   = HMAC(key = empty,   ss_0)
//! T_j   = HMAC(key = T_(j-1), ss_j)      j = 1..n-1
//! ss    = HMAC(key = T_(n-1), ct_0 || ct_1 || ... || ct_(n-1))
//! ```
//!
//! Component order is part of the protocol: both peers must use the same
//! list, otherwise the derived secrets silently differ.

mod combiner;
mod config;
mod engine;


pub use combiner::NestedPrf;
pub use config::HybridConfig;
pub use engine::HybridKem;
