//! Constant-time comparison

use subtle::{Choice, ConstantTimeEq};

/// Trait for types that can be compared without data-dependent timing
pub trait SecureCompare {
    /// Compare two values in constant time
    fn secure_eq(&self, other: &Self) -> bool {
        bool::from(self.secure_cmp(other))
    }

    /// Compare two values and return a constant-time choice
    fn secure_cmp(&self, other: &Self) -> Choice;
}

impl SecureCompare for [u8] {
    /// Lengths are public; only the contents are compared in constant time.
    fn secure_cmp(&self, other: &Self) -> Choice {
        if self.len() != other.len() {
            return Choice::from(0);
        }
        self.ct_eq(other)
    }
}

impl<const N: usize> SecureCompare for [u8; N] {
    fn secure_cmp(&self, other: &Self) -> Choice {
        self.ct_eq(other)
    }
}
