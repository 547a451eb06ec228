//! Validation helpers returning the crate error type

use super::{Error, Result};

/// Validate that a buffer has exactly the expected length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::LengthMismatch {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a general parameter condition
pub fn parameter(condition: bool, context: &'static str, message: &str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            message: message.to_string(),
        });
    }
    Ok(())
}
