//! Error type definitions for KEM operations

use thiserror::Error as ThisError;

/// Primary error type for every zkem operation
///
/// All variants describe local, synchronous failures. None of them is
/// retried internally.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Unknown algorithm tag, or an algorithm whose backend is not compiled in
    #[error("{context}: unsupported algorithm {algorithm}")]
    UnsupportedAlgorithm {
        context: &'static str,
        algorithm: String,
    },

    /// A buffer does not have the fixed size required by the algorithm
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An operation was invoked before the state it depends on was set
    #[error("{context}: precondition violated, {requirement}")]
    PreconditionViolated {
        context: &'static str,
        requirement: &'static str,
    },

    /// The curve computation rejected its input (e.g. a low-order peer point)
    #[error("{context}: key agreement failed")]
    KeyAgreementFailed { context: &'static str },

    /// The external KEM library reported a failure
    #[error("{context}: KEM operation failed: {message}")]
    KemOperationFailed {
        context: &'static str,
        message: String,
    },

    /// A component of a hybrid KEM failed; `index` is its position in the list
    #[error("component KEM #{index} failed: {source}")]
    ComponentKemFailed { index: usize, source: Box<Error> },

    /// Invalid configuration or parameter
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Wrap an error raised by the component at `index` of a hybrid KEM
    pub fn component(index: usize, cause: Error) -> Self {
        Self::ComponentKemFailed {
            index,
            source: Box::new(cause),
        }
    }

    /// Shorthand for an [`Error::UnsupportedAlgorithm`] built from anything printable
    pub fn unsupported(context: &'static str, algorithm: impl core::fmt::Display) -> Self {
        Self::UnsupportedAlgorithm {
            context,
            algorithm: algorithm.to_string(),
        }
    }

    /// Returns true when this error reports a rejected key agreement, looking
    /// through any component wrapping.
    pub fn is_key_agreement_failure(&self) -> bool {
        match self {
            Self::KeyAgreementFailed { .. } => true,
            Self::ComponentKemFailed { source, .. } => source.is_key_agreement_failure(),
            _ => false,
        }
    }
}
