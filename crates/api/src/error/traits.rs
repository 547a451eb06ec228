//! Error handling traits

use super::types::{Error, Result};

/// Extension trait for Result types
pub trait ResultExt<T>: Sized {
    /// Attribute a failure to the hybrid component at `index`
    fn for_component(self, index: usize) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn for_component(self, index: usize) -> Result<T> {
        self.map_err(|e| Error::component(index, e))
    }
}
