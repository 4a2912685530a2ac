//! Error types for pathtrace-core
//!
//! Navigation itself never fails: absent keys are reported as missing values,
//! exactly like direct access on the underlying document. The only failure is
//! handing a non-composite root to [`wrap`](crate::wrap).

use thiserror::Error;

use crate::traits::Shape;

/// Errors raised while creating tracked views
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The root handed to `wrap` was a scalar or null
    #[error("Cannot track paths through a {shape} root: expected an object or array")]
    NotComposite {
        /// Shape of the rejected root value
        shape: Shape,
    },
}

/// Result alias used throughout pathtrace-core
pub type Result<T> = core::result::Result<T, PathError>;
