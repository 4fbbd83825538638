//! # Mesh Errors
//!
//! Error types for solid construction.

use cellgeom_eval::{EvalError, UnboundReferenceError};
use thiserror::Error;

/// Errors that can occur while building a solid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Unbound reference, cyclic complement or unsupported operation
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Primitive parameters that do not describe a solid
    #[error("degenerate geometry: {message}")]
    Degenerate { message: String },

    /// Boolean operation produced invalid geometry
    #[error("boolean operation failed: {message}")]
    BooleanFailed { message: String },
}

impl From<UnboundReferenceError> for MeshError {
    fn from(err: UnboundReferenceError) -> Self {
        Self::Eval(err.into())
    }
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }

    /// Creates a boolean operation failed error.
    pub fn boolean_failed(message: impl Into<String>) -> Self {
        Self::BooleanFailed {
            message: message.into(),
        }
    }

    /// Creates an unsupported operation error.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::Eval(EvalError::unsupported(reason))
    }

    /// The evaluation error, if this is one.
    pub fn as_eval(&self) -> Option<&EvalError> {
        match self {
            Self::Eval(err) => Some(err),
            _ => None,
        }
    }

    /// True for an unsupported-operation error.
    pub fn is_unsupported(&self) -> bool {
        self.as_eval().is_some_and(EvalError::is_unsupported)
    }

    /// True for an unbound surface or cell reference.
    pub fn is_unbound(&self) -> bool {
        self.as_eval().is_some_and(EvalError::is_unbound)
    }
}

// =============================================================================
// TESTS
// =============================================================================
