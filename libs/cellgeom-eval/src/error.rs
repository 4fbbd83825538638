//! # Evaluation Errors
//!
//! Error types for reference resolution and evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which catalog a reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceKind {
    /// Surface catalog.
    Surface,
    /// Cell catalog.
    Cell,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Surface => f.write_str("surface"),
            ReferenceKind::Cell => f.write_str("cell"),
        }
    }
}

/// A surface or cell number missing from its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{kind} {number} is not defined")]
pub struct UnboundReferenceError {
    /// The missing number.
    pub number: u32,
    /// Catalog it was looked up in.
    pub kind: ReferenceKind,
}

impl UnboundReferenceError {
    /// Missing surface.
    pub const fn surface(number: u32) -> Self {
        Self {
            number,
            kind: ReferenceKind::Surface,
        }
    }

    /// Missing cell.
    pub const fn cell(number: u32) -> Self {
        Self {
            number,
            kind: ReferenceKind::Cell,
        }
    }
}

/// An operation with no meaningful result for this geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported operation: {reason}")]
pub struct UnsupportedOperationError {
    /// Human-readable cause.
    pub reason: String,
}

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Reference not present in a catalog.
    #[error(transparent)]
    UnboundReference(#[from] UnboundReferenceError),

    /// Cyclic cell complement, excessive nesting, or unbounded complement.
    #[error(transparent)]
    UnsupportedOperation(#[from] UnsupportedOperationError),
}

impl EvalError {
    /// Create an unsupported-operation error.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedOperation(UnsupportedOperationError {
            reason: reason.into(),
        })
    }

    /// True for unbound references.
    pub fn is_unbound(&self) -> bool {
        matches!(self, Self::UnboundReference(_))
    }

    /// True for unsupported operations.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation(_))
    }
}

// =============================================================================
// TESTS
// =============================================================================
