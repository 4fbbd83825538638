//! # Syntax Errors
//!
//! Error type for the geometry tokenizer and parser.
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_parser::error::SyntaxError;
//!
//! let error = SyntaxError::unexpected_token(")", "surface number");
//! println!("{}", error);
//! ```

use crate::span::Span;
use thiserror::Error;

// =============================================================================
// SYNTAX ERROR
// =============================================================================

/// A malformed geometry expression, with the location of the first problem.
///
/// Raised at parse time only and never recovered from: the parser stops at the
/// first error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {}", span.start.byte)]
pub struct SyntaxError {
    /// Error kind with details.
    pub kind: SyntaxErrorKind,
    /// Source location of error.
    pub span: Span,
}

impl SyntaxError {
    /// Create a new syntax error.
    pub const fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create unexpected token error.
    pub fn unexpected_token(found: &str, expected: &str) -> Self {
        Self::new(
            SyntaxErrorKind::UnexpectedToken {
                found: found.to_string(),
                expected: expected.to_string(),
            },
            Span::zero(),
        )
    }

    /// Create unexpected end of input error.
    pub fn unexpected_eof(expected: &str) -> Self {
        Self::new(
            SyntaxErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            Span::zero(),
        )
    }

    /// Replace the span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Byte offset of the offending input.
    pub fn position(&self) -> usize {
        self.span.start.byte
    }

    /// Human-readable description without the location suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

// =============================================================================
// SYNTAX ERROR KIND
// =============================================================================

/// Kinds of syntax errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// Nothing but whitespace was supplied.
    #[error("empty geometry expression")]
    EmptyInput,

    /// A character outside the geometry alphabet.
    #[error("unexpected character '{found}'")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
    },

    /// `+` or `-` not immediately followed by a digit.
    #[error("sign '{sign}' must be followed by a number")]
    DanglingSign {
        /// The sign character.
        sign: char,
    },

    /// A number too large for a surface or cell designator.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// Surface or cell number zero.
    #[error("0 is not a valid surface or cell number")]
    ZeroReference,

    /// `#` not immediately followed by a cell number or `(`.
    #[error("'#' must be immediately followed by a cell number or '('")]
    DanglingComplement,

    /// `#` applied to a signed number such as `#-5`.
    #[error("cell number '{text}' after '#' must be unsigned")]
    SignedCellNumber {
        /// The signed text.
        text: String,
    },

    /// `()` or `#()`.
    #[error("empty parenthesized group")]
    EmptyGroup,

    /// A `(` without its `)`.
    #[error("unclosed '('")]
    UnclosedParenthesis,

    /// Found unexpected token.
    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken {
        /// Token that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// Input ended too early.
    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_display() {
        let error = SyntaxError::unexpected_token(")", "surface number");
        let msg = format!("{}", error);
        assert!(msg.contains("unexpected token ')'"));
        assert!(msg.contains("surface number"));
    }

    #[test]
    fn test_unexpected_eof_display() {
        let error = SyntaxError::unexpected_eof("')'");
        assert!(error.message().contains("unexpected end of expression"));
    }

    #[test]
    fn test_error_with_span() {
        let error = SyntaxError::unexpected_token("x", "y").with_span(Span::from_bytes(10, 11));
        assert_eq!(error.position(), 10);
        assert!(error.to_string().ends_with("at byte 10"));
    }
}
