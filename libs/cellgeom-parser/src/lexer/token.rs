//! # Tokens
//!
//! Token types for the geometry lexer.
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_parser::lexer::{ExplicitSign, Token, TokenKind};
//! use cellgeom_parser::span::Span;
//!
//! let kind = TokenKind::Integer { value: 12, sign: ExplicitSign::Minus };
//! let token = Token::new(kind, Span::from_bytes(0, 3), "-12".to_string());
//! assert!(token.kind.is_integer());
//! ```

use crate::ast::Sense;
use crate::span::{Span, Spanned};

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Token text.
    pub text: String,
}

impl Token {
    /// Create a new token.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Token type
    /// - `span`: Source location
    /// - `text`: Token text
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    /// Check if token is EOF.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// EXPLICIT SIGN
// =============================================================================

/// Sign written in front of an integer, if any.
///
/// `+5` and `5` select the same half-space but only the unsigned form is a
/// valid cell number after `#`, so the lexer keeps the distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplicitSign {
    /// Leading `+`.
    Plus,
    /// Leading `-`.
    Minus,
    /// No sign.
    None,
}

impl ExplicitSign {
    /// Half-space selected by this sign.
    pub const fn sense(self) -> Sense {
        match self {
            Self::Minus => Sense::Negative,
            Self::Plus | Self::None => Sense::Positive,
        }
    }

    /// True when the integer was written without a sign.
    pub const fn is_unsigned(self) -> bool {
        matches!(self, Self::None)
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer like `7`, `+7` or `-7`.
    Integer {
        /// Magnitude.
        value: u32,
        /// Sign as written.
        sign: ExplicitSign,
    },
    /// `#`
    Hash,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Check if this is an integer token.
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer { .. })
    }

    /// True for tokens that can start a factor.
    pub const fn starts_factor(&self) -> bool {
        matches!(self, Self::Integer { .. } | Self::Hash | Self::LParen)
    }

    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Integer { .. } => "number",
            Self::Hash => "#",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Eof => "end of expression",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_sense() {
        assert_eq!(ExplicitSign::Plus.sense(), Sense::Positive);
        assert_eq!(ExplicitSign::None.sense(), Sense::Positive);
        assert_eq!(ExplicitSign::Minus.sense(), Sense::Negative);
        assert!(ExplicitSign::None.is_unsigned());
        assert!(!ExplicitSign::Plus.is_unsigned());
    }

    #[test]
    fn test_starts_factor() {
        assert!(TokenKind::Hash.starts_factor());
        assert!(TokenKind::LParen.starts_factor());
        assert!(!TokenKind::Colon.starts_factor());
        assert!(!TokenKind::Eof.starts_factor());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(TokenKind::LParen.display(), "(");
        assert_eq!(TokenKind::Eof.display(), "end of expression");
    }
}
