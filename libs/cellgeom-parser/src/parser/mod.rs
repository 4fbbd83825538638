//! # Geometry Parser
//!
//! Recursive descent parser for cell-geometry expressions.
//! Produces the immutable [`Node`] tree; performs no catalog lookups.
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_parser::lexer::tokenize;
//! use cellgeom_parser::parser::Parser;
//!
//! let tokens = tokenize("1 -2 : 3").unwrap();
//! let root = Parser::new(tokens).parse().unwrap();
//! assert!(!root.is_leaf());
//! ```

mod expressions;
mod primaries;

use crate::ast::Node;
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::span::Span;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser over a token stream.
///
/// Stops at the first error.
pub struct Parser {
    /// Token stream.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Returned once the stream is exhausted.
    eof: Token,
}

impl Parser {
    /// Create a new parser.
    ///
    /// ## Parameters
    ///
    /// - `tokens`: Tokens from the lexer
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map(|t| t.span.end).unwrap_or_default();
        Self {
            tokens,
            current: 0,
            eof: Token::new(TokenKind::Eof, Span::new(end, end), String::new()),
        }
    }

    /// Parse the whole token stream as one expression.
    ///
    /// ## Returns
    ///
    /// Root node, or the first syntax error
    pub fn parse(&mut self) -> Result<Node, SyntaxError> {
        if self.is_at_end() {
            return Err(SyntaxError::new(SyntaxErrorKind::EmptyInput, self.peek().span));
        }

        let root = self.parse_expression()?;

        if !self.is_at_end() {
            return Err(self.unexpected("end of expression"));
        }
        Ok(root)
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token.
    fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.eof)
    }

    /// Get current token kind.
    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Check if current token matches kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Check if at end of input.
    fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Advance to next token.
    ///
    /// ## Returns
    ///
    /// The token that was consumed
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Try to consume token if it matches.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Error for the current token when `expected` was wanted.
    fn unexpected(&self, expected: &str) -> SyntaxError {
        let token = self.peek();
        if token.is_eof() {
            SyntaxError::unexpected_eof(expected).with_span(token.span)
        } else {
            SyntaxError::unexpected_token(&token.text, expected).with_span(token.span)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Sense;
    use crate::lexer::tokenize;

    fn parse_str(source: &str) -> Result<Node, SyntaxError> {
        Parser::new(tokenize(source)?).parse()
    }

    fn s(n: u32) -> Node {
        Node::surface(n, Sense::Positive)
    }

    #[test]
    fn test_parse_single_surface() {
        assert_eq!(parse_str("7").unwrap(), s(7));
        assert_eq!(parse_str("+7").unwrap(), s(7));
        assert_eq!(parse_str("-7").unwrap(), Node::surface(7, Sense::Negative));
    }

    #[test]
    fn test_parse_empty_token_stream() {
        let err = Parser::new(Vec::new()).parse().unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::EmptyInput);
    }

    #[test]
    fn test_trailing_rparen() {
        let err = parse_str("1 2)").unwrap_err();
        assert!(matches!(err.kind, SyntaxErrorKind::UnexpectedToken { .. }));
        assert_eq!(err.position(), 3);
    }

    #[test]
    fn test_union_is_left_associative() {
        assert_eq!(parse_str("1:2:3").unwrap(), Node::or(Node::or(s(1), s(2)), s(3)));
    }
}
