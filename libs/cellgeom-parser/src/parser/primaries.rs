//! # Factor Parsing
//!
//! Parses the tightest-binding level: surface references, `#n`, `#( ... )`
//! and parenthesized groups.
//!
//! ```text
//! factor = integer
//!        | "#" unsigned_integer
//!        | "#" "(" expression ")"
//!        | "(" expression ")"
//! ```
//!
//! `#` must touch its operand: `# 5` and `# (1)` are rejected.

use super::Parser;
use crate::ast::Node;
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::lexer::{ExplicitSign, Token, TokenKind};

const FACTOR: &str = "surface number, '#' or '('";

impl Parser {
    /// Parse a single factor.
    pub(super) fn parse_factor(&mut self) -> Result<Node, SyntaxError> {
        match self.peek_kind() {
            TokenKind::Integer { value, sign } => {
                let token = self.advance();
                check_nonzero(value, &token)?;
                Ok(Node::surface(value, sign.sense()))
            }
            TokenKind::Hash => self.parse_complement(),
            TokenKind::LParen => self.parse_group(),
            TokenKind::Colon | TokenKind::RParen | TokenKind::Eof => Err(self.unexpected(FACTOR)),
        }
    }

    /// Parse `#n` or `#( ... )`; the current token is `#`.
    fn parse_complement(&mut self) -> Result<Node, SyntaxError> {
        let hash = self.advance();
        let next = self.peek().clone();

        if !hash.span.touches(&next.span) {
            return Err(SyntaxError::new(SyntaxErrorKind::DanglingComplement, hash.span));
        }

        match next.kind {
            TokenKind::Integer { value, sign } => {
                if sign != ExplicitSign::None {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::SignedCellNumber { text: next.text.clone() },
                        hash.span.merge(&next.span),
                    ));
                }
                self.advance();
                check_nonzero(value, &next)?;
                Ok(Node::cell_complement(value))
            }
            TokenKind::LParen => Ok(Node::not(self.parse_group()?)),
            TokenKind::Hash | TokenKind::Colon | TokenKind::RParen | TokenKind::Eof => {
                Err(SyntaxError::new(SyntaxErrorKind::DanglingComplement, hash.span))
            }
        }
    }

    /// Parse `( expression )`; the current token is `(`.
    fn parse_group(&mut self) -> Result<Node, SyntaxError> {
        let open = self.advance();

        if self.check(TokenKind::RParen) {
            let close = self.peek().span;
            return Err(SyntaxError::new(SyntaxErrorKind::EmptyGroup, open.span.merge(&close)));
        }

        let inner = self.parse_expression()?;

        match self.peek_kind() {
            TokenKind::RParen => {
                self.advance();
                Ok(inner)
            }
            TokenKind::Eof => Err(SyntaxError::new(SyntaxErrorKind::UnclosedParenthesis, open.span)),
            _ => Err(self.unexpected("')'")),
        }
    }
}

fn check_nonzero(value: u32, token: &Token) -> Result<(), SyntaxError> {
    if value == 0 {
        Err(SyntaxError::new(SyntaxErrorKind::ZeroReference, token.span))
    } else {
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
