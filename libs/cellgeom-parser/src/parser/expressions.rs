//! # Expression Parsing
//!
//! Union and intersection levels of the grammar.
//!
//! ## Precedence
//!
//! | Precedence | Operator | Associativity |
//! |------------|----------|---------------|
//! | 1 | `:` (union) | Left |
//! | 2 | adjacency (intersection) | Left |
//! | 3 | `#` (complement) | Right, one factor |
//!
//! ```text
//! expression = term { ":" term }
//! term       = factor { factor }
//! ```

use super::Parser;
use crate::ast::Node;
use crate::error::SyntaxError;
use crate::lexer::TokenKind;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};

impl Parser {
    /// Parse a union of terms.
    pub(super) fn parse_expression(&mut self) -> Result<Node, SyntaxError> {
        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let mut left = self.parse_term()?;
            while self.match_token(TokenKind::Colon) {
                let right = self.parse_term()?;
                left = Node::or(left, right);
            }
            Ok(left)
        })
    }

    /// Parse adjacent factors as an intersection.
    ///
    /// Consumes factors until `:`, `)` or end of input.
    fn parse_term(&mut self) -> Result<Node, SyntaxError> {
        let mut left = self.parse_factor()?;
        while self.peek_kind().starts_factor() {
            let right = self.parse_factor()?;
            left = Node::and(left, right);
        }
        Ok(left)
    }
}

// =============================================================================
// TESTS
// =============================================================================
