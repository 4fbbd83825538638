//! # Geometry Lexer
//!
//! Tokenizes a cell-geometry expression into integers, `#`, `:`, `(` and `)`.
//! Whitespace only separates tokens; the parser recovers adjacency from the
//! token spans.
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_parser::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("1 -2 : #3").unwrap();
//! assert_eq!(tokens.len(), 6);
//! assert_eq!(tokens[2].kind, TokenKind::Colon);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{ExplicitSign, Token, TokenKind};

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::span::{Position, Span};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Tokenize an expression.
///
/// ## Returns
///
/// Tokens ending with [`TokenKind::Eof`], or the error for the first
/// unrecognized character.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(source).tokenize()
}

// =============================================================================
// LEXER
// =============================================================================

/// Geometry lexer.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        loop {
            self.cursor.advance_while(char::is_whitespace);
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token()?;
        }

        let eof_pos = self.cursor.position();
        self.tokens.push(Token::new(TokenKind::Eof, Span::new(eof_pos, eof_pos), String::new()));

        Ok(self.tokens)
    }

    /// Scan a single token.
    fn scan_token(&mut self) -> Result<(), SyntaxError> {
        let start = self.cursor.position();
        let Some(c) = self.cursor.advance() else {
            return Ok(());
        };

        let kind = match c {
            '#' => TokenKind::Hash,
            ':' => TokenKind::Colon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '+' => return self.scan_signed(start, ExplicitSign::Plus, c),
            '-' => return self.scan_signed(start, ExplicitSign::Minus, c),
            '0'..='9' => return self.scan_integer(start, ExplicitSign::None),
            found => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnexpectedCharacter { found },
                    Span::new(start, self.cursor.position()),
                ))
            }
        };

        self.push(kind, start);
        Ok(())
    }

    /// Scan an integer after an explicit sign; the digit must follow at once.
    fn scan_signed(&mut self, start: Position, sign: ExplicitSign, c: char) -> Result<(), SyntaxError> {
        match self.cursor.peek() {
            Some('0'..='9') => {
                self.cursor.advance();
                self.scan_integer(start, sign)
            }
            _ => Err(SyntaxError::new(
                SyntaxErrorKind::DanglingSign { sign: c },
                Span::new(start, self.cursor.position()),
            )),
        }
    }

    /// Scan the remaining digits of an integer (first digit consumed).
    fn scan_integer(&mut self, start: Position, sign: ExplicitSign) -> Result<(), SyntaxError> {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        let text = self.cursor.slice_from(start);
        let digits = text.trim_start_matches(['+', '-']);
        let value = digits.parse::<u32>().map_err(|_| {
            SyntaxError::new(
                SyntaxErrorKind::InvalidNumber { text: text.to_string() },
                Span::new(start, self.cursor.position()),
            )
        })?;

        self.push(TokenKind::Integer { value, sign }, start);
        Ok(())
    }

    fn push(&mut self, kind: TokenKind, start: Position) {
        let end = self.cursor.position();
        let text = self.cursor.slice_from(start).to_string();
        self.tokens.push(Token::new(kind, Span::new(start, end), text));
    }
}

// =============================================================================
// TESTS
// =============================================================================
