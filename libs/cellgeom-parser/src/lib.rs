//! # Cell Geometry Parser
//!
//! Parses the boolean half-space expression that defines a simulation cell's
//! region and prints it back in canonical form.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Node → ParsedGeometry
//! ```
//!
//! ## Grammar
//!
//! - `n`, `+n`, `-n`: half-space of surface `n`
//! - adjacency: intersection
//! - `:`: union (loosest)
//! - `#n`: outside cell `n`; `#( ... )`: complement of a sub-expression
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_parser::{parse, to_text, Node};
//!
//! let geometry = parse("1 -2 : #3").unwrap();
//! assert!(matches!(geometry.root(), Node::Or { .. }));
//! assert_eq!(to_text(&geometry), "1 -2 : #3");
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! cellgeom-parser → cellgeom-eval → cellgeom-mesh
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod span;

pub use ast::{Node, ParsedGeometry, Reference, Sense};
pub use error::{SyntaxError, SyntaxErrorKind};
pub use span::{Position, Span, Spanned};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse a geometry expression.
///
/// ## Parameters
///
/// - `text`: Expression such as `"(1 : 2) -3"`
///
/// ## Returns
///
/// Parsed geometry whose `source_text` is the canonical form of `text`, or
/// the first syntax error
///
/// ## Example
///
/// ```rust
/// use cellgeom_parser::parse;
///
/// assert!(parse("#(1 2)").is_ok());
/// assert!(parse("1 ::").is_err());
/// ```
pub fn parse(text: &str) -> Result<ParsedGeometry, SyntaxError> {
    let tokens = lexer::tokenize(text)?;
    let root = parser::Parser::new(tokens).parse()?;
    Ok(ParsedGeometry::new(root))
}

/// Canonical text of a parsed geometry.
///
/// `parse(&to_text(g))` yields a geometry equal to `g`.
pub fn to_text(geometry: &ParsedGeometry) -> String {
    geometry.source_text().to_string()
}

// =============================================================================
// TESTS
// =============================================================================
