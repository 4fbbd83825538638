//! # Geometry AST
//!
//! Immutable expression tree for a cell's region.
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_parser::ast::{Node, ParsedGeometry, Sense};
//!
//! let root = Node::and(Node::surface(1, Sense::Positive), Node::surface(2, Sense::Negative));
//! let geometry = ParsedGeometry::new(root);
//! assert_eq!(geometry.source_text(), "1 -2");
//! ```

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem;

// =============================================================================
// SENSE
// =============================================================================

/// Which side of a surface a reference selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sense {
    /// `n` or `+n`: where the surface function is `>= 0`.
    Positive,
    /// `-n`: where the surface function is `< 0`.
    Negative,
}

impl Sense {
    /// The other side.
    pub const fn flip(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }

    /// True for [`Sense::Positive`].
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
}

// =============================================================================
// NODE
// =============================================================================

/// Expression node.
///
/// Leaves reference surfaces or cells by number (never zero). The tree is
/// finite and acyclic; cell references are only followed at evaluation time.
///
/// Dropping a node frees its subtree iteratively, so long intersection
/// chains never exhaust the stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Half-space of one surface.
    Surface {
        /// Surface number.
        number: u32,
        /// Selected side.
        sense: Sense,
    },
    /// Everything outside cell `number` (`#n`).
    CellComplement {
        /// Cell number.
        number: u32,
    },
    /// Complement of a sub-expression (`#( ... )`).
    Not {
        /// Complemented expression.
        operand: Box<Node>,
    },
    /// Intersection (adjacent factors).
    And {
        /// Left operand.
        left: Box<Node>,
        /// Right operand.
        right: Box<Node>,
    },
    /// Union (`:`).
    Or {
        /// Left operand.
        left: Box<Node>,
        /// Right operand.
        right: Box<Node>,
    },
}

impl Node {
    /// Surface half-space leaf.
    pub fn surface(number: u32, sense: Sense) -> Self {
        Self::Surface { number, sense }
    }

    /// Cell complement leaf.
    pub fn cell_complement(number: u32) -> Self {
        Self::CellComplement { number }
    }

    /// Expression complement.
    pub fn not(operand: Node) -> Self {
        Self::Not {
            operand: Box::new(operand),
        }
    }

    /// Intersection of two nodes.
    pub fn and(left: Node, right: Node) -> Self {
        Self::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Union of two nodes.
    pub fn or(left: Node, right: Node) -> Self {
        Self::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// True for surface and cell-complement leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Surface { .. } | Self::CellComplement { .. })
    }

    /// Every leaf reference in depth-first, left-to-right order, duplicates
    /// included.
    pub fn references(&self) -> Vec<Reference> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Surface { number, sense } => out.push(Reference::Surface {
                    number: *number,
                    sense: *sense,
                }),
                Node::CellComplement { number } => out.push(Reference::Cell { number: *number }),
                Node::Not { operand } => stack.push(operand),
                Node::And { left, right } | Node::Or { left, right } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            match node {
                Node::Surface { .. } | Node::CellComplement { .. } => {}
                Node::Not { operand } => stack.push(operand),
                Node::And { left, right } | Node::Or { left, right } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        count
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        detach_children(self, &mut stack);
        while let Some(mut node) = stack.pop() {
            detach_children(&mut node, &mut stack);
        }
    }
}

/// Move non-leaf children onto `stack`, leaving leaves in their place.
fn detach_children(node: &mut Node, stack: &mut Vec<Node>) {
    let mut detach = |child: &mut Box<Node>| {
        if !child.is_leaf() {
            stack.push(mem::replace(&mut **child, Node::CellComplement { number: 0 }));
        }
    };
    match node {
        Node::Surface { .. } | Node::CellComplement { .. } => {}
        Node::Not { operand } => detach(operand),
        Node::And { left, right } | Node::Or { left, right } => {
            detach(left);
            detach(right);
        }
    }
}

/// A leaf reference to an external catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reference {
    /// Surface half-space.
    Surface {
        /// Surface number.
        number: u32,
        /// Selected side.
        sense: Sense,
    },
    /// Cell used by `#n`.
    Cell {
        /// Cell number.
        number: u32,
    },
}

// =============================================================================
// PARSED GEOMETRY
// =============================================================================

/// A parsed cell region: the tree plus its canonical text.
///
/// Immutable once built and safe to share across threads.
///
/// Deserialization checks that every number is non-zero and re-derives the
/// canonical text from the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GeometryRecord")]
pub struct ParsedGeometry {
    root: Node,
    source_text: String,
}

/// Serialized form of [`ParsedGeometry`] before validation. The stored
/// `source_text` is ignored.
#[derive(Deserialize)]
struct GeometryRecord {
    root: Node,
}

impl TryFrom<GeometryRecord> for ParsedGeometry {
    type Error = SyntaxError;

    fn try_from(record: GeometryRecord) -> Result<Self, Self::Error> {
        let has_zero = record.root.references().iter().any(|reference| match reference {
            Reference::Surface { number, .. } | Reference::Cell { number } => *number == 0,
        });
        if has_zero {
            return Err(SyntaxError::new(SyntaxErrorKind::ZeroReference, Span::zero()));
        }
        Ok(Self::new(record.root))
    }
}

impl ParsedGeometry {
    /// Wrap a tree, deriving its canonical text.
    pub fn new(root: Node) -> Self {
        let source_text = crate::printer::print_node(&root);
        Self { root, source_text }
    }

    /// Root expression.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Canonical text of the expression.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Consume and return the root.
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Surface numbers in first-occurrence order, without duplicates.
    pub fn surface_numbers(&self) -> Vec<u32> {
        let mut numbers = Vec::new();
        for reference in self.root.references() {
            if let Reference::Surface { number, .. } = reference {
                if !numbers.contains(&number) {
                    numbers.push(number);
                }
            }
        }
        numbers
    }

    /// Cell numbers used by `#n`, in first-occurrence order, without duplicates.
    pub fn cell_numbers(&self) -> Vec<u32> {
        let mut numbers = Vec::new();
        for reference in self.root.references() {
            if let Reference::Cell { number } = reference {
                if !numbers.contains(&number) {
                    numbers.push(number);
                }
            }
        }
        numbers
    }
}

impl fmt::Display for ParsedGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source_text)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        // (1 : -2) #7 1 #(3)
        Node::and(
            Node::and(
                Node::and(
                    Node::or(Node::surface(1, Sense::Positive), Node::surface(2, Sense::Negative)),
                    Node::cell_complement(7),
                ),
                Node::surface(1, Sense::Positive),
            ),
            Node::not(Node::surface(3, Sense::Positive)),
        )
    }

    #[test]
    fn test_references_order() {
        let refs = sample().references();
        assert_eq!(refs.len(), 5);
        assert_eq!(refs[0], Reference::Surface { number: 1, sense: Sense::Positive });
        assert_eq!(refs[1], Reference::Surface { number: 2, sense: Sense::Negative });
        assert_eq!(refs[2], Reference::Cell { number: 7 });
        assert_eq!(refs[4], Reference::Surface { number: 3, sense: Sense::Positive });
    }

    #[test]
    fn test_reference_queries_dedup() {
        let geometry = ParsedGeometry::new(sample());
        assert_eq!(geometry.surface_numbers(), vec![1, 2, 3]);
        assert_eq!(geometry.cell_numbers(), vec![7]);
    }

    #[test]
    fn test_node_count() {
        assert_eq!(Node::surface(1, Sense::Positive).node_count(), 1);
        assert_eq!(sample().node_count(), 10);
    }

    #[test]
    fn test_sense_flip() {
        assert_eq!(Sense::Positive.flip(), Sense::Negative);
        assert!(!Sense::Negative.is_positive());
    }

    #[test]
    fn test_display_is_canonical_text() {
        let geometry = ParsedGeometry::new(sample());
        assert_eq!(geometry.to_string(), geometry.source_text());
    }

    #[test]
    fn test_deserialize_rederives_text() {
        let json = r#"{"root":{"type":"Surface","number":4,"sense":"Negative"},"source_text":"1 2"}"#;
        let geometry: ParsedGeometry = serde_json::from_str(json).unwrap();
        assert_eq!(geometry.source_text(), "-4");
    }

    #[test]
    fn test_deserialize_rejects_zero_number() {
        let json = r#"{"root":{"type":"And","left":{"type":"Surface","number":1,"sense":"Positive"},"right":{"type":"CellComplement","number":0}},"source_text":"1 #0"}"#;
        let result: Result<ParsedGeometry, _> = serde_json::from_str(json);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("0 is not a valid surface or cell number"));
    }

    #[test]
    fn test_drop_long_intersection_chain() {
        let mut root = Node::surface(1, Sense::Positive);
        for n in 0..100_000u32 {
            root = Node::and(root, Node::surface(n % 7 + 1, Sense::Negative));
        }
        assert_eq!(root.node_count(), 200_001);
        drop(root);
    }

    #[test]
    fn test_serde_roundtrip() {
        let geometry = ParsedGeometry::new(sample());
        let json = serde_json::to_string(&geometry).unwrap();
        let back: ParsedGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, geometry);
    }
}
