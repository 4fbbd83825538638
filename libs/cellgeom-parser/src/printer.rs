//! # Canonical Printer
//!
//! Renders a geometry tree back to text that parses to the same tree.
//! Intersection is a single space, union is ` : `, and parentheses appear only
//! where the tree shape differs from what the precedence rules would produce.
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_parser::{parse, to_text};
//!
//! let geometry = parse("( 1  :  2 )   -3").unwrap();
//! assert_eq!(to_text(&geometry), "(1 : 2) -3");
//! ```

use crate::ast::{Node, Sense};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use std::fmt::Write;

/// Canonical text for a node.
pub fn print_node(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match node {
        Node::Surface { number, sense } => {
            if *sense == Sense::Negative {
                out.push('-');
            }
            let _ = write!(out, "{number}");
        }
        Node::CellComplement { number } => {
            let _ = write!(out, "#{number}");
        }
        Node::Not { operand } => {
            out.push_str("#(");
            write_node(out, operand);
            out.push(')');
        }
        Node::And { left, right } => {
            write_grouped(out, left, matches!(**left, Node::Or { .. }));
            out.push(' ');
            write_grouped(out, right, matches!(**right, Node::Or { .. } | Node::And { .. }));
        }
        Node::Or { left, right } => {
            write_node(out, left);
            out.push_str(" : ");
            write_grouped(out, right, matches!(**right, Node::Or { .. }));
        }
    })
}

fn write_grouped(out: &mut String, node: &Node, parenthesize: bool) {
    if parenthesize {
        out.push('(');
        write_node(out, node);
        out.push(')');
    } else {
        write_node(out, node);
    }
}

// =============================================================================
// TESTS
// =============================================================================
