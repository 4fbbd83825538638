//! # Cell Visit Guard
//!
//! Tracks the chain of cells being expanded through `#n` so that both the
//! predicate evaluator and the solid builder reject cyclic complements.
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_eval::{EvalError, VisitGuard};
//!
//! let mut guard = VisitGuard::new();
//! let result: Result<(), EvalError> = guard.visit(1, |guard| guard.visit(1, |_| Ok(())));
//! assert!(result.unwrap_err().is_unsupported());
//! ```

use crate::error::EvalError;
use config::constants::MAX_CELL_DEPTH;
use tracing::debug;

/// Cells currently being expanded, outermost first.
#[derive(Debug, Clone)]
pub struct VisitGuard {
    visiting: Vec<u32>,
    max_depth: usize,
}

impl VisitGuard {
    /// Guard with the default depth limit.
    pub fn new() -> Self {
        Self::with_max_depth(MAX_CELL_DEPTH)
    }

    /// Guard with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            visiting: Vec::new(),
            max_depth,
        }
    }

    /// Number of cells currently being expanded.
    pub fn depth(&self) -> usize {
        self.visiting.len()
    }

    /// True if `cell` is on the current chain.
    pub fn is_visiting(&self, cell: u32) -> bool {
        self.visiting.contains(&cell)
    }

    /// Run `f` with `cell` pushed onto the chain.
    ///
    /// ## Returns
    ///
    /// `f`'s result, or an unsupported-operation error if `cell` is already
    /// being expanded or the depth limit is reached. The chain is restored
    /// before returning.
    pub fn visit<T, E>(&mut self, cell: u32, f: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E>
    where
        E: From<EvalError>,
    {
        if self.is_visiting(cell) {
            let chain = self.describe_cycle(cell);
            debug!(cell, %chain, "cyclic cell complement");
            return Err(EvalError::unsupported(format!("cyclic cell complement: {chain}")).into());
        }
        if self.visiting.len() >= self.max_depth {
            debug!(cell, depth = self.visiting.len(), "cell complement nesting limit reached");
            return Err(EvalError::unsupported(format!(
                "cell complement nesting deeper than {} at cell {cell}",
                self.max_depth
            ))
            .into());
        }

        self.visiting.push(cell);
        let result = f(self);
        self.visiting.pop();
        result
    }

    fn describe_cycle(&self, cell: u32) -> String {
        let start = self.visiting.iter().position(|&c| c == cell).unwrap_or(0);
        let mut parts: Vec<String> = self.visiting[start..].iter().map(|c| c.to_string()).collect();
        parts.push(cell.to_string());
        parts.join(" -> ")
    }
}

impl Default for VisitGuard {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
