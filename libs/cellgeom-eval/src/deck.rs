//! # Deck Registry
//!
//! Numbered surfaces and cells of one input deck. Cells may be added before
//! the cells they complement; call [`Deck::resolve_all`] once everything is in.
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_eval::{Deck, surfaces::SurfaceKind};
//! use glam::DVec3;
//!
//! let mut deck = Deck::new();
//! deck.add_surface(1, SurfaceKind::sphere(DVec3::ZERO, 5.0));
//! deck.add_cell(10, "-1").unwrap();
//! deck.add_cell(20, "#10").unwrap();
//! deck.resolve_all().unwrap();
//!
//! assert_eq!(deck.locate(DVec3::ZERO).unwrap(), Some(10));
//! assert_eq!(deck.locate(DVec3::X * 9.0).unwrap(), Some(20));
//! ```

use crate::catalog::{CellCatalog, ImplicitSurface, SurfaceCatalog};
use crate::error::{EvalError, UnboundReferenceError};
use crate::predicate::contains;
use crate::resolution::check_references;
use crate::surfaces::SurfaceKind;
use crate::Point3;
use cellgeom_parser::{parse, ParsedGeometry, SyntaxError};
use std::collections::BTreeMap;
use tracing::debug;

/// Surfaces and cells by number, iterated in ascending order.
#[derive(Debug, Clone)]
pub struct Deck<T = SurfaceKind> {
    surfaces: BTreeMap<u32, T>,
    cells: BTreeMap<u32, ParsedGeometry>,
}

impl<T> Deck<T> {
    /// Empty deck.
    pub fn new() -> Self {
        Self {
            surfaces: BTreeMap::new(),
            cells: BTreeMap::new(),
        }
    }

    /// Add or replace a surface, returning the previous one.
    pub fn add_surface(&mut self, number: u32, surface: T) -> Option<T> {
        self.surfaces.insert(number, surface)
    }

    /// Parse and add or replace a cell.
    ///
    /// References are not checked here.
    pub fn add_cell(&mut self, number: u32, text: &str) -> Result<Option<ParsedGeometry>, SyntaxError> {
        let geometry = parse(text)?;
        debug!(cell = number, geometry = %geometry, "cell added");
        Ok(self.insert_cell(number, geometry))
    }

    /// Add or replace an already-parsed cell.
    pub fn insert_cell(&mut self, number: u32, geometry: ParsedGeometry) -> Option<ParsedGeometry> {
        self.cells.insert(number, geometry)
    }

    /// Surface numbers in ascending order.
    pub fn surface_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.surfaces.keys().copied()
    }

    /// Cell numbers in ascending order.
    pub fn cell_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.keys().copied()
    }

    /// Cells with their geometry, in ascending order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, &ParsedGeometry)> + '_ {
        self.cells.iter().map(|(&number, geometry)| (number, geometry))
    }

    /// Check the references of every cell in ascending cell order.
    pub fn resolve_all(&self) -> Result<(), UnboundReferenceError> {
        for (number, geometry) in &self.cells {
            check_references(geometry.root(), &self.surfaces, &self.cells).map_err(|err| {
                debug!(cell = number, %err, "unresolved reference");
                err
            })?;
        }
        Ok(())
    }
}

impl<T: ImplicitSurface> Deck<T> {
    /// True if `point` lies in cell `number`.
    pub fn cell_contains(&self, number: u32, point: Point3) -> Result<bool, EvalError> {
        let geometry = self.cells.get(&number).ok_or(UnboundReferenceError::cell(number))?;
        contains(geometry, point, &self.surfaces, &self.cells)
    }

    /// Lowest-numbered cell containing `point`, if any.
    pub fn locate(&self, point: Point3) -> Result<Option<u32>, EvalError> {
        for (&number, geometry) in &self.cells {
            if contains(geometry, point, &self.surfaces, &self.cells)? {
                return Ok(Some(number));
            }
        }
        Ok(None)
    }
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SurfaceCatalog for Deck<T> {
    type Surface = T;

    fn surface(&self, number: u32) -> Option<&T> {
        self.surfaces.get(&number)
    }
}

impl<T> CellCatalog for Deck<T> {
    fn cell(&self, number: u32) -> Option<&ParsedGeometry> {
        self.cells.get(&number)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReferenceKind;
    use crate::surfaces::Axis;
    use glam::DVec3;

    fn slab_deck() -> Deck {
        let mut deck = Deck::new();
        deck.add_surface(1, SurfaceKind::axis_plane(Axis::X, 0.0));
        deck.add_surface(2, SurfaceKind::axis_plane(Axis::X, 10.0));
        deck.add_cell(1, "1 -2").unwrap();
        deck.add_cell(2, "-1").unwrap();
        deck.add_cell(3, "2").unwrap();
        deck
    }

    #[test]
    fn test_locate() {
        let deck = slab_deck();
        assert_eq!(deck.locate(DVec3::new(5.0, 0.0, 0.0)).unwrap(), Some(1));
        assert_eq!(deck.locate(DVec3::new(-5.0, 0.0, 0.0)).unwrap(), Some(2));
        assert_eq!(deck.locate(DVec3::new(15.0, 0.0, 0.0)).unwrap(), Some(3));
        // x = 0 lies on surface 1: positive side, so cell 1
        assert_eq!(deck.locate(DVec3::ZERO).unwrap(), Some(1));
    }

    #[test]
    fn test_forward_reference_then_resolve() {
        let mut deck: Deck = Deck::new();
        deck.add_cell(1, "#2").unwrap();
        let err = deck.resolve_all().unwrap_err();
        assert_eq!(err.kind, ReferenceKind::Cell);
        deck.add_cell(2, "3").unwrap();
        assert_eq!(deck.resolve_all().unwrap_err(), UnboundReferenceError::surface(3));
        deck.add_surface(3, SurfaceKind::sphere(DVec3::ZERO, 1.0));
        assert!(deck.resolve_all().is_ok());
    }

    #[test]
    fn test_resolve_reports_lowest_cell_first() {
        let mut deck: Deck = Deck::new();
        deck.add_cell(9, "7").unwrap();
        deck.add_cell(4, "8").unwrap();
        assert_eq!(deck.resolve_all().unwrap_err(), UnboundReferenceError::surface(8));
    }

    #[test]
    fn test_add_cell_rejects_bad_syntax() {
        let mut deck: Deck = Deck::new();
        assert!(deck.add_cell(1, "1 ::").is_err());
        assert_eq!(deck.cell_numbers().count(), 0);
    }

    #[test]
    fn test_cell_contains_unknown_cell() {
        let deck = slab_deck();
        assert!(deck.cell_contains(42, DVec3::ZERO).unwrap_err().is_unbound());
    }
}
