//! # Catalogs
//!
//! Lookup seams for the surfaces and cells a geometry refers to.
//!
//! Any `HashMap<u32, _>` is a surface catalog and `HashMap<u32, ParsedGeometry>`
//! is a cell catalog. Closures of type `Fn(DVec3) -> f64` are implicit surfaces.
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_eval::catalog::{ImplicitSurface, SurfaceCatalog};
//! use glam::DVec3;
//! use std::collections::HashMap;
//!
//! let mut surfaces: HashMap<u32, fn(DVec3) -> f64> = HashMap::new();
//! surfaces.insert(1, |p| p.x);
//! let plane = surfaces.surface(1).unwrap();
//! assert_eq!(plane.value_at(DVec3::new(2.0, 0.0, 0.0)), 2.0);
//! ```

use crate::Point3;
use cellgeom_parser::ParsedGeometry;
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// IMPLICIT SURFACE
// =============================================================================

/// A surface given by an implicit function `f(p)`.
///
/// The positive half-space is `f(p) >= 0`; the negative half-space is
/// `f(p) < 0`.
pub trait ImplicitSurface {
    /// Value of the implicit function at `point`.
    fn value_at(&self, point: Point3) -> f64;
}

impl<F> ImplicitSurface for F
where
    F: Fn(Point3) -> f64,
{
    fn value_at(&self, point: Point3) -> f64 {
        self(point)
    }
}

// =============================================================================
// CATALOGS
// =============================================================================

/// Surfaces by number.
pub trait SurfaceCatalog {
    /// Stored surface type.
    type Surface: ?Sized;

    /// Look up a surface.
    fn surface(&self, number: u32) -> Option<&Self::Surface>;

    /// True if `number` is defined.
    fn has_surface(&self, number: u32) -> bool {
        self.surface(number).is_some()
    }
}

/// Cell regions by number.
pub trait CellCatalog {
    /// Look up a cell's parsed geometry.
    fn cell(&self, number: u32) -> Option<&ParsedGeometry>;

    /// True if `number` is defined.
    fn has_cell(&self, number: u32) -> bool {
        self.cell(number).is_some()
    }
}

impl<T> SurfaceCatalog for HashMap<u32, T> {
    type Surface = T;

    fn surface(&self, number: u32) -> Option<&T> {
        self.get(&number)
    }
}

impl<T> SurfaceCatalog for BTreeMap<u32, T> {
    type Surface = T;

    fn surface(&self, number: u32) -> Option<&T> {
        self.get(&number)
    }
}

impl CellCatalog for HashMap<u32, ParsedGeometry> {
    fn cell(&self, number: u32) -> Option<&ParsedGeometry> {
        self.get(&number)
    }
}

impl CellCatalog for BTreeMap<u32, ParsedGeometry> {
    fn cell(&self, number: u32) -> Option<&ParsedGeometry> {
        self.get(&number)
    }
}

/// A cell catalog with no cells, for geometries without `#n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCells;

impl CellCatalog for NoCells {
    fn cell(&self, _number: u32) -> Option<&ParsedGeometry> {
        None
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_closure_is_implicit_surface() {
        let sphere = |p: DVec3| p.length_squared() - 1.0;
        assert!(sphere.value_at(DVec3::ZERO) < 0.0);
        assert!(sphere.value_at(DVec3::X * 2.0) > 0.0);
    }

    #[test]
    fn test_boxed_closure_catalog() {
        let mut surfaces: HashMap<u32, Box<dyn Fn(DVec3) -> f64>> = HashMap::new();
        surfaces.insert(4, Box::new(|p: DVec3| p.z));
        assert!(surfaces.has_surface(4));
        assert!(!surfaces.has_surface(5));
        let value = surfaces.surface(4).map(|s| s.value_at(DVec3::new(0.0, 0.0, -3.0)));
        assert_eq!(value, Some(-3.0));
    }

    #[test]
    fn test_cell_catalogs() {
        let mut cells: BTreeMap<u32, ParsedGeometry> = BTreeMap::new();
        cells.insert(2, cellgeom_parser::parse("1 -2").unwrap());
        assert!(cells.has_cell(2));
        assert!(!NoCells.has_cell(2));
    }
}
