//! # Reference Resolution
//!
//! Confirms that every surface and cell a geometry names exists. Kept apart
//! from parsing so a deck can be parsed before all its cells are known.

use crate::catalog::{CellCatalog, SurfaceCatalog};
use crate::error::UnboundReferenceError;
use cellgeom_parser::{Node, ParsedGeometry, Reference};
use tracing::trace;

/// Check every reference and hand the geometry back unchanged.
///
/// ## Returns
///
/// The geometry, or the first missing reference in depth-first,
/// left-to-right order
///
/// ## Example
///
/// ```rust
/// use cellgeom_eval::{resolve, catalog::NoCells, ReferenceKind};
/// use glam::DVec3;
/// use std::collections::HashMap;
///
/// let mut surfaces: HashMap<u32, fn(DVec3) -> f64> = HashMap::new();
/// surfaces.insert(1, |p| p.x);
///
/// let geometry = cellgeom_parser::parse("1 : -7").unwrap();
/// let err = resolve(geometry, &surfaces, &NoCells).unwrap_err();
/// assert_eq!((err.number, err.kind), (7, ReferenceKind::Surface));
/// ```
pub fn resolve<S, C>(
    geometry: ParsedGeometry,
    surfaces: &S,
    cells: &C,
) -> Result<ParsedGeometry, UnboundReferenceError>
where
    S: SurfaceCatalog + ?Sized,
    C: CellCatalog + ?Sized,
{
    check_references(geometry.root(), surfaces, cells)?;
    trace!(geometry = %geometry, "references resolved");
    Ok(geometry)
}

/// Check the references of a bare tree.
///
/// Cells named by `#n` must exist but are not descended into.
pub fn check_references<S, C>(node: &Node, surfaces: &S, cells: &C) -> Result<(), UnboundReferenceError>
where
    S: SurfaceCatalog + ?Sized,
    C: CellCatalog + ?Sized,
{
    for reference in node.references() {
        match reference {
            Reference::Surface { number, .. } => {
                if !surfaces.has_surface(number) {
                    return Err(UnboundReferenceError::surface(number));
                }
            }
            Reference::Cell { number } => {
                if !cells.has_cell(number) {
                    return Err(UnboundReferenceError::cell(number));
                }
            }
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReferenceKind;
    use cellgeom_parser::parse;
    use std::collections::HashMap;

    fn surfaces(numbers: &[u32]) -> HashMap<u32, ()> {
        numbers.iter().map(|&n| (n, ())).collect()
    }

    #[test]
    fn test_resolve_returns_same_tree() {
        let geometry = parse("1 (2 : -3)").unwrap();
        let cells: HashMap<u32, ParsedGeometry> = HashMap::new();
        let resolved = resolve(geometry.clone(), &surfaces(&[1, 2, 3]), &cells).unwrap();
        assert_eq!(resolved, geometry);
    }

    #[test]
    fn test_first_missing_in_source_order() {
        let geometry = parse("1 (#9 : -8) 7").unwrap();
        let cells: HashMap<u32, ParsedGeometry> = HashMap::new();
        let err = resolve(geometry, &surfaces(&[1]), &cells).unwrap_err();
        assert_eq!(err, UnboundReferenceError { number: 9, kind: ReferenceKind::Cell });
    }

    #[test]
    fn test_cells_not_descended() {
        let mut cells: HashMap<u32, ParsedGeometry> = HashMap::new();
        cells.insert(2, parse("99").unwrap());
        let geometry = parse("1 #2").unwrap();
        assert!(resolve(geometry, &surfaces(&[1]), &cells).is_ok());
    }
}
