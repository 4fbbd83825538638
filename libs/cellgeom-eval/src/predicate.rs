//! # Point Containment
//!
//! Evaluates a geometry tree at a point.
//!
//! ## Rules
//!
//! - `+n` holds where `f_n(p) >= 0`, `-n` where `f_n(p) < 0`; a point on the
//!   surface belongs to the positive side. A NaN value satisfies neither.
//! - `#n` negates cell `n`'s region; cycles through `#n` are errors.
//! - Intersection and union short-circuit left to right.

use crate::catalog::{CellCatalog, ImplicitSurface, SurfaceCatalog};
use crate::error::{EvalError, UnboundReferenceError};
use crate::guard::VisitGuard;
use crate::Point3;
use cellgeom_parser::{Node, ParsedGeometry, Sense};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use rayon::prelude::*;
use stacker::maybe_grow;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Decide whether `point` lies inside `geometry`.
///
/// ## Parameters
///
/// - `geometry`: Parsed cell region
/// - `point`: Query point
/// - `surfaces`: Implicit functions by surface number
/// - `cells`: Other cells, used by `#n`
///
/// ## Returns
///
/// `Ok(true)` if inside. Fails on the first missing reference actually
/// reached, or on a cyclic cell complement.
///
/// ## Example
///
/// ```rust
/// use cellgeom_eval::{contains, catalog::NoCells};
/// use glam::DVec3;
/// use std::collections::HashMap;
///
/// let mut surfaces: HashMap<u32, fn(DVec3) -> f64> = HashMap::new();
/// surfaces.insert(1, |p| p.x);
/// surfaces.insert(2, |p| p.y);
///
/// let geometry = cellgeom_parser::parse("1 -2").unwrap();
/// let point = DVec3::new(1.0, -1.0, 0.0);
/// assert!(contains(&geometry, point, &surfaces, &NoCells).unwrap());
/// ```
pub fn contains<S, C>(geometry: &ParsedGeometry, point: Point3, surfaces: &S, cells: &C) -> Result<bool, EvalError>
where
    S: SurfaceCatalog + ?Sized,
    S::Surface: ImplicitSurface,
    C: CellCatalog + ?Sized,
{
    let mut guard = VisitGuard::new();
    evaluate(geometry.root(), point, surfaces, cells, &mut guard)
}

/// Classify many points in parallel.
///
/// ## Returns
///
/// One flag per point in input order, or the first error encountered.
pub fn classify_points<S, C>(
    geometry: &ParsedGeometry,
    points: &[Point3],
    surfaces: &S,
    cells: &C,
) -> Result<Vec<bool>, EvalError>
where
    S: SurfaceCatalog + Sync + ?Sized,
    S::Surface: ImplicitSurface,
    C: CellCatalog + Sync + ?Sized,
{
    points
        .par_iter()
        .map(|&point| contains(geometry, point, surfaces, cells))
        .collect()
}

/// Evaluate a bare tree with an existing guard.
///
/// Used by callers that are already expanding a cell chain.
pub fn evaluate<S, C>(
    node: &Node,
    point: Point3,
    surfaces: &S,
    cells: &C,
    guard: &mut VisitGuard,
) -> Result<bool, EvalError>
where
    S: SurfaceCatalog + ?Sized,
    S::Surface: ImplicitSurface,
    C: CellCatalog + ?Sized,
{
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match node {
        Node::Surface { number, sense } => {
            let surface = surfaces
                .surface(*number)
                .ok_or(UnboundReferenceError::surface(*number))?;
            Ok(in_half_space(surface.value_at(point), *sense))
        }
        Node::CellComplement { number } => {
            let cell = cells.cell(*number).ok_or(UnboundReferenceError::cell(*number))?;
            let inside = guard.visit(*number, |guard| evaluate(cell.root(), point, surfaces, cells, guard))?;
            Ok(!inside)
        }
        Node::Not { operand } => Ok(!evaluate(operand, point, surfaces, cells, guard)?),
        Node::And { left, right } => {
            if !evaluate(left, point, surfaces, cells, guard)? {
                return Ok(false);
            }
            evaluate(right, point, surfaces, cells, guard)
        }
        Node::Or { left, right } => {
            if evaluate(left, point, surfaces, cells, guard)? {
                return Ok(true);
            }
            evaluate(right, point, surfaces, cells, guard)
        }
    })
}

/// Sense test for one implicit-function value.
pub fn in_half_space(value: f64, sense: Sense) -> bool {
    match sense {
        Sense::Positive => value >= 0.0,
        Sense::Negative => value < 0.0,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NoCells;
    use cellgeom_parser::parse;
    use glam::DVec3;
    use std::collections::HashMap;

    fn axis_planes() -> HashMap<u32, fn(DVec3) -> f64> {
        let mut surfaces: HashMap<u32, fn(DVec3) -> f64> = HashMap::new();
        surfaces.insert(1, |p| p.x);
        surfaces.insert(2, |p| p.y);
        surfaces.insert(3, |p| p.z);
        surfaces
    }

    #[test]
    fn test_half_space_boundary() {
        assert!(in_half_space(0.0, Sense::Positive));
        assert!(!in_half_space(0.0, Sense::Negative));
        assert!(!in_half_space(-0.0, Sense::Negative));
        assert!(!in_half_space(f64::NAN, Sense::Positive));
        assert!(!in_half_space(f64::NAN, Sense::Negative));
    }

    #[test]
    fn test_octant() {
        let geometry = parse("1 2 3").unwrap();
        let surfaces = axis_planes();
        assert!(contains(&geometry, DVec3::ONE, &surfaces, &NoCells).unwrap());
        assert!(!contains(&geometry, -DVec3::ONE, &surfaces, &NoCells).unwrap());
    }

    #[test]
    fn test_missing_surface_only_when_reached() {
        let geometry = parse("1 : 9").unwrap();
        let surfaces = axis_planes();
        assert!(contains(&geometry, DVec3::X, &surfaces, &NoCells).unwrap());
        let err = contains(&geometry, -DVec3::X, &surfaces, &NoCells).unwrap_err();
        assert_eq!(err, EvalError::UnboundReference(UnboundReferenceError::surface(9)));
    }

    #[test]
    fn test_missing_cell() {
        let geometry = parse("#4").unwrap();
        let err = contains(&geometry, DVec3::ZERO, &axis_planes(), &NoCells).unwrap_err();
        assert_eq!(err, EvalError::UnboundReference(UnboundReferenceError::cell(4)));
    }

    #[test]
    fn test_classify_points_keeps_order() {
        let geometry = parse("-1").unwrap();
        let points: Vec<DVec3> = (-5..5).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect();
        let flags = classify_points(&geometry, &points, &axis_planes(), &NoCells).unwrap();
        let expected: Vec<bool> = (-5..5).map(|i| i < 0).collect();
        assert_eq!(flags, expected);
    }

    #[test]
    fn test_long_intersection_chain() {
        let text = vec!["1"; 5000].join(" ");
        let geometry = parse(&text).unwrap();
        assert!(contains(&geometry, DVec3::X, &axis_planes(), &NoCells).unwrap());
    }
}
