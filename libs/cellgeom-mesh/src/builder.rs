//! # Solid Builder
//!
//! Turns a geometry tree into a [`Solid`].
//!
//! ## Rules
//!
//! - `±n`: the half-space solid of surface `n`, memoized per (surface, sense)
//! - Intersection and union map to the mesh booleans
//! - `#n` and `#(...)`: universe minus the operand, which must be bounded
//! - Cycles through `#n` are rejected as in point evaluation

use crate::cache::{SharedSolidCache, SolidKey, SolidMemo};
use crate::error::MeshError;
use crate::half_space::HalfSpaceSolid;
use crate::solid::Solid;
use crate::universe::Universe;
use cellgeom_eval::{CellCatalog, SurfaceCatalog, UnboundReferenceError, VisitGuard};
use cellgeom_parser::{Node, ParsedGeometry, Sense};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use rayon::prelude::*;
use stacker::maybe_grow;
use std::sync::Arc;
use tracing::debug;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Build the solid for `geometry`.
///
/// ## Parameters
///
/// - `geometry`: Parsed cell region
/// - `surfaces`: Surfaces by number
/// - `cells`: Other cells, used by `#n`
/// - `cache`: Memo for half-space solids
/// - `universe`: Box that unbounded regions are clipped to
///
/// ## Returns
///
/// The solid, or the first error: a missing reference, a cyclic cell
/// complement, a complement of an unbounded region, or a failed primitive
/// or boolean.
///
/// ## Example
///
/// ```rust
/// use cellgeom_eval::{Deck, surfaces::SurfaceKind};
/// use cellgeom_mesh::{to_solid, SolidCache, Universe};
/// use config::constants::GeometryConfig;
/// use glam::DVec3;
///
/// let mut deck = Deck::new();
/// deck.add_surface(1, SurfaceKind::sphere(DVec3::ZERO, 1.0));
/// let universe = Universe::new(GeometryConfig::default()).unwrap();
/// let mut cache = SolidCache::new();
///
/// let geometry = cellgeom_parser::parse("-1").unwrap();
/// let ball = to_solid(&geometry, &deck, &deck, &mut cache, &universe).unwrap();
/// assert!(universe.is_bounded(&ball));
/// ```
pub fn to_solid<S, C, M>(
    geometry: &ParsedGeometry,
    surfaces: &S,
    cells: &C,
    cache: &mut M,
    universe: &Universe,
) -> Result<Solid, MeshError>
where
    S: SurfaceCatalog + ?Sized,
    S::Surface: HalfSpaceSolid,
    C: CellCatalog + ?Sized,
    M: SolidMemo + ?Sized,
{
    let mut builder = SolidBuilder {
        surfaces,
        cells,
        cache,
        universe,
    };
    let mut guard = VisitGuard::new();
    let solid = builder.build(geometry.root(), &mut guard)?;
    debug!(
        geometry = %geometry,
        triangles = solid.mesh().triangle_count(),
        "solid built"
    );
    Ok(Arc::try_unwrap(solid).unwrap_or_else(|shared| (*shared).clone()))
}

/// Build several solids in parallel over one shared cache.
///
/// ## Returns
///
/// One result per geometry, in input order.
pub fn to_solids<S, C>(
    geometries: &[&ParsedGeometry],
    surfaces: &S,
    cells: &C,
    cache: &SharedSolidCache,
    universe: &Universe,
) -> Vec<Result<Solid, MeshError>>
where
    S: SurfaceCatalog + Sync + ?Sized,
    S::Surface: HalfSpaceSolid,
    C: CellCatalog + Sync + ?Sized,
{
    geometries
        .par_iter()
        .map(|geometry| {
            let mut cache = cache.clone();
            to_solid(geometry, surfaces, cells, &mut cache, universe)
        })
        .collect()
}

// =============================================================================
// BUILDER
// =============================================================================

struct SolidBuilder<'a, S: ?Sized, C: ?Sized, M: ?Sized> {
    surfaces: &'a S,
    cells: &'a C,
    cache: &'a mut M,
    universe: &'a Universe,
}

impl<'a, S, C, M> SolidBuilder<'a, S, C, M>
where
    S: SurfaceCatalog + ?Sized,
    S::Surface: HalfSpaceSolid,
    C: CellCatalog + ?Sized,
    M: SolidMemo + ?Sized,
{
    fn build(&mut self, node: &Node, guard: &mut VisitGuard) -> Result<Arc<Solid>, MeshError> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match node {
            Node::Surface { number, sense } => self.half_space(*number, *sense),
            Node::CellComplement { number } => {
                let cells = self.cells;
                let cell = cells.cell(*number).ok_or(UnboundReferenceError::cell(*number))?;
                let inside = guard.visit(*number, |guard| self.build(cell.root(), guard))?;
                Ok(Arc::new(self.universe.complement(&inside)?))
            }
            Node::Not { operand } => {
                let inside = self.build(operand, guard)?;
                Ok(Arc::new(self.universe.complement(&inside)?))
            }
            Node::And { left, right } => {
                let left = self.build(left, guard)?;
                let right = self.build(right, guard)?;
                Ok(Arc::new(left.intersect(&right)?))
            }
            Node::Or { left, right } => {
                let left = self.build(left, guard)?;
                let right = self.build(right, guard)?;
                Ok(Arc::new(left.union(&right)?))
            }
        })
    }

    fn half_space(&mut self, number: u32, sense: Sense) -> Result<Arc<Solid>, MeshError> {
        let key = SolidKey::new(number, sense);
        if let Some(solid) = self.cache.lookup(key) {
            return Ok(solid);
        }
        let surfaces = self.surfaces;
        let surface = surfaces.surface(number).ok_or(UnboundReferenceError::surface(number))?;
        debug!(surface = number, ?sense, "building half-space solid");
        let solid = Arc::new(surface.half_space_solid(sense, self.universe)?);
        self.cache.remember(key, Arc::clone(&solid));
        Ok(solid)
    }
}

// =============================================================================
// TESTS
// =============================================================================
