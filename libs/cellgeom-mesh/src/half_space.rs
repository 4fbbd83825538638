//! # Half-Space Solids
//!
//! Solids for the two sides of a surface, clipped to the [`Universe`].
//!
//! ## Construction
//!
//! - Plane: an axis-aligned box when the normal is a coordinate axis,
//!   otherwise a large oriented slab intersected with the universe
//! - Sphere: the tessellated ball is the negative side
//! - Cylinder: a tube spanning the universe along its axis is the negative side
//!
//! The positive side of a sphere or cylinder is the universe minus its
//! negative side.

use crate::error::MeshError;
use crate::primitives::{create_axis_cylinder, create_box, create_oriented_box, create_sphere};
use crate::solid::Solid;
use crate::universe::Universe;
use cellgeom_eval::surfaces::SurfaceKind;
use cellgeom_parser::Sense;
use glam::DVec3;

/// A surface that can produce solids for its half-spaces.
pub trait HalfSpaceSolid {
    /// Solid where the surface function is `>= 0`.
    fn positive_solid(&self, universe: &Universe) -> Result<Solid, MeshError>;

    /// Solid where the surface function is `< 0`.
    ///
    /// Defaults to the universe minus the positive side.
    fn negative_solid(&self, universe: &Universe) -> Result<Solid, MeshError> {
        universe.outside(&self.positive_solid(universe)?)
    }

    /// Solid for the half-space selected by `sense`.
    fn half_space_solid(&self, sense: Sense, universe: &Universe) -> Result<Solid, MeshError> {
        match sense {
            Sense::Positive => self.positive_solid(universe),
            Sense::Negative => self.negative_solid(universe),
        }
    }
}

impl HalfSpaceSolid for SurfaceKind {
    fn positive_solid(&self, universe: &Universe) -> Result<Solid, MeshError> {
        match *self {
            SurfaceKind::Plane { normal, offset } => plane_side(normal, offset, universe),
            SurfaceKind::Sphere { .. } | SurfaceKind::Cylinder { .. } => {
                universe.outside(&self.negative_solid(universe)?)
            }
        }
    }

    fn negative_solid(&self, universe: &Universe) -> Result<Solid, MeshError> {
        match *self {
            SurfaceKind::Plane { normal, offset } => plane_side(-normal, -offset, universe),
            SurfaceKind::Sphere { center, radius } => {
                let ball = Solid::from_mesh(create_sphere(center, radius, universe.segments())?)?;
                universe.clip(ball)
            }
            SurfaceKind::Cylinder { axis, origin, radius } => {
                let h = universe.half_extent();
                let tube = Solid::from_mesh(create_axis_cylinder(axis, origin, radius, -h, h, universe.segments())?)?;
                universe.clip(tube)
            }
        }
    }
}

/// `{p : normal·p >= offset}` within the universe.
fn plane_side(normal: DVec3, offset: f64, universe: &Universe) -> Result<Solid, MeshError> {
    let length = normal.length();
    if !(length > 0.0) || !length.is_finite() || !offset.is_finite() {
        return Err(MeshError::degenerate(format!("plane normal {normal:?} with offset {offset}")));
    }
    let (normal, offset) = (normal / length, offset / length);
    let h = universe.half_extent();

    // Range of the plane function over the box corners.
    let reach = normal.abs().element_sum() * h;
    if offset <= -reach {
        return Ok(universe.solid().clone());
    }
    if offset >= reach {
        return Ok(Solid::empty());
    }

    if let Some(index) = axis_index(normal) {
        let mut min = DVec3::splat(-h);
        let mut max = DVec3::splat(h);
        if normal[index] > 0.0 {
            min[index] = offset;
        } else {
            max[index] = -offset;
        }
        return Solid::from_mesh(create_box(min, max)?);
    }

    // Slab from the plane out past the far corner, wide enough to cover the
    // box laterally.
    let far = 2.0 * h;
    let helper = if normal.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
    let u = normal.cross(helper).normalize();
    let v = normal.cross(u);
    let center = normal * (offset + far) / 2.0;
    let slab = create_oriented_box(center, [u * far, v * far, normal * (far - offset) / 2.0])?;
    universe.solid().intersect(&Solid::from_mesh(slab)?)
}

/// Index of the coordinate axis `normal` points along, if it is one.
fn axis_index(normal: DVec3) -> Option<usize> {
    let components = normal.to_array();
    let index = components.iter().position(|c| c.abs() == 1.0)?;
    components
        .iter()
        .enumerate()
        .all(|(i, &c)| i == index || c == 0.0)
        .then_some(index)
}

// =============================================================================
// TESTS
// =============================================================================
