//! # Universe
//!
//! Finite box standing in for all of space. Unbounded half-spaces are
//! clipped to it, and a solid is unbounded when it reaches the box's faces.

use crate::error::MeshError;
use crate::primitives::create_box;
use crate::solid::Solid;
use config::constants::{GeometryConfig, PLANE_EPSILON};
use glam::DVec3;
use tracing::debug;

/// The bounding box every solid lives in, with the settings used to
/// tessellate curved surfaces.
///
/// ## Example
///
/// ```rust
/// use cellgeom_mesh::Universe;
/// use config::constants::GeometryConfig;
///
/// let universe = Universe::new(GeometryConfig::default()).unwrap();
/// assert!(!universe.is_bounded(universe.solid()));
/// ```
#[derive(Debug, Clone)]
pub struct Universe {
    config: GeometryConfig,
    solid: Solid,
}

impl Universe {
    /// Universe for `config`.
    pub fn new(config: GeometryConfig) -> Result<Self, MeshError> {
        let h = config.universe_half_extent;
        let solid = Solid::from_mesh(create_box(DVec3::splat(-h), DVec3::splat(h))?)?;
        Ok(Self { config, solid })
    }

    /// Settings this universe was built with.
    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Half edge length of the box.
    pub fn half_extent(&self) -> f64 {
        self.config.universe_half_extent
    }

    /// Segment count for curved surfaces.
    pub fn segments(&self) -> u32 {
        self.config.segments
    }

    /// The whole box as a solid.
    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    /// Distance from the faces within which a solid counts as touching them.
    pub fn margin(&self) -> f64 {
        PLANE_EPSILON * self.half_extent().max(1.0)
    }

    /// True when `solid` stays clear of the box's faces.
    ///
    /// The empty solid is bounded.
    pub fn is_bounded(&self, solid: &Solid) -> bool {
        let limit = self.half_extent() - self.margin();
        match solid.bounding_box() {
            None => true,
            Some((min, max)) => min.min_element() > -limit && max.max_element() < limit,
        }
    }

    /// True when `solid` lies within the box, faces included.
    pub fn encloses(&self, solid: &Solid) -> bool {
        let limit = self.half_extent() + self.margin();
        match solid.bounding_box() {
            None => true,
            Some((min, max)) => min.min_element() >= -limit && max.max_element() <= limit,
        }
    }

    /// `solid` cut down to the box.
    pub fn clip(&self, solid: Solid) -> Result<Solid, MeshError> {
        if self.encloses(&solid) {
            Ok(solid)
        } else {
            self.solid.intersect(&solid)
        }
    }

    /// Everything in the box outside `solid`.
    pub fn outside(&self, solid: &Solid) -> Result<Solid, MeshError> {
        self.solid.subtract(solid)
    }

    /// Complement of a bounded solid.
    ///
    /// ## Returns
    ///
    /// The box minus `solid`, or an unsupported-operation error when `solid`
    /// is unbounded, since its complement would have to be taken against an
    /// infinite space the box only approximates.
    pub fn complement(&self, solid: &Solid) -> Result<Solid, MeshError> {
        if !self.is_bounded(solid) {
            debug!(bounds = ?solid.bounding_box(), "complement of unbounded solid");
            return Err(MeshError::unsupported("complement of an unbounded region"));
        }
        self.outside(solid)
    }
}

// =============================================================================
// TESTS
// =============================================================================
