//! # Reference Surfaces
//!
//! A small set of quadric surfaces with their implicit functions. Points where
//! the function is negative are "inside" (negative sense).
//!
//! | Surface | Implicit function |
//! |---------|-------------------|
//! | Plane | `n·p − d` |
//! | Sphere | `|p − c|² − r²` |
//! | Cylinder | `ρ² − r²`, `ρ` the distance to the axis |
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_eval::catalog::ImplicitSurface;
//! use cellgeom_eval::surfaces::SurfaceKind;
//! use glam::DVec3;
//!
//! let sphere = SurfaceKind::sphere(DVec3::ZERO, 2.0);
//! assert!(sphere.value_at(DVec3::ONE) < 0.0);
//! ```

use crate::catalog::ImplicitSurface;
use crate::Point3;
use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// AXIS
// =============================================================================

/// Coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    pub const fn unit(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }

    /// Component of `v` along the axis.
    pub fn component(self, v: DVec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

// =============================================================================
// SURFACE KIND
// =============================================================================

/// Concrete surface geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SurfaceKind {
    /// Plane `normal·p = offset`; positive side is where `normal` points.
    Plane {
        /// Unit normal.
        normal: DVec3,
        /// Signed distance from the origin along `normal`.
        offset: f64,
    },
    /// Sphere; inside is negative.
    Sphere {
        /// Center.
        center: DVec3,
        /// Radius.
        radius: f64,
    },
    /// Infinite cylinder parallel to a coordinate axis; inside is negative.
    Cylinder {
        /// Axis direction.
        axis: Axis,
        /// Any point on the axis.
        origin: DVec3,
        /// Radius.
        radius: f64,
    },
}

impl SurfaceKind {
    /// General plane; `normal` is normalized.
    ///
    /// `a·x + b·y + c·z = d` becomes `plane(DVec3::new(a, b, c), d)`.
    pub fn plane(normal: DVec3, offset: f64) -> Self {
        let length = normal.length();
        if length > 0.0 {
            Self::Plane {
                normal: normal / length,
                offset: offset / length,
            }
        } else {
            Self::Plane { normal, offset }
        }
    }

    /// Plane perpendicular to `axis` at coordinate `position`.
    pub fn axis_plane(axis: Axis, position: f64) -> Self {
        Self::Plane {
            normal: axis.unit(),
            offset: position,
        }
    }

    /// Sphere.
    pub fn sphere(center: DVec3, radius: f64) -> Self {
        Self::Sphere { center, radius }
    }

    /// Cylinder along `axis` through `origin`.
    pub fn cylinder(axis: Axis, origin: DVec3, radius: f64) -> Self {
        Self::Cylinder { axis, origin, radius }
    }

    /// Evaluate the implicit function.
    pub fn evaluate(&self, point: Point3) -> f64 {
        match *self {
            SurfaceKind::Plane { normal, offset } => normal.dot(point) - offset,
            SurfaceKind::Sphere { center, radius } => (point - center).length_squared() - radius * radius,
            SurfaceKind::Cylinder { axis, origin, radius } => {
                let d = point - origin;
                let along = axis.component(d);
                d.length_squared() - along * along - radius * radius
            }
        }
    }

    /// True when the negative half-space is a finite region.
    pub fn is_closed(&self) -> bool {
        matches!(self, SurfaceKind::Sphere { .. })
    }
}

impl ImplicitSurface for SurfaceKind {
    fn value_at(&self, point: Point3) -> f64 {
        self.evaluate(point)
    }
}

// =============================================================================
// TESTS
// =============================================================================
