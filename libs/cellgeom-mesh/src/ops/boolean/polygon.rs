//! # Polygon
//!
//! Convex planar polygon for BSP operations.

use super::plane::Plane;
use glam::DVec3;

/// Convex polygon with a cached supporting plane.
#[derive(Debug, Clone)]
pub(crate) struct Polygon {
    pub vertices: Vec<DVec3>,
    pub plane: Plane,
}

impl Polygon {
    /// Polygon from counter-clockwise vertices.
    ///
    /// `None` for fewer than three vertices or collinear leading vertices.
    pub fn new(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Polygon that inherits an existing plane, used for split pieces.
    pub fn with_plane(vertices: Vec<DVec3>, plane: Plane) -> Self {
        Self { vertices, plane }
    }

    /// Reverses winding and plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Fan triangulation.
    pub fn triangles(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        let first = self.vertices[0];
        self.vertices.windows(2).skip(1).map(move |w| [first, w[0], w[1]])
    }
}
