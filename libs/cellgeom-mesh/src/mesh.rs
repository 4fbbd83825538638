//! # Mesh Data Structure
//!
//! Indexed triangle mesh backing every [`Solid`](crate::Solid).

use config::constants::EPSILON;
use glam::DVec3;

/// A triangle mesh with vertices and indices.
///
/// Triangles wind counter-clockwise when seen from outside the solid.
///
/// # Example
///
/// ```rust
/// use cellgeom_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Triangle indices.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Corner positions of triangle `index`.
    pub fn triangle_corners(&self, index: usize) -> Option<[DVec3; 3]> {
        let [a, b, c] = *self.triangles.get(index)?;
        Some([
            *self.vertices.get(a as usize)?,
            *self.vertices.get(b as usize)?,
            *self.vertices.get(c as usize)?,
        ])
    }

    /// Axis-aligned bounding box of the vertices used by triangles.
    ///
    /// `None` when the mesh is empty or an index is out of range.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        if self.is_empty() {
            return None;
        }
        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        for &index in self.triangles.iter().flatten() {
            let v = *self.vertices.get(index as usize)?;
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }

    /// Enclosed volume by the divergence theorem.
    ///
    /// Negative when the winding is inside out.
    pub fn volume(&self) -> f64 {
        (0..self.triangles.len())
            .filter_map(|i| self.triangle_corners(i))
            .map(|[a, b, c]| a.dot(b.cross(c)))
            .sum::<f64>()
            / 6.0
    }

    /// Checks indices are in range, coordinates are finite and no triangle
    /// has zero area.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(i) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(format!("vertex {i} is not finite"));
        }
        for i in 0..self.triangles.len() {
            let [a, b, c] = self
                .triangle_corners(i)
                .ok_or_else(|| format!("triangle {i} has an out-of-range index"))?;
            if (b - a).cross(c - a).length_squared() < EPSILON * EPSILON {
                return Err(format!("triangle {i} is degenerate"));
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
