//! # Boolean Operations (CSG)
//!
//! Constructive solid geometry on closed triangle meshes using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Union: A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine; invert
//! - Intersection: A.invert(); B.clipTo(A); B.invert(); A.clipTo(B); B.clipTo(A); combine; invert
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_mesh::ops::boolean::difference;
//! use cellgeom_mesh::primitives::create_box;
//! use glam::DVec3;
//!
//! let a = create_box(DVec3::ZERO, DVec3::splat(2.0)).unwrap();
//! let b = create_box(DVec3::ONE, DVec3::splat(3.0)).unwrap();
//! let result = difference(&a, &b);
//! assert!((result.volume() - 7.0).abs() < 1e-9);
//! ```

mod bsp;
mod plane;
mod polygon;

use crate::Mesh;
use bsp::BspNode;
use config::constants::EPSILON;
use polygon::Polygon;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compute union of two meshes.
///
/// ## Parameters
///
/// - `a`: First mesh
/// - `b`: Second mesh
///
/// ## Returns
///
/// New mesh bounding every point inside either input.
pub fn union(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() {
        return b.clone();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    // B's faces coplanar with A's survive only once, from A
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut result = bsp_a.all_polygons();
    result.extend(bsp_b.all_polygons());
    polygons_to_mesh(&result)
}

/// Compute difference of two meshes (A - B).
///
/// ## Parameters
///
/// - `a`: Base mesh
/// - `b`: Mesh to subtract
///
/// ## Returns
///
/// New mesh bounding the points of A outside B.
pub fn difference(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() {
        return Mesh::new();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    // A - B = ~(~A | B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut result = bsp_a.all_polygons();
    result.extend(bsp_b.all_polygons());
    result.iter_mut().for_each(Polygon::flip);
    polygons_to_mesh(&result)
}

/// Compute intersection of two meshes.
///
/// ## Parameters
///
/// - `a`: First mesh
/// - `b`: Second mesh
///
/// ## Returns
///
/// New mesh bounding the points inside both inputs.
pub fn intersection(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() || polys_b.is_empty() {
        return Mesh::new();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    // A & B = ~(~A | ~B)
    bsp_a.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);

    let mut result = bsp_a.all_polygons();
    result.extend(bsp_b.all_polygons());
    result.iter_mut().for_each(Polygon::flip);
    polygons_to_mesh(&result)
}

// =============================================================================
// CONVERSION
// =============================================================================

/// One polygon per non-degenerate triangle.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    (0..mesh.triangle_count())
        .filter_map(|i| mesh.triangle_corners(i))
        .filter_map(|corners| Polygon::new(corners.to_vec()))
        .collect()
}

/// Fan-triangulates polygons, dropping slivers.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let triangle_count: usize = polygons.iter().map(|p| p.vertices.len().saturating_sub(2)).sum();
    let mut mesh = Mesh::with_capacity(triangle_count * 3, triangle_count);

    for [a, b, c] in polygons.iter().flat_map(Polygon::triangles) {
        if (b - a).cross(c - a).length() < EPSILON {
            continue;
        }
        let i = mesh.add_vertex(a);
        mesh.add_vertex(b);
        mesh.add_vertex(c);
        mesh.add_triangle(i, i + 1, i + 2);
    }
    mesh
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{create_box, create_sphere};
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn unit_box(min: DVec3) -> Mesh {
        create_box(min, min + DVec3::ONE).unwrap()
    }

    #[test]
    fn test_union_overlapping_boxes() {
        let result = union(&unit_box(DVec3::ZERO), &unit_box(DVec3::splat(0.5)));
        assert_relative_eq!(result.volume(), 2.0 - 0.125, epsilon = 1e-9);
    }

    #[test]
    fn test_union_disjoint() {
        let result = union(&unit_box(DVec3::ZERO), &unit_box(DVec3::splat(3.0)));
        assert_relative_eq!(result.volume(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_difference_boxes() {
        let result = difference(&unit_box(DVec3::ZERO), &unit_box(DVec3::splat(0.5)));
        assert_relative_eq!(result.volume(), 1.0 - 0.125, epsilon = 1e-9);
        let (min, max) = result.bounding_box().unwrap();
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(max.x, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_intersection_boxes() {
        let result = intersection(&unit_box(DVec3::ZERO), &unit_box(DVec3::splat(0.5)));
        assert_relative_eq!(result.volume(), 0.125, epsilon = 1e-9);
        let (min, max) = result.bounding_box().unwrap();
        assert_relative_eq!(min.x, 0.5, epsilon = 1e-9);
        assert_relative_eq!(max.z, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_intersection_disjoint_is_empty() {
        let result = intersection(&unit_box(DVec3::ZERO), &unit_box(DVec3::splat(3.0)));
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_operands() {
        let a = unit_box(DVec3::ZERO);
        let empty = Mesh::new();
        assert_eq!(union(&empty, &a), a);
        assert_eq!(difference(&a, &empty), a);
        assert!(difference(&empty, &a).is_empty());
        assert!(intersection(&a, &empty).is_empty());
    }

    #[test]
    fn test_box_minus_sphere() {
        let cube = create_box(DVec3::splat(-2.0), DVec3::splat(2.0)).unwrap();
        let ball = create_sphere(DVec3::ZERO, 1.0, 16).unwrap();
        let result = difference(&cube, &ball);
        assert_relative_eq!(result.volume(), 64.0 - ball.volume(), epsilon = 1e-6);
    }
}
