//! # Box Primitives
//!
//! Axis-aligned and oriented boxes.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Quads by corner index `x + 2y + 4z`, wound outward.
const FACES: [[u32; 4]; 6] = [
    [0, 4, 6, 2], // -x
    [1, 3, 7, 5], // +x
    [0, 1, 5, 4], // -y
    [2, 6, 7, 3], // +y
    [0, 2, 3, 1], // -z
    [4, 5, 7, 6], // +z
];

/// Creates an axis-aligned box spanning `min..max`.
///
/// ## Returns
///
/// A mesh with 8 vertices and 12 triangles, or an error if any extent is
/// not positive.
///
/// ## Example
///
/// ```rust
/// use cellgeom_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::ZERO, DVec3::splat(10.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(min: DVec3, max: DVec3) -> Result<Mesh, MeshError> {
    let size = max - min;
    if !(size.min_element() > 0.0) || !size.is_finite() {
        return Err(MeshError::degenerate(format!("box extent must be positive: {size:?}")));
    }
    let corners = std::array::from_fn(|i| {
        DVec3::new(
            if i & 1 == 0 { min.x } else { max.x },
            if i & 2 == 0 { min.y } else { max.y },
            if i & 4 == 0 { min.z } else { max.z },
        )
    });
    Ok(hexahedron(corners))
}

/// Creates a box from its center and three half-edge vectors.
///
/// `axes` must be mutually perpendicular and right-handed
/// (`axes[0] × axes[1]` along `axes[2]`).
pub fn create_oriented_box(center: DVec3, axes: [DVec3; 3]) -> Result<Mesh, MeshError> {
    let [u, v, w] = axes;
    if u.cross(v).dot(w) <= 0.0 || !(u.is_finite() && v.is_finite() && w.is_finite()) {
        return Err(MeshError::degenerate("box axes must be finite and right-handed"));
    }
    let sign = |bit: bool| if bit { 1.0 } else { -1.0 };
    let corners = std::array::from_fn(|i| {
        center + u * sign(i & 1 != 0) + v * sign(i & 2 != 0) + w * sign(i & 4 != 0)
    });
    Ok(hexahedron(corners))
}

fn hexahedron(corners: [DVec3; 8]) -> Mesh {
    let mut mesh = Mesh::with_capacity(8, 12);
    for corner in corners {
        mesh.add_vertex(corner);
    }
    for [a, b, c, d] in FACES {
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);
    }
    mesh
}
