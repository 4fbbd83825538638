//! # Cylinder Primitive
//!
//! Finite right circular cylinders parallel to a coordinate axis.

use crate::error::MeshError;
use crate::mesh::Mesh;
use cellgeom_eval::surfaces::Axis;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a capped cylinder along `axis`.
///
/// ## Parameters
///
/// - `axis`: Axis direction
/// - `origin`: Any point on the axis; its component along `axis` is ignored
/// - `radius`: Cylinder radius
/// - `start`, `end`: Axis coordinates of the two caps
/// - `segments`: Number of segments around the circumference
///
/// ## Example
///
/// ```rust
/// use cellgeom_eval::surfaces::Axis;
/// use cellgeom_mesh::primitives::create_axis_cylinder;
/// use glam::DVec3;
///
/// let mesh = create_axis_cylinder(Axis::X, DVec3::ZERO, 1.0, -5.0, 5.0, 24).unwrap();
/// let (min, max) = mesh.bounding_box().unwrap();
/// assert_eq!((min.x, max.x), (-5.0, 5.0));
/// ```
pub fn create_axis_cylinder(
    axis: Axis,
    origin: DVec3,
    radius: f64,
    start: f64,
    end: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if !(radius > 0.0) || !radius.is_finite() {
        return Err(MeshError::degenerate(format!("cylinder radius must be positive: {radius}")));
    }
    if !(end > start) || !(start.is_finite() && end.is_finite()) {
        return Err(MeshError::degenerate(format!(
            "cylinder length must be positive: {start}..{end}"
        )));
    }
    if segments < MIN_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "cylinder segments must be at least {MIN_SEGMENTS}: {segments}"
        )));
    }

    let base = origin - axis.unit() * axis.component(origin);
    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, 4 * n);

    let ring = |height: f64, mesh: &mut Mesh| -> Vec<u32> {
        (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                let local = DVec3::new(radius * theta.cos(), radius * theta.sin(), height);
                mesh.add_vertex(base + to_world(axis, local))
            })
            .collect()
    };
    let bottom = ring(start, &mut mesh);
    let top = ring(end, &mut mesh);

    for j in 0..n {
        let next = (j + 1) % n;
        mesh.add_triangle(bottom[j], bottom[next], top[next]);
        mesh.add_triangle(bottom[j], top[next], top[j]);
    }
    for j in 1..n - 1 {
        mesh.add_triangle(top[0], top[j], top[j + 1]);
        mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
    }

    Ok(mesh)
}

/// Maps local coordinates with `z` along the axis to world coordinates.
///
/// Cyclic permutations keep the winding outward.
fn to_world(axis: Axis, local: DVec3) -> DVec3 {
    match axis {
        Axis::X => DVec3::new(local.z, local.x, local.y),
        Axis::Y => DVec3::new(local.y, local.z, local.x),
        Axis::Z => local,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_volume() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let mesh = create_axis_cylinder(axis, DVec3::ZERO, 1.0, 0.0, 2.0, 64).unwrap();
            let exact = PI * 2.0;
            assert!(mesh.volume() > 0.0, "{axis:?} winds inward");
            assert_relative_eq!(mesh.volume(), exact, max_relative = 0.01);
        }
    }

    #[test]
    fn test_cylinder_offset_axis() {
        let origin = DVec3::new(100.0, 3.0, 4.0);
        let mesh = create_axis_cylinder(Axis::X, origin, 1.0, -1.0, 1.0, 16).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!((min.x, max.x), (-1.0, 1.0));
        assert_relative_eq!((min.y + max.y) / 2.0, 3.0, epsilon = 1e-9);
        assert_relative_eq!(max.z, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cylinder_rejects_bad_input() {
        assert!(create_axis_cylinder(Axis::Z, DVec3::ZERO, -1.0, 0.0, 1.0, 16).is_err());
        assert!(create_axis_cylinder(Axis::Z, DVec3::ZERO, 1.0, 1.0, 1.0, 16).is_err());
        assert!(create_axis_cylinder(Axis::Z, DVec3::ZERO, 1.0, 0.0, 1.0, 2).is_err());
    }
}
