//! # Sphere Primitive
//!
//! Generates a sphere mesh using latitude/longitude tessellation.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a sphere mesh.
///
/// ## Parameters
///
/// - `center`: Sphere center
/// - `radius`: Sphere radius
/// - `segments`: Number of segments around the circumference
///
/// ## Algorithm
///
/// - `rings = (segments + 1) / 2`
/// - Ring `i` sits at polar angle `phi = PI * (i + 0.5) / rings`
/// - No pole vertices; the first and last rings are closed by fans
///
/// The mesh is inscribed, so its volume is slightly below the true ball.
///
/// ## Example
///
/// ```rust
/// use cellgeom_mesh::primitives::create_sphere;
/// use glam::DVec3;
///
/// let mesh = create_sphere(DVec3::ZERO, 5.0, 32).unwrap();
/// assert!(mesh.vertex_count() > 0);
/// ```
pub fn create_sphere(center: DVec3, radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    if !(radius > 0.0) || !radius.is_finite() {
        return Err(MeshError::degenerate(format!("sphere radius must be positive: {radius}")));
    }
    if segments < MIN_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "sphere segments must be at least {MIN_SEGMENTS}: {segments}"
        )));
    }

    let num_rings = (segments + 1) / 2;
    let mut mesh = Mesh::with_capacity((num_rings * segments) as usize, (2 * num_rings * segments) as usize);
    let mut rings: Vec<Vec<u32>> = Vec::with_capacity(num_rings as usize);

    for i in 0..num_rings {
        // 0 = top, PI = bottom
        let phi = PI * (i as f64 + 0.5) / num_rings as f64;
        let ring_radius = radius * phi.sin();
        let z = radius * phi.cos();

        let ring = (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                mesh.add_vertex(center + DVec3::new(ring_radius * theta.cos(), ring_radius * theta.sin(), z))
            })
            .collect();
        rings.push(ring);
    }

    let top = &rings[0];
    for j in 1..(segments - 1) as usize {
        mesh.add_triangle(top[0], top[j], top[j + 1]);
    }

    for pair in rings.windows(2) {
        let (upper, lower) = (&pair[0], &pair[1]);
        for j in 0..segments as usize {
            let next = (j + 1) % segments as usize;
            mesh.add_triangle(upper[j], lower[j], lower[next]);
            mesh.add_triangle(upper[j], lower[next], upper[next]);
        }
    }

    let bottom = &rings[rings.len() - 1];
    for j in 1..(segments - 1) as usize {
        mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_volume_close_to_ball() {
        let mesh = create_sphere(DVec3::ZERO, 2.0, 48).unwrap();
        let exact = 4.0 / 3.0 * PI * 8.0;
        assert_relative_eq!(mesh.volume(), exact, max_relative = 0.03);
        assert!(mesh.volume() < exact);
    }

    #[test]
    fn test_sphere_centered() {
        let mesh = create_sphere(DVec3::new(10.0, 0.0, 0.0), 1.0, 16).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        assert!(min.x >= 9.0 - 1e-12 && max.x <= 11.0 + 1e-12);
        assert_relative_eq!((min + max).x / 2.0, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sphere_rejects_bad_input() {
        assert!(create_sphere(DVec3::ZERO, 0.0, 16).is_err());
        assert!(create_sphere(DVec3::ZERO, f64::NAN, 16).is_err());
        assert!(create_sphere(DVec3::ZERO, 1.0, 2).is_err());
    }

    #[test]
    fn test_odd_segments() {
        let mesh = create_sphere(DVec3::ZERO, 1.0, 5).unwrap();
        assert_eq!(mesh.vertex_count(), 15);
        assert!(mesh.volume() > 0.0);
        assert!(mesh.validate().is_ok());
    }
}
