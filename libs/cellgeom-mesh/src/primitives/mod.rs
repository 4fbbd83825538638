//! # Primitives
//!
//! Closed meshes for the shapes half-space solids are cut from.

pub mod cube;
pub mod cylinder;
pub mod sphere;

pub use cube::{create_box, create_oriented_box};
pub use cylinder::create_axis_cylinder;
pub use sphere::create_sphere;
