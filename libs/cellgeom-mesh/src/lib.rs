//! # Cell Geometry Mesh
//!
//! Builds triangle-mesh solids from parsed cell geometry.
//!
//! ## Architecture
//!
//! ```text
//! cellgeom-parser (ParsedGeometry) → cellgeom-eval (catalogs) → cellgeom-mesh (Solid)
//! ```
//!
//! ## Algorithms
//!
//! - **Half-spaces**: primitives clipped to a finite [`Universe`] box
//! - **Boolean Operations**: BSP trees (csg.js algorithm)
//! - **Memoization**: half-space solids cached per (surface, sense)
//!
//! ## Usage
//!
//! ```rust
//! use cellgeom_eval::{Deck, surfaces::{Axis, SurfaceKind}};
//! use cellgeom_mesh::{to_solid, SolidCache, Universe};
//! use config::constants::GeometryConfig;
//! use glam::DVec3;
//!
//! let mut deck = Deck::new();
//! deck.add_surface(1, SurfaceKind::sphere(DVec3::ZERO, 1.0));
//! deck.add_surface(3, SurfaceKind::axis_plane(Axis::Z, 0.0));
//!
//! let universe = Universe::new(GeometryConfig::default()).unwrap();
//! let geometry = cellgeom_parser::parse("-1 3").unwrap();
//! let dome = to_solid(&geometry, &deck, &deck, &mut SolidCache::new(), &universe).unwrap();
//! let (min, _) = dome.bounding_box().unwrap();
//! assert!(min.z.abs() < 1e-9);
//! ```

pub mod builder;
pub mod cache;
pub mod error;
pub mod half_space;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod solid;
pub mod universe;

pub use builder::{to_solid, to_solids};
pub use cache::{CacheStats, SharedSolidCache, SolidCache, SolidKey, SolidMemo};
pub use error::MeshError;
pub use half_space::HalfSpaceSolid;
pub use mesh::Mesh;
pub use ops::boolean::{difference, intersection, union};
pub use solid::Solid;
pub use universe::Universe;
