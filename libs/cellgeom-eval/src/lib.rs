//! # Cell Geometry Eval
//!
//! Reference resolution and point containment for parsed cell geometry.
//!
//! ## Architecture
//!
//! ```text
//! cellgeom-parser (ParsedGeometry) → cellgeom-eval (resolve, contains) → cellgeom-mesh
//! ```
//!
//! Surfaces and cells come from caller-supplied catalogs ([`SurfaceCatalog`],
//! [`CellCatalog`]); [`Deck`] is a ready-made registry implementing both.
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_eval::{contains, resolve, Deck, surfaces::SurfaceKind};
//! use glam::DVec3;
//!
//! let mut deck = Deck::new();
//! deck.add_surface(1, SurfaceKind::sphere(DVec3::ZERO, 1.0));
//! deck.add_cell(3, "-1").unwrap();
//!
//! let geometry = cellgeom_parser::parse("#3").unwrap();
//! let geometry = resolve(geometry, &deck, &deck).unwrap();
//! assert!(!contains(&geometry, DVec3::ZERO, &deck, &deck).unwrap());
//! ```

pub mod catalog;
pub mod deck;
pub mod error;
pub mod guard;
pub mod predicate;
pub mod resolution;
pub mod surfaces;

pub use catalog::{CellCatalog, ImplicitSurface, NoCells, SurfaceCatalog};
pub use deck::Deck;
pub use error::{EvalError, ReferenceKind, UnboundReferenceError, UnsupportedOperationError};
pub use guard::VisitGuard;
pub use predicate::{classify_points, contains};
pub use resolution::resolve;

/// A point in 3-D space.
pub type Point3 = glam::DVec3;
