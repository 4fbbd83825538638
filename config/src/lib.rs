//! # Config Crate
//!
//! Centralized configuration constants for the cell-geometry pipeline.
//! Tolerances, tessellation defaults and safety limits live here so the
//! parser, evaluator and mesh crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GeometryConfig, DEFAULT_SEGMENTS};
//!
//! let cfg = GeometryConfig::default();
//! assert_eq!(cfg.segments, DEFAULT_SEGMENTS);
//! ```

pub mod constants;
