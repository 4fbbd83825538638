//! # Mesh Operations
//!
//! Operations that combine meshes.

pub mod boolean;
