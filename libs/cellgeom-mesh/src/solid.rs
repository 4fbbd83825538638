//! # Solid
//!
//! A closed region of space represented by its boundary mesh.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::boolean;
use glam::DVec3;

/// Closed, outward-wound boundary of a region.
///
/// The empty solid has no triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    mesh: Mesh,
}

impl Solid {
    /// The empty region.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps a mesh after checking it is well formed.
    pub fn from_mesh(mesh: Mesh) -> Result<Self, MeshError> {
        mesh.validate().map_err(MeshError::degenerate)?;
        Ok(Self { mesh })
    }

    /// Boundary mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Consumes the solid, returning its mesh.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// True for the empty region.
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Axis-aligned bounds, `None` when empty.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        self.mesh.bounding_box()
    }

    /// Enclosed volume.
    pub fn volume(&self) -> f64 {
        self.mesh.volume()
    }

    /// Points in both solids.
    pub fn intersect(&self, other: &Solid) -> Result<Solid, MeshError> {
        checked("intersection", boolean::intersection(&self.mesh, &other.mesh))
    }

    /// Points in either solid.
    pub fn union(&self, other: &Solid) -> Result<Solid, MeshError> {
        checked("union", boolean::union(&self.mesh, &other.mesh))
    }

    /// Points in `self` but not in `other`.
    pub fn subtract(&self, other: &Solid) -> Result<Solid, MeshError> {
        checked("difference", boolean::difference(&self.mesh, &other.mesh))
    }
}

fn checked(operation: &str, mesh: Mesh) -> Result<Solid, MeshError> {
    mesh.validate()
        .map_err(|message| MeshError::boolean_failed(format!("{operation}: {message}")))?;
    Ok(Solid { mesh })
}

// =============================================================================
// TESTS
// =============================================================================
