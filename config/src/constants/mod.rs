//! Centralized configuration values shared across the cell-geometry pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by geometry kernels.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-9;

/// Distance below which a vertex is considered to lie on a BSP splitting plane.
///
/// Larger than [`EPSILON`] because boolean operations accumulate error every
/// time a polygon is split.
///
/// # Examples
/// ```
/// use config::constants::{EPSILON, PLANE_EPSILON};
/// assert!(PLANE_EPSILON > EPSILON);
/// ```
pub const PLANE_EPSILON: f64 = 1.0e-5;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default tessellation segment count for spheres and cylinders.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 24;

/// Smallest segment count that still produces a closed polygon.
pub const MIN_SEGMENTS: u32 = 3;

/// Half of the edge length of the box that stands in for infinite space.
///
/// Half-spaces of planes and cylinders are clipped to this box before any
/// boolean operation. Solids touching its faces are reported as unbounded.
///
/// # Examples
/// ```
/// use config::constants::UNIVERSE_HALF_EXTENT;
/// let edge = 2.0 * UNIVERSE_HALF_EXTENT;
/// assert!(edge > 100.0);
/// ```
pub const UNIVERSE_HALF_EXTENT: f64 = 1.0e3;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum nesting of cell complements (`#n` pointing at a cell that itself
/// uses `#m`, and so on) before evaluation gives up.
///
/// # Examples
/// ```
/// use config::constants::MAX_CELL_DEPTH;
/// assert!(MAX_CELL_DEPTH >= 64);
/// ```
pub const MAX_CELL_DEPTH: usize = 256;

/// Default number of primitive solids kept by a rendering session cache.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CACHE_CAPACITY;
/// assert!(DEFAULT_CACHE_CAPACITY > 0);
/// ```
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which `stacker` allocates a fresh segment.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

// =============================================================================
// GEOMETRY CONFIG
// =============================================================================

/// Immutable snapshot of the tunables a rendering session needs.
///
/// # Examples
/// ```
/// use config::constants::GeometryConfig;
/// let config = GeometryConfig::default();
/// assert!(config.universe_half_extent > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Segment count for spheres and cylinders.
    pub segments: u32,
    /// Half edge length of the universe box.
    pub universe_half_extent: f64,
}

impl GeometryConfig {
    /// Builds a configuration enforcing strict validation of every field.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeometryConfig;
    /// let cfg = GeometryConfig::new(16, 500.0).expect("valid config");
    /// assert_eq!(cfg.segments, 16);
    /// ```
    pub fn new(segments: u32, universe_half_extent: f64) -> Result<Self, ConfigError> {
        if segments < MIN_SEGMENTS {
            return Err(ConfigError::InvalidSegments(segments));
        }
        if !(universe_half_extent > 0.0) || !universe_half_extent.is_finite() {
            return Err(ConfigError::InvalidUniverse(universe_half_extent));
        }
        Ok(Self {
            segments,
            universe_half_extent,
        })
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            universe_half_extent: UNIVERSE_HALF_EXTENT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
    /// Raised when the universe box is not a finite positive size.
    InvalidUniverse(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments(value) => {
                write!(f, "segments must be >= {MIN_SEGMENTS}: {value}")
            }
            ConfigError::InvalidUniverse(value) => {
                write!(f, "universe half extent must be finite and positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
