//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = GeometryConfig::default();
    assert!(cfg.segments >= MIN_SEGMENTS);
    assert!(cfg.universe_half_extent > 0.0);
}

#[test]
fn default_config_passes_its_own_validation() {
    let cfg = GeometryConfig::default();
    let rebuilt = GeometryConfig::new(cfg.segments, cfg.universe_half_extent);
    assert_eq!(rebuilt, Ok(cfg));
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GeometryConfig::new(2, 100.0).unwrap_err(),
        ConfigError::InvalidSegments(2)
    );
    assert_eq!(
        GeometryConfig::new(24, -1.0).unwrap_err(),
        ConfigError::InvalidUniverse(-1.0)
    );
    assert_eq!(
        GeometryConfig::new(24, 0.0).unwrap_err(),
        ConfigError::InvalidUniverse(0.0)
    );
    assert!(GeometryConfig::new(24, f64::NAN).is_err());
    assert!(GeometryConfig::new(24, f64::INFINITY).is_err());
}

#[test]
fn plane_epsilon_is_coarser_than_epsilon() {
    assert!(PLANE_EPSILON > EPSILON);
    assert!(PLANE_EPSILON < 1.0e-2);
}

#[test]
fn limits_are_reasonable() {
    assert!(MAX_CELL_DEPTH >= 64);
    assert!(DEFAULT_CACHE_CAPACITY >= 64);
    assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
}

#[test]
fn error_messages_name_the_value() {
    let msg = ConfigError::InvalidSegments(1).to_string();
    assert!(msg.contains("segments"));
    assert!(msg.contains('1'));
}
