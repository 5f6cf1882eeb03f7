//! Tests for `MazeConfig` validation and loading.

use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = MazeConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.placement_threshold, 0.1);
    assert_eq!(cfg.hall_width, 3.75);
    assert_eq!(cfg.hall_height, 3.5);
}

#[test]
fn new_validates_inputs() {
    assert_eq!(
        MazeConfig::new(-0.1, 3.0, 3.0).unwrap_err(),
        ConfigError::InvalidThreshold(-0.1)
    );
    assert_eq!(
        MazeConfig::new(0.1, 0.0, 3.0).unwrap_err(),
        ConfigError::InvalidHallWidth(0.0)
    );
    assert_eq!(
        MazeConfig::new(0.1, 3.0, -2.0).unwrap_err(),
        ConfigError::InvalidHallHeight(-2.0)
    );
}

#[test]
fn threshold_bounds_are_inclusive() {
    assert!(MazeConfig::new(0.0, 1.0, 1.0).is_ok());
    assert!(MazeConfig::new(1.0, 1.0, 1.0).is_ok());
}

#[test]
fn non_finite_values_are_rejected() {
    assert!(MazeConfig::new(f32::NAN, 1.0, 1.0).is_err());
    assert!(MazeConfig::new(0.5, f32::INFINITY, 1.0).is_err());
    assert!(MazeConfig::new(0.5, 1.0, f32::NAN).is_err());
}

#[test]
fn setters_do_not_validate_until_asked() {
    let cfg = MazeConfig::default().with_placement_threshold(2.0);
    assert_eq!(cfg.placement_threshold, 2.0);
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidThreshold(2.0)));
}

/// Missing fields fall back to the defaults.
#[test]
fn loads_partial_json() {
    let cfg: MazeConfig = serde_json::from_str(r#"{ "hall_width": 5.0 }"#).unwrap();
    assert_eq!(cfg.hall_width, 5.0);
    assert_eq!(cfg.hall_height, 3.5);
    assert_eq!(cfg.placement_threshold, 0.1);
}
