//! Configuration Tests
//!
//! Tests for:
//! - Default values and validation
//! - Partial JSON overrides and round-tripping
//! - Rejection of invalid values

use hisl_scene::config::SceneConfig;
use hisl_scene::errors::SceneError;

fn invalid_field(json: &str) -> String {
    match SceneConfig::from_json_str(json) {
        Err(SceneError::InvalidParameter { name, .. }) => name,
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn defaults_are_valid() {
    let config = SceneConfig::default();
    config.validate().unwrap();
    assert_eq!(config.ravens.orbiters.len(), 2);
    assert_eq!(config.pulse_trail.start, [0.0, -2.0, 3.0]);
    assert_eq!(config.pulse_trail.control, [2.0, 0.0, 2.0]);
    assert_eq!(config.pulse_trail.end, [0.3, 1.9, 0.5]);
}

#[test]
fn default_orbiters_are_distinct() {
    let ravens = SceneConfig::default().ravens;
    let (a, b) = (&ravens.orbiters[0], &ravens.orbiters[1]);
    assert_ne!(a.radius, b.radius);
    assert_ne!(a.angular_speed, b.angular_speed);
    assert_ne!(a.phase_offset, b.phase_offset);
    assert_ne!(a.tint, b.tint);
}

#[test]
fn empty_document_gives_defaults() {
    assert_eq!(SceneConfig::from_json_str("{}").unwrap(), SceneConfig::default());
}

#[test]
fn partial_override() {
    let config = SceneConfig::from_json_str(
        r#"{ "pulse_trail": { "speed": 0.5 }, "ravens": { "scale": 1.2 } }"#,
    )
    .unwrap();
    assert_eq!(config.pulse_trail.speed, 0.5);
    assert_eq!(config.pulse_trail.base_size, 0.08);
    assert_eq!(config.ravens.scale, 1.2);
    assert_eq!(config.ravens.orbiters.len(), 2);
}

#[test]
fn json_round_trip() {
    let mut config = SceneConfig::default();
    config.ravens.orbiters[1].radius = 7.0;
    let json = config.to_json_string().unwrap();
    assert_eq!(SceneConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn rejects_negative_radius() {
    let name = invalid_field(r#"{ "ravens": { "orbiters": [ { "radius": -1.0 } ] } }"#);
    assert_eq!(name, "ravens.orbiters[0].radius");
}

#[test]
fn rejects_empty_orbiters() {
    assert_eq!(invalid_field(r#"{ "ravens": { "orbiters": [] } }"#), "ravens.orbiters");
}

#[test]
fn rejects_pulse_larger_than_marker() {
    let name = invalid_field(r#"{ "pulse_trail": { "base_size": 0.05, "amplitude": 0.1 } }"#);
    assert_eq!(name, "pulse_trail.amplitude");
}

#[test]
fn rejects_opacity_above_one() {
    assert_eq!(invalid_field(r#"{ "ravens": { "opacity": 1.5 } }"#), "ravens.opacity");
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(
        SceneConfig::from_json_str("{ not json"),
        Err(SceneError::JsonError(_))
    ));
}
