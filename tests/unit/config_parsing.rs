//! Unit tests for TOML configuration parsing.

use stepper_link::config::{load_config, parse_config, SystemConfig};
use stepper_link::{Axis, Inches};

/// Test parsing a fully specified axis from TOML.
#[test]
fn test_parse_motor_config() {
    let toml_str = r#"
[axes.x]
pulses_per_revolution = 400
turns_per_inch = 5.08
position_min_in = 0.0
position_max_in = 9.8
start_byte = 7
end_byte = 10
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let motor = config.motor(Axis::X).expect("Axis not found");

    assert_eq!(motor.pulses_per_revolution, 400);
    assert_eq!(motor.turns_per_inch, 5.08);
    assert_eq!(motor.position_min, Inches(0.0));
    assert_eq!(motor.position_max, Inches(9.8));
    assert_eq!(motor.start_byte, 0x07);
    assert_eq!(motor.end_byte, 0x0A);
}

/// Test that omitted fields fall back to the stock axis.
#[test]
fn test_parse_partial_axis_uses_defaults() {
    let toml_str = r#"
[axes.y]
position_max_in = 12.0
"#;

    let config = parse_config(toml_str).expect("Failed to parse config");
    let motor = config.motor(Axis::Y).expect("Axis not found");

    assert_eq!(motor.pulses_per_revolution, 400);
    assert!((motor.turns_per_inch - 625.0 / 123.0).abs() < 1e-12);
    assert_eq!(motor.position_min, Inches(0.0));
    assert_eq!(motor.position_max, Inches(12.0));
}

/// Test parsing several axes at once.
#[test]
fn test_parse_multiple_axes() {
    let toml_str = r#"
[axes.x]
position_max_in = 9.8

[axes.z]
pulses_per_revolution = 200
turns_per_inch = 20.0
position_min_in = -0.5
position_max_in = 3.5
"#;

    let config = parse_config(toml_str).expect("Failed to parse config");

    let names: Vec<&str> = config.axis_names().collect();
    assert_eq!(names, vec!["x", "z"]);
    assert!(config.motor(Axis::Y).is_none());

    let z = config.motor(Axis::Z).expect("Axis not found");
    assert_eq!(z.pulses_per_inch(), 4000.0);
    assert_eq!(z.envelope().span(), Inches(4.0));
}

/// Test that a missing axis resolves to the stock configuration.
#[test]
fn test_motor_or_default() {
    let config = parse_config("[axes.x]\nposition_max_in = 4.0\n").expect("Failed to parse config");

    assert_eq!(config.motor_or_default(Axis::X).position_max, Inches(4.0));
    assert_eq!(config.motor_or_default(Axis::Y).position_max, Inches(9.8));
}

/// Test that an empty document has no axes.
#[test]
fn test_parse_empty_config() {
    let config = parse_config("").expect("Failed to parse config");
    assert_eq!(config.axis_names().count(), 0);
}

/// Test the loader against a real file.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("stepper_link_load_config_test.toml");
    std::fs::write(&path, "[axes.y]\npulses_per_revolution = 800\n").expect("write config");

    let config = load_config(&path).expect("Failed to load config");
    std::fs::remove_file(&path).ok();

    assert_eq!(
        config.motor(Axis::Y).map(|m| m.pulses_per_revolution),
        Some(800)
    );
}

/// Test that wrongly typed values are rejected.
#[test]
fn test_parse_rejects_wrong_types() {
    let toml_str = r#"
[axes.x]
pulses_per_revolution = "many"
"#;

    assert!(parse_config(toml_str).is_err());
}
