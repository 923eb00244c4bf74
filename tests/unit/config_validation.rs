//! Unit tests for configuration validation.

use stepper_link::config::{parse_config, validate_config, SystemConfig};
use stepper_link::error::{CommandError, ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[axes.x]
pulses_per_revolution = 400
turns_per_inch = 5.08

[axes.y]
position_min_in = 1.0
position_max_in = 2.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a key that names no axis.
#[test]
fn test_unknown_axis_key() {
    let toml_str = r#"
[axes.w]
pulses_per_revolution = 400
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Command(CommandError::InvalidAxis(_)))
    ));
}

/// Test validation fails for zero pulses per revolution.
#[test]
fn test_zero_pulses_per_revolution() {
    let toml_str = r#"
[axes.x]
pulses_per_revolution = 0
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::InvalidPulsesPerRevolution(0)))
    ));
}

/// Test validation fails for a non-positive leadscrew ratio.
#[test]
fn test_non_positive_turns_per_inch() {
    for value in ["0.0", "-2.5"] {
        let toml_str = format!("[axes.z]\nturns_per_inch = {value}\n");
        assert!(matches!(
            parse_config(&toml_str),
            Err(Error::Config(ConfigError::InvalidTurnsPerInch(_)))
        ));
    }
}

/// Test validation fails when the limits are inverted or equal.
#[test]
fn test_invalid_travel_envelope() {
    for (min, max) in [("5.0", "1.0"), ("3.0", "3.0")] {
        let toml_str = format!("[axes.x]\nposition_min_in = {min}\nposition_max_in = {max}\n");
        assert!(matches!(
            parse_config(&toml_str),
            Err(Error::Config(ConfigError::InvalidTravelEnvelope { .. }))
        ));
    }
}

/// Test that the error message names the offending values.
#[test]
fn test_error_display() {
    let err = parse_config("[axes.x]\npulses_per_revolution = 0\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains('0'), "unexpected message: {msg}");
}
