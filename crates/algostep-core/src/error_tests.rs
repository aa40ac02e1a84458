//! Tests for engine error types.

use super::error::Error;

#[test]
fn test_invalid_start_display() {
    let err = Error::InvalidStart("Z".to_string());
    assert_eq!(err.to_string(), "Start vertex 'Z' not in vertices");
}

#[test]
fn test_invalid_input_display() {
    let err = Error::InvalidInput("negative value -3".to_string());
    assert_eq!(err.to_string(), "Invalid input: negative value -3");
}

#[test]
fn test_unknown_algorithm_lists_choices() {
    let err = Error::UnknownAlgorithm("quick".to_string());
    let msg = err.to_string();
    assert!(msg.contains("'quick'"));
    assert!(msg.contains("counting"));
}

#[test]
fn test_error_from_figment() {
    let fig_err = figment::Error::from("bad key".to_string());
    let err: Error = fig_err.into();
    assert!(matches!(err, Error::Config(ref m) if m.contains("bad key")));
}
