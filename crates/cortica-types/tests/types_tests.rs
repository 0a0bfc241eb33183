//! Integration tests for cortica-types.

use cortica_types::constants;
use cortica_types::CorticaError;

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn invalid_input_display() {
    let err = CorticaError::InvalidInput("vertex buffer length (7) is not divisible by 3".into());
    assert!(err.to_string().contains("not divisible by 3"));
}

#[test]
fn protected_template_display() {
    let err = CorticaError::ProtectedTemplate("B1".into());
    let msg = err.to_string();
    assert!(msg.contains("B1"));
    assert!(msg.contains("protected"));
}

#[test]
fn template_not_found_display() {
    let err = CorticaError::TemplateNotFound("custom".into());
    assert!(err.to_string().contains("custom"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: CorticaError = io.into();
    assert!(matches!(err, CorticaError::Io(_)));
}

// ─── Constant Tests ───────────────────────────────────────────

#[test]
fn smoothing_defaults() {
    assert_eq!(constants::DEFAULT_SMOOTHING_STEPS, 20);
    assert!(constants::SMOOTHING_ITERATION_CAP >= constants::DEFAULT_SMOOTHING_STEPS);
}

#[test]
fn half_unit_isovalue() {
    assert_eq!(constants::HALF_UNIT_ISOVALUE, 0.5);
}
