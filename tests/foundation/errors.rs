//! Integration tests for Error types
//!
//! Tests error construction, display, and context.

use halnav_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_room() {
    let err = Error::invalid_room("bridge");
    assert!(matches!(err.kind, ErrorKind::InvalidRoom(_)));
    assert!(format!("{err}").contains("bridge"));
}

#[test]
fn error_unknown_start_room() {
    let err = Error::unknown_start_room("attic");
    assert!(matches!(err.kind, ErrorKind::UnknownStartRoom(_)));
    assert_eq!(format!("{err}"), "unknown start room: 'attic'");
}

#[test]
fn error_io_and_internal() {
    assert!(matches!(Error::io("disk").kind, ErrorKind::Io(_)));
    assert!(matches!(Error::internal("bug").kind, ErrorKind::Internal(_)));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_optional() {
    let err = Error::topology("bad");
    assert!(err.context.is_none());
}

#[test]
fn context_display() {
    let context = ErrorContext::new().with_source("ship.json").with_line(3);
    assert_eq!(context.to_string(), "at ship.json:3");

    let no_line = ErrorContext::new().with_source("ship.json");
    assert_eq!(no_line.to_string(), "at ship.json");
}

#[test]
fn context_does_not_change_message() {
    let err = Error::topology("expected value")
        .with_context(ErrorContext::new().with_source("ship.json").with_line(1));
    assert_eq!(format!("{err}"), "topology error: expected value");
    assert_eq!(err.context.and_then(|c| c.line), Some(1));
}

#[test]
fn error_is_std_error() {
    fn takes_std_error(_: &dyn std::error::Error) {}
    takes_std_error(&Error::io("x"));
}
