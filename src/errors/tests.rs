//! Unit tests for error handling.
//!
//! This module contains tests for contract-violation errors and their tips.

use crate::diagnostics::lexical::token::UnknownToken;
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::source::coordinate::{Column, Line, SourceCoordinate};
use crate::source::range::SourceCoordinateRange;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::PreconditionFailed {
            condition: "literal.starts_with(\"0b\")",
        },
        "src/diagnostics/lexical/digit.rs",
        42,
    );

    assert_eq!(error.get_error_name(), "PreconditionFailed");
    assert_eq!(error.get_location(), ("src/diagnostics/lexical/digit.rs", 42));
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::PreconditionFailed { condition: "x > 1" },
        "lib.rs",
        7,
    );

    assert_eq!(error.to_string(), "pre-condition `x > 1` failed on line 7 in file lib.rs");
}

#[test]
fn test_inverted_range_error() {
    let begin = SourceCoordinate::new(Line(4), Column(2));
    let end = SourceCoordinate::new(Line(1), Column(9));
    let error = SourceCoordinateRange::new(begin, end).unwrap_err();

    assert_eq!(error.get_error_name(), "InvertedRange");
    assert_eq!(error.get_error_impl(), &ErrorImpl::InvertedRange { begin, end });
    assert!(error
        .to_string()
        .starts_with("pre-condition `begin <= end` failed: range from 4:2 to 1:9 on line"));
}

#[test]
fn test_precondition_error_from_diagnostic() {
    let coordinates = SourceCoordinateRange::new(
        SourceCoordinate::default(),
        SourceCoordinate::new(Line(1), Column(3)),
    )
    .unwrap();
    let error = UnknownToken::new("let", coordinates).unwrap_err();

    assert_eq!(error.get_error_name(), "PreconditionFailed");
    assert!(matches!(
        error.get_error_impl(),
        ErrorImpl::PreconditionFailed { .. }
    ));
    assert!(error.get_location().0.ends_with("token.rs"));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::PreconditionFailed { condition: "x > 1" },
        "lib.rs",
        1,
    );

    let ErrorTip::Suggestion(tip) = error.get_tip();
    assert!(tip.contains("`x > 1`"));
}

#[test]
fn test_error_tip_display() {
    let begin = SourceCoordinate::new(Line(2), Column(1));
    let end = SourceCoordinate::default();
    let error = SourceCoordinateRange::new(begin, end).unwrap_err();

    assert_eq!(
        error.get_tip().to_string(),
        "A range must not begin (2:1) after it ends (1:1)"
    );
}
