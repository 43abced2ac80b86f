use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    diagnostics::diagnostic::{DiagnosticBase, DiagnosticKind},
    errors::errors::Error,
    source::range::SourceCoordinateRange,
    EXPECTS, IMPL_DIAGNOSTIC,
};

lazy_static! {
    /// Digits and radix points, then an exponent marker with at most a sign after it.
    static ref MISSING_EXPONENT_DIGITS: Regex = Regex::new(r"^[0-9.]*[eE][+-]?$").unwrap();
}

/// A floating-point literal whose exponent has no digits, e.g. `0.3e+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatExponentMissingDigits {
    base: DiagnosticBase,
}

impl FloatExponentMissingDigits {
    pub fn new(float_literal: &str, coordinates: SourceCoordinateRange) -> Result<Self, Error> {
        EXPECTS!(!float_literal.is_empty());
        EXPECTS!(MISSING_EXPONENT_DIGITS.is_match(float_literal));

        let help_message = format!("floating-point exponent lacking digits: `{}`", float_literal);
        Ok(FloatExponentMissingDigits {
            base: DiagnosticBase::new(
                DiagnosticKind::FloatExponentMissingDigits,
                coordinates,
                help_message,
            ),
        })
    }
}

IMPL_DIAGNOSTIC!(FloatExponentMissingDigits, _this => DiagnosticKind::FloatExponentMissingDigits);

/// A floating-point literal with more than one radix point, e.g. `128.0.0.1`.
///
/// Adjacent points (`1..2`) are a range expression rather than a bad literal,
/// so they are rejected as evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatMultipleRadixPoints {
    base: DiagnosticBase,
}

impl FloatMultipleRadixPoints {
    pub fn new(literal: &str, coordinates: SourceCoordinateRange) -> Result<Self, Error> {
        let radix_points = literal.matches('.').count();
        EXPECTS!(radix_points > 1);
        EXPECTS!(!literal.contains(".."));
        EXPECTS!(literal.bytes().any(|c| c.is_ascii_digit()));

        let help_message = format!(
            "floating-point literal `{}` has {} radix-points: it must have at most one.",
            literal, radix_points
        );
        Ok(FloatMultipleRadixPoints {
            base: DiagnosticBase::new(
                DiagnosticKind::FloatMultipleRadixPoints,
                coordinates,
                help_message,
            ),
        })
    }
}

IMPL_DIAGNOSTIC!(FloatMultipleRadixPoints, _this => DiagnosticKind::FloatMultipleRadixPoints);
