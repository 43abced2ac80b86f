use std::fmt::Display;

use crate::{
    diagnostics::diagnostic::{DiagnosticBase, DiagnosticKind},
    errors::errors::Error,
    source::range::SourceCoordinateRange,
    EXPECTS, IMPL_DIAGNOSTIC,
};

/// Integer literal bases that can hold an out-of-range decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
}

impl Radix {
    pub fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
        }
    }

    /// Checks if `digit` is a decimal digit this radix cannot represent.
    pub fn is_unknown_digit(self, digit: char) -> bool {
        match self {
            Radix::Binary => ('2'..='9').contains(&digit),
            Radix::Octal => digit == '8' || digit == '9',
        }
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Radix::Binary => write!(f, "binary"),
            Radix::Octal => write!(f, "octal"),
        }
    }
}

/// A binary or octal literal containing a digit outside its radix, e.g. `0b102`.
///
/// The help message points a caret at the offending digit:
///
/// ```text
/// unknown digit `2` in binary literal `0b102`
///                                          ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDigit {
    radix: Radix,
    base: DiagnosticBase,
}

impl UnknownDigit {
    /// `digit` is the byte offset of the offending digit within `literal`.
    pub fn new(
        radix: Radix,
        literal: &str,
        digit: usize,
        coordinates: SourceCoordinateRange,
    ) -> Result<Self, Error> {
        EXPECTS!(literal.starts_with(radix.prefix()));
        let digit_value = literal
            .get(digit..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or_default();
        EXPECTS!(radix.is_unknown_digit(digit_value));

        let help_message = format_diagnostic(radix, literal, digit, digit_value);
        Ok(UnknownDigit {
            radix,
            base: DiagnosticBase::new(DiagnosticKind::UnknownDigit(radix), coordinates, help_message),
        })
    }

    pub fn binary(literal: &str, digit: usize, coordinates: SourceCoordinateRange) -> Result<Self, Error> {
        UnknownDigit::new(Radix::Binary, literal, digit, coordinates)
    }

    pub fn octal(literal: &str, digit: usize, coordinates: SourceCoordinateRange) -> Result<Self, Error> {
        UnknownDigit::new(Radix::Octal, literal, digit, coordinates)
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }
}

fn format_diagnostic(radix: Radix, literal: &str, digit: usize, digit_value: char) -> String {
    let top_line = format!("unknown digit `{}` in {} literal `", digit_value, radix);
    let padding = top_line.chars().count() + literal[..digit].chars().count();
    format!("{}{}`\n{}^", top_line, literal, " ".repeat(padding))
}

IMPL_DIAGNOSTIC!(UnknownDigit, this => DiagnosticKind::UnknownDigit(this.radix));
