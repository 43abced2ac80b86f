use std::{fmt::Display, ops::Range};

use tracing::trace;

use crate::{
    diagnostics::diagnostic::{DiagnosticBase, DiagnosticKind},
    errors::errors::Error,
    lexer::escapes::{is_ascii_escape, is_byte_escape, is_unicode_escape},
    source::range::SourceCoordinateRange,
    EXPECTS, IMPL_DIAGNOSTIC,
};

/// The escape grammar a string literal was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeKind {
    Ascii,
    Byte,
    Unicode,
}

impl EscapeKind {
    pub fn is_valid_escape(self, escape: &str) -> bool {
        match self {
            EscapeKind::Ascii => is_ascii_escape(escape),
            EscapeKind::Byte => is_byte_escape(escape),
            EscapeKind::Unicode => is_unicode_escape(escape),
        }
    }
}

impl Display for EscapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EscapeKind::Ascii => write!(f, "ASCII"),
            EscapeKind::Byte => write!(f, "byte"),
            EscapeKind::Unicode => write!(f, "Unicode"),
        }
    }
}

/// An escape sequence that its string literal's grammar does not recognise.
///
/// The help message echoes the whole lexeme and underlines the escape:
///
/// ```text
/// unrecognised ASCII escape '\m' in string literal `a\mb`
///                                                    ^~
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEscape {
    kind: EscapeKind,
    base: DiagnosticBase,
}

impl UnknownEscape {
    /// `escape` is the byte range of the escape within `lexeme`.
    pub fn new(
        kind: EscapeKind,
        lexeme: &str,
        escape: Range<usize>,
        coordinates: SourceCoordinateRange,
    ) -> Result<Self, Error> {
        EXPECTS!(lexeme.len() >= 4);
        EXPECTS!(escape.len() >= 2);
        let unrecognised_escape = lexeme.get(escape.clone()).unwrap_or_default();
        EXPECTS!(unrecognised_escape.starts_with('\\'));
        EXPECTS!(!kind.is_valid_escape(unrecognised_escape));
        trace!(%kind, escape = unrecognised_escape, "escape rejected");

        let help_message = format_diagnostic(kind, lexeme, escape.start, unrecognised_escape);
        Ok(UnknownEscape {
            kind,
            base: DiagnosticBase::new(DiagnosticKind::UnknownEscape(kind), coordinates, help_message),
        })
    }

    pub fn ascii(lexeme: &str, escape: Range<usize>, coordinates: SourceCoordinateRange) -> Result<Self, Error> {
        UnknownEscape::new(EscapeKind::Ascii, lexeme, escape, coordinates)
    }

    pub fn byte(lexeme: &str, escape: Range<usize>, coordinates: SourceCoordinateRange) -> Result<Self, Error> {
        UnknownEscape::new(EscapeKind::Byte, lexeme, escape, coordinates)
    }

    pub fn unicode(lexeme: &str, escape: Range<usize>, coordinates: SourceCoordinateRange) -> Result<Self, Error> {
        UnknownEscape::new(EscapeKind::Unicode, lexeme, escape, coordinates)
    }

    pub fn kind(&self) -> EscapeKind {
        self.kind
    }
}

fn format_diagnostic(kind: EscapeKind, lexeme: &str, escape_start: usize, unrecognised_escape: &str) -> String {
    let top_line = format!(
        "unrecognised {} escape '{}' in string literal `",
        kind, unrecognised_escape
    );
    let escape_highlight = format!("^{}", "~".repeat(unrecognised_escape.chars().count() - 1));
    // earlier escapes in the same lexeme may be fine, so pad out to this one
    let padding = top_line.chars().count() + lexeme[..escape_start].chars().count();
    format!(
        "{}{}`\n{}{}",
        top_line,
        lexeme,
        " ".repeat(padding),
        escape_highlight
    )
}

IMPL_DIAGNOSTIC!(UnknownEscape, this => DiagnosticKind::UnknownEscape(this.kind));
