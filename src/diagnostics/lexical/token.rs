use crate::{
    diagnostics::diagnostic::{DiagnosticBase, DiagnosticKind},
    errors::errors::Error,
    source::range::SourceCoordinateRange,
    EXPECTS, IMPL_DIAGNOSTIC,
};

/// A lexeme made up entirely of characters that cannot start any token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken {
    base: DiagnosticBase,
}

impl UnknownToken {
    pub fn new(lexeme: &str, coordinates: SourceCoordinateRange) -> Result<Self, Error> {
        EXPECTS!(!lexeme.bytes().any(can_start_token));

        let help_message = format!("unknown token \"{}\"", lexeme);
        Ok(UnknownToken {
            base: DiagnosticBase::new(DiagnosticKind::UnknownToken, coordinates, help_message),
        })
    }
}

/// Printable ASCII, minus space, `~`, `` ` `` and `\`.
fn can_start_token(c: u8) -> bool {
    b' ' < c && c < b'~' && c != b'`' && c != b'\\'
}

IMPL_DIAGNOSTIC!(UnknownToken, _this => DiagnosticKind::UnknownToken);
