use crate::{
    diagnostics::diagnostic::{DiagnosticBase, DiagnosticKind},
    errors::errors::Error,
    lexer::strings::is_terminated,
    source::range::SourceCoordinateRange,
    EXPECTS, IMPL_DIAGNOSTIC,
};

/// A string literal, normal or raw, that is missing its closing delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnterminatedStringLiteral {
    base: DiagnosticBase,
}

impl UnterminatedStringLiteral {
    pub fn new(literal: &str, coordinates: SourceCoordinateRange) -> Result<Self, Error> {
        EXPECTS!(!is_terminated(literal));

        let help_message = format!("unterminated string literal: `{}`", literal);
        Ok(UnterminatedStringLiteral {
            base: DiagnosticBase::new(
                DiagnosticKind::UnterminatedStringLiteral,
                coordinates,
                help_message,
            ),
        })
    }
}

IMPL_DIAGNOSTIC!(UnterminatedStringLiteral, _this => DiagnosticKind::UnterminatedStringLiteral);
