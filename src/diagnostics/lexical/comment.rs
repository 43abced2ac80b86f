use crate::{
    diagnostics::diagnostic::{DiagnosticBase, DiagnosticKind},
    errors::errors::Error,
    source::range::SourceCoordinateRange,
    EXPECTS, IMPL_DIAGNOSTIC,
};

const COMMENT_OPENING: &[u8; 2] = b"/*";
const COMMENT_CLOSING: &[u8; 2] = b"*/";

/// A block comment that reaches the end of input before all of its `/*` are closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnterminatedComment {
    base: DiagnosticBase,
}

impl UnterminatedComment {
    /// `comment` runs from the opening `/*` to the end of input.
    pub fn new(comment: &str, coordinates: SourceCoordinateRange) -> Result<Self, Error> {
        EXPECTS!(comment.as_bytes().starts_with(COMMENT_OPENING));
        EXPECTS!(count_delimiters(comment, COMMENT_OPENING) > count_delimiters(comment, COMMENT_CLOSING));

        Ok(UnterminatedComment {
            base: DiagnosticBase::new(
                DiagnosticKind::UnterminatedComment,
                coordinates,
                format_diagnostic(comment),
            ),
        })
    }
}

fn count_delimiters(comment: &str, delimiter: &[u8; 2]) -> usize {
    comment
        .as_bytes()
        .windows(2)
        .filter(|pair| *pair == delimiter)
        .count()
}

fn format_diagnostic(comment: &str) -> String {
    let first_line = comment.split('\n').next().unwrap_or(comment);
    format!(
        "unterminated multi-line comment starting with:\n\t{}\n\t[note: multi-line comments in Rust may nest]",
        first_line
    )
}

IMPL_DIAGNOSTIC!(UnterminatedComment, _this => DiagnosticKind::UnterminatedComment);
