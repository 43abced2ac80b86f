use std::fmt::Display;

use thiserror::Error;

use crate::source::coordinate::SourceCoordinate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} on line {line} in file {file}")]
pub struct Error {
    internal_error: ErrorImpl,
    file: &'static str,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, file: &'static str, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            file,
            line,
        }
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Returns the file and line of the check that failed.
    pub fn get_location(&self) -> (&'static str, u32) {
        (self.file, self.line)
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::PreconditionFailed { .. } => "PreconditionFailed",
            ErrorImpl::InvertedRange { .. } => "InvertedRange",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::PreconditionFailed { condition } => ErrorTip::Suggestion(format!(
                "The evidence does not satisfy `{}`, was the wrong diagnostic chosen for this lexeme?",
                condition
            )),
            ErrorImpl::InvertedRange { begin, end } => ErrorTip::Suggestion(format!(
                "A range must not begin ({}) after it ends ({})",
                begin, end
            )),
        }
    }
}

pub enum ErrorTip {
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("pre-condition `{condition}` failed")]
    PreconditionFailed { condition: &'static str },
    #[error("pre-condition `begin <= end` failed: range from {begin} to {end}")]
    InvertedRange {
        begin: SourceCoordinate,
        end: SourceCoordinate,
    },
}
