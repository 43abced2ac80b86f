use std::{any::Any, fmt::{Debug, Display}, ops::Deref};

use tracing::debug;

use crate::source::range::SourceCoordinateRange;

use super::lexical::{digit::Radix, escape::EscapeKind};

/// Diagnostic Levels
///
/// Every lexical diagnostic describes a program that is not well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticLevel {
    IllFormed,
}

impl Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticLevel::IllFormed => write!(f, "ill-formed"),
        }
    }
}

/// Diagnostic Kinds
///
/// One kind per lexical defect the scanner can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    FloatExponentMissingDigits,
    FloatMultipleRadixPoints,
    InvalidIdentifier,
    UnknownDigit(Radix),
    UnknownEscape(EscapeKind),
    UnknownToken,
    UnterminatedComment,
    UnterminatedStringLiteral,
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Diagnostic Trait
///
/// Defines what a reporter may read from any lexical diagnostic.
pub trait Diagnostic: Debug + Send + Sync {
    /// Returns the kind of the diagnostic.
    fn get_diagnostic_kind(&self) -> DiagnosticKind;
    /// Returns the severity of the diagnostic.
    fn level(&self) -> DiagnosticLevel {
        DiagnosticLevel::IllFormed
    }
    /// Returns the range the diagnostic was constructed with.
    fn coordinates(&self) -> SourceCoordinateRange;
    /// Returns the rendered help message.
    fn help_message(&self) -> &str;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the diagnostic into a DiagnosticWrapper.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> DiagnosticWrapper;
}

/// The state shared by every catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticBase {
    coordinates: SourceCoordinateRange,
    help_message: String,
}

impl DiagnosticBase {
    pub fn new(
        kind: DiagnosticKind,
        coordinates: SourceCoordinateRange,
        help_message: String,
    ) -> Self {
        debug!(%kind, %coordinates, "constructed lexical diagnostic");
        DiagnosticBase {
            coordinates,
            help_message,
        }
    }

    pub fn coordinates(&self) -> SourceCoordinateRange {
        self.coordinates
    }

    pub fn help_message(&self) -> &str {
        &self.help_message
    }
}

/// Diagnostic Wrapper
///
/// A wrapper that allows for any diagnostic kind to be handed to a reporter
#[derive(Debug)]
pub struct DiagnosticWrapper(Box<dyn Diagnostic>);

impl DiagnosticWrapper {
    pub fn new<T: Diagnostic + 'static>(diagnostic: T) -> Self {
        DiagnosticWrapper(Box::new(diagnostic))
    }
}

impl Deref for DiagnosticWrapper {
    type Target = Box<dyn Diagnostic>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Diagnostic for DiagnosticWrapper {
    fn get_diagnostic_kind(&self) -> DiagnosticKind {
        self.0.get_diagnostic_kind()
    }
    fn level(&self) -> DiagnosticLevel {
        self.0.level()
    }
    fn coordinates(&self) -> SourceCoordinateRange {
        self.0.coordinates()
    }
    fn help_message(&self) -> &str {
        self.0.help_message()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> DiagnosticWrapper {
        self.0.clone_wrapper()
    }
}

impl Clone for DiagnosticWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

impl Display for DiagnosticWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.level(),
            self.coordinates(),
            self.help_message()
        )
    }
}
