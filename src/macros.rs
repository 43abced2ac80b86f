//! Utility macros for the diagnostics crate.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `EXPECTS!` - Checks a construction pre-condition and bails out with an `Error`
//! - `IMPL_DIAGNOSTIC!` - Implements the `Diagnostic` trait for a catalog entry
//!
//! These macros reduce boilerplate in the diagnostic catalog.

/// Checks a pre-condition, returning `Err` from the enclosing function when it fails.
///
/// The failure is logged at `error` level and carries the stringified condition
/// along with the file and line of the check.
///
/// # Arguments
///
/// * `$condition` - The boolean condition that must hold
/// * `$error` - (optional) The `ErrorImpl` to report instead of `PreconditionFailed`
///
/// # Example
///
/// ```ignore
/// EXPECTS!(literal.starts_with("0b"));
/// EXPECTS!(begin <= end, ErrorImpl::InvertedRange { begin, end });
/// ```
#[macro_export]
macro_rules! EXPECTS {
    ($condition:expr) => {
        $crate::EXPECTS!(
            $condition,
            $crate::errors::errors::ErrorImpl::PreconditionFailed {
                condition: stringify!($condition),
            }
        )
    };
    ($condition:expr, $error:expr) => {
        if !($condition) {
            let error = $crate::errors::errors::Error::new($error, file!(), line!());
            $crate::__tracing::error!(%error, "contract violation");
            return Err(error);
        }
    };
}

/// Implements `Diagnostic` for a catalog entry holding a `base: DiagnosticBase` field.
///
/// # Arguments
///
/// * `$type` - The diagnostic type
/// * `$this` - The name bound to `self` while evaluating `$kind`
/// * `$kind` - An expression producing the entry's `DiagnosticKind`
///
/// # Example
///
/// ```ignore
/// IMPL_DIAGNOSTIC!(UnknownToken, _this => DiagnosticKind::UnknownToken);
/// IMPL_DIAGNOSTIC!(UnknownDigit, this => DiagnosticKind::UnknownDigit(this.radix));
/// ```
#[macro_export]
macro_rules! IMPL_DIAGNOSTIC {
    ($type:ty, $this:ident => $kind:expr) => {
        impl $crate::diagnostics::diagnostic::Diagnostic for $type {
            fn get_diagnostic_kind(&self) -> $crate::diagnostics::diagnostic::DiagnosticKind {
                let $this = self;
                $kind
            }
            fn coordinates(&self) -> $crate::source::range::SourceCoordinateRange {
                self.base.coordinates()
            }
            fn help_message(&self) -> &str {
                self.base.help_message()
            }
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            fn clone_wrapper(&self) -> $crate::diagnostics::diagnostic::DiagnosticWrapper {
                $crate::diagnostics::diagnostic::DiagnosticWrapper::new(self.clone())
            }
        }
    };
}
