//! Diagnostics handed from the scanner to the reporter.
//!
//! This module contains:
//!
//! - `diagnostic` - the `Diagnostic` trait, levels, kinds and the type-erased wrapper
//! - `lexical` - one diagnostic type per lexical defect
//!
//! Diagnostics are immutable once built. A reporter reads the level, the
//! coordinate range and the help message, and owns everything else about
//! presentation.

pub mod diagnostic;
pub mod lexical;
