//! Literal validators used by the scanner and by the diagnostic catalog.
//!
//! This module contains pure predicates over lexeme text:
//!
//! - String-literal termination, including raw-string delimiter balancing
//! - ASCII, byte and Unicode escape-sequence classification
//!
//! A `false` result is an ordinary answer, not an error: it is how callers
//! decide whether a diagnostic is needed at all.

pub mod escapes;
pub mod strings;
