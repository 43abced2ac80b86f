#![allow(clippy::module_inception)]

//! Lexical diagnostics for a Rust-like compiler front end.
//!
//! The crate is split into four layers:
//!
//! - `source` - line/column coordinates and half-open coordinate ranges
//! - `lexer` - pure predicates over literal text (string termination, escapes)
//! - `diagnostics` - the catalog of lexical diagnostics and their help messages
//! - `errors` - contract violations raised when a diagnostic is built from bad evidence
//!
//! A scanner decides that a lexeme is ill-formed, optionally confirms it with one
//! of the `lexer` predicates, and then constructs the matching diagnostic. The
//! reporter only ever reads `level()`, `coordinates()` and `help_message()`.

pub mod diagnostics;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod source;

extern crate regex;

#[doc(hidden)]
pub use tracing as __tracing;
