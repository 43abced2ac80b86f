//! Error types for contract violations.
//!
//! Diagnostics are only ever built from lexemes the scanner already knows to
//! be ill-formed. When the evidence handed over does not actually satisfy the
//! diagnostic's pre-conditions, construction fails with an `Error` carrying:
//!
//! - The failed condition (or the offending coordinates)
//! - The file and line of the check
//! - A short tip pointing at the likely caller bug

pub mod errors;

#[cfg(test)]
mod tests;
