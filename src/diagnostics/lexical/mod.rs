//! The catalog of lexical diagnostics.
//!
//! Each entry checks its evidence against the defect it describes before
//! rendering a message, so a diagnostic can never claim that well-formed text
//! is ill-formed:
//!
//! - `float` - exponents without digits, literals with several radix points
//! - `identifier` - raw identifiers that may not be raw
//! - `digit` - binary and octal literals with out-of-range digits
//! - `escape` - unrecognised ASCII, byte and Unicode escapes
//! - `token` - characters that cannot start a token
//! - `comment` - unterminated block comments
//! - `string` - unterminated string literals

pub mod comment;
pub mod digit;
pub mod escape;
pub mod float;
pub mod identifier;
pub mod string;
pub mod token;
