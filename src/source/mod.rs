//! Source positions.
//!
//! This module contains the position model shared by the scanner and the
//! diagnostics:
//!
//! - `Line` and `Column` value types, kept distinct so they cannot be swapped
//! - `SourceCoordinate`, a 1-based line/column pair that also acts as a cursor offset
//! - `SourceCoordinateRange`, a half-open `[begin, end)` span of coordinates

pub mod coordinate;
pub mod range;
