use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    EXPECTS,
};

use super::coordinate::SourceCoordinate;

/// The half-open interval `[begin, end)` of source coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceCoordinateRange {
    begin: SourceCoordinate,
    end: SourceCoordinate,
}

impl SourceCoordinateRange {
    /// Fails with `ErrorImpl::InvertedRange` when `begin` comes after `end`.
    pub fn new(begin: SourceCoordinate, end: SourceCoordinate) -> Result<Self, Error> {
        EXPECTS!(begin <= end, ErrorImpl::InvertedRange { begin, end });
        Ok(SourceCoordinateRange { begin, end })
    }

    pub fn begin(&self) -> SourceCoordinate {
        self.begin
    }

    pub fn end(&self) -> SourceCoordinate {
        self.end
    }

    pub fn empty(&self) -> bool {
        self.begin == self.end
    }
}

impl Display for SourceCoordinateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "from {} to {}", self.begin, self.end)
    }
}
