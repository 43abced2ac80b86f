use std::{fmt::Display, ops::Add};

/// A line number. Lines are counted from 1; a line of 0 means "no lines moved".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(pub u32);

/// A column number. Columns are counted from 1; a column of 0 means "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Column(pub u32);

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position in a source file.
///
/// Coordinates are ordered by line first and column second. They double as
/// cursor offsets: adding a coordinate that spans part of a line, or several
/// lines, moves the cursor past that text (see the `Add` impl).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceCoordinate {
    // Field order drives the derived ordering.
    line: Line,
    column: Column,
}

impl SourceCoordinate {
    pub const fn new(line: Line, column: Column) -> Self {
        SourceCoordinate { line, column }
    }

    pub const fn line(&self) -> Line {
        self.line
    }

    pub const fn column(&self) -> Column {
        self.column
    }
}

impl Default for SourceCoordinate {
    fn default() -> Self {
        SourceCoordinate::new(Line(1), Column(1))
    }
}

impl Add for SourceCoordinate {
    type Output = SourceCoordinate;

    /// Moves `self` past the text described by `distance`.
    ///
    /// When `distance` stays on the current line the columns are summed.
    /// Otherwise the lines are summed and the column becomes the width of the
    /// trailing partial line, or 1 if that width is unknown. Lines and
    /// columns saturate at `u32::MAX`.
    fn add(self, distance: SourceCoordinate) -> Self::Output {
        let column = if distance.line.0 == 0 {
            Column(self.column.0.saturating_add(distance.column.0))
        } else if distance.column.0 > 0 {
            distance.column
        } else {
            Column(1)
        };

        SourceCoordinate::new(Line(self.line.0.saturating_add(distance.line.0)), column)
    }
}

impl Display for SourceCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
