//! Points on a traced path.

use crate::id::LineId;

/// A `(line, position)` pair marking one point of a trace.
///
/// `position` is the fractional height along `line`: `0.0` is the top,
/// `1.0` the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    /// The line the point lies on.
    pub line: LineId,
    /// Fractional height along the line, in `[0, 1]`.
    pub position: f64,
}

impl Waypoint {
    /// Create a waypoint.
    pub fn new(line: LineId, position: f64) -> Self {
        Self { line, position }
    }

    /// The top of `line`.
    pub fn top(line: LineId) -> Self {
        Self::new(line, 0.0)
    }

    /// The bottom of `line`.
    pub fn bottom(line: LineId) -> Self {
        Self::new(line, 1.0)
    }

    /// The same point in a left-right mirrored ladder of `line_count` lines.
    pub fn mirrored(&self, line_count: usize) -> Option<Self> {
        self.line
            .mirrored(line_count)
            .map(|line| Self::new(line, self.position))
    }
}

impl From<(u32, f64)> for Waypoint {
    fn from((line, position): (u32, f64)) -> Self {
        Self::new(LineId(line), position)
    }
}
