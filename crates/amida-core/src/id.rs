//! Strongly-typed identifiers for lines and rungs.

use std::fmt;

/// Identifies a vertical line within a ladder.
///
/// Lines are registered densely: `LineId(n)` is the n-th line from the
/// left, and a ladder of `N` lines uses exactly `0..N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u32);

impl LineId {
    /// The line index as a `usize`, for slice indexing.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The line's neighbour to the right, if `self` is not `u32::MAX`.
    ///
    /// Does not check against a ladder's line count.
    pub fn right_neighbour(self) -> Option<LineId> {
        self.0.checked_add(1).map(LineId)
    }

    /// Reflect this line across the vertical centre of an `line_count`-line
    /// ladder: `i -> N-1-i`.
    ///
    /// Returns `None` when `self` is not a line of that ladder.
    pub fn mirrored(self, line_count: usize) -> Option<LineId> {
        let last = line_count.checked_sub(1)?;
        let mirrored = last.checked_sub(self.index())?;
        u32::try_from(mirrored).ok().map(LineId)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LineId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a rung within a [`RungRegistry`](crate::RungRegistry).
///
/// Assigned sequentially at insertion, so ordering by `RungId` is
/// insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RungId(pub u32);

impl RungId {
    /// The rung's slot in its registry.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RungId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RungId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
