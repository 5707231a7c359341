//! Vertical lines and the per-round line registry.

use crate::error::LadderError;
use crate::id::LineId;
use indexmap::IndexMap;

/// One vertical track a walker can occupy.
///
/// A line carries no state beyond its identity; geometry and labels
/// belong to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    id: LineId,
}

impl Line {
    /// Create a line with the given identity.
    pub fn new(id: LineId) -> Self {
        Self { id }
    }

    /// This line's identity.
    pub fn id(&self) -> LineId {
        self.id
    }
}

/// The ordered set of lines in one round.
///
/// Lines must be registered densely, in index order, so that the
/// registry always holds exactly `0..count()`.
///
/// # Examples
///
/// ```
/// use amida_core::{Line, LineId, LineRegistry};
///
/// let mut lines = LineRegistry::new();
/// lines.add(Line::new(LineId(0))).unwrap();
/// lines.add(Line::new(LineId(1))).unwrap();
/// assert_eq!(lines.count(), 2);
/// assert!(lines.get(LineId(1)).is_some());
/// assert!(lines.get(LineId(2)).is_none());
///
/// // Skipping an index is rejected.
/// assert!(lines.add(Line::new(LineId(5))).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineRegistry {
    lines: IndexMap<LineId, Line>,
}

impl LineRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding lines `0..count`.
    pub fn with_count(count: u32) -> Self {
        let lines = (0..count)
            .map(|i| (LineId(i), Line::new(LineId(i))))
            .collect();
        Self { lines }
    }

    /// Register the next line.
    ///
    /// Returns `Err(LadderError::NonDenseLine)` unless `line.id()` equals
    /// the current [`count()`](Self::count).
    pub fn add(&mut self, line: Line) -> Result<(), LadderError> {
        let expected = self.next_id();
        if line.id() != expected {
            return Err(LadderError::NonDenseLine {
                expected,
                got: line.id(),
            });
        }
        self.lines.insert(line.id(), line);
        Ok(())
    }

    /// Look up a line by identity.
    pub fn get(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    /// Whether `id` names a registered line.
    pub fn contains(&self, id: LineId) -> bool {
        self.lines.contains_key(&id)
    }

    /// Number of registered lines.
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no lines are registered.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in insertion (and therefore index) order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// The identity the next [`add()`](Self::add) must carry.
    pub fn next_id(&self) -> LineId {
        LineId(self.lines.len() as u32)
    }
}
