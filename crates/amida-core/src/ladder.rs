//! The [`Ladder`] aggregate: one round's lines and rungs.

use crate::error::LadderError;
use crate::id::{LineId, RungId};
use crate::line::{Line, LineRegistry};
use crate::rung::{Rung, RungRegistry};

/// Lines and rungs for one round.
///
/// Owns a [`LineRegistry`] and a [`RungRegistry`] and keeps the rung
/// registry's bound in step with the line count, so every rung it holds
/// joins two registered lines.
///
/// # Examples
///
/// ```
/// use amida_core::{Ladder, LineId};
///
/// let mut ladder = Ladder::new(3);
/// ladder.connect(0, 0.3, 0.6).unwrap();
/// assert_eq!(ladder.line_count(), 3);
/// assert_eq!(ladder.rungs().count(), 1);
///
/// // Line 2 has no right-hand neighbour.
/// assert!(ladder.connect(2, 0.5, 0.5).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Ladder {
    lines: LineRegistry,
    rungs: RungRegistry,
}

impl Ladder {
    /// Create a ladder of `line_count` lines and no rungs.
    pub fn new(line_count: u32) -> Self {
        Self {
            lines: LineRegistry::with_count(line_count),
            rungs: RungRegistry::new(line_count as usize),
        }
    }

    /// The line registry.
    pub fn lines(&self) -> &LineRegistry {
        &self.lines
    }

    /// The rung registry.
    pub fn rungs(&self) -> &RungRegistry {
        &self.rungs
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.count()
    }

    /// Append one line to the right edge and return its identity.
    pub fn add_line(&mut self) -> LineId {
        let id = self.lines.next_id();
        // next_id() is always accepted.
        let _ = self.lines.add(Line::new(id));
        self.rungs.set_line_count(self.lines.count());
        id
    }

    /// Register a rung.
    ///
    /// Returns `Err(LadderError::MalformedRung)` if the rung's left line is
    /// outside `[0, N-2]`.
    pub fn add_rung(&mut self, rung: Rung) -> Result<RungId, LadderError> {
        self.rungs.add(rung)
    }

    /// Build and register a rung from `(left, left_position, right_position)`.
    pub fn connect(
        &mut self,
        left: u32,
        left_position: f64,
        right_position: f64,
    ) -> Result<RungId, LadderError> {
        let rung = Rung::new(LineId(left), left_position, right_position)?;
        self.add_rung(rung)
    }

    /// The left-right mirror image of this ladder.
    ///
    /// Lines map `i -> N-1-i` and each rung swaps its left and right
    /// roles. Rungs keep their insertion order, so equal-height ties
    /// resolve the same way in both ladders.
    pub fn mirrored(&self) -> Ladder {
        let n = self.line_count();
        let mut mirror = Ladder::new(n as u32);
        for (_, rung) in self.rungs.iter() {
            // Every registered rung fits in `n` lines.
            if let Some(m) = rung.mirrored(n) {
                let _ = mirror.add_rung(m);
            }
        }
        mirror
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ladder_has_dense_lines() {
        let ladder = Ladder::new(4);
        assert_eq!(ladder.line_count(), 4);
        assert!(ladder.lines().contains(LineId(3)));
        assert!(!ladder.lines().contains(LineId(4)));
        assert!(ladder.rungs().is_empty());
    }

    #[test]
    fn empty_ladder_rejects_rungs() {
        let mut ladder = Ladder::new(0);
        assert_eq!(ladder.line_count(), 0);
        assert!(ladder.connect(0, 0.5, 0.5).is_err());
    }

    #[test]
    fn add_line_widens_rung_bound() {
        let mut ladder = Ladder::new(1);
        assert!(ladder.connect(0, 0.5, 0.5).is_err());
        assert_eq!(ladder.add_line(), LineId(1));
        assert!(ladder.connect(0, 0.5, 0.5).is_ok());
        assert_eq!(ladder.rungs().line_count(), 2);
    }

    #[test]
    fn connect_propagates_position_errors() {
        let mut ladder = Ladder::new(3);
        let err = ladder.connect(0, 1.0, 0.5).unwrap_err();
        assert!(matches!(err, LadderError::MalformedRung { .. }));
    }

    #[test]
    fn mirrored_preserves_order_and_count() {
        let mut ladder = Ladder::new(3);
        ladder.connect(0, 0.2, 0.5).unwrap();
        ladder.connect(1, 0.7, 0.1).unwrap();
        let mirror = ladder.mirrored();
        let rungs: Vec<Rung> = mirror.rungs().iter().map(|(_, r)| *r).collect();
        assert_eq!(rungs.len(), 2);
        assert_eq!(rungs[0], Rung::new(LineId(1), 0.5, 0.2).unwrap());
        assert_eq!(rungs[1], Rung::new(LineId(0), 0.1, 0.7).unwrap());
    }
}
