//! Rungs (the horizontal legs of the ladder) and the rung registry.
//!
//! A rung always joins two adjacent lines, `left` and `left + 1`. Its two
//! endpoints sit at independent fractional heights, so a rung may be
//! slanted: `left_position` is measured along the left line and
//! `right_position` along the right line, both strictly inside `(0, 1)`.

use crate::error::LadderError;
use crate::id::{LineId, RungId};

/// Which end of a rung touches a given line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RungSide {
    /// The rung's left end (on line `left`).
    Left,
    /// The rung's right end (on line `left + 1`).
    Right,
}

impl RungSide {
    /// The other end of the rung.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A connector between two adjacent lines.
///
/// # Examples
///
/// ```
/// use amida_core::{LineId, Rung, RungSide};
///
/// let rung = Rung::new(LineId(0), 0.3, 0.6).unwrap();
/// assert_eq!(rung.right(), LineId(1));
/// assert_eq!(rung.side_of(LineId(1)), Some(RungSide::Right));
/// assert_eq!(rung.position_on(LineId(1)), Some(0.6));
/// assert_eq!(rung.position_on(LineId(2)), None);
///
/// // Endpoints must lie strictly inside the line.
/// assert!(Rung::new(LineId(0), 0.0, 0.5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rung {
    left: LineId,
    left_position: f64,
    right_position: f64,
}

impl Rung {
    /// Create a rung from `left` to `left + 1`.
    ///
    /// Returns `Err(LadderError::MalformedRung)` if either position is
    /// non-finite or outside the open interval `(0, 1)`, or if `left` has
    /// no right-hand neighbour.
    pub fn new(
        left: LineId,
        left_position: f64,
        right_position: f64,
    ) -> Result<Self, LadderError> {
        let malformed = |reason: &str| LadderError::MalformedRung {
            left,
            left_position,
            right_position,
            reason: reason.to_string(),
        };
        if !is_open_unit(left_position) {
            return Err(malformed("left position outside (0, 1)"));
        }
        if !is_open_unit(right_position) {
            return Err(malformed("right position outside (0, 1)"));
        }
        if left.right_neighbour().is_none() {
            return Err(malformed("left line has no right neighbour"));
        }
        Ok(Self {
            left,
            left_position,
            right_position,
        })
    }

    /// The line this rung's left end touches.
    pub fn left(&self) -> LineId {
        self.left
    }

    /// The line this rung's right end touches (always `left + 1`).
    pub fn right(&self) -> LineId {
        LineId(self.left.0 + 1)
    }

    /// Height of the left end, measured along the left line.
    pub fn left_position(&self) -> f64 {
        self.left_position
    }

    /// Height of the right end, measured along the right line.
    pub fn right_position(&self) -> f64 {
        self.right_position
    }

    /// The line touched by the given end.
    pub fn line(&self, side: RungSide) -> LineId {
        match side {
            RungSide::Left => self.left(),
            RungSide::Right => self.right(),
        }
    }

    /// The touching-position of the given end.
    pub fn position(&self, side: RungSide) -> f64 {
        match side {
            RungSide::Left => self.left_position,
            RungSide::Right => self.right_position,
        }
    }

    /// Which end of this rung touches `line`, if any.
    pub fn side_of(&self, line: LineId) -> Option<RungSide> {
        if line == self.left() {
            Some(RungSide::Left)
        } else if line == self.right() {
            Some(RungSide::Right)
        } else {
            None
        }
    }

    /// Height at which this rung meets `line`, if it touches it.
    pub fn position_on(&self, line: LineId) -> Option<f64> {
        self.side_of(line).map(|side| self.position(side))
    }

    /// The rung as it appears in a left-right mirrored ladder of
    /// `line_count` lines.
    ///
    /// Line `i` maps to `N-1-i`, so the old right end becomes the new left
    /// end and the positions swap. Returns `None` if the rung does not fit
    /// in a ladder of that width.
    pub fn mirrored(&self, line_count: usize) -> Option<Rung> {
        let left = self.right().mirrored(line_count)?;
        Some(Rung {
            left,
            left_position: self.right_position,
            right_position: self.left_position,
        })
    }
}

fn is_open_unit(v: f64) -> bool {
    v.is_finite() && v > 0.0 && v < 1.0
}

/// All rungs placed in one round, bounded by the ladder's line count.
///
/// No deduplication: overlapping rungs, or rungs meeting a line at the
/// same height, are accepted. Insertion order is preserved and exposed
/// through [`RungId`].
#[derive(Clone, Debug, Default)]
pub struct RungRegistry {
    rungs: Vec<Rung>,
    line_count: usize,
}

impl RungRegistry {
    /// Create an empty registry for a ladder of `line_count` lines.
    pub fn new(line_count: usize) -> Self {
        Self {
            rungs: Vec::new(),
            line_count,
        }
    }

    /// Register a rung and return its identity.
    ///
    /// Returns `Err(LadderError::MalformedRung)` if the rung's left line is
    /// outside `[0, N-2]`, or `Err(LadderError::RegistryFull)` once every
    /// `u32` identity is taken.
    pub fn add(&mut self, rung: Rung) -> Result<RungId, LadderError> {
        if rung.right().index() >= self.line_count {
            return Err(LadderError::MalformedRung {
                left: rung.left(),
                left_position: rung.left_position(),
                right_position: rung.right_position(),
                reason: format!(
                    "left line must be in [0, {}] for a ladder of {} lines",
                    self.line_count.saturating_sub(2),
                    self.line_count
                ),
            });
        }
        let count = self.rungs.len();
        let id = u32::try_from(count)
            .map(RungId)
            .map_err(|_| LadderError::RegistryFull { count })?;
        self.rungs.push(rung);
        Ok(id)
    }

    /// Look up a rung by identity.
    pub fn get(&self, id: RungId) -> Option<&Rung> {
        self.rungs.get(id.index())
    }

    /// All rungs with their identities, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RungId, &Rung)> {
        self.rungs
            .iter()
            .enumerate()
            .map(|(i, r)| (RungId(i as u32), r))
    }

    /// Number of registered rungs.
    pub fn count(&self) -> usize {
        self.rungs.len()
    }

    /// Returns `true` if no rungs are registered.
    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }

    /// The line count rungs are validated against.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub(crate) fn set_line_count(&mut self, line_count: usize) {
        self.line_count = line_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_accepts_interior_positions() {
        let r = Rung::new(LineId(2), 0.25, 0.75).unwrap();
        assert_eq!(r.left(), LineId(2));
        assert_eq!(r.right(), LineId(3));
        assert_eq!(r.left_position(), 0.25);
        assert_eq!(r.right_position(), 0.75);
    }

    #[test]
    fn new_rejects_boundary_positions() {
        assert!(Rung::new(LineId(0), 0.0, 0.5).is_err());
        assert!(Rung::new(LineId(0), 0.5, 1.0).is_err());
        assert!(Rung::new(LineId(0), -0.1, 0.5).is_err());
        assert!(Rung::new(LineId(0), 0.5, 1.1).is_err());
    }

    #[test]
    fn new_rejects_non_finite_positions() {
        assert!(Rung::new(LineId(0), f64::NAN, 0.5).is_err());
        assert!(Rung::new(LineId(0), 0.5, f64::INFINITY).is_err());
    }

    #[test]
    fn new_rejects_rightmost_possible_line() {
        let err = Rung::new(LineId(u32::MAX), 0.5, 0.5).unwrap_err();
        assert!(matches!(err, LadderError::MalformedRung { .. }));
    }

    // ── Sides ───────────────────────────────────────────────────

    #[test]
    fn side_lookup_covers_both_ends() {
        let r = Rung::new(LineId(1), 0.2, 0.8).unwrap();
        assert_eq!(r.side_of(LineId(1)), Some(RungSide::Left));
        assert_eq!(r.side_of(LineId(2)), Some(RungSide::Right));
        assert_eq!(r.side_of(LineId(0)), None);
        assert_eq!(r.position(RungSide::Left), 0.2);
        assert_eq!(r.position(RungSide::Right), 0.8);
        assert_eq!(r.line(RungSide::Right.opposite()), LineId(1));
    }

    #[test]
    fn mirrored_swaps_ends() {
        let r = Rung::new(LineId(0), 0.3, 0.6).unwrap();
        let m = r.mirrored(3).unwrap();
        assert_eq!(m.left(), LineId(1));
        assert_eq!(m.right(), LineId(2));
        assert_eq!(m.left_position(), 0.6);
        assert_eq!(m.right_position(), 0.3);
    }

    #[test]
    fn mirrored_rejects_narrow_ladder() {
        let r = Rung::new(LineId(2), 0.3, 0.6).unwrap();
        assert!(r.mirrored(3).is_none());
    }

    // ── Registry ────────────────────────────────────────────────

    #[test]
    fn registry_assigns_sequential_ids() {
        let mut reg = RungRegistry::new(3);
        let a = reg.add(Rung::new(LineId(0), 0.1, 0.2).unwrap()).unwrap();
        let b = reg.add(Rung::new(LineId(1), 0.3, 0.4).unwrap()).unwrap();
        assert_eq!(a, RungId(0));
        assert_eq!(b, RungId(1));
        assert_eq!(reg.count(), 2);
        assert_eq!(reg.get(b).unwrap().left(), LineId(1));
    }

    #[test]
    fn registry_rejects_rung_past_last_line() {
        let mut reg = RungRegistry::new(3);
        let err = reg.add(Rung::new(LineId(2), 0.1, 0.2).unwrap()).unwrap_err();
        match err {
            LadderError::MalformedRung { left, reason, .. } => {
                assert_eq!(left, LineId(2));
                assert!(reason.contains("[0, 1]"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(reg.is_empty());
    }

    #[test]
    fn registry_keeps_duplicates() {
        let mut reg = RungRegistry::new(2);
        let r = Rung::new(LineId(0), 0.5, 0.5).unwrap();
        reg.add(r).unwrap();
        reg.add(r).unwrap();
        assert_eq!(reg.count(), 2);
    }

    #[test]
    fn single_line_registry_rejects_everything() {
        let mut reg = RungRegistry::new(1);
        assert!(reg.add(Rung::new(LineId(0), 0.5, 0.5).unwrap()).is_err());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn mirroring_twice_is_identity(
            line_count in 2usize..20,
            left in 0u32..19,
            lp in 0.001f64..0.999,
            rp in 0.001f64..0.999,
        ) {
            let left = left % (line_count as u32 - 1);
            let r = Rung::new(LineId(left), lp, rp).unwrap();
            let back = r.mirrored(line_count).and_then(|m| m.mirrored(line_count));
            prop_assert_eq!(back, Some(r));
        }
    }
}
