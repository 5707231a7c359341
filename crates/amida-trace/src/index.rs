//! Per-line rung index.
//!
//! The index is a cache derived from a [`RungRegistry`]: one list per line,
//! holding every rung that touches the line, sorted ascending by the height
//! at which the rung meets *that* line. It is never patched incrementally;
//! [`RungIndex::rebuild`] recomputes it wholesale.
//!
//! # Ordering
//!
//! Entries compare by their touching-position on the indexed line, using
//! the left position when the line is the rung's left end and the right
//! position when it is the rung's right end. The sort is stable and rungs
//! are inserted in [`RungId`] order, so rungs meeting a line at exactly the
//! same height keep their registry insertion order.

use amida_core::{LineId, LineRegistry, Rung, RungId, RungRegistry, RungSide};
use smallvec::SmallVec;

/// One rung as seen from one of the lines it touches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RungEntry {
    /// The rung's identity in its registry.
    pub rung: RungId,
    /// Which end of the rung touches the indexed line.
    pub side: RungSide,
    /// Height at which the rung meets the indexed line.
    pub position: f64,
    /// The line at the rung's other end.
    pub other_line: LineId,
    /// Height at which the rung meets the other line.
    pub other_position: f64,
}

impl RungEntry {
    fn new(rung: RungId, r: &Rung, side: RungSide) -> Self {
        let other = side.opposite();
        Self {
            rung,
            side,
            position: r.position(side),
            other_line: r.line(other),
            other_position: r.position(other),
        }
    }
}

type LineRungs = SmallVec<[RungEntry; 8]>;

/// Rungs touching each line, sorted by height along that line.
///
/// # Examples
///
/// ```
/// use amida_core::{Ladder, LineId};
/// use amida_trace::RungIndex;
///
/// let mut ladder = Ladder::new(3);
/// ladder.connect(0, 0.2, 0.5).unwrap();
/// ladder.connect(1, 0.7, 0.1).unwrap();
///
/// let index = RungIndex::build(ladder.lines(), ladder.rungs());
/// let heights: Vec<f64> = index.rungs_on(LineId(1)).iter().map(|e| e.position).collect();
/// assert_eq!(heights, vec![0.5, 0.7]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RungIndex {
    lines: Vec<LineRungs>,
}

impl RungIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index for the given registries.
    pub fn build(lines: &LineRegistry, rungs: &RungRegistry) -> Self {
        let mut index = Self::new();
        index.rebuild(lines, rungs);
        index
    }

    /// Discard the current contents and recompute from the registries.
    ///
    /// One (possibly empty) list is created per registered line. Rung ends
    /// that fall outside the line registry are not indexed; a
    /// [`Ladder`](amida_core::Ladder) never holds such rungs.
    pub fn rebuild(&mut self, lines: &LineRegistry, rungs: &RungRegistry) {
        let line_count = lines.count();
        for list in &mut self.lines {
            list.clear();
        }
        self.lines.resize_with(line_count, SmallVec::new);

        for (id, rung) in rungs.iter() {
            for side in [RungSide::Left, RungSide::Right] {
                if let Some(list) = self.lines.get_mut(rung.line(side).index()) {
                    list.push(RungEntry::new(id, rung, side));
                }
            }
        }

        for list in &mut self.lines {
            list.sort_by(|a, b| a.position.total_cmp(&b.position));
        }
    }

    /// Number of indexed lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no lines are indexed.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sorted rungs touching `line`; empty if `line` is not indexed.
    pub fn rungs_on(&self, line: LineId) -> &[RungEntry] {
        self.lines
            .get(line.index())
            .map(|l| l.as_slice())
            .unwrap_or(&[])
    }

    /// The first rung met on `line` strictly below `position`.
    ///
    /// A rung sitting exactly at `position` is skipped: a walker standing at
    /// a rung's height does not re-cross it.
    pub fn next_below(&self, line: LineId, position: f64) -> Option<&RungEntry> {
        self.rungs_on(line).iter().find(|e| e.position > position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amida_core::Ladder;

    fn heights(index: &RungIndex, line: u32) -> Vec<f64> {
        index
            .rungs_on(LineId(line))
            .iter()
            .map(|e| e.position)
            .collect()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn empty_ladder_builds_empty_index() {
        let ladder = Ladder::new(0);
        let index = RungIndex::build(ladder.lines(), ladder.rungs());
        assert!(index.is_empty());
        assert!(index.rungs_on(LineId(0)).is_empty());
    }

    #[test]
    fn one_list_per_line() {
        let ladder = Ladder::new(4);
        let index = RungIndex::build(ladder.lines(), ladder.rungs());
        assert_eq!(index.line_count(), 4);
        for i in 0..4 {
            assert!(index.rungs_on(LineId(i)).is_empty());
        }
    }

    #[test]
    fn rung_appears_on_both_lines() {
        let mut ladder = Ladder::new(3);
        ladder.connect(0, 0.3, 0.6).unwrap();
        let index = RungIndex::build(ladder.lines(), ladder.rungs());

        let left = index.rungs_on(LineId(0));
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].side, RungSide::Left);
        assert_eq!(left[0].position, 0.3);
        assert_eq!(left[0].other_line, LineId(1));
        assert_eq!(left[0].other_position, 0.6);

        let right = index.rungs_on(LineId(1));
        assert_eq!(right.len(), 1);
        assert_eq!(right[0].side, RungSide::Right);
        assert_eq!(right[0].position, 0.6);
        assert_eq!(right[0].other_line, LineId(0));

        assert!(index.rungs_on(LineId(2)).is_empty());
    }

    // ── Ordering ────────────────────────────────────────────────

    #[test]
    fn sorts_left_vs_left() {
        let mut ladder = Ladder::new(2);
        ladder.connect(0, 0.8, 0.1).unwrap();
        ladder.connect(0, 0.2, 0.9).unwrap();
        let index = RungIndex::build(ladder.lines(), ladder.rungs());
        assert_eq!(heights(&index, 0), vec![0.2, 0.8]);
    }

    #[test]
    fn sorts_right_vs_right() {
        let mut ladder = Ladder::new(2);
        ladder.connect(0, 0.1, 0.9).unwrap();
        ladder.connect(0, 0.2, 0.4).unwrap();
        let index = RungIndex::build(ladder.lines(), ladder.rungs());
        assert_eq!(heights(&index, 1), vec![0.4, 0.9]);
    }

    #[test]
    fn sorts_mixed_sides_by_side_specific_height() {
        // Line 1 is the right end of rung A and the left end of rung B.
        let mut ladder = Ladder::new(3);
        let a = ladder.connect(0, 0.1, 0.7).unwrap();
        let b = ladder.connect(1, 0.4, 0.95).unwrap();
        let c = ladder.connect(0, 0.9, 0.2).unwrap();
        let index = RungIndex::build(ladder.lines(), ladder.rungs());

        let on_one: Vec<(RungId, RungSide)> = index
            .rungs_on(LineId(1))
            .iter()
            .map(|e| (e.rung, e.side))
            .collect();
        assert_eq!(
            on_one,
            vec![
                (c, RungSide::Right),
                (b, RungSide::Left),
                (a, RungSide::Right),
            ]
        );
        assert_eq!(heights(&index, 1), vec![0.2, 0.4, 0.7]);
    }

    #[test]
    fn equal_heights_keep_insertion_order() {
        let mut ladder = Ladder::new(3);
        let first = ladder.connect(1, 0.5, 0.3).unwrap();
        let second = ladder.connect(0, 0.6, 0.5).unwrap();
        let third = ladder.connect(1, 0.5, 0.8).unwrap();
        let index = RungIndex::build(ladder.lines(), ladder.rungs());
        let ids: Vec<RungId> = index.rungs_on(LineId(1)).iter().map(|e| e.rung).collect();
        assert_eq!(ids, vec![first, second, third]);
    }

    // ── Rebuild ─────────────────────────────────────────────────

    #[test]
    fn rebuild_reflects_new_rungs() {
        let mut ladder = Ladder::new(2);
        ladder.connect(0, 0.5, 0.5).unwrap();
        let mut index = RungIndex::build(ladder.lines(), ladder.rungs());
        assert_eq!(index.rungs_on(LineId(0)).len(), 1);

        ladder.connect(0, 0.25, 0.75).unwrap();
        index.rebuild(ladder.lines(), ladder.rungs());
        assert_eq!(heights(&index, 0), vec![0.25, 0.5]);
    }

    #[test]
    fn rebuild_shrinks_to_new_line_count() {
        let mut wide = Ladder::new(5);
        wide.connect(3, 0.5, 0.5).unwrap();
        let mut index = RungIndex::build(wide.lines(), wide.rungs());
        assert_eq!(index.line_count(), 5);

        let narrow = Ladder::new(2);
        index.rebuild(narrow.lines(), narrow.rungs());
        assert_eq!(index.line_count(), 2);
        assert!(index.rungs_on(LineId(3)).is_empty());
    }

    // ── next_below ──────────────────────────────────────────────

    #[test]
    fn next_below_is_strict() {
        let mut ladder = Ladder::new(2);
        ladder.connect(0, 0.3, 0.6).unwrap();
        let index = RungIndex::build(ladder.lines(), ladder.rungs());
        assert!(index.next_below(LineId(0), 0.0).is_some());
        assert!(index.next_below(LineId(0), 0.3).is_none());
        assert!(index.next_below(LineId(1), 0.6).is_none());
        assert!(index.next_below(LineId(1), 0.59).is_some());
    }

    #[test]
    fn next_below_unknown_line_is_none() {
        let ladder = Ladder::new(2);
        let index = RungIndex::build(ladder.lines(), ladder.rungs());
        assert!(index.next_below(LineId(9), 0.0).is_none());
    }
}
