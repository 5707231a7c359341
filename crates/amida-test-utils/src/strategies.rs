//! `proptest` strategies for random ladders.

use amida_core::Ladder;
use proptest::prelude::*;

fn open_unit() -> impl Strategy<Value = f64> {
    0.001f64..0.999
}

/// Ladders of `2..=max_lines` lines with up to `max_rungs` rungs.
///
/// Heights are drawn independently, so shrinking may produce ties.
pub fn arb_ladder(max_lines: u32, max_rungs: usize) -> impl Strategy<Value = Ladder> {
    (2..=max_lines.max(2)).prop_flat_map(move |line_count| {
        let rung = (0..line_count - 1, open_unit(), open_unit());
        proptest::collection::vec(rung, 0..=max_rungs).prop_map(move |rungs| {
            let mut ladder = Ladder::new(line_count);
            for (left, lp, rp) in rungs {
                // Strategy ranges keep every rung in bounds.
                let _ = ladder.connect(left, lp, rp);
            }
            ladder
        })
    })
}

/// Ladders whose rung ends all sit at distinct heights.
///
/// Each of the `2 × rung_count` ends gets a unique rank, mapped to the
/// height `(rank + 1) / (2 × rung_count + 1)`.
pub fn arb_tie_free_ladder(max_lines: u32, max_rungs: usize) -> impl Strategy<Value = Ladder> {
    (2..=max_lines.max(2), 0..=max_rungs).prop_flat_map(|(line_count, rung_count)| {
        let lefts = proptest::collection::vec(0..line_count - 1, rung_count);
        let ranks = Just((0..2 * rung_count).collect::<Vec<usize>>()).prop_shuffle();
        (lefts, ranks).prop_map(move |(lefts, ranks)| {
            let slots = (2 * rung_count + 1) as f64;
            let mut ladder = Ladder::new(line_count);
            for (i, left) in lefts.into_iter().enumerate() {
                let lp = (ranks[2 * i] + 1) as f64 / slots;
                let rp = (ranks[2 * i + 1] + 1) as f64 / slots;
                let _ = ladder.connect(left, lp, rp);
            }
            ladder
        })
    })
}
