//! Reusable ladder fixtures.
//!
//! - [`single_rung_ladder`]: 3 lines, one rung between lines 0 and 1.
//! - [`staircase_ladder`]: 3 lines, a walker from line 0 steps right twice.
//! - [`tied_cycle_ladder`]: 2 lines whose tied rung ends trap a walker
//!   starting at line 1.

use amida_core::{Ladder, Waypoint};

/// Build a ladder from `(left, left_position, right_position)` triples.
///
/// Panics if any rung is malformed; fixtures are expected to be valid.
pub fn ladder_from(line_count: u32, rungs: &[(u32, f64, f64)]) -> Ladder {
    let mut ladder = Ladder::new(line_count);
    for &(left, lp, rp) in rungs {
        if let Err(e) = ladder.connect(left, lp, rp) {
            panic!("invalid fixture rung ({left}, {lp}, {rp}): {e}");
        }
    }
    ladder
}

/// Convert `(line, position)` pairs into waypoints.
pub fn waypoints(points: &[(u32, f64)]) -> Vec<Waypoint> {
    points.iter().copied().map(Waypoint::from).collect()
}

/// N=3, rungs = [(0, 0.3, 0.6)].
///
/// Traces: 0 → 1, 1 → 0, 2 → 2.
pub fn single_rung_ladder() -> Ladder {
    ladder_from(3, &[(0, 0.3, 0.6)])
}

/// N=3, rungs = [(0, 0.2, 0.5), (1, 0.7, 0.1)].
///
/// Line 0 steps onto line 1 at 0.5, then onto line 2 at 0.1.
pub fn staircase_ladder() -> Ladder {
    ladder_from(3, &[(0, 0.2, 0.5), (1, 0.7, 0.1)])
}

/// N=2, rungs = [(0, 0.2, 0.8), (0, 0.6, 0.5), (0, 0.2, 0.3)].
///
/// The first and third rungs share height 0.2 on line 0. A walker from
/// line 1 enters through the third rung and then alternates between the
/// first two forever. Line 0 terminates normally on line 1.
pub fn tied_cycle_ladder() -> Ladder {
    ladder_from(2, &[(0, 0.2, 0.8), (0, 0.6, 0.5), (0, 0.2, 0.3)])
}
