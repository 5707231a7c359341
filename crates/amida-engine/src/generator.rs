//! Seeded random rung placement.
//!
//! Uses a ChaCha8 RNG seeded from [`RoundConfig::seed`](crate::RoundConfig),
//! so identical seeds produce identical ladders.

use amida_core::{LadderError, LineId, Rung};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws rungs uniformly over adjacent line pairs and heights.
#[derive(Debug, Clone)]
pub struct RungGenerator {
    rng: ChaCha8Rng,
}

impl RungGenerator {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw one rung for a ladder of `line_count` lines.
    ///
    /// The left line is uniform over `[0, N-2]` and each end's height is
    /// uniform over `(0, 1)`. Returns `Err(LadderError::NoAdjacentLines)`
    /// without consuming any randomness when the ladder has fewer than two
    /// lines.
    pub fn next_rung(&mut self, line_count: usize) -> Result<Rung, LadderError> {
        if line_count < 2 {
            return Err(LadderError::NoAdjacentLines { line_count });
        }
        let left_position = self.open_unit();
        let right_position = self.open_unit();
        let left = self.rng.random_range(0..line_count - 1) as u32;
        Rung::new(LineId(left), left_position, right_position)
    }

    /// Pick one line uniformly, or `None` for an empty ladder.
    pub fn pick_line(&mut self, line_count: usize) -> Option<LineId> {
        if line_count == 0 {
            return None;
        }
        Some(LineId(self.rng.random_range(0..line_count) as u32))
    }

    /// Uniform sample from the open interval `(0, 1)`.
    fn open_unit(&mut self) -> f64 {
        loop {
            let v: f64 = self.rng.random();
            if v > 0.0 {
                return v;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn same_seed_same_rungs() {
        let mut a = RungGenerator::new(42);
        let mut b = RungGenerator::new(42);
        for _ in 0..32 {
            assert_eq!(a.next_rung(6).unwrap(), b.next_rung(6).unwrap());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = RungGenerator::new(1);
        let mut b = RungGenerator::new(2);
        let ra: Vec<Rung> = (0..8).map(|_| a.next_rung(6).unwrap()).collect();
        let rb: Vec<Rung> = (0..8).map(|_| b.next_rung(6).unwrap()).collect();
        assert_ne!(ra, rb);
    }

    #[test]
    fn two_line_ladder_always_uses_line_zero() {
        let mut g = RungGenerator::new(7);
        for _ in 0..32 {
            assert_eq!(g.next_rung(2).unwrap().left(), LineId(0));
        }
    }

    #[test]
    fn single_line_ladder_has_no_adjacent_pair() {
        let mut g = RungGenerator::new(7);
        assert_eq!(
            g.next_rung(1),
            Err(LadderError::NoAdjacentLines { line_count: 1 })
        );
    }

    #[test]
    fn rejected_draw_leaves_stream_untouched() {
        let mut failed = RungGenerator::new(7);
        let mut fresh = RungGenerator::new(7);
        assert!(failed.next_rung(0).is_err());
        assert!(failed.next_rung(1).is_err());
        assert_eq!(failed.pick_line(5), fresh.pick_line(5));
        assert_eq!(failed.next_rung(4).unwrap(), fresh.next_rung(4).unwrap());
    }

    #[test]
    fn pick_line_on_empty_ladder() {
        let mut g = RungGenerator::new(0);
        assert_eq!(g.pick_line(0), None);
        assert_eq!(g.pick_line(1), Some(LineId(0)));
    }

    proptest! {
        #[test]
        fn rungs_stay_in_bounds(seed in any::<u64>(), line_count in 2usize..64) {
            let mut g = RungGenerator::new(seed);
            for _ in 0..16 {
                let r = g.next_rung(line_count).unwrap();
                prop_assert!(r.right().index() < line_count);
                prop_assert!(r.left_position() > 0.0 && r.left_position() < 1.0);
                prop_assert!(r.right_position() > 0.0 && r.right_position() < 1.0);
            }
            let picked = g.pick_line(line_count).unwrap();
            prop_assert!(picked.index() < line_count);
        }
    }
}
