//! Benchmark profiles for the Amida ghost-leg engine.
//!
//! - [`reference_ladder`]: 16 lines, 200 seeded random rungs
//! - [`stress_ladder`]: 256 lines, 20K seeded random rungs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use amida_core::Ladder;
use amida_engine::RungGenerator;

/// Build a ladder of `line_count` lines with `rung_count` random rungs.
///
/// Panics if `line_count < 2` and `rung_count > 0`.
pub fn seeded_ladder(line_count: u32, rung_count: usize, seed: u64) -> Ladder {
    let mut generator = RungGenerator::new(seed);
    let mut ladder = Ladder::new(line_count);
    for _ in 0..rung_count {
        let rung = generator
            .next_rung(ladder.line_count())
            .expect("profile ladders have at least two lines");
        ladder
            .add_rung(rung)
            .expect("generated rungs fit the ladder");
    }
    ladder
}

/// Reference profile: 16 lines, 200 rungs.
pub fn reference_ladder(seed: u64) -> Ladder {
    seeded_ladder(16, 200, seed)
}

/// Stress profile: 256 lines, 20K rungs.
pub fn stress_ladder(seed: u64) -> Ladder {
    seeded_ladder(256, 20_000, seed)
}
