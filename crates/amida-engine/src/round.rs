//! One round of the lottery.
//!
//! [`Round`] is the owned session object: it holds the ladder, the tracer
//! that walks it, the seeded rung generator, and the marked result slot.
//! Presentation code holds a `&mut Round` (or moves it into a
//! [`PlaybackDriver`](crate::PlaybackDriver)) instead of reaching for
//! shared global state.

use amida_core::{Ladder, LadderError, LineId, Rung, RungId};
use amida_trace::{Trace, TraceError, TraceMetrics, Tracer};

use crate::config::{ConfigError, RoundConfig};
use crate::generator::RungGenerator;

/// Where one start line ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The line the walk started from.
    pub start: LineId,
    /// The line the walk finished on.
    pub terminal: LineId,
    /// Whether `terminal` is the round's marked line.
    pub marked: bool,
}

/// A ladder plus everything needed to draw rungs on it and trace it.
///
/// # Examples
///
/// ```
/// use amida_core::LineId;
/// use amida_engine::{Round, RoundConfig};
///
/// let mut round = Round::new(RoundConfig { line_count: 4, rung_count: 6, seed: 7 }).unwrap();
/// assert_eq!(round.ladder().rungs().count(), 6);
///
/// let trace = round.trace(LineId(2)).unwrap();
/// assert_eq!(trace.start(), LineId(2));
/// assert_eq!(trace.waypoints().last().unwrap().position, 1.0);
/// ```
#[derive(Debug)]
pub struct Round {
    config: RoundConfig,
    ladder: Ladder,
    tracer: Tracer,
    generator: RungGenerator,
    marked_line: LineId,
}

impl Round {
    /// Create a round: `line_count` lines, a randomly marked result line,
    /// and `rung_count` random rungs.
    pub fn new(config: RoundConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut generator = RungGenerator::new(config.seed);
        let ladder = Ladder::new(config.line_count);
        let marked_line = generator
            .pick_line(ladder.line_count())
            .ok_or(ConfigError::NoLines)?;

        let mut round = Self {
            config,
            ladder,
            tracer: Tracer::new(),
            generator,
            marked_line,
        };
        for _ in 0..round.config.rung_count {
            round.add_random_rung()?;
        }
        Ok(round)
    }

    /// The configuration this round was built from.
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The round's ladder.
    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.ladder.line_count()
    }

    /// The line carrying the marked result.
    pub fn marked_line(&self) -> LineId {
        self.marked_line
    }

    /// Register a caller-supplied rung.
    pub fn add_rung(&mut self, rung: Rung) -> Result<RungId, LadderError> {
        self.ladder.add_rung(rung)
    }

    /// Draw one random rung and register it.
    pub fn add_random_rung(&mut self) -> Result<RungId, LadderError> {
        let rung = self.generator.next_rung(self.ladder.line_count())?;
        self.ladder.add_rung(rung)
    }

    /// Trace the walk from `start`.
    pub fn trace(&mut self, start: LineId) -> Result<Trace, TraceError> {
        self.tracer.trace(&self.ladder, start)
    }

    /// Trace from `start` and report whether it lands on the marked line.
    pub fn outcome(&mut self, start: LineId) -> Result<Outcome, TraceError> {
        let terminal = self.trace(start)?.terminal();
        Ok(Outcome {
            start,
            terminal,
            marked: terminal == self.marked_line,
        })
    }

    /// Outcomes for every line, left to right.
    pub fn results(&mut self) -> Result<Vec<Outcome>, TraceError> {
        (0..self.line_count() as u32)
            .map(|i| self.outcome(LineId(i)))
            .collect()
    }

    /// Start over with `line_count` lines and no rungs.
    ///
    /// The marked line is re-drawn. The generator keeps its stream rather
    /// than being reseeded, so successive resets produce fresh rounds.
    pub fn reset(&mut self, line_count: u32) -> Result<(), ConfigError> {
        let config = RoundConfig {
            line_count,
            rung_count: 0,
            seed: self.config.seed,
        };
        config.validate()?;
        let ladder = Ladder::new(line_count);
        self.marked_line = self
            .generator
            .pick_line(ladder.line_count())
            .ok_or(ConfigError::NoLines)?;
        self.ladder = ladder;
        self.tracer = Tracer::new();
        self.config = config;
        Ok(())
    }

    /// Metrics from the most recent trace.
    pub fn last_metrics(&self) -> &TraceMetrics {
        self.tracer.last_metrics()
    }
}
