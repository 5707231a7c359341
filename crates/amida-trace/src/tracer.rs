//! The walk: from a start line down through every rung it meets.
//!
//! # Algorithm
//!
//! Starting at `(start, 0.0)`, the walker repeatedly asks the
//! [`RungIndex`] for the first rung on its current line strictly below its
//! current height. Each rung found emits two waypoints (the end the walker
//! arrives at, then the end it is diverted to) and moves the walker to the
//! other line at the other end's height. When no rung remains below, the
//! walk ends with `(line, 1.0)`.
//!
//! # Termination
//!
//! The walk is deterministic, so crossing the same end of the same rung
//! twice means it will cycle forever. An acyclic walk therefore crosses at
//! most `2 × rung_count` times; one more crossing is reported as
//! [`TraceError::CycleDetected`].
//!
//! When no two rung ends share a height on the same line, every line
//! segment has exactly one way in, so no cycle is reachable from the top.
//! A tie breaks that: a walker landing at a shared height skips the other
//! end, and crossed slanted rungs around it can then trap the walker.

use std::time::Instant;

use amida_core::{Ladder, LineId, Waypoint};

use crate::error::TraceError;
use crate::index::RungIndex;
use crate::metrics::TraceMetrics;

/// The waypoints of one complete walk.
///
/// Always starts at `(start, 0.0)`, ends at `(terminal, 1.0)`, and holds two
/// waypoints per rung crossed in between.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    start: LineId,
    waypoints: Vec<Waypoint>,
}

impl Trace {
    /// The line the walk started from.
    pub fn start(&self) -> LineId {
        self.start
    }

    /// The line the walk finished on.
    pub fn terminal(&self) -> LineId {
        self.waypoints
            .last()
            .map(|w| w.line)
            .unwrap_or(self.start)
    }

    /// All waypoints in walk order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Number of rungs crossed.
    pub fn crossings(&self) -> usize {
        self.waypoints.len().saturating_sub(2) / 2
    }

    /// Consume the trace, returning its waypoints.
    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }
}

/// Runs walks over a ladder.
///
/// Owns the [`RungIndex`] cache, which is rebuilt at the start of every
/// [`trace()`](Tracer::trace) so that rungs added since the last call are
/// always seen.
///
/// # Examples
///
/// ```
/// use amida_core::{Ladder, LineId, Waypoint};
/// use amida_trace::Tracer;
///
/// let mut ladder = Ladder::new(3);
/// ladder.connect(0, 0.3, 0.6).unwrap();
///
/// let mut tracer = Tracer::new();
/// let trace = tracer.trace(&ladder, LineId(0)).unwrap();
/// assert_eq!(
///     trace.waypoints(),
///     &[
///         Waypoint::from((0, 0.0)),
///         Waypoint::from((0, 0.3)),
///         Waypoint::from((1, 0.6)),
///         Waypoint::from((1, 1.0)),
///     ]
/// );
/// assert_eq!(trace.terminal(), LineId(1));
/// ```
#[derive(Debug, Default)]
pub struct Tracer {
    index: RungIndex,
    metrics: TraceMetrics,
}

impl Tracer {
    /// Create a tracer with an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the ladder from `start` to the bottom.
    ///
    /// # Errors
    ///
    /// - [`TraceError::StartOutOfRange`] if `start` is not a line of
    ///   `ladder` (including every start on an empty ladder).
    /// - [`TraceError::CycleDetected`] if the walk never reaches the bottom.
    ///
    /// No waypoints are returned on failure.
    pub fn trace(&mut self, ladder: &Ladder, start: LineId) -> Result<Trace, TraceError> {
        let line_count = ladder.line_count();
        self.metrics = TraceMetrics {
            line_count,
            rung_count: ladder.rungs().count(),
            ..TraceMetrics::default()
        };
        if start.index() >= line_count {
            return Err(TraceError::StartOutOfRange { start, line_count });
        }

        let build_start = Instant::now();
        self.index.rebuild(ladder.lines(), ladder.rungs());
        self.metrics.index_build_us = build_start.elapsed().as_micros() as u64;

        let walk_start = Instant::now();
        let result = self.walk(start, ladder.rungs().count());
        self.metrics.walk_us = walk_start.elapsed().as_micros() as u64;

        let trace = result?;
        self.metrics.crossings = trace.crossings();
        self.metrics.waypoint_count = trace.waypoints.len();
        Ok(trace)
    }

    /// Trace every line of the ladder, left to right.
    ///
    /// Stops at the first failing line.
    pub fn trace_all(&mut self, ladder: &Ladder) -> Result<Vec<Trace>, TraceError> {
        ladder
            .lines()
            .iter()
            .map(|line| self.trace(ladder, line.id()))
            .collect()
    }

    /// The index built by the most recent trace.
    pub fn index(&self) -> &RungIndex {
        &self.index
    }

    /// Metrics from the most recent trace.
    pub fn last_metrics(&self) -> &TraceMetrics {
        &self.metrics
    }

    fn walk(&self, start: LineId, rung_count: usize) -> Result<Trace, TraceError> {
        let max_crossings = rung_count.saturating_mul(2);
        let mut line = start;
        let mut position = 0.0;
        let mut crossings = 0usize;
        let mut waypoints = vec![Waypoint::top(start)];

        while let Some(entry) = self.index.next_below(line, position) {
            if crossings == max_crossings {
                return Err(TraceError::CycleDetected {
                    start,
                    line,
                    position,
                    crossings,
                });
            }
            waypoints.push(Waypoint::new(line, entry.position));
            waypoints.push(Waypoint::new(entry.other_line, entry.other_position));
            line = entry.other_line;
            position = entry.other_position;
            crossings += 1;
        }

        waypoints.push(Waypoint::bottom(line));
        Ok(Trace { start, waypoints })
    }
}
