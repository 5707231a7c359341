//! Per-trace metrics.
//!
//! [`TraceMetrics`] captures sizes and timings for a single
//! [`Tracer::trace()`](crate::Tracer::trace) call.

/// Sizes and timings collected during one trace.
///
/// Durations are in microseconds. The tracer overwrites these fields on
/// every call; read them from
/// [`Tracer::last_metrics()`](crate::Tracer::last_metrics).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraceMetrics {
    /// Lines in the traced ladder.
    pub line_count: usize,
    /// Rungs in the traced ladder.
    pub rung_count: usize,
    /// Rungs crossed by the walk.
    pub crossings: usize,
    /// Waypoints emitted (zero on failure).
    pub waypoint_count: usize,
    /// Time spent rebuilding the rung index, in microseconds.
    pub index_build_us: u64,
    /// Time spent walking, in microseconds.
    pub walk_us: u64,
}
