//! Error types for the trace engine.

use amida_core::LineId;
use std::error::Error;
use std::fmt;

/// Errors from [`Tracer::trace()`](crate::Tracer::trace).
///
/// A failed trace produces no waypoints.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceError {
    /// The start line is not a line of the ladder.
    StartOutOfRange {
        /// The requested start line.
        start: LineId,
        /// Number of lines in the ladder.
        line_count: usize,
    },
    /// The walk revisited a rung crossing and would never reach the bottom.
    ///
    /// Only possible when two rung ends meet the same line at exactly the
    /// same height.
    CycleDetected {
        /// The requested start line.
        start: LineId,
        /// Line the walker was on when the cycle was detected.
        line: LineId,
        /// Height the walker was at when the cycle was detected.
        position: f64,
        /// Crossings taken before giving up.
        crossings: usize,
    },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfRange { start, line_count } => {
                write!(f, "start line {start} out of range [0, {line_count})")
            }
            Self::CycleDetected {
                start,
                line,
                position,
                crossings,
            } => write!(
                f,
                "trace from line {start} cycles: still on line {line} at {position} \
                 after {crossings} crossings"
            ),
        }
    }
}

impl Error for TraceError {}
