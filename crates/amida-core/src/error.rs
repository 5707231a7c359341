//! Error types for ladder construction.

use crate::id::LineId;
use std::error::Error;
use std::fmt;

/// Errors arising while populating a ladder's registries.
///
/// All of these are rejected at insertion time; a registry never holds
/// a value that would trip one of them later.
#[derive(Clone, Debug, PartialEq)]
pub enum LadderError {
    /// A rung's positions or line indices are not valid.
    MalformedRung {
        /// The rung's left line.
        left: LineId,
        /// Position on the left line.
        left_position: f64,
        /// Position on the right line.
        right_position: f64,
        /// What went wrong.
        reason: String,
    },
    /// A line was registered out of order, leaving a gap in `0..N`.
    NonDenseLine {
        /// The index the registry expected next.
        expected: LineId,
        /// The index that was supplied.
        got: LineId,
    },
    /// A rung was requested for a ladder with fewer than two lines.
    NoAdjacentLines {
        /// Lines in the ladder.
        line_count: usize,
    },
    /// The registry already holds as many rungs as a [`RungId`](crate::RungId) can name.
    RegistryFull {
        /// Rungs already registered.
        count: usize,
    },
}

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRung {
                left,
                left_position,
                right_position,
                reason,
            } => write!(
                f,
                "malformed rung at line {left} ({left_position}, {right_position}): {reason}"
            ),
            Self::NonDenseLine { expected, got } => {
                write!(f, "line {got} registered out of order, expected line {expected}")
            }
            Self::NoAdjacentLines { line_count } => {
                write!(f, "a ladder of {line_count} line(s) has no adjacent pair")
            }
            Self::RegistryFull { count } => {
                write!(f, "rung registry is full at {count} rungs")
            }
        }
    }
}

impl Error for LadderError {}
