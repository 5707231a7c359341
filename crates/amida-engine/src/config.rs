//! Round configuration, validation, and error types.
//!
//! [`RoundConfig`] is the input for [`Round::new()`](crate::Round::new);
//! [`validate()`](RoundConfig::validate) checks it before any rung is drawn.
//! [`PlaybackTimings`] controls the delays of the playback loop.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use amida_core::LadderError;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating configuration or building a round.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `line_count` is zero.
    NoLines,
    /// `line_count` exceeds [`RoundConfig::MAX_LINES`].
    TooManyLines {
        /// The configured count.
        configured: u32,
        /// The maximum accepted.
        max: u32,
    },
    /// `rung_count` exceeds [`RoundConfig::MAX_RUNGS`].
    TooManyRungs {
        /// The configured count.
        configured: u32,
        /// The maximum accepted.
        max: u32,
    },
    /// Rungs were requested for a ladder with no adjacent pair of lines.
    RungsWithoutNeighbour {
        /// The configured line count.
        line_count: u32,
        /// The configured rung count.
        rung_count: u32,
    },
    /// A [`LadderLayout`](crate::LadderLayout) invariant is violated.
    InvalidLayout {
        /// Description of which invariant was violated.
        reason: String,
    },
    /// A generated rung was rejected by the ladder.
    Ladder(LadderError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLines => write!(f, "line_count must be at least 1"),
            Self::TooManyLines { configured, max } => {
                write!(f, "line_count {configured} exceeds maximum of {max}")
            }
            Self::TooManyRungs { configured, max } => {
                write!(f, "rung_count {configured} exceeds maximum of {max}")
            }
            Self::RungsWithoutNeighbour {
                line_count,
                rung_count,
            } => write!(
                f,
                "{rung_count} rungs requested but {line_count} line(s) have no neighbour"
            ),
            Self::InvalidLayout { reason } => write!(f, "invalid layout: {reason}"),
            Self::Ladder(e) => write!(f, "ladder: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ladder(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LadderError> for ConfigError {
    fn from(e: LadderError) -> Self {
        Self::Ladder(e)
    }
}

// ── RoundConfig ────────────────────────────────────────────────────

/// Parameters for one round.
///
/// The seed fully determines the marked line and every generated rung.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundConfig {
    /// Number of vertical lines. Default: 5.
    pub line_count: u32,
    /// Number of random rungs placed when the round is created. Default: 5.
    pub rung_count: u32,
    /// Seed for the rung generator. Default: 0.
    pub seed: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            line_count: 5,
            rung_count: 5,
            seed: 0,
        }
    }
}

impl RoundConfig {
    /// Upper bound on `line_count`.
    pub const MAX_LINES: u32 = 4096;

    /// Upper bound on `rung_count`.
    pub const MAX_RUNGS: u32 = 65_536;

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line_count == 0 {
            return Err(ConfigError::NoLines);
        }
        if self.line_count > Self::MAX_LINES {
            return Err(ConfigError::TooManyLines {
                configured: self.line_count,
                max: Self::MAX_LINES,
            });
        }
        if self.rung_count > Self::MAX_RUNGS {
            return Err(ConfigError::TooManyRungs {
                configured: self.rung_count,
                max: Self::MAX_RUNGS,
            });
        }
        if self.line_count < 2 && self.rung_count > 0 {
            return Err(ConfigError::RungsWithoutNeighbour {
                line_count: self.line_count,
                rung_count: self.rung_count,
            });
        }
        Ok(())
    }
}

// ── PlaybackTimings ────────────────────────────────────────────────

/// Delays between playback frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackTimings {
    /// How long a trace stays on screen before it is cleared. Default: 4 s.
    pub hold: Duration,
    /// Pause after clearing a trace before the next one. Default: 2 s.
    pub gap: Duration,
}

impl Default for PlaybackTimings {
    fn default() -> Self {
        Self {
            hold: Duration::from_millis(4000),
            gap: Duration::from_millis(2000),
        }
    }
}

impl PlaybackTimings {
    /// No delays at all; useful for tests and headless runs.
    pub fn immediate() -> Self {
        Self {
            hold: Duration::ZERO,
            gap: Duration::ZERO,
        }
    }
}
