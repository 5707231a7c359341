//! Amida: a ghost-leg (Amidakuji) ladder tracing engine.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Amida sub-crates. For most users, adding `amida` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use amida::prelude::*;
//!
//! // Three lines, one slanted rung from line 0 (at 0.3) to line 1 (at 0.6).
//! let mut ladder = Ladder::new(3);
//! ladder.connect(0, 0.3, 0.6).unwrap();
//!
//! let mut tracer = Tracer::new();
//! let trace = tracer.trace(&ladder, LineId(1)).unwrap();
//! assert_eq!(trace.terminal(), LineId(0));
//! assert_eq!(trace.waypoints().len(), 4);
//!
//! // Or let a seeded round place the rungs.
//! let mut round = Round::new(RoundConfig { line_count: 5, rung_count: 5, seed: 1 }).unwrap();
//! let outcomes = round.results().unwrap();
//! assert_eq!(outcomes.len(), 5);
//! assert_eq!(outcomes.iter().filter(|o| o.marked).count(), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `amida-core` | IDs, lines, rungs, registries, waypoints, `LadderError` |
//! | [`trace`] | `amida-trace` | Rung index, tracer, trace metrics |
//! | [`engine`] | `amida-engine` | Rounds, layout projection, playback |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and registries (`amida-core`).
///
/// Contains [`types::Ladder`], [`types::Rung`], [`types::Waypoint`], the
/// line and rung registries, and [`types::LadderError`].
pub use amida_core as types;

/// Rung index and walk (`amida-trace`).
///
/// [`trace::Tracer`] produces a [`trace::Trace`] from a ladder and a start
/// line, rebuilding its [`trace::RungIndex`] on every call.
pub use amida_trace as trace;

/// Round orchestration (`amida-engine`).
///
/// [`engine::Round`] owns one round's ladder, [`engine::LadderLayout`]
/// projects traces onto a canvas, and [`engine::Playback`] /
/// [`engine::PlaybackDriver`] sequence the show/clear loop.
pub use amida_engine as engine;

/// Common imports for typical Amida usage.
///
/// ```rust
/// use amida::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use amida_core::{Ladder, LineId, Rung, RungId, RungSide, Waypoint};

    // Errors
    pub use amida_core::LadderError;
    pub use amida_engine::{ConfigError, PlaybackError};
    pub use amida_trace::TraceError;

    // Tracing
    pub use amida_trace::{Trace, TraceMetrics, Tracer};

    // Engine
    pub use amida_engine::{
        Frame, FrameEvent, LadderLayout, Outcome, Playback, PlaybackDriver, PlaybackTimings,
        Round, RoundConfig,
    };
}
