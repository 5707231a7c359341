//! Round orchestration for Amida ladders.
//!
//! Provides the owned [`Round`] session that replaces a global drawing
//! manager: it holds one round's ladder, the tracer, and a seeded rung
//! generator. Around it sit the caller-side pieces of a presentation
//! loop:
//!
//! - [`LadderLayout`]: projects waypoints and rungs onto canvas coordinates.
//! - [`Playback`]: a state machine yielding show/clear frames per line.
//! - [`PlaybackDriver`]: runs a [`Playback`] on a background thread and
//!   streams frames over a channel.
//!
//! The trace engine itself stays synchronous; all timing lives here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod generator;
pub mod layout;
pub mod playback;
pub mod round;

pub use config::{ConfigError, PlaybackTimings, RoundConfig};
pub use driver::{DriverEvent, PlaybackDriver, PlaybackError};
pub use generator::RungGenerator;
pub use layout::{LadderLayout, Point};
pub use playback::{Frame, FrameEvent, Playback};
pub use round::{Outcome, Round};
