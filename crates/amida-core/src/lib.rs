//! Core types for the Amida ghost-leg engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data model every other crate in the workspace builds on: line and
//! rung identifiers, the [`Line`] and [`Rung`] values, the registries that
//! hold them for one round, the [`Waypoint`] emitted by a trace, and the
//! [`LadderError`] taxonomy for malformed input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod ladder;
pub mod line;
pub mod rung;
pub mod waypoint;

pub use error::LadderError;
pub use id::{LineId, RungId};
pub use ladder::Ladder;
pub use line::{Line, LineRegistry};
pub use rung::{Rung, RungRegistry, RungSide};
pub use waypoint::Waypoint;
