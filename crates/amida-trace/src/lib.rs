//! Path tracing for Amida ladders.
//!
//! Two pieces make up the trace engine:
//!
//! - [`RungIndex`]: for every line, the rungs touching it sorted by the
//!   height at which they meet that line. Rebuilt from scratch at the start
//!   of every trace.
//! - [`Tracer`]: walks the index from a start line, zig-zagging across each
//!   rung it meets on the way down, and returns the [`Trace`] of
//!   waypoints visited.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod index;
pub mod metrics;
pub mod tracer;

pub use error::TraceError;
pub use index::{RungEntry, RungIndex};
pub use metrics::TraceMetrics;
pub use tracer::{Trace, Tracer};
