//! Test fixtures and property-test strategies for Amida development.
//!
//! - [`fixtures`]: hand-built ladders with known traces.
//! - [`strategies`]: `proptest` strategies producing random ladders.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{
    ladder_from, single_rung_ladder, staircase_ladder, tied_cycle_ladder, waypoints,
};
pub use strategies::{arb_ladder, arb_tie_free_ladder};
