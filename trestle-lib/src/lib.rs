//! Table data engine
//!
//! A client-side table-enhancement engine: search filtering, per-column
//! sorting, pagination and row selection over caller-supplied rows. The
//! engine owns all row-set logic and emits render instructions; drawing is
//! left to a host-provided [`view::View`].

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod selection;
pub mod view;

mod engine;

pub use engine::*;
