//! Error types

mod config;
mod selection;

pub use config::*;
pub use selection::*;
