//! Row data model

mod row;

pub use row::*;
