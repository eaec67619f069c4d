//! The visible-row pipeline: filter, sort, paginate.
//!
//! Each stage is a pure function over index vectors into the engine's row
//! store: filtering narrows the vector, sorting permutes it, pagination
//! slices it. The store itself is never copied or reordered.

mod filter;
mod page;
mod sort;

pub use filter::*;
pub use page::*;
pub use sort::*;
