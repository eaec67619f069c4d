//! Configuration error types

use crate::pipeline::PageSize;

/// Errors raised when a [`TableConfig`](crate::config::TableConfig) is
/// rejected at engine construction.
///
/// A malformed configuration is fatal: the engine refuses to come up
/// rather than operate with collaborators it cannot trust.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The entries-per-page selector has nothing to offer.
    #[error("page size options must not be empty")]
    NoPageSizeOptions,

    /// A zero-row page can never show anything.
    #[error("page size options must be at least 1 row")]
    ZeroPageSize,

    /// The default page size is missing from the offered options.
    #[error("default page size {size} is not one of the offered options")]
    DefaultSizeNotOffered {
        /// The rejected default.
        size: PageSize,
    },

    /// A page size string was neither a positive integer nor `all`.
    #[error("invalid page size: {0:?}")]
    InvalidPageSize(String),
}
