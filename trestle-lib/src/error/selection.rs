//! Selection error types

/// Errors from selection-dependent actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// An action over the selection was requested while nothing is
    /// checked.
    ///
    /// This is a reported condition for the host to surface as a notice,
    /// not an engine fault: the callback is simply never invoked.
    #[error("no rows are selected")]
    EmptySelection,
}
