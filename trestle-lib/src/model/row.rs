//! Table rows and their identity

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Opaque identity of a row.
///
/// An identity is minted at ingestion and stays attached to the row for the
/// engine's lifetime, so selection can follow a row across filtering,
/// sorting and paging without caring about positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId(Uuid);

impl RowId {
    /// Mints a fresh row identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One table row: an ordered sequence of display cells plus a stable
/// original-order index and an opaque identity.
///
/// Rows are immutable once ingested; every pipeline stage works on index
/// vectors into the store, never on copies of the rows themselves.
///
/// # Example
///
/// ```
/// use trestle_lib::model::Row;
///
/// let row = Row::new(["42", "Ada Lovelace", "London"]);
/// assert_eq!(row.cell(1), Some("Ada Lovelace"));
/// assert_eq!(row.cell(9), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    id: RowId,
    index: usize,
    cells: Vec<String>,
}

impl Row {
    /// Creates a row from its cell text.
    ///
    /// The original-order index is assigned by the engine at ingestion;
    /// until then it is 0.
    pub fn new(cells: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: RowId::new(),
            index: 0,
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Returns the opaque row identity.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Returns the stable original-order position of this row.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the cell text at `column`, or `None` when out of range.
    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Returns the cell text at `column`, treating missing cells as empty.
    pub(crate) fn cell_or_empty(&self, column: usize) -> &str {
        self.cell(column).unwrap_or("")
    }

    /// Returns all cells in column order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Returns the concatenation of all cell text, used for searching.
    pub fn full_text(&self) -> String {
        self.cells.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities_are_unique() {
        let a = Row::new(["x"]);
        let b = Row::new(["x"]);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_cell_access() {
        let row = Row::new(["1", "two"]);
        assert_eq!(row.cell(0), Some("1"));
        assert_eq!(row.cell(2), None);
        assert_eq!(row.cell_or_empty(2), "");
    }

    #[test]
    fn test_full_text_concatenates_cells() {
        let row = Row::new(["ab", "cd"]);
        assert_eq!(row.full_text(), "abcd");
    }
}
