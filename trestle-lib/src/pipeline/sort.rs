//! Per-column sorting with numeric/text auto-detection.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Row;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// The active sort, if any.
///
/// Header activation is a two-state toggle per column: activating a column
/// sorts it ascending; re-activating it while ascending flips to
/// descending; any other activation (a different column, or the same
/// column while descending) sets ascending again. There is no third
/// "unsorted" state once a column has been activated.
///
/// # Example
///
/// ```
/// use trestle_lib::pipeline::{Direction, SortState};
///
/// let state = SortState::default().toggled(2);
/// assert_eq!(state.direction(), Direction::Ascending);
/// let state = state.toggled(2);
/// assert_eq!(state.direction(), Direction::Descending);
/// let state = state.toggled(2);
/// assert_eq!(state.direction(), Direction::Ascending);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    column: Option<usize>,
    direction: Direction,
}

impl SortState {
    /// Applies a header activation and returns the resulting state.
    pub fn toggled(self, column: usize) -> Self {
        let direction = if self.column == Some(column) && self.direction == Direction::Ascending {
            Direction::Descending
        } else {
            Direction::Ascending
        };
        Self {
            column: Some(column),
            direction,
        }
    }

    /// Returns the sorted column, or `None` before the first activation.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// Returns the current sort direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// How a column's values compare for one sort invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Numeric,
    Text,
}

/// Classifies the column over exactly the rows in `visible`.
///
/// All-or-nothing: the column is numeric only when every trimmed cell is
/// non-empty and parses as a locale-independent decimal. A single empty or
/// non-numeric cell makes the whole column compare as text.
fn classify(store: &[Row], visible: &[usize], column: usize) -> ColumnKind {
    let numeric = visible.iter().all(|&index| {
        let cell = store[index].cell_or_empty(column).trim();
        !cell.is_empty() && cell.parse::<f64>().is_ok()
    });
    if numeric {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}

// Approximates localeCompare without locale tables: case-insensitive
// comparison of the trimmed text, raw text as tie-break so the order stays
// deterministic.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Reorders `visible` by the cells at `column`.
///
/// The column is classified on every call, not cached: filtering changes
/// which rows are present, and with them which values the classification
/// sees. The sort is stable, so rows with equal keys keep their relative
/// input order in both directions (descending reverses the comparator,
/// not the output). The store itself is untouched; a missing cell at
/// `column` compares as empty text.
pub fn sort(store: &[Row], visible: &mut [usize], column: usize, direction: Direction) {
    let kind = classify(store, visible, column);
    visible.sort_by(|&a, &b| {
        let cell_a = store[a].cell_or_empty(column).trim();
        let cell_b = store[b].cell_or_empty(column).trim();
        let ordering = match kind {
            ColumnKind::Numeric => {
                let num_a = cell_a.parse::<f64>().unwrap_or(f64::NAN);
                let num_b = cell_b.parse::<f64>().unwrap_or(f64::NAN);
                num_a.total_cmp(&num_b)
            }
            ColumnKind::Text => compare_text(cell_a, cell_b),
        };
        match direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    });
}
