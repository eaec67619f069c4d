//! Identity-based row selection.

use std::collections::HashSet;

use crate::error::SelectionError;
use crate::model::Row;
use crate::model::RowId;

/// Tracks which rows are checked, independent of filter/sort/page state.
///
/// Selection is identity-based, not position-based: a row filtered out of
/// view and back in keeps its checked state, and "select all" covers the
/// full store rather than just the rows on the current page.
///
/// # Example
///
/// ```
/// use trestle_lib::model::Row;
/// use trestle_lib::selection::SelectionTracker;
///
/// let store = vec![Row::new(["1"]), Row::new(["2"])];
/// let mut tracker = SelectionTracker::new();
/// tracker.toggle(store[1].id(), true);
/// assert_eq!(tracker.selected(&store).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    checked: HashSet<RowId>,
}

impl SelectionTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks or unmarks a single row.
    pub fn toggle(&mut self, id: RowId, checked: bool) {
        if checked {
            self.checked.insert(id);
        } else {
            self.checked.remove(&id);
        }
    }

    /// Marks or unmarks every row in the store, on-page or not.
    pub fn toggle_all(&mut self, store: &[Row], checked: bool) {
        if checked {
            self.checked.extend(store.iter().map(Row::id));
        } else {
            self.checked.clear();
        }
    }

    /// Returns whether the given row is checked.
    pub fn is_selected(&self, id: RowId) -> bool {
        self.checked.contains(&id)
    }

    /// Returns the number of checked rows.
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    /// Returns whether nothing is checked.
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Unchecks everything.
    pub fn clear(&mut self) {
        self.checked.clear();
    }

    /// Returns the checked rows in the store's original order, regardless
    /// of the current filter, sort or page.
    pub fn selected(&self, store: &[Row]) -> Vec<Row> {
        store
            .iter()
            .filter(|row| self.checked.contains(&row.id()))
            .cloned()
            .collect()
    }

    /// Runs `action` over the checked rows, in original order.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::EmptySelection`] when nothing is checked,
    /// so the host can surface a notice instead of acting on nothing.
    pub fn perform_action_on_selected<F>(
        &self,
        store: &[Row],
        action: F,
    ) -> Result<(), SelectionError>
    where
        F: FnOnce(&[Row]),
    {
        let rows = self.selected(store);
        if rows.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        action(&rows);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Vec<Row> {
        vec![Row::new(["1"]), Row::new(["2"]), Row::new(["3"])]
    }

    #[test]
    fn test_toggle_and_untoggle() {
        let store = store();
        let mut tracker = SelectionTracker::new();

        tracker.toggle(store[0].id(), true);
        assert!(tracker.is_selected(store[0].id()));

        tracker.toggle(store[0].id(), false);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_toggle_all_covers_the_whole_store() {
        let store = store();
        let mut tracker = SelectionTracker::new();

        tracker.toggle_all(&store, true);
        assert_eq!(tracker.len(), 3);

        tracker.toggle_all(&store, false);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_selected_keeps_original_order() {
        let store = store();
        let mut tracker = SelectionTracker::new();
        tracker.toggle(store[2].id(), true);
        tracker.toggle(store[0].id(), true);

        let values: Vec<String> = tracker
            .selected(&store)
            .iter()
            .map(|row| row.cell_or_empty(0).to_string())
            .collect();
        assert_eq!(values, ["1", "3"]);
    }

    #[test]
    fn test_action_requires_a_non_empty_selection() {
        let store = store();
        let mut tracker = SelectionTracker::new();

        let result = tracker.perform_action_on_selected(&store, |_| {
            panic!("callback must not run on an empty selection");
        });
        assert_eq!(result, Err(SelectionError::EmptySelection));

        tracker.toggle(store[1].id(), true);
        let mut seen = Vec::new();
        tracker
            .perform_action_on_selected(&store, |rows| {
                seen = rows.iter().map(|row| row.cell_or_empty(0).to_string()).collect();
            })
            .unwrap();
        assert_eq!(seen, ["2"]);
    }
}
