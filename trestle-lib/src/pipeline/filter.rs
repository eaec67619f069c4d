//! Search filtering of the row store.

use crate::model::Row;

/// Returns the indices of the rows whose concatenated cell text contains
/// `term`, case-insensitively.
///
/// The output preserves the store's original relative order; an empty term
/// matches every row.
///
/// # Example
///
/// ```
/// use trestle_lib::model::Row;
/// use trestle_lib::pipeline::filter;
///
/// let store = vec![Row::new(["Ada"]), Row::new(["Grace"])];
/// assert_eq!(filter(&store, "gra"), vec![1]);
/// assert_eq!(filter(&store, ""), vec![0, 1]);
/// ```
pub fn filter(store: &[Row], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..store.len()).collect();
    }
    let needle = term.to_lowercase();
    store
        .iter()
        .enumerate()
        .filter(|(_, row)| row.full_text().to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Vec<Row> {
        vec![
            Row::new(["1", "Alice", "London"]),
            Row::new(["2", "Bob", "Paris"]),
            Row::new(["3", "Carol", "London"]),
        ]
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert_eq!(filter(&store(), ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(filter(&store(), "LONDON"), vec![0, 2]);
        assert_eq!(filter(&store(), "bob"), vec![1]);
    }

    #[test]
    fn test_no_match_yields_empty_set() {
        assert_eq!(filter(&store(), "berlin"), Vec::<usize>::new());
    }

    #[test]
    fn test_output_preserves_store_order() {
        // Matches must come out as a subsequence of the store, never
        // reordered by match quality.
        let indices = filter(&store(), "lon");
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_term_may_span_cell_boundaries() {
        // The search target is the concatenated row text, mirroring a
        // DOM-style textContent match.
        let store = vec![Row::new(["ab", "cd"])];
        assert_eq!(filter(&store, "bc"), vec![0]);
    }
}
