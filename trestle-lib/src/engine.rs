//! The table engine: event handling over the visible-row pipeline.

use log::debug;
use log::warn;

use crate::config::TableConfig;
use crate::error::ConfigError;
use crate::error::SelectionError;
use crate::model::Row;
use crate::model::RowId;
use crate::pipeline;
use crate::pipeline::PageSize;
use crate::pipeline::PageState;
use crate::pipeline::SortState;
use crate::selection::SelectionTracker;
use crate::view::RenderFrame;
use crate::view::SelectionSummary;
use crate::view::View;

/// The data engine behind one enhanced table.
///
/// Owns the ingested rows and the filter/sort/page/selection state.
/// Every event re-runs the filter, sort and paginate stages synchronously
/// and returns the resulting [`RenderFrame`]; the host forwards frames to
/// whatever [`View`] it owns. Hosts may compose any number of independent
/// engines side by side.
///
/// # Example
///
/// ```
/// use trestle_lib::TableEngine;
/// use trestle_lib::config::TableConfig;
/// use trestle_lib::model::Row;
///
/// let rows = vec![
///     Row::new(["1", "Ada"]),
///     Row::new(["2", "Grace"]),
/// ];
/// let mut engine = TableEngine::new(rows, TableConfig::default()).unwrap();
/// let frame = engine.on_search_changed("gra");
/// assert_eq!(frame.info.total, 1);
/// assert_eq!(frame.page_rows[0].cell(1), Some("Grace"));
/// ```
pub struct TableEngine {
    store: Vec<Row>,
    config: TableConfig,
    search_term: String,
    sort: SortState,
    page: PageState,
    selection: SelectionTracker,
}

impl TableEngine {
    /// Creates an engine over the given rows.
    ///
    /// Ingestion assigns each row its stable original-order index.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the configuration is malformed; the
    /// engine fails at construction rather than limping along.
    pub fn new(rows: Vec<Row>, config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let store: Vec<Row> = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| row.with_index(index))
            .collect();
        debug!("[engine] ingested {} rows", store.len());
        Ok(Self {
            store,
            page: PageState::new(config.default_page_size),
            config,
            search_term: String::new(),
            sort: SortState::default(),
            selection: SelectionTracker::new(),
        })
    }

    /// Applies a new search term and recomputes from page 1.
    pub fn on_search_changed(&mut self, term: &str) -> RenderFrame {
        self.search_term = term.to_lowercase();
        self.page.reset();
        debug!("[engine] search changed to {:?}", self.search_term);
        self.frame()
    }

    /// Switches the entries-per-page setting and recomputes from page 1.
    ///
    /// A size that is not among the configured options is ignored.
    pub fn on_page_size_changed(&mut self, size: PageSize) -> RenderFrame {
        if !self.config.page_size_options.contains(&size) {
            warn!("[engine] ignoring page size {size}: not offered by the config");
            return self.frame();
        }
        self.page.set_size(size);
        debug!("[engine] page size changed to {size}");
        self.frame()
    }

    /// Applies the two-state sort toggle for the given column header and
    /// recomputes from page 1.
    ///
    /// An out-of-range column is ignored.
    pub fn on_header_activated(&mut self, column: usize) -> RenderFrame {
        let width = self
            .store
            .iter()
            .map(|row| row.cells().len())
            .max()
            .unwrap_or(0);
        if column >= width {
            warn!("[engine] ignoring sort on out-of-range column {column}");
            return self.frame();
        }
        self.sort = self.sort.toggled(column);
        self.page.reset();
        debug!(
            "[engine] sorting column {column} {:?}",
            self.sort.direction()
        );
        self.frame()
    }

    /// Navigates to the requested page, clamped to the valid range.
    pub fn on_page_requested(&mut self, page: usize) -> RenderFrame {
        let total = self.visible().len();
        let total_pages = match self.page.size() {
            PageSize::All => 1,
            PageSize::Limit(limit) => total.div_ceil(limit.max(1)).max(1),
        };
        self.page.go_to(page.clamp(1, total_pages));
        self.frame()
    }

    /// Marks or unmarks one row's checkbox.
    ///
    /// The visible set is unchanged, but a fresh frame is returned so the
    /// view can redraw checkbox state.
    pub fn on_row_check_toggled(&mut self, id: RowId, checked: bool) -> RenderFrame {
        self.selection.toggle(id, checked);
        self.frame()
    }

    /// Marks or unmarks every row in the store, on-page or not.
    pub fn on_select_all_toggled(&mut self, checked: bool) -> RenderFrame {
        self.selection.toggle_all(&self.store, checked);
        self.frame()
    }

    /// Recomputes the current frame without changing any state.
    pub fn frame(&self) -> RenderFrame {
        let mut visible = pipeline::filter(&self.store, &self.search_term);
        if let Some(column) = self.sort.column() {
            pipeline::sort(&self.store, &mut visible, column, self.sort.direction());
        }
        let slice = pipeline::paginate(
            visible.len(),
            self.page.current(),
            self.page.size(),
            &self.config.labels,
        );
        debug!(
            "[engine] frame: {} visible of {} rows, page {}",
            visible.len(),
            self.store.len(),
            self.page.current()
        );
        let page_rows = visible[slice.range.clone()]
            .iter()
            .map(|&index| self.store[index].clone())
            .collect();
        RenderFrame {
            page_rows,
            info: slice.info,
            controls: slice.controls,
            selection: self.selection_summary(),
        }
    }

    /// Forwards the current frame to the given view.
    pub fn render_to(&self, view: &mut impl View) {
        view.render(&self.frame());
    }

    /// Runs `action` over the selected rows in original store order.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::EmptySelection`] when nothing is checked;
    /// the callback is never invoked in that case.
    pub fn perform_action_on_selected<F>(&self, action: F) -> Result<(), SelectionError>
    where
        F: FnOnce(&[Row]),
    {
        self.selection
            .perform_action_on_selected(&self.store, action)
    }

    /// Returns every ingested row in original order.
    pub fn rows(&self) -> &[Row] {
        &self.store
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the current (lower-cased) search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the current sort state.
    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Returns the current page state.
    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// Returns the selection tracker.
    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Returns the selection tracker for direct manipulation.
    pub fn selection_mut(&mut self) -> &mut SelectionTracker {
        &mut self.selection
    }

    fn visible(&self) -> Vec<usize> {
        pipeline::filter(&self.store, &self.search_term)
    }

    fn selection_summary(&self) -> SelectionSummary {
        let selected: Vec<RowId> = self
            .store
            .iter()
            .map(Row::id)
            .filter(|&id| self.selection.is_selected(id))
            .collect();
        SelectionSummary {
            all_selected: !self.store.is_empty() && selected.len() == self.store.len(),
            selected,
        }
    }
}
