//! The engine/view boundary.

use serde::Deserialize;
use serde::Serialize;

use crate::model::Row;
use crate::model::RowId;
use crate::pipeline::PageControls;
use crate::pipeline::PageInfo;

/// Checkbox state the view needs to redraw selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    /// Identities of every checked row, in original store order.
    pub selected: Vec<RowId>,
    /// Whether every row in the store is checked; drives the header box.
    pub all_selected: bool,
}

/// Everything a view needs to redraw the table after a recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// The rows of the current page, in display order.
    pub page_rows: Vec<Row>,
    /// Shown-entries information ("showing x to y of z").
    pub info: PageInfo,
    /// Navigation controls; `None` when everything fits on one page.
    pub controls: Option<PageControls>,
    /// Current checkbox state.
    pub selection: SelectionSummary,
}

/// A rendering surface for the engine.
///
/// The engine knows nothing about presentation. After every recomputation
/// it hands the fresh frame to the view, which owns markup, icons,
/// active/disabled styling and accessibility concerns.
pub trait View {
    /// Draws the given frame.
    fn render(&mut self, frame: &RenderFrame);
}
