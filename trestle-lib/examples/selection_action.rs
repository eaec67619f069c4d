//! Selection demo: checks a few rows, selects all, and runs a host-side
//! action that collects the ID column of the selected rows.
//!
//! Run with: `cargo run -p trestle-lib --example selection_action`

use trestle_lib::TableEngine;
use trestle_lib::config::TableConfig;
use trestle_lib::error::SelectionError;
use trestle_lib::model::Row;

fn main() {
    let rows: Vec<Row> = (1..=25).map(|n| Row::new([n.to_string()])).collect();
    let config = TableConfig::new().with_checkboxes(true);
    let mut engine = TableEngine::new(rows, config).expect("valid config");

    // Acting before anything is checked is a reported condition, not a
    // silent no-op.
    match engine.perform_action_on_selected(|_| {}) {
        Err(SelectionError::EmptySelection) => println!("nothing selected yet"),
        Ok(()) => unreachable!("selection starts empty"),
    }

    let third = engine.rows()[2].id();
    engine.on_row_check_toggled(third, true);

    engine
        .perform_action_on_selected(|rows| {
            let ids: Vec<&str> = rows.iter().filter_map(|row| row.cell(0)).collect();
            println!("selected IDs: {}", ids.join(", "));
        })
        .expect("one row is checked");

    // Select-all covers the whole store, including the pages that are not
    // currently shown.
    let frame = engine.on_select_all_toggled(true);
    println!(
        "select all: {} of {} rows checked (header box: {})",
        frame.selection.selected.len(),
        engine.rows().len(),
        frame.selection.all_selected
    );
}
