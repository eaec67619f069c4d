//! Plain-text rendering of engine frames.

use trestle_lib::view::RenderFrame;
use trestle_lib::view::View;

/// Renders frames as aligned text columns on stdout.
///
/// The engine knows nothing about column headers (they belong to the host
/// table), so the view carries them.
pub struct TextView {
    headers: Vec<String>,
    show_checkboxes: bool,
}

impl TextView {
    pub fn new(headers: Vec<String>, show_checkboxes: bool) -> Self {
        Self {
            headers,
            show_checkboxes,
        }
    }
}

impl View for TextView {
    fn render(&mut self, frame: &RenderFrame) {
        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &frame.page_rows {
            for (column, cell) in row.cells().iter().enumerate() {
                if column >= widths.len() {
                    widths.push(cell.len());
                } else if cell.len() > widths[column] {
                    widths[column] = cell.len();
                }
            }
        }

        let header_line: Vec<String> = self
            .headers
            .iter()
            .enumerate()
            .map(|(column, header)| format!("{header:<width$}", width = widths[column]))
            .collect();
        let prefix = if self.show_checkboxes { "    " } else { "" };
        println!("{prefix}{}", header_line.join("  "));

        for row in &frame.page_rows {
            let cells: Vec<String> = row
                .cells()
                .iter()
                .enumerate()
                .map(|(column, cell)| format!("{cell:<width$}", width = widths[column]))
                .collect();
            if self.show_checkboxes {
                let mark = if frame.selection.selected.contains(&row.id()) {
                    "[x] "
                } else {
                    "[ ] "
                };
                println!("{mark}{}", cells.join("  "));
            } else {
                println!("{}", cells.join("  "));
            }
        }

        if frame.info.total == 0 {
            println!("No entries found");
        } else {
            println!(
                "Showing {} to {} of {} entries",
                frame.info.first, frame.info.last, frame.info.total
            );
        }

        if let Some(controls) = &frame.controls {
            let strip: Vec<String> = controls
                .items
                .iter()
                .map(|item| {
                    if item.active {
                        format!("[{}]*", item.label)
                    } else {
                        format!("[{}]", item.label)
                    }
                })
                .collect();
            println!("{}", strip.join(" "));
        }
    }
}
