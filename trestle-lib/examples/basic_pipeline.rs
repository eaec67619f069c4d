//! Drives a single engine through search, sort and page events, printing
//! every frame through a minimal text view.
//!
//! Run with: `cargo run -p trestle-lib --example basic_pipeline`

use trestle_lib::TableEngine;
use trestle_lib::config::TableConfig;
use trestle_lib::model::Row;
use trestle_lib::pipeline::PageSize;
use trestle_lib::view::{RenderFrame, View};

struct TextView;

impl View for TextView {
    fn render(&mut self, frame: &RenderFrame) {
        for row in &frame.page_rows {
            println!("  {}", row.cells().join(" | "));
        }
        if frame.info.total == 0 {
            println!("  No entries found");
        } else {
            println!(
                "  Showing {} to {} of {} entries",
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
            println!("  {}", strip.join(" "));
        }
        println!();
    }
}

fn main() {
    let rows = vec![
        Row::new(["1", "Tiago", "Lisbon"]),
        Row::new(["2", "Ana", "Porto"]),
        Row::new(["3", "Bruno", "Lisbon"]),
        Row::new(["4", "Carla", "Braga"]),
        Row::new(["5", "Diego", "Faro"]),
    ];
    let config = TableConfig::new()
        .with_page_size_options([PageSize::Limit(2), PageSize::All])
        .with_default_page_size(PageSize::Limit(2));

    let mut engine = TableEngine::new(rows, config).expect("valid config");
    let mut view = TextView;

    println!("initial frame:");
    engine.render_to(&mut view);

    println!("after searching for \"lisbon\":");
    engine.on_search_changed("lisbon");
    engine.render_to(&mut view);

    println!("after sorting the name column descending:");
    engine.on_search_changed("");
    engine.on_header_activated(1);
    engine.on_header_activated(1);
    engine.render_to(&mut view);

    println!("page 2 of the sorted table:");
    engine.on_page_requested(2);
    engine.render_to(&mut view);
}
