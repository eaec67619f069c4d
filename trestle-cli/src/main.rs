//! Command-line host for the table engine.
//!
//! Loads one or more CSV files (first record is the header row), applies
//! search/sort/page events from the command line, and renders the
//! resulting frame of each table as text. Each file gets its own
//! independent engine, the way a page can host several enhanced tables.

mod view;

use std::error::Error;
use std::fs::File;
use std::process::ExitCode;

use log::debug;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;
use trestle_lib::TableEngine;
use trestle_lib::config::TableConfig;
use trestle_lib::model::Row;
use trestle_lib::pipeline::PageSize;

use crate::view::TextView;

struct Options {
    files: Vec<String>,
    search: Option<String>,
    sort_column: Option<usize>,
    descending: bool,
    page: Option<usize>,
    page_size: Option<PageSize>,
    select_all: bool,
    id_column: usize,
    verbose: bool,
}

fn usage() -> &'static str {
    "usage: trestle-cli [options] <file.csv> [more.csv ...]\n\
     \n\
     options:\n\
       --search TERM      filter rows by TERM (case-insensitive)\n\
       --sort COL         sort by the 0-based column COL\n\
       --desc             sort descending (with --sort)\n\
       --page N           show page N (1-based)\n\
       --page-size N|all  entries per page\n\
       --select-all       check every row and print the selected IDs\n\
       --id-column N      column used as the row ID (default 0)\n\
       --verbose          enable debug logging"
}

fn next_value(
    iter: &mut std::slice::Iter<'_, String>,
    name: &str,
) -> Result<String, Box<dyn Error>> {
    iter.next()
        .cloned()
        .ok_or_else(|| format!("{name} needs a value").into())
}

fn parse_options(args: &[String]) -> Result<Options, Box<dyn Error>> {
    let mut options = Options {
        files: Vec::new(),
        search: None,
        sort_column: None,
        descending: false,
        page: None,
        page_size: None,
        select_all: false,
        id_column: 0,
        verbose: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--search" => options.search = Some(next_value(&mut iter, "--search")?),
            "--sort" => options.sort_column = Some(next_value(&mut iter, "--sort")?.parse()?),
            "--desc" => options.descending = true,
            "--page" => options.page = Some(next_value(&mut iter, "--page")?.parse()?),
            "--page-size" => {
                options.page_size = Some(next_value(&mut iter, "--page-size")?.parse()?);
            }
            "--select-all" => options.select_all = true,
            "--id-column" => options.id_column = next_value(&mut iter, "--id-column")?.parse()?,
            "--verbose" => options.verbose = true,
            "--help" | "-h" => return Err(usage().into()),
            other if other.starts_with("--") => {
                return Err(format!("unknown option {other}").into());
            }
            file => options.files.push(file.to_string()),
        }
    }

    if options.files.is_empty() {
        return Err(usage().into());
    }
    Ok(options)
}

/// Reads a CSV file into headers plus rows.
fn load_csv(path: &str) -> Result<(Vec<String>, Vec<Row>), Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(Row::new(record.iter()));
    }
    debug!("[cli] loaded {} rows from {path}", rows.len());
    Ok((headers, rows))
}

fn run(options: &Options) -> Result<(), Box<dyn Error>> {
    for (position, path) in options.files.iter().enumerate() {
        let (headers, rows) = load_csv(path)?;

        let mut config = TableConfig::new().with_checkboxes(options.select_all);
        if let Some(size) = options.page_size {
            // Make the requested size one of the offered options, the way
            // a host would populate its entries selector.
            if !config.page_size_options.contains(&size) {
                config.page_size_options.push(size);
            }
            config = config.with_default_page_size(size);
        }

        let mut engine = TableEngine::new(rows, config)?;

        if let Some(term) = &options.search {
            engine.on_search_changed(term);
        }
        if let Some(column) = options.sort_column {
            engine.on_header_activated(column);
            if options.descending {
                engine.on_header_activated(column);
            }
        }
        if options.select_all {
            engine.on_select_all_toggled(true);
        }
        if let Some(page) = options.page {
            engine.on_page_requested(page);
        }

        if position > 0 {
            println!();
        }
        println!("== {path} ==");
        let mut view = TextView::new(headers, options.select_all);
        engine.render_to(&mut view);

        if options.select_all {
            let id_column = options.id_column;
            engine.perform_action_on_selected(|rows| {
                let ids: Vec<&str> = rows.iter().filter_map(|row| row.cell(id_column)).collect();
                println!("Selected IDs: {}", ids.join(", "));
            })?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let level = if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .expect("Failed to initialize logger");

    if let Err(err) = run(&options) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
