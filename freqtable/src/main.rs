//! # freqtable
//!
//! A CLI tool that turns a word-frequency map into a table descriptor.
//!
//! ## Overview
//!
//! freqtable is built on top of freqtablelib. It reads a JSON object of
//! `{word: count}` pairs and prints the descriptor a data-table UI component
//! consumes (`title`, `columns`, `data`, `options`).
//!
//! ## Usage
//!
//! ```bash
//! # Read from a file
//! freqtable counts.json
//!
//! # Read from stdin
//! echo '{"the": 5, "fox": 2}' | freqtable
//!
//! # Disable column sorting and the export button
//! freqtable counts.json --no-sorting --no-export-button
//!
//! # Only emit the sorting flag, on one line
//! freqtable counts.json --sorting-only --compact
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use freqtablelib::{TableDescriptor, TableOptions};
use tracing::{debug, trace};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("freqtable")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn a word-frequency map into a data-table descriptor")
        .arg(
            Arg::new("input")
                .help("JSON file with {word: count} pairs (defaults to stdin)")
                .default_value("-"),
        )
        .arg(
            Arg::new("no-sorting")
                .long("no-sorting")
                .action(ArgAction::SetTrue)
                .help("Disable column sorting"),
        )
        .arg(
            Arg::new("no-export-all-data")
                .long("no-export-all-data")
                .action(ArgAction::SetTrue)
                .help("Export only the visible page"),
        )
        .arg(
            Arg::new("no-export-button")
                .long("no-export-button")
                .action(ArgAction::SetTrue)
                .help("Hide the export button"),
        )
        .arg(
            Arg::new("sorting-only")
                .long("sorting-only")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["no-export-all-data", "no-export-button"])
                .help("Leave export flags out of the options"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .action(ArgAction::SetTrue)
                .help("Print JSON on a single line"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity on stderr (-v, -vv)"),
        )
}

/// Build table options from matches
fn extract_options(matches: &ArgMatches) -> TableOptions {
    let mut options = if matches.get_flag("sorting-only") {
        TableOptions::sorting_only()
    } else {
        TableOptions::new()
    };

    if matches.get_flag("no-sorting") {
        options = options.with_sorting(false);
    }
    if matches.get_flag("no-export-all-data") {
        options = options.with_export_all_data(false);
    }
    if matches.get_flag("no-export-button") {
        options = options.with_export_button(false);
    }

    options
}

/// Install the stderr log subscriber
fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .init();

    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

/// Read the input and render the descriptor as JSON
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let input = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let options = extract_options(matches);
    debug!(?options, input, "building table");

    let table = if input == "-" {
        TableDescriptor::from_reader(io::stdin().lock(), options)?
    } else {
        let file = File::open(input).with_context(|| format!("failed to open '{}'", input))?;
        TableDescriptor::from_reader(BufReader::new(file), options)
            .with_context(|| format!("failed to load '{}'", input))?
    };

    let rendered = if matches.get_flag("compact") {
        serde_json::to_string(&table)?
    } else {
        serde_json::to_string_pretty(&table)?
    };

    Ok(rendered)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
