//! # standings
//!
//! A CLI tool for computing league standings from textual match results.
//!
//! ## Overview
//!
//! standings is built on top of standingslib. Each input line records one
//! match as `"Name1 Score1, Name2 Score2"`; the winner earns 3 points and
//! a draw earns 1 point each. The output is a ranked table where tied
//! point totals share a rank number.
//!
//! Malformed lines are skipped with a warning on stderr and never affect
//! the exit status; only failing to obtain the input at all is fatal.
//!
//! ## Usage
//!
//! ```bash
//! # Read results from a file
//! standings results.txt
//!
//! # Enter results interactively, finishing with 'end'
//! standings
//!
//! # Output as JSON
//! standings results.txt --output json
//!
//! # Suppress rejected-line warnings
//! standings results.txt --quiet
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use standingslib::{
    rank, read_result_file, read_until_end, score_lines, LeagueTable, RejectedLine,
};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("standings")
        .version(env!("CARGO_PKG_VERSION"))
        .about("League standings from match results, ranked and tie-aware")
        .arg(
            Arg::new("file")
                .help("Results file to process (omit to enter results interactively)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress rejected-line warnings"),
        )
}

/// Obtain the raw result lines from the file argument or, without one,
/// interactively from stdin until an 'end' line.
fn collect_lines(matches: &ArgMatches) -> anyhow::Result<Vec<String>> {
    match matches.get_one::<String>("file") {
        Some(path) => Ok(read_result_file(path)?),
        None => {
            eprintln!(
                "{}",
                style("Enter match results (one per line). Type 'end' to finish:").dim()
            );
            let stdin = io::stdin();
            let lines =
                read_until_end(stdin.lock()).context("failed to read results from stdin")?;
            Ok(lines)
        }
    }
}

/// Warn about every skipped line. Warnings go to stderr so stdout stays
/// exactly the table.
fn report_rejections(rejected: &[RejectedLine]) {
    for rejection in rejected {
        eprintln!(
            "{} skipping \"{}\": {}",
            style("warning:").yellow().bold(),
            rejection.line,
            rejection.reason
        );
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let lines = collect_lines(matches)?;

    let outcome = score_lines(&lines);
    if !matches.get_flag("quiet") {
        report_rejections(&outcome.rejected);
    }

    let table = LeagueTable::from_ranking(&rank(&outcome.scoreboard));

    match matches.get_one::<String>("output").map(String::as_str) {
        Some("json") => println!("{}", serde_json::to_string_pretty(&table)?),
        _ => {
            if !table.is_empty() {
                println!("{table}");
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
