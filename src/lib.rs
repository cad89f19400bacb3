//! # parcelstore
//! An in-memory catalog of shipment records ("parcels"), grouped by
//! destination and queryable by weight and valuation extremes.
//!
//! ## Features
//! - Fixed 127-bucket hash index keyed by destination name (djb2)
//! - Per-bucket binary search tree ordered by parcel weight
//! - Listing, threshold search, totals, and min/max queries
//! - Line-oriented loader for `<destination>, <weight>, <valuation>` files
//!
//! ## Usage
//! This crate is primarily consumed by the binary in `main.rs`,
//! which loads the parcel file and runs the command loop. All reusable
//! logic and unit tests live here so the project can be tested with
//! `cargo test`.
// =====================================================================
// File: lib.rs
// Author: Bob Jack
// Date: Oct 19, 2026
//
//   This module implements the command loop that accepts the
//   following commands (case-insensitive; destinations may contain
//   spaces):
//
//     `LIST <destination>`    -> Every parcel, lightest first
//     `SEARCH <destination> <weight> <HIGHER|LOWER>`
//                             -> Parcels strictly heavier/lighter than <weight>
//     `TOTAL <destination>`   -> Total weight and total valuation
//     `PRICE <destination>`   -> Cheapest and most expensive parcel
//     `WEIGHT <destination>`  -> Lightest and heaviest parcel
//     `HELP`                  -> Print the command syntax
//     `EXIT` / `QUIT`         -> Terminate the program
// =====================================================================
pub mod catalog;
pub use catalog::{Catalog, Extremes, MatchMode, Selection, Totals};

pub mod config;
pub use config::Config;

pub mod error;
pub use error::{CatalogError, CommandError, LineError, LoadError};

pub mod hash;

pub mod index;
pub use index::{ParcelNode, ParcelTree, max_valuation, min_valuation};

pub mod loader;
pub use loader::{LoadOptions, LoadReport, load_file, load_reader};

pub mod parcel;
pub use parcel::{Direction, Parcel};

pub mod render;

use std::io::{self, BufRead, Write};

/// Shown after an unrecognized command and for `HELP`.
pub const PROPER_SYNTAX: &str = "Syntax Usage: LIST <destination>, \
    SEARCH <destination> <weight> <HIGHER|LOWER>, TOTAL <destination>, \
    PRICE <destination>, WEIGHT <destination>, HELP, EXIT";

/// Result of handling a single user command.
///
/// - `Continue` means the REPL should keep running.
/// - `Exit` means the REPL should break out and terminate.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Exit,
}


/// A catalog query, already validated.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    List(String),
    Search {
        destination: String,
        threshold: i32,
        direction: Direction,
    },
    Total(String),
    Price(String),
    Weight(String),
}


impl Query {
    /// The destination name the query is about.
    pub fn destination(&self) -> &str {
        match self {
            Query::List(d) | Query::Total(d) | Query::Price(d) | Query::Weight(d) => d,
            Query::Search { destination, .. } => destination,
        }
    }
}


/// Read–Evaluate–Print Loop (REPL) over any line source and sink.
///
/// Reads one command per line from `input`, runs it against `catalog`,
/// and writes the response to `output`. Stops on `EXIT`/`QUIT` or at
/// end of input.
///
/// # Example
/// ```
/// use parcelstore::{Catalog, Parcel, repl_loop};
///
/// let mut catalog = Catalog::new();
/// catalog.insert(Parcel::new("Brazil", 500, 20.0)).unwrap();
///
/// let mut out = Vec::new();
/// repl_loop("TOTAL Brazil\nexit\n".as_bytes(), &mut out, &catalog).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("Total weight: 500 g"));
/// ```
pub fn repl_loop<R: BufRead, W: Write>(input: R, mut output: W, catalog: &Catalog) -> io::Result<()> {
    for input_line in input.lines() {
        let full_command = input_line?;
        let (cmd, rest) = parse_command(&full_command);

        // Process command and arguments
        if handle_command(&cmd, rest, catalog, &mut output)? == CommandResult::Exit {
            break;
        }
    }
    output.flush()
}


/// Parses a raw input line into a command and the rest of the line.
///
/// The first token is treated as the command (normalized to uppercase).
/// The rest is returned trimmed at both ends but otherwise untouched,
/// so a destination keeps its internal spacing exactly as loaded.
///
/// # Example
/// ```
/// use parcelstore::parse_command;
/// let (cmd, rest) = parse_command("  list New  Zealand  ");
/// assert_eq!(cmd, "LIST");
/// assert_eq!(rest, "New  Zealand");
/// ```
pub fn parse_command(line: &str) -> (String, &str) {
    let line = line.trim();
    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    // Normalize so lowercase commands work
    (cmd.to_uppercase(), rest.trim())
}


/// Splits the last whitespace-separated token off `text`.
fn split_last_token(text: &str) -> Option<(&str, &str)> {
    let (head, last) = text.trim_end().rsplit_once(char::is_whitespace)?;
    Some((head.trim_end(), last))
}


/// Builds a `Query` from a query command and the rest of its line.
///
/// The destination is taken verbatim. For `SEARCH` the last two
/// tokens are the weight and the direction, and everything before
/// them is the destination.
///
/// # Example
/// ```
/// use parcelstore::{Direction, Query, parse_query};
///
/// let query = parse_query("SEARCH", "New Zealand 500 higher").unwrap();
/// assert_eq!(query, Query::Search {
///     destination: "New Zealand".into(),
///     threshold: 500,
///     direction: Direction::Higher,
/// });
/// ```
pub fn parse_query(cmd: &str, rest: &str) -> Result<Query, CommandError> {
    let rest = rest.trim();

    if cmd == "SEARCH" {
        let Some((head, direction)) = split_last_token(rest) else {
            return Err(CommandError::SearchUsage);
        };
        let Some((name, weight)) = split_last_token(head) else {
            return Err(CommandError::SearchUsage);
        };

        let threshold = weight
            .parse::<i32>()
            .map_err(|_| CommandError::InvalidWeight(weight.to_string()))?;
        let direction = Direction::parse(direction)
            .ok_or_else(|| CommandError::InvalidDirection(direction.to_string()))?;

        return Ok(Query::Search {
            destination: name.to_string(),
            threshold,
            direction,
        });
    }

    if rest.is_empty() {
        return Err(CommandError::MissingDestination(cmd.to_string()));
    }
    let destination = rest.to_string();

    match cmd {
        "LIST" => Ok(Query::List(destination)),
        "TOTAL" => Ok(Query::Total(destination)),
        "PRICE" => Ok(Query::Price(destination)),
        "WEIGHT" => Ok(Query::Weight(destination)),
        // Only reached if a caller routes a non-query command here
        _ => Err(CommandError::MissingDestination(cmd.to_string())),
    }
}


/// Runs a query against the catalog and renders the answer.
/// An empty result is a normal answer, not an error.
pub fn run_query(query: &Query, catalog: &Catalog) -> String {
    let destination = query.destination();
    let Some(selection) = catalog.select(destination) else {
        return render::no_records(destination);
    };

    let rendered = match query {
        Query::List(_) => Some(render::listing(destination, selection)),
        Query::Search { threshold, direction, .. } => {
            Some(render::search(destination, *threshold, *direction, selection))
        }
        Query::Total(_) => Some(render::totals(destination, &selection.totals())),
        Query::Price(_) => selection
            .valuation_extremes()
            .map(|extremes| render::valuation_extremes(&extremes)),
        Query::Weight(_) => selection
            .weight_extremes()
            .map(|extremes| render::weight_extremes(&extremes)),
    };
    rendered.unwrap_or_else(|| render::no_records(destination))
}


/// Handles a single user command and returns whether the REPL should continue or exit.
///
/// - Only supported commands will operate - Any other input: Prints an error and the syntax.
///
/// Returns:
/// - `CommandResult::Continue` if the loop should keep running.
/// - `CommandResult::Exit` if the user requested termination.
///
/// Write failures on `out` are the only errors passed back.
pub fn handle_command<W: Write>(
    cmd: &str,
    rest: &str,
    catalog: &Catalog,
    out: &mut W,
) -> io::Result<CommandResult> {
    match cmd {
        "LIST" | "SEARCH" | "TOTAL" | "PRICE" | "WEIGHT" => {
            match parse_query(cmd, rest) {
                Ok(query) => writeln!(out, "{}", run_query(&query, catalog))?,
                Err(e) => writeln!(out, "ERR: {}", e)?,
            }
            Ok(CommandResult::Continue)
        }

        "HELP" => {
            if rest.trim().is_empty() {
                writeln!(out, "{}", PROPER_SYNTAX)?;
            } else {
                writeln!(out, "ERR: {}", CommandError::UnexpectedArguments(cmd.to_string()))?;
            }
            Ok(CommandResult::Continue)
        }

        "EXIT" | "QUIT" => {
            writeln!(out, "Exiting...")?;
            Ok(CommandResult::Exit)
        }

        // Empty input
        "" => {
            writeln!(out, "Enter a command.")?;
            Ok(CommandResult::Continue)
        }

        // Everything else will be noted and returned as an error
        _ => {
            writeln!(out, "ERROR: command '{}' not handled", cmd)?;
            writeln!(out, "{}", PROPER_SYNTAX)?;
            Ok(CommandResult::Continue)
        }
    }
}



// =================================================================
// lib.rs Unit tests
// =================================================================

#[cfg(test)]
mod main_lib_tests {
    use super::*;

    fn brazil() -> Catalog {
        let mut catalog = Catalog::new();
        for (w, v) in [(500, 20.0), (200, 15.0), (800, 30.0)] {
            catalog.insert(Parcel::new("Brazil", w, v)).unwrap();
        }
        catalog
    }

    /// Runs one input line and returns what was written.
    fn run(line: &str, catalog: &Catalog) -> (CommandResult, String) {
        let (cmd, rest) = parse_command(line);
        let mut out = Vec::new();
        let result = handle_command(&cmd, rest, catalog, &mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_exit_command() {
        let (cmd, rest) = parse_command("EXIT");
        assert_eq!(cmd, "EXIT");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_exit_and_quit_commands() {
        let catalog = Catalog::new();
        assert_eq!(run("exit", &catalog).0, CommandResult::Exit);
        assert_eq!(run("QUIT", &catalog).0, CommandResult::Exit);
    }

    #[test]
    fn test_whitespace_and_case() {
        let (cmd, rest) = parse_command("   list   New    Zealand      ");
        assert_eq!(cmd, "LIST");
        // Internal spacing of the destination is kept as typed
        assert_eq!(rest, "New    Zealand");
    }

    #[test]
    fn test_parse_query_joins_destination() {
        let query = parse_query("LIST", "New Zealand").unwrap();
        assert_eq!(query, Query::List("New Zealand".into()));
        assert_eq!(query.destination(), "New Zealand");
    }

    #[test]
    fn test_parse_query_errors() {
        assert_eq!(
            parse_query("TOTAL", "  "),
            Err(CommandError::MissingDestination("TOTAL".into()))
        );
        assert_eq!(
            parse_query("SEARCH", "500 higher"),
            Err(CommandError::SearchUsage)
        );
        assert_eq!(
            parse_query("SEARCH", "Brazil heavy higher"),
            Err(CommandError::InvalidWeight("heavy".into()))
        );
        assert_eq!(
            parse_query("SEARCH", "Brazil 500 up"),
            Err(CommandError::InvalidDirection("up".into()))
        );
    }

    #[test]
    fn test_search_keeps_spacing_of_destination() {
        let query = parse_query("SEARCH", "New  Zealand   500\thigher").unwrap();
        assert_eq!(
            query,
            Query::Search {
                destination: "New  Zealand".into(),
                threshold: 500,
                direction: Direction::Higher,
            }
        );
    }

    #[test]
    fn test_destination_with_repeated_spaces_is_reachable() {
        let mut catalog = Catalog::new();
        catalog.insert(Parcel::new("New  Zealand", 300, 12.0)).unwrap();
        catalog.insert(Parcel::new("New  Zealand", 900, 40.0)).unwrap();

        let (_, listing) = run("LIST New  Zealand", &catalog);
        assert!(listing.starts_with("Parcels for New  Zealand:"));
        assert!(listing.contains("Weight: 300 g"));

        let (_, heavier) = run("SEARCH New  Zealand 300 higher", &catalog);
        assert!(heavier.contains("Weight: 900 g"));
        assert!(!heavier.contains("Weight: 300 g"));
    }

    #[test]
    fn test_list_command_output() {
        let catalog = brazil();
        let (result, text) = run("LIST Brazil", &catalog);
        assert_eq!(result, CommandResult::Continue);

        let w200 = text.find("Weight: 200 g").unwrap();
        let w500 = text.find("Weight: 500 g").unwrap();
        let w800 = text.find("Weight: 800 g").unwrap();
        assert!(w200 < w500 && w500 < w800);
    }

    #[test]
    fn test_search_command_output() {
        let catalog = brazil();
        let (_, higher) = run("search Brazil 500 higher", &catalog);
        assert!(higher.contains("Weight: 800 g"));
        assert!(!higher.contains("Weight: 500 g"));
        assert!(!higher.contains("Weight: 200 g"));

        let (_, lower) = run("search Brazil 500 lower", &catalog);
        assert!(lower.contains("Weight: 200 g"));
        assert!(!lower.contains("Weight: 500 g"));
    }

    #[test]
    fn test_query_for_empty_destination() {
        let catalog = brazil();
        for line in ["LIST Chile", "TOTAL Chile", "PRICE Chile", "WEIGHT Chile", "SEARCH Chile 1 higher"] {
            let (result, text) = run(line, &catalog);
            assert_eq!(result, CommandResult::Continue);
            assert_eq!(text, "No parcels found for Chile\n");
        }
    }

    #[test]
    fn test_price_and_weight_commands() {
        let mut catalog = Catalog::new();
        for (w, v) in [(500, 20.0), (200, 25.0), (800, 10.0)] {
            catalog.insert(Parcel::new("Brazil", w, v)).unwrap();
        }

        let (_, price) = run("PRICE Brazil", &catalog);
        assert!(price.starts_with("Cheapest: Destination: Brazil, Weight: 800 g"));

        let (_, weight) = run("WEIGHT Brazil", &catalog);
        assert!(weight.starts_with("Lightest: Destination: Brazil, Weight: 200 g"));
    }

    #[test]
    fn test_bad_command_continues() {
        let catalog = Catalog::new();
        let (result, text) = run("FLY away", &catalog);
        assert_eq!(result, CommandResult::Continue);
        assert!(text.starts_with("ERROR: command 'FLY' not handled"));

        let (result, text) = run("SEARCH Brazil", &catalog);
        assert_eq!(result, CommandResult::Continue);
        assert!(text.starts_with("ERR: SEARCH requires"));
    }

    #[test]
    fn test_empty_and_help() {
        let catalog = Catalog::new();
        assert_eq!(run("   ", &catalog).1, "Enter a command.\n");
        assert_eq!(run("help", &catalog).1, format!("{}\n", PROPER_SYNTAX));
        assert!(run("help me", &catalog).1.starts_with("ERR:"));
    }

    #[test]
    fn test_repl_stops_at_exit() {
        let catalog = brazil();
        let mut out = Vec::new();
        repl_loop("TOTAL Brazil\nEXIT\nLIST Brazil\n".as_bytes(), &mut out, &catalog).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total weight: 1500 g"));
        assert!(text.contains("Total valuation: $65.00"));
        assert!(text.ends_with("Exiting...\n"));
        assert!(!text.contains("Parcels for Brazil:"));
    }

    #[test]
    fn test_repl_stops_at_end_of_input() {
        let catalog = brazil();
        let mut out = Vec::new();
        repl_loop("LIST Brazil".as_bytes(), &mut out, &catalog).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Parcels for Brazil:"));
    }
}
