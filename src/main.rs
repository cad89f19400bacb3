// ============================================================
// File: main.rs
// Author: Bob Jack
// Date: Oct 19, 2026
//
// Description:
//   Entry point for the parcel store program. Loads the parcel
//   file named on the command line into the catalog, then hands
//   stdin/stdout to the command loop. Logging goes to stderr so
//   stdout carries only command responses.
//
// Notes:
//   - A missing or unreadable parcel file is logged and the
//     program carries on with what was loaded (possibly nothing).
// ============================================================
use std::io;

use clap::Parser;
use tracing::{error, info};

use parcelstore::{Catalog, Config, load_file, repl_loop};


/// Entry point for the parcel store.
fn main() {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(io::stderr)
        .init();

    println!("Parcel Store");

    let mut catalog = Catalog::with_match_mode(config.match_mode());

    // Load data from file
    match load_file(&config.file, &mut catalog, config.load_options()) {
        Ok(report) => println!(
            "Loaded {} parcels from {} ({} lines skipped)",
            report.loaded,
            config.file.display(),
            report.skipped
        ),
        Err(e) => {
            error!("{}", e);
            println!("Starting with an empty catalog.");
        }
    }

    // Hand off to the main command loop
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = repl_loop(stdin.lock(), stdout.lock(), &catalog) {
        error!("command loop stopped: {}", e);
    }

    let freed = catalog.release();
    info!(freed, "shutdown complete");
}
