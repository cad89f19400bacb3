// =====================================================================
// File: config.rs
// Author: Bob Jack
// Date: Oct 19, 2026
//
// Description:
//   Command-line configuration for the parcel store binary.
//
//     parcelstore [FILE] [--clamp] [--exact-match] [--log-level LEVEL]
//
//   `RUST_LOG`, when set, takes precedence over `--log-level`.
// =====================================================================
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::MatchMode;
use crate::loader::{DEFAULT_PARCEL_FILE, LoadOptions};

/// In-memory parcel catalog, grouped by destination.
#[derive(Debug, Parser)]
#[command(name = "parcelstore")]
#[command(version)]
pub struct Config {
    /// Parcel file to load at startup
    #[arg(default_value = DEFAULT_PARCEL_FILE)]
    pub file: PathBuf,

    /// Clamp weight into [100, 50000] g and valuation into [10, 2000]
    #[arg(long)]
    pub clamp: bool,

    /// Only show parcels whose destination matches the queried name exactly
    #[arg(long)]
    pub exact_match: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}


impl Config {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions { clamp: self.clamp }
    }

    pub fn match_mode(&self) -> MatchMode {
        if self.exact_match {
            MatchMode::Exact
        } else {
            MatchMode::Bucket
        }
    }

    /// Log filter: `RUST_LOG` if set and valid, else `--log-level`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}
