// =====================================================================
// File: error.rs
// Author: Bob Jack
// Date: Oct 19, 2026
//
// Description:
//   Error types for the parcel store. None of these are fatal: each
//   one aborts a single insert, a single input line, a single command,
//   or the load phase, and the program carries on.
// =====================================================================
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to add a parcel to the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not allocate a node for a parcel bound for '{destination}'")]
    Allocation { destination: String },
}

/// Why a single input line was rejected by the loader.
#[derive(Debug, Error, PartialEq)]
pub enum LineError {
    #[error("expected 3 comma-separated fields, found {0}")]
    FieldCount(usize),

    #[error("destination is empty")]
    EmptyDestination,

    #[error("invalid weight '{0}'")]
    InvalidWeight(String),

    #[error("invalid valuation '{0}'")]
    InvalidValuation(String),
}

/// Failure of the load phase as a whole.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open parcel file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Malformed command typed at the prompt.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("{0} requires a destination")]
    MissingDestination(String),

    #[error("SEARCH requires <destination> <weight> <HIGHER|LOWER>")]
    SearchUsage,

    #[error("invalid weight '{0}'")]
    InvalidWeight(String),

    #[error("invalid direction '{0}', expected HIGHER or LOWER")]
    InvalidDirection(String),

    #[error("{0} does not take any arguments")]
    UnexpectedArguments(String),
}
