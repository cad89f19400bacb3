// ============================================================
// File: loader.rs
// Author: Bob Jack
// Date: Oct 19, 2026
//
// Description:
//   Reads the parcel file at startup and feeds each record into
//   the catalog. One record per line:
//
//     <destination>, <weight>, <valuation>
//
//   e.g. `New Zealand, 1200, 85.50`. The destination may contain
//   spaces; whitespace around every field is trimmed.
//
// Goal:
// 1) Malformed lines are skipped with a warning, never fatal.
// 2) A missing or unreadable file is reported to the caller,
//    which carries on with whatever was loaded (possibly nothing).
// 3) Clamping of weight/valuation into the accepted ranges is
//    opt-in through `LoadOptions`.
// ============================================================
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{LineError, LoadError};
use crate::{Catalog, Parcel};

/// File read when no path is given on the command line.
pub const DEFAULT_PARCEL_FILE: &str = "parcels.txt";


/// Knobs for the load phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Pull weight into [100, 50000] and valuation into [10, 2000].
    pub clamp: bool,
}


/// What happened to the lines of one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Parcels now in the catalog.
    pub loaded: usize,
    /// Lines that did not parse.
    pub skipped: usize,
    /// Parsed parcels the catalog could not store.
    pub failed: usize,
}


/// Parses one input line into a parcel.
///
/// # Arguments
/// * `line` - A line of the form `<destination>, <weight>, <valuation>`.
///
/// # Returns
/// * `Ok(Parcel)` when the line has exactly three fields, a non-empty
///   destination, an integer weight and a finite valuation.
/// * `Err(LineError)` naming the first problem found otherwise.
///
/// # Example
/// ```
/// use parcelstore::loader::parse_line;
///
/// let parcel = parse_line("United Kingdom , 750, 42.10").unwrap();
/// assert_eq!(parcel.destination, "United Kingdom");
/// assert_eq!(parcel.weight, 750);
/// assert!(parse_line("Brazil, 500").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<Parcel, LineError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let &[destination, weight, valuation] = fields.as_slice() else {
        return Err(LineError::FieldCount(fields.len()));
    };

    if destination.is_empty() {
        return Err(LineError::EmptyDestination);
    }

    let weight = weight
        .parse::<i32>()
        .map_err(|_| LineError::InvalidWeight(weight.to_string()))?;

    let valuation = match valuation.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return Err(LineError::InvalidValuation(valuation.to_string())),
    };

    Ok(Parcel::new(destination, weight, valuation))
}


/// Loads every line of `reader` into `catalog`.
///
/// Blank lines are ignored silently. Lines that fail to parse are
/// skipped with a warning, as are parcels the catalog fails to store.
///
/// # Example
/// ```
/// use parcelstore::Catalog;
/// use parcelstore::loader::{load_reader, LoadOptions};
///
/// let input = "Brazil, 500, 20.0\nnot a parcel\n\nBrazil, 200, 15.0\n";
/// let mut catalog = Catalog::new();
/// let report = load_reader(input.as_bytes(), &mut catalog, LoadOptions::default()).unwrap();
///
/// assert_eq!(report.loaded, 2);
/// assert_eq!(report.skipped, 1);
/// ```
pub fn load_reader<R: BufRead>(
    reader: R,
    catalog: &mut Catalog,
    options: LoadOptions,
) -> Result<LoadReport, LoadError> {
    let mut report = LoadReport::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Read { line: line_no, source })?;

        if line.trim().is_empty() {
            continue;
        }

        let parcel = match parse_line(&line) {
            Ok(parcel) if options.clamp => parcel.clamped(),
            Ok(parcel) => parcel,
            Err(e) => {
                warn!(line = line_no, "skipping malformed line '{}': {}", line, e);
                report.skipped += 1;
                continue;
            }
        };

        match catalog.insert(parcel) {
            Ok(_) => report.loaded += 1,
            // Catalog already logged the drop
            Err(_) => report.failed += 1,
        }
    }

    Ok(report)
}


/// Opens `path` and loads it into `catalog`.
///
/// # Returns
/// * `Err(LoadError::Io)` if the file cannot be opened. The catalog is
///   untouched and the caller decides whether to carry on.
pub fn load_file(
    path: impl AsRef<Path>,
    catalog: &mut Catalog,
    options: LoadOptions,
) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let report = load_reader(BufReader::new(file), catalog, options)?;
    info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        failed = report.failed,
        buckets = catalog.occupied_buckets(),
        max_depth = catalog.max_depth(),
        "parcel file loaded"
    );
    Ok(report)
}
