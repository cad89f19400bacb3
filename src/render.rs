// =====================================================================
// File: render.rs
// Author: Bob Jack
// Date: Oct 19, 2026
//
// Description:
//   Turns query results into the text shown at the prompt. The
//   catalog hands back parcels and numbers; only this module decides
//   how they read, and valuations are rounded to cents only here.
// =====================================================================
use std::fmt::Write;

use crate::catalog::{Extremes, Selection, Totals};
use crate::{Direction, Parcel};

/// Shown when the queried destination has nothing to list.
pub fn no_records(destination: &str) -> String {
    format!("No parcels found for {}", destination)
}


/// Every parcel of the selection, lightest first.
pub fn listing(destination: &str, selection: Selection<'_>) -> String {
    parcel_block(
        &format!("Parcels for {}:", destination),
        selection.parcels(),
    )
}


/// Parcels on one side of a weight threshold.
pub fn search(destination: &str, threshold: i32, direction: Direction, selection: Selection<'_>) -> String {
    let side = match direction {
        Direction::Higher => "heavier",
        Direction::Lower => "lighter",
    };
    let header = format!("Parcels for {} {} than {} g:", destination, side, threshold);

    let mut matches = selection.search_by_weight(threshold, direction).peekable();
    if matches.peek().is_none() {
        return format!("No parcels for {} {} than {} g", destination, side, threshold);
    }
    parcel_block(&header, matches)
}


/// Total weight and valuation.
pub fn totals(destination: &str, totals: &Totals) -> String {
    format!(
        "Totals for {} ({} parcels):\n  Total weight: {} g\n  Total valuation: ${:.2}",
        destination, totals.count, totals.weight, totals.valuation
    )
}


/// Cheapest and most expensive parcel.
pub fn valuation_extremes(extremes: &Extremes<'_>) -> String {
    format!(
        "Cheapest: {}\nMost expensive: {}",
        extremes.low, extremes.high
    )
}


/// Lightest and heaviest parcel.
pub fn weight_extremes(extremes: &Extremes<'_>) -> String {
    format!("Lightest: {}\nHeaviest: {}", extremes.low, extremes.high)
}


fn parcel_block<'a>(header: &str, parcels: impl Iterator<Item = &'a Parcel>) -> String {
    let mut out = String::from(header);
    for parcel in parcels {
        // Writing into a String cannot fail
        let _ = write!(out, "\n  {}", parcel);
    }
    out
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, Parcel};

    fn brazil() -> Catalog {
        let mut catalog = Catalog::new();
        for (w, v) in [(500, 20.0), (200, 15.0), (800, 30.0)] {
            catalog.insert(Parcel::new("Brazil", w, v)).unwrap();
        }
        catalog
    }

    #[test]
    fn test_listing_text() {
        let catalog = brazil();
        let text = listing("Brazil", catalog.select("Brazil").unwrap());
        assert_eq!(
            text,
            "Parcels for Brazil:\n\
             \x20 Destination: Brazil, Weight: 200 g, Valuation: $15.00\n\
             \x20 Destination: Brazil, Weight: 500 g, Valuation: $20.00\n\
             \x20 Destination: Brazil, Weight: 800 g, Valuation: $30.00"
        );
    }

    #[test]
    fn test_search_text_and_empty_search() {
        let catalog = brazil();
        let selection = catalog.select("Brazil").unwrap();

        let text = search("Brazil", 500, Direction::Higher, selection);
        assert!(text.starts_with("Parcels for Brazil heavier than 500 g:"));
        assert!(text.contains("Weight: 800 g"));
        assert!(!text.contains("Weight: 500 g"));

        let none = search("Brazil", 100, Direction::Lower, selection);
        assert_eq!(none, "No parcels for Brazil lighter than 100 g");
    }

    #[test]
    fn test_totals_text() {
        let catalog = brazil();
        let sums = catalog.select("Brazil").unwrap().totals();
        assert_eq!(
            totals("Brazil", &sums),
            "Totals for Brazil (3 parcels):\n  Total weight: 1500 g\n  Total valuation: $65.00"
        );
    }

    #[test]
    fn test_extremes_text() {
        let catalog = brazil();
        let selection = catalog.select("Brazil").unwrap();

        let by_weight = weight_extremes(&selection.weight_extremes().unwrap());
        assert!(by_weight.starts_with("Lightest: Destination: Brazil, Weight: 200 g"));

        let by_value = valuation_extremes(&selection.valuation_extremes().unwrap());
        assert!(by_value.ends_with("Most expensive: Destination: Brazil, Weight: 800 g, Valuation: $30.00"));
    }
}
