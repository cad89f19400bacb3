// =====================================================================
// File: parcel.rs
// Author: Bob Jack
// Date: Oct 19, 2026
//
// Description:
//   Defines the `Parcel` record stored by the catalog, the `Direction`
//   flag used by weight searches, and the accepted weight/valuation
//   ranges applied by the loader when clamping is switched on.
//
// Notes:
//   * A parcel is never mutated once it has been inserted; the tree
//     node that holds it is its only owner.
// =====================================================================
use std::fmt;

/// Lightest weight (grams) kept when the loader clamps input.
pub const MIN_WEIGHT: i32 = 100;
/// Heaviest weight (grams) kept when the loader clamps input.
pub const MAX_WEIGHT: i32 = 50_000;
/// Lowest valuation kept when the loader clamps input.
pub const MIN_VALUATION: f64 = 10.0;
/// Highest valuation kept when the loader clamps input.
pub const MAX_VALUATION: f64 = 2_000.0;


/// One shipment entry: where it goes, how heavy it is, what it is worth.
#[derive(Debug, PartialEq)]
pub struct Parcel {
    pub destination: String,
    /// Weight in grams. This is the key the per-bucket tree is ordered by.
    pub weight: i32,
    /// Declared value in currency units.
    pub valuation: f64,
}


impl Parcel {
    /// Creates a new parcel record.
    ///
    /// # Example
    /// ```
    /// use parcelstore::Parcel;
    /// let p = Parcel::new("Brazil", 500, 20.0);
    /// assert_eq!(p.destination, "Brazil");
    /// assert_eq!(p.weight, 500);
    /// ```
    pub fn new(destination: impl Into<String>, weight: i32, valuation: f64) -> Self {
        #[cfg(test)]
        live::created();

        Self {
            destination: destination.into(),
            weight,
            valuation,
        }
    }

    /// Returns a copy with weight and valuation pulled into the
    /// accepted ranges (inclusive bounds, nearest bound wins).
    ///
    /// # Example
    /// ```
    /// use parcelstore::Parcel;
    /// let p = Parcel::new("Chad", 20, 5000.0).clamped();
    /// assert_eq!(p.weight, 100);
    /// assert_eq!(p.valuation, 2000.0);
    /// ```
    pub fn clamped(mut self) -> Self {
        self.weight = self.weight.clamp(MIN_WEIGHT, MAX_WEIGHT);
        self.valuation = self.valuation.clamp(MIN_VALUATION, MAX_VALUATION);
        self
    }
}


impl Clone for Parcel {
    fn clone(&self) -> Self {
        Parcel::new(self.destination.clone(), self.weight, self.valuation)
    }
}


// Test builds count every parcel made and dropped on the current
// thread, so tests can check that releasing a tree frees each one once.
#[cfg(test)]
impl Drop for Parcel {
    fn drop(&mut self) {
        live::dropped();
    }
}

#[cfg(test)]
pub(crate) mod live {
    use std::cell::Cell;

    thread_local! {
        static LIVE_PARCELS: Cell<i64> = const { Cell::new(0) };
    }

    pub(crate) fn created() {
        LIVE_PARCELS.with(|n| n.set(n.get() + 1));
    }

    pub(crate) fn dropped() {
        LIVE_PARCELS.with(|n| n.set(n.get() - 1));
    }

    /// Parcels created on this thread and not yet dropped.
    pub(crate) fn count() -> i64 {
        LIVE_PARCELS.with(Cell::get)
    }
}


impl fmt::Display for Parcel {
    // Rounding to cents happens here and nowhere else
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Destination: {}, Weight: {} g, Valuation: ${:.2}",
            self.destination, self.weight, self.valuation
        )
    }
}


/// Which side of a weight threshold a search keeps.
/// Parcels exactly at the threshold are kept by neither side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Higher,
    Lower,
}

impl Direction {
    /// True if `weight` lies strictly on this side of `threshold`.
    pub fn admits(self, weight: i32, threshold: i32) -> bool {
        match self {
            Direction::Higher => weight > threshold,
            Direction::Lower => weight < threshold,
        }
    }

    /// Parses `HIGHER`/`LOWER` (also `H`/`L`, `>`/`<`), ignoring case.
    pub fn parse(word: &str) -> Option<Self> {
        match word.to_uppercase().as_str() {
            "HIGHER" | "H" | ">" => Some(Direction::Higher),
            "LOWER" | "L" | "<" => Some(Direction::Lower),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_pulls_to_nearest_bound() {
        let low = Parcel::new("Peru", -4, 0.5).clamped();
        assert_eq!((low.weight, low.valuation), (MIN_WEIGHT, MIN_VALUATION));

        let high = Parcel::new("Peru", 90_000, 9_999.0).clamped();
        assert_eq!((high.weight, high.valuation), (MAX_WEIGHT, MAX_VALUATION));
    }

    #[test]
    fn test_clamp_keeps_in_range_values() {
        let p = Parcel::new("Peru", 100, 2000.0).clamped();
        assert_eq!(p, Parcel::new("Peru", 100, 2000.0));
    }

    #[test]
    fn test_display_rounds_valuation() {
        let p = Parcel::new("New Zealand", 250, 12.345);
        assert_eq!(p.to_string(), "Destination: New Zealand, Weight: 250 g, Valuation: $12.35");
    }

    #[test]
    fn test_direction_excludes_threshold() {
        assert!(Direction::Higher.admits(501, 500));
        assert!(!Direction::Higher.admits(500, 500));
        assert!(Direction::Lower.admits(499, 500));
        assert!(!Direction::Lower.admits(500, 500));
    }

    #[test]
    fn test_direction_parse_is_case_insensitive() {
        assert_eq!(Direction::parse("higher"), Some(Direction::Higher));
        assert_eq!(Direction::parse("L"), Some(Direction::Lower));
        assert_eq!(Direction::parse("sideways"), None);
    }
}
