// =====================================================================
// File: hash.rs
// Author: Bob Jack
// Date: Oct 19, 2026
//
// Description:
//   djb2 string hash used to route a destination name to one of the
//   catalog's fixed buckets. Arithmetic wraps on 64-bit unsigned
//   overflow so bucket placement is the same on every run.
// =====================================================================

/// Number of buckets in the catalog. Prime, never resized.
pub const BUCKET_COUNT: usize = 127;

const DJB2_SEED: u64 = 5381;


/// djb2: `acc = acc * 33 + byte` over the UTF-8 bytes, wrapping.
///
/// # Example
/// ```
/// use parcelstore::hash::djb2;
/// assert_eq!(djb2(""), 5381);
/// assert_eq!(djb2("a"), 5381 * 33 + 97);
/// ```
pub fn djb2(text: &str) -> u64 {
    text.bytes().fold(DJB2_SEED, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(u64::from(byte))
    })
}


/// Bucket a destination name lands in.
///
/// # Example
/// ```
/// use parcelstore::hash::{bucket_index, BUCKET_COUNT};
/// assert_eq!(bucket_index(""), 5381 % BUCKET_COUNT);
/// assert_eq!(bucket_index("Brazil"), bucket_index("Brazil"));
/// ```
pub fn bucket_index(text: &str) -> usize {
    (djb2(text) % BUCKET_COUNT as u64) as usize
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        // 5381*33 + 'A'(65)
        assert_eq!(djb2("A"), 177_638);
        assert_eq!(bucket_index("A"), 177_638 % 127);
    }

    #[test]
    fn test_wraps_instead_of_overflowing() {
        // Long enough to overflow u64 many times over
        let long = "Democratic Republic of the Congo".repeat(8);
        let expected = long
            .bytes()
            .fold(5381u64, |acc, b| acc.wrapping_mul(33).wrapping_add(b as u64));
        assert_eq!(djb2(&long), expected);
        assert!(bucket_index(&long) < BUCKET_COUNT);
    }

    #[test]
    fn test_is_case_sensitive() {
        // 'b' - 'B' = 32, and 32 is not a multiple of 127
        assert_ne!(bucket_index("Brazil"), bucket_index("brazil"));
    }
}
