// =====================================================================
// File: catalog.rs
// Author: Bob Jack
// Date: Oct 19, 2026
//
// Description:
//   Defines the `Catalog`, a fixed array of `BUCKET_COUNT` parcel trees.
//   A destination name is routed to its bucket with djb2, and every
//   insert or query is delegated to that bucket's `ParcelTree`.
//
// Responsibilities:
// - Route inserts to the bucket for the parcel's destination.
// - Resolve a queried name to a `Selection` of parcels, or `None`
//   when there is nothing to show.
// - Release every bucket's tree in one pass at shutdown.
//
// Notes:
//   * In `MatchMode::Bucket` (the default) a query returns the whole
//     bucket, so two names that hash alike share one listing.
//     `MatchMode::Exact` filters each query to the queried name.
//   * The bucket array is never resized.
// =====================================================================
use tracing::{debug, info, warn};

use crate::error::CatalogError;
use crate::hash::{BUCKET_COUNT, bucket_index};
use crate::index::{max_valuation, min_valuation};
use crate::{Direction, Parcel, ParcelTree};

/// How a queried destination name picks parcels out of its bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Everything hashed to the bucket, whatever its destination.
    #[default]
    Bucket,
    /// Only parcels whose destination equals the queried name.
    Exact,
}


/// Combined weight and valuation of a selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub count: usize,
    pub weight: i64,
    pub valuation: f64,
}


/// A low/high pair from an extremum query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes<'a> {
    pub low: &'a Parcel,
    pub high: &'a Parcel,
}


/// Hash index of parcel trees, one per bucket.
#[derive(Debug)]
pub struct Catalog {
    buckets: Vec<ParcelTree>,
    mode: MatchMode,
}


impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}


impl Catalog {
    /// Creates a catalog with every bucket empty, matching by bucket.
    ///
    /// # Example
    /// ```
    /// use parcelstore::Catalog;
    /// let catalog = Catalog::new();
    /// assert!(catalog.is_empty());
    /// assert!(catalog.select("Brazil").is_none());
    /// ```
    pub fn new() -> Self {
        Self::with_match_mode(MatchMode::Bucket)
    }

    /// Creates an empty catalog using the given match mode.
    pub fn with_match_mode(mode: MatchMode) -> Self {
        // Empty trees hold no allocation until their first insert
        let buckets = (0..BUCKET_COUNT).map(|_| ParcelTree::new()).collect();
        Self { buckets, mode }
    }

    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    /// Bucket a destination name routes to.
    pub fn bucket_for(&self, destination: &str) -> usize {
        bucket_index(destination)
    }

    /// Adds a parcel to the tree of its destination's bucket.
    ///
    /// # Returns
    /// * `Ok(bucket)` - The bucket the parcel was stored in.
    /// * `Err(CatalogError::Allocation)` - The node could not be
    ///   allocated; the parcel is dropped and the catalog is unchanged.
    ///
    /// # Example
    /// ```
    /// use parcelstore::{Catalog, Parcel};
    ///
    /// let mut catalog = Catalog::new();
    /// let bucket = catalog.insert(Parcel::new("Brazil", 500, 20.0)).unwrap();
    /// assert_eq!(bucket, catalog.bucket_for("Brazil"));
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn insert(&mut self, parcel: Parcel) -> Result<usize, CatalogError> {
        let bucket = bucket_index(&parcel.destination);
        debug!(
            destination = %parcel.destination,
            weight = parcel.weight,
            bucket,
            "inserting parcel"
        );

        match self.buckets[bucket].insert(parcel) {
            Ok(_) => Ok(bucket),
            Err(e) => {
                warn!(bucket, "parcel dropped: {}", e);
                Err(e)
            }
        }
    }

    /// The tree of the bucket `destination` hashes to, or `None` if
    /// that bucket holds nothing. Never filters by exact name.
    pub fn lookup(&self, destination: &str) -> Option<&ParcelTree> {
        let tree = &self.buckets[bucket_index(destination)];
        (!tree.is_empty()).then_some(tree)
    }

    /// Resolves a queried destination to the parcels it should show.
    ///
    /// Returns `None` when there are no records to show: the bucket is
    /// empty, or (in exact mode) nothing in it carries this name.
    ///
    /// # Example
    /// ```
    /// use parcelstore::{Catalog, Parcel};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.insert(Parcel::new("Brazil", 500, 20.0)).unwrap();
    /// catalog.insert(Parcel::new("Brazil", 200, 15.0)).unwrap();
    ///
    /// let brazil = catalog.select("Brazil").unwrap();
    /// assert_eq!(brazil.totals().weight, 700);
    /// ```
    pub fn select<'a>(&'a self, destination: &'a str) -> Option<Selection<'a>> {
        let tree = self.lookup(destination)?;
        let selection = Selection {
            tree,
            only: match self.mode {
                MatchMode::Bucket => None,
                MatchMode::Exact => Some(destination),
            },
        };
        selection.parcels().next().map(|_| selection)
    }

    /// Total parcels held across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(ParcelTree::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(ParcelTree::is_empty)
    }

    /// Number of buckets holding at least one parcel.
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|tree| !tree.is_empty()).count()
    }

    /// Depth of the deepest bucket tree. Sorted input shows up here as
    /// a depth close to the bucket's parcel count.
    pub fn max_depth(&self) -> usize {
        self.buckets.iter().map(ParcelTree::depth).max().unwrap_or(0)
    }

    /// Frees every bucket's tree.
    ///
    /// # Returns
    /// The number of parcels freed. Every parcel is counted exactly
    /// once; calling again returns 0.
    pub fn release(&mut self) -> usize {
        let freed: usize = self.buckets.iter_mut().map(ParcelTree::release).sum();
        info!(freed, "catalog released");
        freed
    }
}


/// The parcels a query works over: one bucket's tree, optionally
/// narrowed to a single destination name. Never empty.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    tree: &'a ParcelTree,
    only: Option<&'a str>,
}


impl<'a> Selection<'a> {
    /// Parcels in non-decreasing weight order.
    pub fn parcels(self) -> impl Iterator<Item = &'a Parcel> {
        let only = self.only;
        self.tree
            .iter()
            .filter(move |parcel| only.is_none_or(|name| parcel.destination == name))
    }

    pub fn len(&self) -> usize {
        match self.only {
            None => self.tree.len(),
            Some(_) => self.parcels().count(),
        }
    }

    /// Parcels strictly above or below `threshold`, in weight order.
    pub fn search_by_weight(
        self,
        threshold: i32,
        direction: Direction,
    ) -> impl Iterator<Item = &'a Parcel> {
        self.parcels()
            .filter(move |parcel| direction.admits(parcel.weight, threshold))
    }

    /// Total weight, total valuation, and parcel count.
    pub fn totals(&self) -> Totals {
        match self.only {
            None => Totals {
                count: self.tree.len(),
                weight: self.tree.total_weight(),
                valuation: self.tree.total_valuation(),
            },
            Some(_) => self.parcels().fold(
                Totals { count: 0, weight: 0, valuation: 0.0 },
                |acc, parcel| Totals {
                    count: acc.count + 1,
                    weight: acc.weight + i64::from(parcel.weight),
                    valuation: acc.valuation + parcel.valuation,
                },
            ),
        }
    }

    /// Lightest and heaviest parcel.
    pub fn weight_extremes(&self) -> Option<Extremes<'a>> {
        let (low, high) = match self.only {
            // Spine walks on the whole tree
            None => (self.tree.min_by_weight()?, self.tree.max_by_weight()?),
            // First and last of the filtered in-order listing
            Some(_) => (self.parcels().next()?, self.parcels().last()?),
        };
        Some(Extremes { low, high })
    }

    /// Cheapest and most expensive parcel, first found winning ties.
    pub fn valuation_extremes(&self) -> Option<Extremes<'a>> {
        Some(Extremes {
            low: min_valuation(self.parcels())?,
            high: max_valuation(self.parcels())?,
        })
    }
}
