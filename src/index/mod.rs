// =====================================================================
// File: index/mod.rs
// Author: Bob Jack
// Date: Oct 19, 2026
//
//! The `index` module contains the binary search tree that holds the
//! parcels of one catalog bucket, ordered by weight.
//!
//! Structure:
//! - `node.rs`  : Defines the [`ParcelNode`] structure and [`NodeId`].
//! - `tree.rs`  : Defines the [`ParcelTree`] and its algorithms
//!                (insert, traversal, extremes, search, totals, release).
//! - `tests.rs` : Unit tests for the tree (compiled only in test mode).
// =====================================================================

pub mod node;
pub mod tree;

pub use self::node::{NodeId, ParcelNode};
pub use self::tree::{InOrder, ParcelTree, max_valuation, min_valuation};
