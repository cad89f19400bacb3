// =====================================================================
// File: index/node.rs
// Author: Bob Jack
// Date: Oct 19, 2026
//
// Description:
//   Defines the binary search tree node (`ParcelNode`) used by the
//   per-bucket parcel index. Each node maintains:
//
//   - `parcel`: The one parcel this node owns.
//   - `left`  : Subtree of parcels strictly lighter than this one.
//   - `right` : Subtree of parcels at least as heavy as this one.
//
// Notes:
//   * Nodes live in the tree's arena (`Vec<ParcelNode>`), so children
//     are slot numbers (`NodeId`) rather than boxed pointers. The tree
//     owns every node and frees them all at once on release.
//   * Operations over the whole tree are implemented in `tree.rs`.
// =====================================================================
use crate::Parcel;

/// Slot of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);


/// Basic BST node keyed by parcel weight
#[derive(Debug)]
pub struct ParcelNode {
    pub parcel: Parcel,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}


impl ParcelNode {
    /// Creates a childless node owning `parcel`.
    ///
    /// # Example
    /// ```
    /// use parcelstore::{Parcel, index::ParcelNode};
    /// let node = ParcelNode::new(Parcel::new("Chile", 300, 12.5));
    /// assert!(node.is_leaf());
    /// assert_eq!(node.weight(), 300);
    /// ```
    pub fn new(parcel: Parcel) -> Self {
        Self {
            parcel,
            left: None,
            right: None,
        }
    }

    /// The ordering key of this node.
    pub fn weight(&self) -> i32 {
        self.parcel.weight
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

}
