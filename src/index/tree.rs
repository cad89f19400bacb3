// =====================================================================
// File: index/tree.rs
// Author: Bob Jack
// Date: Oct 19, 2026
//
// Description:
//   Implements the per-bucket parcel index (`ParcelTree`): an
//   unbalanced binary search tree ordered by parcel weight, stored in
//   an arena of `ParcelNode`s.
//
// Features:
//   - `insert`: Adds a parcel. Lighter goes left, ties and heavier go
//     right, so equal weights keep their insertion order.
//   - `iter`: In-order traversal, non-decreasing weight.
//   - `min_by_weight` / `max_by_weight`: Follow the left/right spine.
//   - `min_by_valuation` / `max_by_valuation`: Full in-order scan.
//   - `search_by_weight`: Parcels strictly above or below a threshold.
//   - `total_weight` / `total_valuation`: Sums over every node.
//   - `release`: Frees every node and parcel exactly once.
//
// Notes:
//   * The tree is never rebalanced. Sorted input degenerates it into
//     a list, so insert and every traversal are iterative; nothing here
//     recurses on tree depth.
//   * Arena growth goes through `try_reserve`, which lets an allocation
//     failure come back to the caller as an error instead of aborting.
// =====================================================================
use super::{NodeId, ParcelNode};
use crate::error::CatalogError;
use crate::{Direction, Parcel};

/// BST of parcels for one catalog bucket.
#[derive(Debug, Default)]
pub struct ParcelTree {
    nodes: Vec<ParcelNode>,
    root: Option<NodeId>,
}


impl ParcelTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parcels (and nodes) held.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&ParcelNode> {
        self.root.map(|id| self.node(id))
    }

    /// Node stored in slot `id`.
    ///
    /// Slots are only ever handed out by `insert` on this same tree, so
    /// an out-of-range id is a caller bug and panics like slice indexing.
    pub fn node(&self, id: NodeId) -> &ParcelNode {
        &self.nodes[id.0]
    }

    /// Insert a parcel into the tree.
    ///
    /// Descends from the root comparing weights: strictly lighter goes
    /// left, otherwise right, until an empty child slot is found.
    ///
    /// # Arguments
    /// * `parcel` - The parcel to store. The tree takes ownership.
    ///
    /// # Returns
    /// * `Ok(NodeId)` - The slot of the new node.
    /// * `Err(CatalogError::Allocation)` - The arena could not grow. The
    ///   parcel is dropped and the tree is unchanged.
    ///
    /// # Example
    /// ```
    /// use parcelstore::{Parcel, ParcelTree};
    ///
    /// let mut tree = ParcelTree::new();
    /// tree.insert(Parcel::new("Brazil", 500, 20.0)).unwrap();
    /// tree.insert(Parcel::new("Brazil", 200, 15.0)).unwrap();
    /// tree.insert(Parcel::new("Brazil", 800, 30.0)).unwrap();
    ///
    /// let weights: Vec<i32> = tree.iter().map(|p| p.weight).collect();
    /// assert_eq!(weights, vec![200, 500, 800]);
    /// ```
    pub fn insert(&mut self, parcel: Parcel) -> Result<NodeId, CatalogError> {
        if self.nodes.try_reserve(1).is_err() {
            return Err(CatalogError::Allocation {
                destination: parcel.destination.clone(),
            });
        }

        let id = NodeId(self.nodes.len());
        let weight = parcel.weight;

        // Link the new slot under its parent before pushing the node
        if let Some(mut current) = self.root {
            loop {
                let node = &mut self.nodes[current.0];
                let slot = if weight < node.weight() {
                    &mut node.left
                } else {
                    &mut node.right
                };
                match *slot {
                    Some(next) => current = next,
                    None => {
                        *slot = Some(id);
                        break;
                    }
                }
            }
        } else {
            self.root = Some(id);
        }

        self.nodes.push(ParcelNode::new(parcel));
        Ok(id)
    }

    /// In-order traversal: left subtree, node, right subtree.
    /// Yields parcels in non-decreasing weight order.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder {
            tree: self,
            stack: Vec::new(),
            current: self.root,
        }
    }

    /// Lightest parcel: the end of the left spine.
    pub fn min_by_weight(&self) -> Option<&Parcel> {
        self.follow_spine(|node| node.left)
    }

    /// Heaviest parcel: the end of the right spine. Among equal maximum
    /// weights this is the last one inserted, matching the last element
    /// of `iter()`.
    pub fn max_by_weight(&self) -> Option<&Parcel> {
        self.follow_spine(|node| node.right)
    }

    /// Cheapest parcel. Valuation is not the tree key, so this visits
    /// every node; on ties the first one in traversal order wins.
    pub fn min_by_valuation(&self) -> Option<&Parcel> {
        min_valuation(self.iter())
    }

    /// Most expensive parcel, first in traversal order on ties.
    pub fn max_by_valuation(&self) -> Option<&Parcel> {
        max_valuation(self.iter())
    }

    /// Parcels strictly heavier (`Higher`) or strictly lighter (`Lower`)
    /// than `threshold`, in traversal order.
    ///
    /// # Example
    /// ```
    /// use parcelstore::{Direction, Parcel, ParcelTree};
    ///
    /// let mut tree = ParcelTree::new();
    /// for w in [500, 200, 800] {
    ///     tree.insert(Parcel::new("Brazil", w, 1.0)).unwrap();
    /// }
    /// let higher: Vec<i32> = tree.search_by_weight(500, Direction::Higher).map(|p| p.weight).collect();
    /// assert_eq!(higher, vec![800]);
    /// ```
    pub fn search_by_weight(
        &self,
        threshold: i32,
        direction: Direction,
    ) -> impl Iterator<Item = &Parcel> + '_ {
        self.iter()
            .filter(move |parcel| direction.admits(parcel.weight, threshold))
    }

    /// Sum of all weights. Widened to `i64` so large loads cannot overflow.
    pub fn total_weight(&self) -> i64 {
        self.iter().map(|parcel| i64::from(parcel.weight)).sum()
    }

    /// Sum of all valuations, unrounded.
    pub fn total_valuation(&self) -> f64 {
        self.iter().map(|parcel| parcel.valuation).sum()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();

        while let Some((id, level)) = pending.pop() {
            deepest = deepest.max(level);
            let node = self.node(id);
            for child in [node.left, node.right].into_iter().flatten() {
                pending.push((child, level + 1));
            }
        }
        deepest
    }

    /// Frees every node together with the parcel it owns.
    ///
    /// # Returns
    /// The number of parcels freed. A second call frees nothing and
    /// returns 0.
    pub fn release(&mut self) -> usize {
        let freed = self.nodes.len();
        // Replace rather than clear so the arena's capacity goes too
        self.nodes = Vec::new();
        self.root = None;
        freed
    }


    // =========================
    // Traversal helpers
    // =========================

    fn follow_spine(&self, step: impl Fn(&ParcelNode) -> Option<NodeId>) -> Option<&Parcel> {
        let mut current = self.root()?;
        while let Some(next) = step(current) {
            current = self.node(next);
        }
        Some(&current.parcel)
    }
}


impl<'a> IntoIterator for &'a ParcelTree {
    type Item = &'a Parcel;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


/// In-order iterator over a `ParcelTree`, driven by an explicit stack.
pub struct InOrder<'a> {
    tree: &'a ParcelTree,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Parcel;

    fn next(&mut self) -> Option<Self::Item> {
        // Walk down the left edge, remembering the way back up
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.tree.node(id).left;
        }

        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.current = node.right;
        Some(&node.parcel)
    }
}


/// Cheapest parcel of a sequence. Only a strictly lower valuation
/// replaces the current pick, so the first of equal minima is kept.
pub fn min_valuation<'a>(parcels: impl IntoIterator<Item = &'a Parcel>) -> Option<&'a Parcel> {
    first_extreme(parcels, |candidate, best| candidate.valuation < best.valuation)
}

/// Most expensive parcel of a sequence, first of equal maxima kept.
pub fn max_valuation<'a>(parcels: impl IntoIterator<Item = &'a Parcel>) -> Option<&'a Parcel> {
    first_extreme(parcels, |candidate, best| candidate.valuation > best.valuation)
}

fn first_extreme<'a>(
    parcels: impl IntoIterator<Item = &'a Parcel>,
    beats: impl Fn(&Parcel, &Parcel) -> bool,
) -> Option<&'a Parcel> {
    parcels.into_iter().fold(None, |best, candidate| match best {
        Some(best) if !beats(candidate, best) => Some(best),
        _ => Some(candidate),
    })
}
