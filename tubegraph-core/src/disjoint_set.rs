//! Union-find (disjoint set union) over the vertex range `0..n`.
//!
//! Kruskal's algorithm uses this structure to reject edges whose endpoints
//! already share a component. `find` compresses paths and `union` links by
//! rank, so a sequence of operations runs in near-constant amortised time.

use crate::{error::DisjointSetError, graph::Vertex};

/// Partition of `0..n` into disjoint sets.
///
/// # Examples
/// ```
/// use tubegraph_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(sets.union(2, 3)?);
/// assert!(!sets.union(1, 0)?);
/// assert!(sets.same_set(0, 1)?);
/// assert!(!sets.same_set(1, 2)?);
/// assert_eq!(sets.components(), 2);
/// # Ok::<(), tubegraph_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<Vertex>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets; every element starts as its own root.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Appends `element` as a singleton set.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::NonSequentialElement`] unless `element`
    /// equals the current [`Self::len`]; elements are added in order.
    pub fn make_set(&mut self, element: Vertex) -> Result<(), DisjointSetError> {
        let expected = self.parent.len();
        if element != expected {
            return Err(DisjointSetError::NonSequentialElement { element, expected });
        }
        self.parent.push(element);
        self.rank.push(0);
        self.components += 1;
        Ok(())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns the representative of `element`'s set, re-pointing every
    /// visited element directly at the root.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::ElementOutOfRange`] when `element` is not
    /// below [`Self::len`].
    pub fn find(&mut self, element: Vertex) -> Result<Vertex, DisjointSetError> {
        self.check_element(element)?;
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = element;
        while self.parent[current] != current {
            let parent = self.parent[current];
            self.parent[current] = root;
            current = parent;
        }

        Ok(root)
    }

    /// Returns `true` when both elements share a representative.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::ElementOutOfRange`] for an unknown element.
    pub fn same_set(&mut self, left: Vertex, right: Vertex) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when they were already connected. The lower-rank
    /// root is attached under the higher-rank one; on a tie `left`'s root
    /// survives and its rank grows by one.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::ElementOutOfRange`] for an unknown
    /// element, leaving the partition untouched.
    pub fn union(&mut self, left: Vertex, right: Vertex) -> Result<bool, DisjointSetError> {
        self.check_element(right)?;
        let mut left = self.find(left)?;
        let mut right = self.find(right)?;
        if left == right {
            return Ok(false);
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(true)
    }

    fn check_element(&self, element: Vertex) -> Result<(), DisjointSetError> {
        let len = self.parent.len();
        if element < len {
            Ok(())
        } else {
            Err(DisjointSetError::ElementOutOfRange { element, len })
        }
    }
}
