//! Disjoint-set forest over a fixed universe of integer elements.
//!
//! The forest partitions `0..n` into disjoint components, supporting
//! near-constant amortised merge and same-component queries via full path
//! compression and size-weighted union. Queries take `&mut self` because
//! path compression rewrites parent pointers even during reads; callers
//! needing shared access across threads must impose external mutual
//! exclusion.

use std::collections::{HashMap, hash_map::Entry};

use tracing::{debug, instrument, trace};

use crate::{
    error::{ForestError, Result},
    partition::Partition,
};

/// A disjoint-set forest (union-find) with path compression and
/// union-by-size.
///
/// The universe is fixed at construction: `new(n)` creates `n` singleton
/// components identified by the indices `0..n`. Components are merged with
/// [`Self::union`] and queried with [`Self::connected`],
/// [`Self::component_of`], and [`Self::partition`].
///
/// # Examples
/// ```
/// use parterre_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4);
/// forest.union(0, 2)?;
/// assert!(forest.connected(0, 2)?);
/// assert!(!forest.connected(0, 1)?);
/// assert_eq!(forest.component_count(), 3);
/// # Ok::<(), parterre_core::ForestError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSetForest {
    /// Creates a forest of `element_count` singleton components.
    ///
    /// `element_count == 0` yields a valid, empty forest.
    ///
    /// # Examples
    /// ```
    /// use parterre_core::DisjointSetForest;
    ///
    /// let forest = DisjointSetForest::new(10);
    /// assert_eq!(forest.element_count(), 10);
    /// assert_eq!(forest.component_count(), 10);
    /// ```
    #[must_use]
    pub fn new(element_count: usize) -> Self {
        Self {
            parent: (0..element_count).collect(),
            size: vec![1; element_count],
            components: element_count,
        }
    }

    /// Returns the number of elements in the universe.
    #[must_use]
    #[rustfmt::skip]
    pub fn element_count(&self) -> usize { self.parent.len() }

    /// Returns `true` when the universe contains no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the current number of components.
    ///
    /// Starts at `element_count()` and decreases by exactly one on every
    /// merging union.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Merges the components containing `p` and `q`.
    ///
    /// A no-op when the two elements are already connected. Otherwise the
    /// root of the smaller tree is attached beneath the root of the larger
    /// tree (ties attach `q`'s root beneath `p`'s root), keeping tree height
    /// logarithmic.
    ///
    /// # Errors
    /// Returns [`ForestError::IndexOutOfBounds`] when either index falls
    /// outside the universe; the forest is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use parterre_core::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::new(3);
    /// forest.union(0, 1)?;
    /// forest.union(0, 1)?; // already connected: no effect
    /// assert_eq!(forest.component_count(), 2);
    /// # Ok::<(), parterre_core::ForestError>(())
    /// ```
    pub fn union(&mut self, p: usize, q: usize) -> Result<()> {
        self.ensure_in_bounds(p)?;
        self.ensure_in_bounds(q)?;

        let p_root = self.find_root(p);
        let q_root = self.find_root(q);
        if p_root == q_root {
            return Ok(());
        }

        let (absorbing, absorbed) = if self.size[p_root] < self.size[q_root] {
            (q_root, p_root)
        } else {
            (p_root, q_root)
        };
        self.parent[absorbed] = absorbing;
        self.size[absorbing] += self.size[absorbed];
        self.components -= 1;

        trace!(
            absorbing,
            absorbed,
            components = self.components,
            "merged components"
        );
        Ok(())
    }

    /// Returns `true` when `p` and `q` currently share a component.
    ///
    /// # Errors
    /// Returns [`ForestError::IndexOutOfBounds`] when either index falls
    /// outside the universe.
    ///
    /// # Examples
    /// ```
    /// use parterre_core::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::new(2);
    /// assert!(forest.connected(1, 1)?);
    /// assert!(!forest.connected(0, 1)?);
    /// # Ok::<(), parterre_core::ForestError>(())
    /// ```
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        self.ensure_in_bounds(p)?;
        self.ensure_in_bounds(q)?;
        Ok(self.find_root(p) == self.find_root(q))
    }

    /// Returns every element in the same component as `p`, ascending by
    /// index.
    ///
    /// Resolves the root of all `n` elements, so each call costs `O(n α(n))`
    /// and compresses every path it touches.
    ///
    /// # Errors
    /// Returns [`ForestError::IndexOutOfBounds`] when `p` falls outside the
    /// universe.
    ///
    /// # Examples
    /// ```
    /// use parterre_core::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::new(4);
    /// forest.union(3, 1)?;
    /// assert_eq!(forest.component_of(1)?, vec![1, 3]);
    /// # Ok::<(), parterre_core::ForestError>(())
    /// ```
    pub fn component_of(&mut self, p: usize) -> Result<Vec<usize>> {
        self.ensure_in_bounds(p)?;
        let root = self.find_root(p);
        let members = (0..self.parent.len())
            .filter(|&element| self.find_root(element) == root)
            .collect();
        Ok(members)
    }

    /// Extracts the full partition of the universe into components.
    ///
    /// Groups are ordered by the first element discovered during a single
    /// left-to-right scan; members within each group ascend. The number of
    /// groups equals [`Self::component_count`].
    ///
    /// # Examples
    /// ```
    /// use parterre_core::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::new(4);
    /// forest.union(2, 0)?;
    /// let partition = forest.partition();
    /// assert_eq!(partition.groups(), &[vec![0, 2], vec![1], vec![3]]);
    /// # Ok::<(), parterre_core::ForestError>(())
    /// ```
    #[must_use]
    #[instrument(name = "forest.partition", skip(self), fields(element_count = self.parent.len()))]
    pub fn partition(&mut self) -> Partition {
        let element_count = self.parent.len();
        let mut group_of_root: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();

        for element in 0..element_count {
            let root = self.find_root(element);
            match group_of_root.entry(root) {
                Entry::Occupied(slot) => groups[*slot.get()].push(element),
                Entry::Vacant(slot) => {
                    slot.insert(groups.len());
                    groups.push(vec![element]);
                }
            }
        }

        debug!(
            element_count,
            group_count = groups.len(),
            "extracted partition"
        );
        Partition::from_groups(element_count, groups)
    }

    /// Resolves the root of `element` with full path compression: every node
    /// on the walked path is repointed directly at the root.
    ///
    /// Precondition: `element` is in bounds, guaranteed by the public
    /// wrappers.
    fn find_root(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = element;
        while self.parent[current] != current {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    fn ensure_in_bounds(&self, index: usize) -> Result<()> {
        if index < self.parent.len() {
            Ok(())
        } else {
            Err(ForestError::IndexOutOfBounds {
                index,
                element_count: self.parent.len(),
            })
        }
    }
}

#[cfg(test)]
mod property;
#[cfg(test)]
mod tests;
