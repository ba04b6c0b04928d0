//! Partition types for component enumeration.
//!
//! Provides the structure returned by [`crate::DisjointSetForest::partition`]
//! along with validation of the partition invariants.

use thiserror::Error;

/// Represents a partition of the universe `0..element_count` into disjoint
/// component groups.
///
/// # Examples
/// ```
/// use parterre_core::Partition;
///
/// let partition = Partition::from_groups(3, vec![vec![0, 2], vec![1]]);
/// assert_eq!(partition.group_count(), 2);
/// assert_eq!(partition.element_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    groups: Vec<Vec<usize>>,
    element_count: usize,
}

/// Error returned when a set of groups does not partition the universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// A group member fell outside the universe.
    #[error("element {element} is out of range for a universe of {element_count} elements")]
    OutOfRange {
        /// The out-of-range member.
        element: usize,
        /// Number of elements in the universe.
        element_count: usize,
    },
    /// An element appeared in more than one group.
    #[error("element {element} appears in more than one group")]
    DuplicateElement {
        /// The repeated member.
        element: usize,
    },
    /// An element of the universe appeared in no group.
    #[error("element {element} is missing from every group")]
    MissingElement {
        /// The uncovered element.
        element: usize,
    },
    /// A group contained no members.
    #[error("group {group} is empty")]
    EmptyGroup {
        /// Index of the empty group.
        group: usize,
    },
}

impl Partition {
    /// Builds a partition from explicit component groups.
    ///
    /// The groups must cover `0..element_count` exactly once each. Use
    /// [`Self::try_from_groups`] to handle arbitrary input instead of
    /// panicking.
    ///
    /// # Panics
    /// Panics when the groups do not partition the universe.
    ///
    /// # Examples
    /// ```
    /// use parterre_core::Partition;
    ///
    /// let partition = Partition::from_groups(2, vec![vec![0], vec![1]]);
    /// assert_eq!(partition.group_count(), 2);
    /// ```
    #[must_use]
    pub fn from_groups(element_count: usize, groups: Vec<Vec<usize>>) -> Self {
        Self::try_from_groups(element_count, groups)
            .expect("groups must partition the universe exactly")
    }

    /// Attempts to build a partition from component groups.
    ///
    /// Every element of `0..element_count` must appear in exactly one group
    /// and no group may be empty. An empty `groups` vector is accepted when
    /// `element_count == 0`.
    ///
    /// # Errors
    /// Returns [`PartitionError::OutOfRange`] when a member exceeds the
    /// universe, [`PartitionError::DuplicateElement`] when a member repeats,
    /// [`PartitionError::MissingElement`] when an element is uncovered, and
    /// [`PartitionError::EmptyGroup`] when a group has no members.
    ///
    /// # Examples
    /// ```
    /// use parterre_core::{Partition, PartitionError};
    ///
    /// let err = Partition::try_from_groups(2, vec![vec![0, 0], vec![1]])
    ///     .expect_err("duplicate member must be rejected");
    /// assert_eq!(err, PartitionError::DuplicateElement { element: 0 });
    /// ```
    pub fn try_from_groups(
        element_count: usize,
        groups: Vec<Vec<usize>>,
    ) -> Result<Self, PartitionError> {
        let mut covered = vec![false; element_count];

        for (group_index, group) in groups.iter().enumerate() {
            if group.is_empty() {
                return Err(PartitionError::EmptyGroup { group: group_index });
            }
            for &element in group {
                if element >= element_count {
                    return Err(PartitionError::OutOfRange {
                        element,
                        element_count,
                    });
                }
                if covered[element] {
                    return Err(PartitionError::DuplicateElement { element });
                }
                covered[element] = true;
            }
        }

        if let Some(element) = covered.iter().position(|&seen| !seen) {
            return Err(PartitionError::MissingElement { element });
        }

        Ok(Self {
            groups,
            element_count,
        })
    }

    /// Returns the component groups in discovery order.
    ///
    /// # Examples
    /// ```
    /// use parterre_core::Partition;
    ///
    /// let partition = Partition::from_groups(2, vec![vec![0, 1]]);
    /// assert_eq!(partition.groups(), &[vec![0, 1]]);
    /// ```
    #[must_use]
    #[rustfmt::skip]
    pub fn groups(&self) -> &[Vec<usize>] { &self.groups }

    /// Returns the number of component groups.
    #[must_use]
    #[rustfmt::skip]
    pub fn group_count(&self) -> usize { self.groups.len() }

    /// Returns the number of elements in the partitioned universe.
    #[must_use]
    #[rustfmt::skip]
    pub fn element_count(&self) -> usize { self.element_count }

    /// Consumes the partition, yielding the component groups.
    #[must_use]
    pub fn into_groups(self) -> Vec<Vec<usize>> {
        self.groups
    }
}
