//! Error types for the parterre core library.
//!
//! Defines the error enum exposed by [`crate::DisjointSetForest`] operations
//! and a convenient result alias.

use thiserror::Error;

/// Errors returned by [`crate::DisjointSetForest`] operations.
///
/// The forest has a single failure class: an element index outside the fixed
/// universe established at construction. Unions of already-connected elements
/// are a defined no-op, not an error.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
#[non_exhaustive]
pub enum ForestError {
    /// An element index fell outside the forest's universe.
    #[error("element {index} is out of bounds for a universe of {element_count} elements")]
    IndexOutOfBounds {
        /// The offending element index supplied by the caller.
        index: usize,
        /// Number of elements in the forest's universe.
        element_count: usize,
    },
}

impl ForestError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> ForestErrorCode {
        match self {
            Self::IndexOutOfBounds { .. } => ForestErrorCode::IndexOutOfBounds,
        }
    }
}

/// Machine-readable error codes for [`ForestError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ForestErrorCode {
    /// An element index fell outside the forest's universe.
    IndexOutOfBounds,
}

impl ForestErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IndexOutOfBounds => "INDEX_OUT_OF_BOUNDS",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ForestError>;
