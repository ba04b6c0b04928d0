//! Parterre core library.
//!
//! A disjoint-set forest (union-find) over a fixed universe of integer
//! elements `0..n`, using full path compression and union-by-size, together
//! with component enumeration utilities.

mod error;
mod forest;
mod partition;

pub use crate::{
    error::{ForestError, ForestErrorCode, Result},
    forest::DisjointSetForest,
    partition::{Partition, PartitionError},
};
