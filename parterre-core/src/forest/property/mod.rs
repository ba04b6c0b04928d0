//! Property-based tests for the disjoint-set forest.
//!
//! Verifies the forest against a naive label-array oracle, validates the
//! structure of extracted partitions, and checks that the compression
//! performed by read operations never changes any element's component.

mod oracle;
mod strategies;
