//! Strategy builders for forest property tests.
//!
//! Generates random union scripts: a universe size together with a sequence
//! of union operations whose operands are always in bounds. Scripts lean on
//! repeated and self-unions as well as merging ones, so the no-op paths get
//! exercised alongside the merges.

use proptest::prelude::*;

/// Maximum universe size for generated scripts.
const MAX_ELEMENTS: usize = 48;
/// Maximum number of union operations per script.
const MAX_UNIONS: usize = 96;

/// A generated sequence of union operations over a fixed universe.
#[derive(Clone, Debug)]
pub(super) struct UnionScript {
    /// Number of elements in the universe.
    pub element_count: usize,
    /// Union operands, all within `0..element_count`.
    pub unions: Vec<(usize, usize)>,
}

/// Generates union scripts across the full universe-size range.
pub(super) fn union_script_strategy() -> impl Strategy<Value = UnionScript> {
    (1..=MAX_ELEMENTS).prop_flat_map(|element_count| {
        proptest::collection::vec((0..element_count, 0..element_count), 0..=MAX_UNIONS)
            .prop_map(move |unions| UnionScript {
                element_count,
                unions,
            })
    })
}
