//! Workload generation support for the parterre benchmarks.
//!
//! Provides deterministic, seeded edge workloads so benchmark runs are
//! reproducible across machines and invocations.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use parterre_core::DisjointSetForest;

/// A reproducible union workload over a fixed universe.
#[derive(Clone, Debug)]
pub struct EdgeWorkload {
    /// Number of elements in the universe.
    pub element_count: usize,
    /// Union operand pairs, all within `0..element_count`.
    pub pairs: Vec<(usize, usize)>,
}

impl EdgeWorkload {
    /// Generates `pair_count` uniformly random in-bounds pairs from `seed`.
    ///
    /// # Panics
    /// Panics when `element_count == 0`; an empty universe has no valid
    /// pairs.
    #[must_use]
    pub fn random(element_count: usize, pair_count: usize, seed: u64) -> Self {
        assert!(element_count > 0, "workload universe must be non-empty");
        let mut rng = SmallRng::seed_from_u64(seed);
        let pairs = (0..pair_count)
            .map(|_| {
                (
                    rng.gen_range(0..element_count),
                    rng.gen_range(0..element_count),
                )
            })
            .collect();
        Self {
            element_count,
            pairs,
        }
    }

    /// Builds a forest with every workload pair already unioned.
    ///
    /// # Panics
    /// Panics when a generated pair is out of bounds, which indicates a bug
    /// in the generator rather than a caller error.
    #[must_use]
    pub fn folded_forest(&self) -> DisjointSetForest {
        let mut forest = DisjointSetForest::new(self.element_count);
        for &(p, q) in &self.pairs {
            forest
                .union(p, q)
                .expect("generated pairs are always in bounds");
        }
        forest
    }
}
