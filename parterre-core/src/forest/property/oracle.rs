//! Naive component oracle for forest property tests.
//!
//! Keeps an explicit component label per element; a union relabels every
//! member of the absorbed component. Quadratic, but obviously correct, which
//! is what the property suites need from a reference.

pub(super) struct NaiveComponents {
    labels: Vec<usize>,
}

impl NaiveComponents {
    pub(super) fn new(element_count: usize) -> Self {
        Self {
            labels: (0..element_count).collect(),
        }
    }

    pub(super) fn union(&mut self, p: usize, q: usize) {
        let from = self.labels[q];
        let to = self.labels[p];
        if from == to {
            return;
        }
        for label in &mut self.labels {
            if *label == from {
                *label = to;
            }
        }
    }

    pub(super) fn connected(&self, p: usize, q: usize) -> bool {
        self.labels[p] == self.labels[q]
    }

    pub(super) fn component_count(&self) -> usize {
        let mut labels = self.labels.clone();
        labels.sort_unstable();
        labels.dedup();
        labels.len()
    }

    pub(super) fn component_of(&self, p: usize) -> Vec<usize> {
        let label = self.labels[p];
        (0..self.labels.len())
            .filter(|&element| self.labels[element] == label)
            .collect()
    }
}
