//! Unit tests for the disjoint-set forest.

use rstest::rstest;

use super::DisjointSetForest;
use crate::ForestError;

fn forest_with_unions(element_count: usize, unions: &[(usize, usize)]) -> DisjointSetForest {
    let mut forest = DisjointSetForest::new(element_count);
    for &(p, q) in unions {
        forest.union(p, q).expect("union indices must be in bounds");
    }
    forest
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(10)]
fn fresh_forest_has_one_component_per_element(#[case] element_count: usize) {
    let mut forest = DisjointSetForest::new(element_count);
    assert_eq!(forest.element_count(), element_count);
    assert_eq!(forest.component_count(), element_count);
    for element in 0..element_count {
        assert!(forest
            .connected(element, element)
            .expect("element must be in bounds"));
    }
}

#[test]
fn union_connects_elements() {
    let mut forest = forest_with_unions(5, &[(0, 3)]);
    assert!(forest.connected(0, 3).expect("in bounds"));
    assert!(forest.connected(3, 0).expect("in bounds"));
    assert!(!forest.connected(0, 1).expect("in bounds"));
    assert_eq!(forest.component_count(), 4);
}

#[test]
fn union_of_connected_elements_is_a_no_op() {
    let mut forest = forest_with_unions(4, &[(0, 1)]);
    assert_eq!(forest.component_count(), 3);

    forest.union(0, 1).expect("in bounds");
    forest.union(1, 0).expect("in bounds");
    assert_eq!(forest.component_count(), 3);
}

#[test]
fn union_is_transitive_through_intermediate_elements() {
    let mut forest = forest_with_unions(6, &[(0, 1), (1, 2), (4, 5)]);
    assert!(forest.connected(0, 2).expect("in bounds"));
    assert!(!forest.connected(2, 4).expect("in bounds"));
    assert_eq!(forest.component_count(), 3);
}

#[test]
fn merges_expected_components_for_sample_edges() {
    let mut forest = forest_with_unions(
        10,
        &[(0, 9), (1, 5), (4, 8), (4, 3), (0, 8), (6, 7)],
    );

    assert_eq!(forest.component_count(), 4);
    assert!(forest.connected(0, 9).expect("in bounds"));
    assert!(forest.connected(3, 8).expect("in bounds"));
    assert!(forest.connected(1, 5).expect("in bounds"));
    assert!(forest.connected(6, 7).expect("in bounds"));
    assert!(!forest.connected(5, 6).expect("in bounds"));
    assert!(!forest.connected(9, 2).expect("in bounds"));
    assert!(!forest.connected(4, 5).expect("in bounds"));
}

#[test]
fn component_of_lists_members_in_ascending_order() {
    let mut forest = forest_with_unions(
        10,
        &[(0, 9), (1, 5), (4, 8), (4, 3), (0, 8), (6, 7)],
    );

    assert_eq!(forest.component_of(0).expect("in bounds"), vec![0, 3, 4, 8, 9]);
    assert_eq!(forest.component_of(5).expect("in bounds"), vec![1, 5]);
    assert_eq!(forest.component_of(2).expect("in bounds"), vec![2]);
}

#[test]
fn component_of_agrees_with_connected() {
    let mut forest = forest_with_unions(8, &[(0, 4), (4, 6), (1, 2)]);
    let members = forest.component_of(6).expect("in bounds");

    for element in 0..forest.element_count() {
        let connected = forest.connected(6, element).expect("in bounds");
        assert_eq!(members.contains(&element), connected);
    }
}

#[test]
fn partition_groups_by_first_discovery() {
    let mut forest = forest_with_unions(
        10,
        &[(0, 9), (1, 5), (4, 8), (4, 3), (0, 8), (6, 7)],
    );

    let partition = forest.partition();
    assert_eq!(partition.group_count(), 4);
    assert_eq!(
        partition.groups(),
        &[
            vec![0, 3, 4, 8, 9],
            vec![1, 5],
            vec![2],
            vec![6, 7],
        ]
    );
}

#[test]
fn partition_of_empty_forest_has_no_groups() {
    let mut forest = DisjointSetForest::new(0);
    let partition = forest.partition();
    assert_eq!(partition.group_count(), 0);
    assert_eq!(partition.element_count(), 0);
}

#[test]
fn single_element_forest_is_its_own_component() {
    let mut forest = DisjointSetForest::new(1);
    assert_eq!(forest.component_count(), 1);
    assert!(forest.connected(0, 0).expect("in bounds"));
    assert_eq!(forest.component_of(0).expect("in bounds"), vec![0]);
}

#[test]
fn smaller_tree_attaches_beneath_larger_tree() {
    // Build a three-element component, then merge a singleton into it. The
    // singleton must not become the new root, so the component count and
    // membership stay consistent after further unions through the old root.
    let mut forest = forest_with_unions(5, &[(0, 1), (1, 2)]);
    forest.union(3, 0).expect("in bounds");
    assert_eq!(forest.component_count(), 2);
    assert_eq!(forest.component_of(3).expect("in bounds"), vec![0, 1, 2, 3]);
}

#[rstest]
#[case(10, 0)]
#[case(10, 10)]
#[case(0, 0)]
fn union_rejects_out_of_bounds_indices(#[case] index: usize, #[case] element_count: usize) {
    let mut forest = DisjointSetForest::new(element_count);
    let err = forest
        .union(index, 0)
        .expect_err("out-of-bounds union must fail");
    assert_eq!(
        err,
        ForestError::IndexOutOfBounds {
            index,
            element_count,
        }
    );
}

#[test]
fn failed_union_leaves_forest_unchanged() {
    let mut forest = forest_with_unions(4, &[(0, 1)]);
    let before = forest.clone();

    forest
        .union(0, 4)
        .expect_err("out-of-bounds union must fail");
    assert_eq!(forest, before);
}

#[test]
fn connected_rejects_out_of_bounds_indices() {
    let mut forest = DisjointSetForest::new(3);
    let err = forest
        .connected(1, 3)
        .expect_err("out-of-bounds query must fail");
    assert_eq!(
        err,
        ForestError::IndexOutOfBounds {
            index: 3,
            element_count: 3,
        }
    );
}

#[test]
fn component_of_rejects_out_of_bounds_index() {
    let mut forest = DisjointSetForest::new(0);
    let err = forest
        .component_of(0)
        .expect_err("empty universe has no members");
    assert_eq!(
        err,
        ForestError::IndexOutOfBounds {
            index: 0,
            element_count: 0,
        }
    );
}
