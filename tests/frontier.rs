use proptest::prelude::*;
use wavefront::VertexSubset;

#[test]
fn sparse_dense_sparse_recovers_the_identical_set() {
    let mut s = VertexSubset::from_sparse(1000, vec![999, 0, 64, 63, 65, 512]);
    s.materialize_dense();
    assert!(s.is_dense());
    assert_eq!(s.len(), 6);
    s.materialize_sparse();
    // Recovered order is ascending, but the *set* is what matters.
    assert_eq!(s.as_sparse().unwrap(), &[0, 63, 64, 65, 512, 999]);
}

#[test]
fn conversions_are_idempotent() {
    let mut s = VertexSubset::from_sparse(50, vec![1, 2, 3]);
    s.materialize_sparse();
    assert_eq!(s.as_sparse().unwrap(), &[1, 2, 3]);
    s.materialize_dense();
    let first: Vec<usize> = s.to_sorted_ids();
    s.materialize_dense();
    assert_eq!(s.to_sorted_ids(), first);
}

#[test]
fn count_is_cached_in_both_representations() {
    let mut s = VertexSubset::from_sparse(300, (0..150).map(|i| i * 2).collect());
    assert_eq!(s.len(), 150);
    s.materialize_dense();
    assert_eq!(s.len(), 150);
    s.materialize_sparse();
    assert_eq!(s.len(), 150);
}

#[test]
fn contains_agrees_across_representations() {
    let mut s = VertexSubset::from_sparse(128, vec![0, 64, 127]);
    for v in [0usize, 1, 63, 64, 126, 127] {
        let sparse_answer = s.contains(v);
        s.materialize_dense();
        assert_eq!(s.contains(v), sparse_answer, "vertex {v}");
        s.materialize_sparse();
    }
}

proptest! {
    #[test]
    fn round_trip_preserves_any_set(ids in proptest::collection::vec(0usize..500, 0..120)) {
        let mut expected = ids.clone();
        expected.sort_unstable();
        expected.dedup();

        let mut s = VertexSubset::from_sparse(500, ids);
        s.materialize_dense();
        prop_assert_eq!(s.len(), expected.len());
        s.materialize_sparse();
        prop_assert_eq!(s.as_sparse().unwrap(), expected.as_slice());
    }
}
