//! The active-vertex set, in sparse or dense form.
//!
//! A [`VertexSubset`] holds exactly one materialized representation at a
//! time:
//! - *sparse*: a `Vec<usize>` of active ids (duplicates permitted)
//! - *dense*: an [`AtomicBitmap`] over the whole universe plus a cached count
//!
//! Conversion between the two is explicit ([`materialize_sparse`] /
//! [`materialize_dense`]) and parallel: an ordered scan over bitmap words
//! one way, a concurrent scatter the other way. The active count is always
//! available in O(1) from the cache.
//!
//! [`materialize_sparse`]: VertexSubset::materialize_sparse
//! [`materialize_dense`]: VertexSubset::materialize_dense

use core::fmt;
use core::sync::atomic::Ordering;

use rayon::prelude::*;

use super::bitmap::AtomicBitmap;

enum Repr {
    Sparse(Vec<usize>),
    Dense { bits: AtomicBitmap, count: usize },
}

/// A set of active vertex ids over a universe `[0, n)`.
pub struct VertexSubset {
    n: usize,
    repr: Repr,
}

impl VertexSubset {
    /// The empty subset over a universe of `n` vertices.
    pub fn empty(n: usize) -> Self {
        Self { n, repr: Repr::Sparse(Vec::new()) }
    }

    /// The singleton subset `{v}`.
    ///
    /// # Panics
    /// Panics if `v >= n`.
    pub fn single(n: usize, v: usize) -> Self {
        assert!(v < n, "vertex {v} out of bounds for universe {n}");
        Self { n, repr: Repr::Sparse(vec![v]) }
    }

    /// The full subset `[0, n)`, materialized dense.
    pub fn all(n: usize) -> Self {
        let bits = AtomicBitmap::new(n);
        bits.set_all();
        Self { n, repr: Repr::Dense { bits, count: n } }
    }

    /// A sparse subset from an explicit id list. Duplicates are kept and
    /// counted by [`len`](Self::len).
    ///
    /// # Panics
    /// Panics if any id is `>= n`.
    pub fn from_sparse(n: usize, ids: Vec<usize>) -> Self {
        for &v in &ids {
            assert!(v < n, "vertex {v} out of bounds for universe {n}");
        }
        Self { n, repr: Repr::Sparse(ids) }
    }

    /// A dense subset taking ownership of a bitmap; the count is derived by
    /// parallel popcount.
    pub fn from_bitmap(bits: AtomicBitmap) -> Self {
        let n = bits.len_bits();
        let count = bits.count_ones();
        Self { n, repr: Repr::Dense { bits, count } }
    }

    /// A dense subset from raw words (see [`AtomicBitmap::from_words`]).
    ///
    /// # Panics
    /// Panics if the word count disagrees with `n` or a tail bit is set.
    pub fn from_words(n: usize, words: Vec<usize>) -> Self {
        Self::from_bitmap(AtomicBitmap::from_words(n, words))
    }

    /// The universe size `n`.
    #[inline]
    pub fn universe(&self) -> usize {
        self.n
    }

    /// The active count: entry count for sparse (duplicates included),
    /// cached popcount for dense. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Sparse(ids) => ids.len(),
            Repr::Dense { count, .. } => *count,
        }
    }

    /// Whether no vertex is active.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the dense representation is currently materialized.
    #[inline]
    pub fn is_dense(&self) -> bool {
        matches!(self.repr, Repr::Dense { .. })
    }

    /// Membership test: O(1) dense, O(len) sparse.
    ///
    /// # Panics
    /// Panics if `v >= universe()`.
    pub fn contains(&self, v: usize) -> bool {
        assert!(v < self.n, "vertex {v} out of bounds for universe {}", self.n);
        match &self.repr {
            Repr::Sparse(ids) => ids.contains(&v),
            Repr::Dense { bits, .. } => bits.is_set(v),
        }
    }

    /// The sparse id list, if sparse is the materialized representation.
    #[inline]
    pub fn as_sparse(&self) -> Option<&[usize]> {
        match &self.repr {
            Repr::Sparse(ids) => Some(ids),
            Repr::Dense { .. } => None,
        }
    }

    /// The bitmap, if dense is the materialized representation.
    #[inline]
    pub fn as_bitmap(&self) -> Option<&AtomicBitmap> {
        match &self.repr {
            Repr::Sparse(_) => None,
            Repr::Dense { bits, .. } => Some(bits),
        }
    }

    /// Converts to the sparse representation in place (parallel ordered scan
    /// over bitmap words) and returns the id list.
    ///
    /// A subset recovered from dense form is sorted and duplicate-free.
    pub fn materialize_sparse(&mut self) -> &[usize] {
        if let Repr::Dense { bits, .. } = &self.repr {
            let ids = bits.to_sorted_indices();
            self.repr = Repr::Sparse(ids);
        }
        match &self.repr {
            Repr::Sparse(ids) => ids,
            Repr::Dense { .. } => unreachable!("sparse representation just materialized"),
        }
    }

    /// Converts to the dense representation in place (parallel scatter).
    ///
    /// Duplicate sparse entries collapse onto one bit, so the cached count
    /// is re-derived by popcount.
    pub fn materialize_dense(&mut self) -> &AtomicBitmap {
        if let Repr::Sparse(ids) = &self.repr {
            let bits = AtomicBitmap::new(self.n);
            ids.par_iter().for_each(|&v| bits.set(v, Ordering::Relaxed));
            let count = bits.count_ones();
            self.repr = Repr::Dense { bits, count };
        }
        match &self.repr {
            Repr::Dense { bits, .. } => bits,
            Repr::Sparse(_) => unreachable!("dense representation just materialized"),
        }
    }

    /// The active set as a sorted, duplicate-free vector, regardless of the
    /// current representation. Does not change the materialized form.
    pub fn to_sorted_ids(&self) -> Vec<usize> {
        match &self.repr {
            Repr::Sparse(ids) => {
                let mut out = ids.clone();
                out.sort_unstable();
                out.dedup();
                out
            }
            Repr::Dense { bits, .. } => bits.to_sorted_indices(),
        }
    }
}

impl fmt::Debug for VertexSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexSubset")
            .field("universe", &self.n)
            .field("len", &self.len())
            .field("dense", &self.is_dense())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single() {
        let s = VertexSubset::empty(10);
        assert!(s.is_empty());
        assert_eq!(s.universe(), 10);

        let s = VertexSubset::single(10, 3);
        assert_eq!(s.len(), 1);
        assert!(s.contains(3));
        assert!(!s.contains(4));
    }

    #[test]
    fn all_is_dense_with_full_count() {
        let s = VertexSubset::all(70);
        assert!(s.is_dense());
        assert_eq!(s.len(), 70);
        assert!(s.contains(69));
    }

    #[test]
    fn round_trip_recovers_the_set() {
        let mut s = VertexSubset::from_sparse(200, vec![5, 64, 3, 199]);
        s.materialize_dense();
        assert_eq!(s.len(), 4);
        s.materialize_sparse();
        assert_eq!(s.as_sparse().unwrap(), &[3, 5, 64, 199]);
    }

    #[test]
    fn duplicates_collapse_on_densify() {
        let mut s = VertexSubset::from_sparse(10, vec![2, 2, 7]);
        assert_eq!(s.len(), 3);
        s.materialize_dense();
        assert_eq!(s.len(), 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn sparse_ids_must_be_in_universe() {
        let _ = VertexSubset::from_sparse(4, vec![4]);
    }
}
