//! A compact CSR (compressed sparse row) adjacency block.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1`, monotone, `offsets[0] == 0`
//! - `targets`: flat contiguous `Vec<usize>` of length `m`, every id `< n`
//! - `weights`: optional `Vec<i64>` parallel to `targets`
//!
//! The block is immutable once built: construction validates the invariants
//! and every later accessor relies on them.

use super::GraphError;

/// One direction of a graph's adjacency, in compressed sparse row form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Csr {
    offsets: Vec<usize>,
    targets: Vec<usize>,
    weights: Option<Vec<i64>>,
}

impl Csr {
    /// Builds a CSR block from raw parts, validating the layout invariants.
    ///
    /// # Errors
    ///
    /// - [`GraphError::OffsetsLength`] if `offsets` is empty.
    /// - [`GraphError::NonMonotoneOffsets`] if any offset decreases.
    /// - [`GraphError::OffsetsSumMismatch`] if `offsets[0] != 0` or the last
    ///   offset differs from `targets.len()`.
    /// - [`GraphError::TargetOutOfRange`] if any target id is `>= n`.
    /// - [`GraphError::WeightsLengthMismatch`] if weights are present with a
    ///   length other than `targets.len()`.
    pub fn from_parts(
        offsets: Vec<usize>,
        targets: Vec<usize>,
        weights: Option<Vec<i64>>,
    ) -> Result<Self, GraphError> {
        if offsets.is_empty() {
            return Err(GraphError::OffsetsLength { len: 0 });
        }
        let n = offsets.len() - 1;
        if offsets[0] != 0 || offsets[n] != targets.len() {
            return Err(GraphError::OffsetsSumMismatch {
                first: offsets[0],
                last: offsets[n],
                edges: targets.len(),
            });
        }
        for (i, w) in offsets.windows(2).enumerate() {
            if w[0] > w[1] {
                return Err(GraphError::NonMonotoneOffsets { index: i });
            }
        }
        for (edge, &t) in targets.iter().enumerate() {
            if t >= n {
                return Err(GraphError::TargetOutOfRange { edge, target: t, vertices: n });
            }
        }
        if let Some(ref w) = weights {
            if w.len() != targets.len() {
                return Err(GraphError::WeightsLengthMismatch {
                    weights: w.len(),
                    edges: targets.len(),
                });
            }
        }
        Ok(Self { offsets, targets, weights })
    }

    /// Builds a CSR block from an adjacency list, with no weights.
    ///
    /// # Errors
    ///
    /// [`GraphError::TargetOutOfRange`] if any neighbor id is out of bounds.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self, GraphError> {
        let n = adjacency.len();
        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        let mut total = 0usize;
        for nbrs in adjacency {
            total += nbrs.len();
            offsets.push(total);
        }
        let mut targets = Vec::with_capacity(total);
        for nbrs in adjacency {
            targets.extend_from_slice(nbrs);
        }
        Self::from_parts(offsets, targets, None)
    }

    /// Builds the transpose of this block: edge `(u, v)` becomes `(v, u)`.
    ///
    /// Counting sort over targets; stable in increasing source order, so
    /// each vertex's in-neighbor list comes out sorted when the forward
    /// lists are grouped by source.
    pub fn transpose(&self) -> Self {
        let n = self.vertices();
        let mut counts = vec![0usize; n];
        for &t in &self.targets {
            counts[t] += 1;
        }
        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        let mut running = 0usize;
        for &c in &counts {
            running += c;
            offsets.push(running);
        }
        let mut cursor = offsets[..n].to_vec();
        let mut targets = vec![0usize; self.edge_count()];
        let mut weights = self.weights.as_ref().map(|w| vec![0i64; w.len()]);
        for u in 0..n {
            for i in self.offsets[u]..self.offsets[u + 1] {
                let v = self.targets[i];
                targets[cursor[v]] = u;
                if let (Some(out), Some(inp)) = (weights.as_mut(), self.weights.as_ref()) {
                    out[cursor[v]] = inp[i];
                }
                cursor[v] += 1;
            }
        }
        Self { offsets, targets, weights }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertices(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Out-degree of `v`.
    ///
    /// # Panics
    /// Panics if `v >= vertices()`.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        assert!(v < self.vertices(), "vertex {v} out of bounds for n={}", self.vertices());
        self.offsets[v + 1] - self.offsets[v]
    }

    /// The neighbor list of `v` as a contiguous slice.
    ///
    /// # Panics
    /// Panics if `v >= vertices()`.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        assert!(v < self.vertices(), "vertex {v} out of bounds for n={}", self.vertices());
        &self.targets[self.offsets[v]..self.offsets[v + 1]]
    }

    /// The `i`-th neighbor of `v`.
    ///
    /// # Panics
    /// Panics if `v >= vertices()` or `i >= degree(v)`.
    #[inline]
    pub fn neighbor(&self, v: usize, i: usize) -> usize {
        let nbrs = self.neighbors(v);
        assert!(i < nbrs.len(), "neighbor index {i} out of bounds for degree {}", nbrs.len());
        nbrs[i]
    }

    /// The weight of the `i`-th edge of `v`, if this block carries weights.
    ///
    /// # Panics
    /// Panics if `v >= vertices()` or `i >= degree(v)`.
    #[inline]
    pub fn weight(&self, v: usize, i: usize) -> Option<i64> {
        assert!(v < self.vertices(), "vertex {v} out of bounds for n={}", self.vertices());
        assert!(i < self.degree(v), "edge index {i} out of bounds for degree {}", self.degree(v));
        self.weights.as_ref().map(|w| w[self.offsets[v] + i])
    }

    /// Whether this block carries per-edge weights.
    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }
}
