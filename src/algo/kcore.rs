//! K-core decomposition of a symmetric graph by parallel peeling.
//!
//! For each `k` in increasing order: repeatedly remove every active vertex
//! whose induced degree fell below `k` (it belongs to the `(k-1)`-core but
//! not the `k`-core), and decrement its neighbors' degrees through a
//! side-effects-only edge traversal. The fixed point per `k` is reached
//! when a removal pass removes nothing.

use core::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use crate::concurrency::atomic::{atomic_array, write_add};
use crate::engine::{edge_map, vertex_filter, EdgeMapOp, EdgeMapOptions};
use crate::frontier::VertexSubset;
use crate::graph::Graph;

struct DecrementDegree<'a> {
    degrees: &'a [AtomicI64],
}

impl EdgeMapOp for DecrementDegree<'_> {
    fn cond(&self, d: usize) -> bool {
        // Vertices already peeled (or zeroed by removal) take no updates.
        self.degrees[d].load(Ordering::SeqCst) > 0
    }

    fn update(&self, _s: usize, d: usize) -> bool {
        let v = self.degrees[d].load(Ordering::SeqCst);
        self.degrees[d].store(v - 1, Ordering::SeqCst);
        true
    }

    fn update_atomic(&self, _s: usize, d: usize) -> bool {
        write_add(&self.degrees[d], -1);
        true
    }
}

/// Outcome of [`kcore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KCoreResult {
    /// Per-vertex core number: the largest `k` such that the vertex belongs
    /// to the `k`-core (0 for vertices never peeled before the cap).
    pub core_numbers: Vec<usize>,
    /// The largest `k` whose `k`-core is nonempty, when the peel emptied
    /// the graph within the cap; `None` if `max_k` stopped it first.
    pub largest_core: Option<usize>,
}

/// Peels a symmetric graph up to `max_k` (defaults to `n`, which always
/// runs to completion).
pub fn kcore(graph: &Graph, max_k: Option<usize>) -> KCoreResult {
    let n = graph.vertices();
    let max_k = max_k.unwrap_or(n);

    let degrees: Vec<AtomicI64> = atomic_array(n, |v| graph.out_degree(v) as i64);
    let core_numbers: Vec<AtomicUsize> = atomic_array(n, |_| 0);
    let op = DecrementDegree { degrees: &degrees };

    let mut frontier = VertexSubset::all(n);
    let mut largest_core = None;

    for k in 1..=max_k {
        loop {
            // Removal is "transform then decide": peeled vertices record
            // their core number and zero their degree in the predicate.
            let mut to_remove = vertex_filter(&frontier, |v| {
                if degrees[v].load(Ordering::SeqCst) < k as i64 {
                    core_numbers[v].store(k - 1, Ordering::SeqCst);
                    degrees[v].store(0, Ordering::SeqCst);
                    true
                } else {
                    false
                }
            });
            // Runs after the removal pass so freshly-zeroed degrees drop out.
            frontier = vertex_filter(&frontier, |v| degrees[v].load(Ordering::SeqCst) >= k as i64);
            if to_remove.is_empty() {
                break;
            }
            edge_map(graph, &mut to_remove, &op, &EdgeMapOptions::no_output());
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(k, active = frontier.len(), "kcore fixed point");
        if frontier.is_empty() {
            largest_core = Some(k - 1);
            break;
        }
    }

    KCoreResult {
        core_numbers: core_numbers.into_iter().map(AtomicUsize::into_inner).collect(),
        largest_core,
    }
}
