//! Breadth-first search producing a parent tree.
//!
//! The canonical direction-switching client: early rounds have small
//! frontiers and traverse sparse, the middle rounds of a low-diameter graph
//! cross the threshold and flip to dense, and the tail flips back.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::concurrency::atomic::{atomic_array, compare_and_swap};
use crate::engine::{edge_map, EdgeMapOp, EdgeMapOptions};
use crate::frontier::VertexSubset;
use crate::graph::Graph;

/// Parent value for vertices the search never reached.
pub const UNREACHED: usize = usize::MAX;

struct BfsTree<'a> {
    parents: &'a [AtomicUsize],
}

impl EdgeMapOp for BfsTree<'_> {
    fn cond(&self, d: usize) -> bool {
        self.parents[d].load(Ordering::SeqCst) == UNREACHED
    }

    fn update(&self, s: usize, d: usize) -> bool {
        self.parents[d].store(s, Ordering::SeqCst);
        true
    }

    fn update_atomic(&self, s: usize, d: usize) -> bool {
        // Set-once: exactly one racing source claims `d`.
        compare_and_swap(&self.parents[d], UNREACHED, s)
    }
}

/// Runs BFS from `source` and returns the parent array.
///
/// `parents[source] == source`; unreached vertices hold [`UNREACHED`]; every
/// other vertex holds some in-neighbor discovered one round earlier. Which
/// parent wins among same-round candidates is unspecified.
///
/// # Panics
/// Panics if `source >= graph.vertices()`.
pub fn bfs(graph: &Graph, source: usize) -> Vec<usize> {
    let n = graph.vertices();
    assert!(source < n, "source {source} out of bounds for n={n}");

    let parents: Vec<AtomicUsize> = atomic_array(n, |_| UNREACHED);
    parents[source].store(source, Ordering::SeqCst);

    let op = BfsTree { parents: &parents };
    let mut frontier = VertexSubset::single(n, source);
    #[cfg(feature = "tracing")]
    let mut round = 0usize;
    while !frontier.is_empty() {
        frontier = edge_map(graph, &mut frontier, &op, &EdgeMapOptions::default());
        #[cfg(feature = "tracing")]
        {
            round += 1;
            tracing::debug!(round, active = frontier.len(), "bfs round");
        }
    }

    parents.into_iter().map(AtomicUsize::into_inner).collect()
}
