//! Connected components by parallel label propagation.
//!
//! Every vertex starts labeled with its own id; each round propagates the
//! minimum label across edges with `write_min` until no label changes. A
//! vertex re-enters the frontier only when its label first drops below the
//! previous round's value, so rounds shrink as components settle.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::concurrency::atomic::{atomic_array, write_min};
use crate::engine::{edge_map, vertex_map, EdgeMapOp, EdgeMapOptions};
use crate::frontier::VertexSubset;
use crate::graph::Graph;

struct MinLabel<'a> {
    labels: &'a [AtomicUsize],
    prev: &'a [AtomicUsize],
}

impl EdgeMapOp for MinLabel<'_> {
    fn cond(&self, _d: usize) -> bool {
        true
    }

    fn update(&self, s: usize, d: usize) -> bool {
        let new = self.labels[s].load(Ordering::SeqCst);
        let old = self.labels[d].load(Ordering::SeqCst);
        if new < old {
            self.labels[d].store(new, Ordering::SeqCst);
            if old == self.prev[d].load(Ordering::SeqCst) {
                return true;
            }
        }
        false
    }

    fn update_atomic(&self, s: usize, d: usize) -> bool {
        let new = self.labels[s].load(Ordering::SeqCst);
        let old = self.labels[d].load(Ordering::SeqCst);
        write_min(&self.labels[d], new) && old == self.prev[d].load(Ordering::SeqCst)
    }
}

/// Computes connected-component labels; two vertices share a label iff they
/// share a component. The label of a component is its minimum vertex id.
///
/// Intended for symmetric graphs (on a directed graph this computes a
/// fixpoint of min-label propagation along forward edges, not strongly
/// connected components). `max_rounds` caps the round loop; `None` runs to
/// the fixed point.
pub fn connected_components(graph: &Graph, max_rounds: Option<usize>) -> Vec<usize> {
    let n = graph.vertices();
    let labels: Vec<AtomicUsize> = atomic_array(n, |v| v);
    let prev: Vec<AtomicUsize> = atomic_array(n, |v| v);

    let mut frontier = VertexSubset::all(n);
    let mut round = 0usize;
    while !frontier.is_empty() {
        if max_rounds.is_some_and(|cap| round >= cap) {
            break;
        }
        vertex_map(&frontier, |v| {
            prev[v].store(labels[v].load(Ordering::SeqCst), Ordering::SeqCst);
        });
        let op = MinLabel { labels: &labels, prev: &prev };
        frontier = edge_map(graph, &mut frontier, &op, &EdgeMapOptions::default().with_dedupe());
        round += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(round, active = frontier.len(), "components round");
    }

    labels.into_iter().map(AtomicUsize::into_inner).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_components_get_two_labels() {
        // 0 - 1 - 2   3 - 4
        let g = Graph::symmetric_from_edges(5, &[(0, 1), (1, 2), (3, 4)]).unwrap();
        let labels = connected_components(&g, None);
        assert_eq!(labels, vec![0, 0, 0, 3, 3]);
    }

    #[test]
    fn isolated_vertices_keep_their_own_label() {
        let g = Graph::symmetric_from_edges(3, &[]).unwrap();
        assert_eq!(connected_components(&g, None), vec![0, 1, 2]);
    }
}
