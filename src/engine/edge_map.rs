//! The direction-switching edge traversal operator.
//!
//! `edge_map` bounds its work by the smaller of two quantities: the number
//! of edges leaving the frontier (sparse path, outward over out-edges) and
//! the number of edges entering all vertices (dense path, inward over
//! in-edges against the frontier bitmap). The crossover is an explicit
//! threshold, by default `m / 20`.
//!
//! Atomicity contract: in the sparse path many sources may race to update
//! one destination, so the engine calls `update_atomic`. In the dense path
//! a single worker owns each destination and scans its in-edges
//! sequentially, so the engine calls the plain `update` and stops scanning
//! as soon as `cond` goes false.

use core::sync::atomic::Ordering;

use rayon::prelude::*;

use crate::frontier::bitmap::{AtomicBitmap, WORD_BITS};
use crate::frontier::VertexSubset;
use crate::graph::Graph;
use crate::metrics::{NullMetrics, TraversalDirection, TraversalMetrics};

/// Per-edge callbacks supplied by an algorithm.
///
/// The contract, for every considered edge `(s, d)`:
/// - `cond(d)` gates the edge: it must be idempotent and side-effect free,
///   safe to call redundantly.
/// - `update(s, d)` is the single-writer variant, applied when the engine
///   guarantees no concurrent writer for `d`'s state (the dense path).
/// - `update_atomic(s, d)` is the race-safe variant, built from the
///   primitives in [`crate::concurrency::atomic`]; its net effect under any
///   interleaving must equal applying `update` once per qualifying edge in
///   some serial order.
///
/// Both update variants return whether `d` should join the output frontier.
pub trait EdgeMapOp: Sync {
    /// Whether destination `d` is still eligible to be updated.
    fn cond(&self, d: usize) -> bool;

    /// Sequential-safe update; no concurrent writer for `d` exists.
    fn update(&self, s: usize, d: usize) -> bool;

    /// Concurrency-safe update; sources race freely on `d`.
    fn update_atomic(&self, s: usize, d: usize) -> bool;
}

/// Whether `edge_map` materializes an output frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Build the next frontier from the updates that returned `true`.
    #[default]
    NextFrontier,
    /// Apply side effects only; the returned subset is empty.
    SideEffectsOnly,
}

/// Per-call knobs for [`edge_map`].
pub struct EdgeMapOptions<'a> {
    /// Direction crossover in frontier edges; `None` means `m / 20`.
    pub threshold: Option<usize>,
    /// Output frontier construction mode.
    pub output: OutputMode,
    /// Collapse duplicate destinations in a sparse output (costs a dense
    /// round-trip over the output).
    pub dedupe: bool,
    /// Observability sink; no-op by default.
    pub metrics: &'a dyn TraversalMetrics,
}

impl Default for EdgeMapOptions<'_> {
    fn default() -> Self {
        Self {
            threshold: None,
            output: OutputMode::NextFrontier,
            dedupe: false,
            metrics: &NullMetrics,
        }
    }
}

impl<'a> EdgeMapOptions<'a> {
    /// Side-effects-only traversal (the classic `no_output` mode).
    pub fn no_output() -> Self {
        Self { output: OutputMode::SideEffectsOnly, ..Self::default() }
    }

    /// Overrides the direction crossover threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Collapses duplicate destinations in sparse outputs.
    #[must_use]
    pub fn with_dedupe(mut self) -> Self {
        self.dedupe = true;
        self
    }

    /// Installs a metrics sink for this call.
    #[must_use]
    pub fn with_metrics(mut self, metrics: &'a dyn TraversalMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

/// Traverses the edges incident to `frontier`, applying `op` per edge, and
/// returns the next frontier.
///
/// The frontier is taken `&mut` because the engine materializes whichever
/// representation the chosen direction needs, in place. An empty frontier
/// short-circuits: no representation change, no edge visits, no callback
/// invocations.
///
/// Work per call is `O(min(frontier_edges, m))` where `frontier_edges` is
/// the sum of active out-degrees plus the active count.
///
/// # Panics
/// Panics if `frontier.universe() != graph.vertices()`.
pub fn edge_map<Op: EdgeMapOp>(
    graph: &Graph,
    frontier: &mut VertexSubset,
    op: &Op,
    options: &EdgeMapOptions<'_>,
) -> VertexSubset {
    let n = graph.vertices();
    assert!(
        frontier.universe() == n,
        "frontier universe {} does not match graph order {n}",
        frontier.universe()
    );

    if frontier.is_empty() {
        return VertexSubset::empty(n);
    }

    let frontier_edges = out_degree_sum(graph, frontier) + frontier.len();
    let threshold = options.threshold.unwrap_or(graph.edges() / 20);

    if frontier_edges <= threshold {
        edge_map_sparse(graph, frontier, op, options)
    } else {
        edge_map_dense(graph, frontier, op, options)
    }
}

/// Sum of out-degrees over the active set, computed in the frontier's
/// current representation.
fn out_degree_sum(graph: &Graph, frontier: &VertexSubset) -> usize {
    if let Some(ids) = frontier.as_sparse() {
        ids.par_iter().map(|&v| graph.out_degree(v)).sum()
    } else {
        let bits = frontier.as_bitmap().expect("subset holds exactly one representation");
        bits.words()
            .par_iter()
            .enumerate()
            .map(|(wi, w)| {
                let mut word = w.load(Ordering::Relaxed);
                let mut sum = 0usize;
                while word != 0 {
                    let b = word.trailing_zeros() as usize;
                    word &= word - 1;
                    sum += graph.out_degree(wi * WORD_BITS + b);
                }
                sum
            })
            .sum()
    }
}

fn edge_map_sparse<Op: EdgeMapOp>(
    graph: &Graph,
    frontier: &mut VertexSubset,
    op: &Op,
    options: &EdgeMapOptions<'_>,
) -> VertexSubset {
    let n = graph.vertices();
    let metrics = options.metrics;
    metrics.direction_chosen(TraversalDirection::Sparse);
    let actives = frontier.materialize_sparse();

    match options.output {
        OutputMode::SideEffectsOnly => {
            actives.par_iter().for_each(|&s| {
                let nbrs = graph.out_neighbors(s);
                metrics.edges_scanned(nbrs.len());
                metrics.edges_traversed(nbrs.len());
                for &d in nbrs {
                    if op.cond(d) {
                        op.update_atomic(s, d);
                    }
                }
            });
            VertexSubset::empty(n)
        }
        OutputMode::NextFrontier => {
            // Indexed parallel collect is the prefix-sum compaction: each
            // source's survivors land in deterministic positions.
            let out: Vec<usize> = actives
                .par_iter()
                .flat_map_iter(|&s| {
                    let nbrs = graph.out_neighbors(s);
                    metrics.edges_scanned(nbrs.len());
                    metrics.edges_traversed(nbrs.len());
                    nbrs.iter().copied().filter(move |&d| op.cond(d) && op.update_atomic(s, d))
                })
                .collect();
            let mut next = VertexSubset::from_sparse(n, out);
            if options.dedupe {
                next.materialize_dense();
                next.materialize_sparse();
            }
            next
        }
    }
}

fn edge_map_dense<Op: EdgeMapOp>(
    graph: &Graph,
    frontier: &mut VertexSubset,
    op: &Op,
    options: &EdgeMapOptions<'_>,
) -> VertexSubset {
    let n = graph.vertices();
    let metrics = options.metrics;
    metrics.direction_chosen(TraversalDirection::Dense);
    let bits = frontier.materialize_dense();

    let out = match options.output {
        OutputMode::NextFrontier => Some(AtomicBitmap::new(n)),
        OutputMode::SideEffectsOnly => None,
    };

    (0..n).into_par_iter().for_each(|d| {
        if !op.cond(d) {
            return;
        }
        let in_nbrs = graph.in_neighbors(d);
        let mut scanned = 0usize;
        let mut traversed = 0usize;
        for &s in in_nbrs {
            scanned += 1;
            // SAFETY: `s < n` by the graph's construction invariant.
            if unsafe { bits.is_set_unchecked(s) } {
                traversed += 1;
                if op.update(s, d) {
                    if let Some(ref out) = out {
                        // Word sharing across destinations makes this an
                        // atomic OR; `d`'s algorithm state stays
                        // single-writer.
                        out.set(d, Ordering::Relaxed);
                    }
                }
                if !op.cond(d) {
                    break;
                }
            }
        }
        if scanned != 0 {
            metrics.edges_scanned(scanned);
        }
        if traversed != 0 {
            metrics.edges_traversed(traversed);
        }
    });

    match out {
        Some(out) => VertexSubset::from_bitmap(out),
        None => VertexSubset::empty(n),
    }
}
