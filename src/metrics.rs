//! Injected observability hooks for the traversal engine.
//!
//! The engine takes an explicit metrics sink per call instead of threading
//! ambient global counters through the hot path. The default sink is a
//! no-op; [`CountingMetrics`] accumulates totals on cache-padded atomic
//! counters and is what the work-efficiency tests instrument.

use core::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_utils::CachePadded;
use serde::Serialize;

/// Which traversal path an `edge_map` call selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraversalDirection {
    /// Outward from the frontier over out-edges.
    Sparse,
    /// Over all vertices' in-edges against the frontier bitmap.
    Dense,
}

/// Sink for traversal counters. Every hook defaults to a no-op.
///
/// `edges_traversed` counts edge applications whose source was active (the
/// quantity the work-efficiency bound speaks about); `edges_scanned` counts
/// raw adjacency entries touched, which in the dense path also includes
/// sources that turn out to be inactive.
pub trait TraversalMetrics: Sync {
    /// Edges whose source was active, in one batch.
    fn edges_traversed(&self, count: usize) {
        let _ = count;
    }

    /// Raw adjacency entries scanned, in one batch.
    fn edges_scanned(&self, count: usize) {
        let _ = count;
    }

    /// The direction an `edge_map` call chose.
    fn direction_chosen(&self, direction: TraversalDirection) {
        let _ = direction;
    }
}

/// The no-op sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMetrics;

impl TraversalMetrics for NullMetrics {}

/// A sink that accumulates totals on relaxed atomic counters.
///
/// Counters are cache-padded: batches arrive concurrently from every worker
/// thread.
#[derive(Debug, Default)]
pub struct CountingMetrics {
    traversed: CachePadded<AtomicUsize>,
    scanned: CachePadded<AtomicUsize>,
    sparse_calls: CachePadded<AtomicUsize>,
    dense_calls: CachePadded<AtomicUsize>,
}

impl CountingMetrics {
    /// A fresh sink with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every counter to zero.
    pub fn reset(&self) {
        self.traversed.store(0, Ordering::Relaxed);
        self.scanned.store(0, Ordering::Relaxed);
        self.sparse_calls.store(0, Ordering::Relaxed);
        self.dense_calls.store(0, Ordering::Relaxed);
    }

    /// A point-in-time copy of the counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            edges_traversed: self.traversed.load(Ordering::Relaxed),
            edges_scanned: self.scanned.load(Ordering::Relaxed),
            sparse_calls: self.sparse_calls.load(Ordering::Relaxed),
            dense_calls: self.dense_calls.load(Ordering::Relaxed),
        }
    }
}

impl TraversalMetrics for CountingMetrics {
    fn edges_traversed(&self, count: usize) {
        self.traversed.fetch_add(count, Ordering::Relaxed);
    }

    fn edges_scanned(&self, count: usize) {
        self.scanned.fetch_add(count, Ordering::Relaxed);
    }

    fn direction_chosen(&self, direction: TraversalDirection) {
        match direction {
            TraversalDirection::Sparse => self.sparse_calls.fetch_add(1, Ordering::Relaxed),
            TraversalDirection::Dense => self.dense_calls.fetch_add(1, Ordering::Relaxed),
        };
    }
}

/// Counter totals exported by [`CountingMetrics::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    /// Edge applications with an active source.
    pub edges_traversed: usize,
    /// Raw adjacency entries scanned.
    pub edges_scanned: usize,
    /// `edge_map` calls that took the sparse path.
    pub sparse_calls: usize,
    /// `edge_map` calls that took the dense path.
    pub dense_calls: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_sink_accumulates_batches() {
        let m = CountingMetrics::new();
        m.edges_traversed(5);
        m.edges_traversed(7);
        m.edges_scanned(20);
        m.direction_chosen(TraversalDirection::Sparse);
        m.direction_chosen(TraversalDirection::Dense);
        m.direction_chosen(TraversalDirection::Dense);
        let snap = m.snapshot();
        assert_eq!(snap.edges_traversed, 12);
        assert_eq!(snap.edges_scanned, 20);
        assert_eq!(snap.sparse_calls, 1);
        assert_eq!(snap.dense_calls, 2);
        m.reset();
        assert_eq!(m.snapshot().edges_traversed, 0);
    }

    #[test]
    fn null_sink_is_inert() {
        let m = NullMetrics;
        m.edges_traversed(3);
        m.direction_chosen(TraversalDirection::Sparse);
    }
}
