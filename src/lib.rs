//! # `wavefront` - Frontier-Based Graph Processing
//!
//! A shared-memory engine for expressing vertex-centric graph algorithms as
//! sequences of two bulk operations over an active-vertex frontier: an
//! edge-traversal operator (`edge_map`) and vertex-transform operators
//! (`vertex_map` / `vertex_filter`). Targets graphs large enough to need
//! every core of one machine and small enough to fit in its memory.
//!
//! ## Core Pieces
//!
//! 1. **Graph Store** (`graph`):
//!    - Immutable CSR adjacency, validated at construction
//!    - Symmetric and directed variants behind one access contract;
//!      directed graphs carry a transpose for in-edge scans
//!
//! 2. **Frontier** (`frontier`):
//!    - One active-vertex set, two physical forms: a sparse id list and a
//!      word-packed atomic bitmap
//!    - Explicit, parallel conversion in each direction; O(1) cached count
//!
//! 3. **Traversal Engine** (`engine`):
//!    - `edge_map` switches direction per call: outward over the frontier's
//!      out-edges when the frontier is small, inward over all vertices'
//!      in-edges when it is large
//!    - Work per call is bounded by the smaller of the two edge counts, not
//!      by the size of the graph
//!    - Race-safe updates (`update_atomic`) on the outward path; per-
//!      destination single-writer updates with early exit on the inward path
//!
//! 4. **Atomic Primitives** (`concurrency`):
//!    - Compare-and-swap, fetch-add and fetch-min over shared per-vertex
//!      state, sequentially consistent
//!
//! Every bulk operation is flat data parallelism on rayon's work-stealing
//! pool and blocks until its parallel work completes, so each round's
//! output frontier is fully materialized before the next round reads it.
//!
//! ## Example
//!
//! ```rust
//! use wavefront::algo::bfs;
//! use wavefront::graph::Graph;
//!
//! // 0 - 1 - 2 - 3, plus a chord 1 - 3
//! let g = Graph::symmetric_from_edges(4, &[(0, 1), (1, 2), (2, 3), (1, 3)]).unwrap();
//! let parents = bfs(&g, 0);
//!
//! assert_eq!(parents[0], 0);
//! assert_eq!(parents[1], 0);
//! assert_eq!(parents[3], 1);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod algo;
pub mod concurrency;
pub mod engine;
pub mod frontier;
pub mod graph;
pub mod metrics;

pub use engine::{edge_map, vertex_filter, vertex_map, EdgeMapOp, EdgeMapOptions, OutputMode};
pub use frontier::{AtomicBitmap, VertexSubset};
pub use graph::{Graph, GraphError};
pub use metrics::{CountingMetrics, MetricsSnapshot, NullMetrics, TraversalDirection, TraversalMetrics};
