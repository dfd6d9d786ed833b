//! Example algorithm clients of the traversal engine.
//!
//! Each algorithm owns its per-vertex state as a slice of atomics and
//! supplies the engine an [`EdgeMapOp`](crate::engine::EdgeMapOp) whose
//! atomic update is order-independent: set-once CAS for BFS, monotone
//! `write_min` for components, commutative decrements for k-core, and
//! monotone state demotion for MIS.

pub mod bfs;
pub mod components;
pub mod kcore;
pub mod mis;

pub use bfs::{bfs, UNREACHED};
pub use components::connected_components;
pub use kcore::{kcore, KCoreResult};
pub use mis::{maximal_independent_set, MisState};
