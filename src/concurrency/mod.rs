//! Concurrency primitives consumed by the traversal engine.
//!
//! The engine owns no locks and no task graph: every bulk operation is flat
//! data parallelism over rayon's work-stealing pool, and the only shared
//! mutable state is per-vertex algorithm state behind the atomic primitives
//! in [`atomic`].

pub mod atomic;

pub use atomic::{atomic_array, compare_and_swap, write_add, write_min, Atom};
