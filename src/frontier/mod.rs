//! The frontier: an active-vertex set with dual sparse/dense representation.

pub mod bitmap;
pub mod subset;

pub use bitmap::AtomicBitmap;
pub use subset::VertexSubset;
