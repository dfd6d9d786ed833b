//! The frontier traversal engine: `edge_map`, `vertex_map`, `vertex_filter`.

pub mod edge_map;
pub mod vertex_map;

pub use edge_map::{edge_map, EdgeMapOp, EdgeMapOptions, OutputMode};
pub use vertex_map::{vertex_filter, vertex_map};
