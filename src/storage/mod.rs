//! Graph storage layer
//!
//! Vertex catalog, canonical edge store, adjacency index and the
//! line-oriented relation format they are loaded from.

pub mod adjacency;
pub mod catalog;
pub mod edges;
pub mod graph;
pub mod relation;

pub use adjacency::AdjacencyIndex;
pub use catalog::{VertexCatalog, VertexId};
pub use edges::{Edge, EdgeId, EdgeStore};
pub use graph::{GraphBuilder, WeightedGraph};
pub use relation::{edge_line, parse_edges, parse_vertices, vertex_line};
