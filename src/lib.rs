//! fastgraph: in-memory weighted undirected graph engine
//!
//! # Overview
//!
//! fastgraph ingests a vertex relation and an edge relation, collapses
//! repeated vertex pairs into single weighted edges, and answers topology
//! queries: degree, bounded neighborhoods, triangles, hotspot ranking and
//! depth-bounded path discovery.
//!
//! # Quick Start
//!
//! ```
//! use fastgraph::{
//!     is_directly_connected, path_between, rank_by_degree, triangles_count, GraphOptions,
//!     VertexId, WeightedGraph,
//! };
//!
//! let graph = WeightedGraph::from_relations(
//!     "1,A\n2,B\n3,C\n4,D\n",
//!     "1,2\n2,3\n3,1\n3,4\n",
//!     GraphOptions::default(),
//! )?;
//!
//! assert_eq!(triangles_count(&graph), 1);
//! assert_eq!(graph.degree(VertexId(3)), Some(3));
//! assert!(!is_directly_connected(&graph, VertexId(1), VertexId(4)));
//!
//! let path = path_between(&graph, VertexId(1), VertexId(4), 2, false);
//! assert_eq!(path.first(), Some(&VertexId(1)));
//! assert_eq!(path.last(), Some(&VertexId(4)));
//!
//! assert_eq!(rank_by_degree(&graph, 1), vec![(VertexId(3), 3)]);
//! # Ok::<(), fastgraph::Error>(())
//! ```
//!
//! # Architecture
//!
//! - **Storage**: vertex catalog, canonical edge store, adjacency index
//! - **Relations**: line-oriented `id, name` / `id, id` text, CRLF on write
//! - **Algorithms**: neighborhood exploration, triangle enumeration,
//!   degree/triangle ranking, hotspot trails, bounded relay path search
//! - **Memoization**: one compute-once hotspot table per graph

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod config;
pub mod error;
pub mod storage;

// Re-export core types
pub use algorithms::{
    all_triangles, best_trail, is_directly_connected, is_valid_path, neighbors, path_between,
    rank_by_degree, rank_by_triangles, search_path, triangle_count_for, triangles_count,
    triangles_for_vertex, HotspotTable, Neighbor, Neighborhood, PathOutcome, Triangle,
};
pub use config::{GraphOptions, TrailFallback, TriangleDedup};
pub use error::{RelationError, RelationKind};
pub use storage::{Edge, EdgeId, GraphBuilder, VertexId, WeightedGraph};

// Error type
pub use anyhow::{Error, Result};
