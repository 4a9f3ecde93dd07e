//! Graph algorithms: neighborhoods, triangles, ranking, path discovery
//!
//! All algorithms read an immutable [`WeightedGraph`](crate::WeightedGraph);
//! only the hotspot table is memoized on the graph.

pub mod neighborhood;
pub mod paths;
pub mod ranking;
pub mod triangles;

pub use neighborhood::{neighbors, Neighbor, Neighborhood};
pub use paths::{
    best_trail, is_directly_connected, is_valid_path, path_between, search_path, PathOutcome,
};
pub use ranking::{rank_by_degree, rank_by_triangles, HotspotTable};
pub use triangles::{
    all_triangles, triangle_count_for, triangles_count, triangles_for_vertex, Triangle,
};
