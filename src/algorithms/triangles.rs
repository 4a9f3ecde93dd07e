//! Triangle enumeration
//!
//! For origin `v`: every incident edge gives a neighbor `n1`, every edge of
//! `n1` gives a candidate `n2`, and `v`–`n2` connectivity closes the
//! triangle `[v, n1, n2, v]`. Self-loops never contribute.
//!
//! # References
//! - Schank & Wagner (2005): "Finding, Counting and Listing all Triangles in Large Graphs"

use crate::config::TriangleDedup;
use crate::storage::{VertexId, WeightedGraph};
use std::collections::HashSet;

/// Closed triangle path `[v, n1, n2, v]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle(pub [VertexId; 4]);

impl Triangle {
    /// Vertex the enumeration started from
    #[must_use]
    pub const fn origin(&self) -> VertexId {
        self.0[0]
    }

    /// The three distinct corners, in path order
    #[must_use]
    pub const fn corners(&self) -> [VertexId; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum DedupKey {
    Canonical([VertexId; 3]),
    Digits(String),
}

impl DedupKey {
    fn new(mode: TriangleDedup, origin: VertexId, n1: VertexId, n2: VertexId) -> Self {
        match mode {
            TriangleDedup::Canonical => {
                let mut corners = [origin, n1, n2];
                corners.sort_unstable();
                Self::Canonical(corners)
            }
            TriangleDedup::DigitKey => {
                let mut digits: Vec<char> = format!("{n1}{n2}").chars().collect();
                digits.sort_unstable();
                Self::Digits(digits.into_iter().collect())
            }
        }
    }
}

fn enumerate_from(
    graph: &WeightedGraph,
    origin: VertexId,
    seen: &mut HashSet<DedupKey>,
    out: &mut Vec<Triangle>,
) {
    let mode = graph.options().triangle_dedup;
    let adjacency = graph.adjacency();

    for &first in adjacency.edges_of(origin) {
        let Some(n1) = graph.edge(first).and_then(|edge| edge.other_end(origin)) else {
            continue;
        };
        if n1 == origin {
            continue;
        }

        for &second in adjacency.edges_of(n1) {
            let Some(n2) = graph.edge(second).and_then(|edge| edge.other_end(n1)) else {
                continue;
            };
            if n2 == origin || n2 == n1 {
                continue;
            }

            if graph.edge_weight(origin, n2).is_some()
                && seen.insert(DedupKey::new(mode, origin, n1, n2))
            {
                out.push(Triangle([origin, n1, n2, origin]));
            }
        }
    }
}

/// Triangles through `vertex`, one per distinct corner pair
///
/// Unknown and isolated vertices have none.
///
/// # Example
///
/// ```
/// use fastgraph::{triangles_for_vertex, GraphOptions, VertexId, WeightedGraph};
///
/// let graph = WeightedGraph::from_relations(
///     "1,A\n2,B\n3,C\n4,D\n",
///     "1,2\n2,3\n3,1\n3,4\n",
///     GraphOptions::default(),
/// )
/// .unwrap();
///
/// let found = triangles_for_vertex(&graph, VertexId(1));
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].0, [VertexId(1), VertexId(2), VertexId(3), VertexId(1)]);
/// ```
#[must_use]
pub fn triangles_for_vertex(graph: &WeightedGraph, vertex: VertexId) -> Vec<Triangle> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    enumerate_from(graph, vertex, &mut seen, &mut out);
    out
}

/// Number of triangles through `vertex`
#[must_use]
pub fn triangle_count_for(graph: &WeightedGraph, vertex: VertexId) -> usize {
    triangles_for_vertex(graph, vertex).len()
}

/// Every triangle in the graph
///
/// Origins are visited in adjacency-index order with one shared key set.
/// With [`TriangleDedup::Canonical`] each triangle appears once; with
/// [`TriangleDedup::DigitKey`] a triangle is reported once per corner
/// whose two partners form a new digit key.
#[must_use]
pub fn all_triangles(graph: &WeightedGraph) -> Vec<Triangle> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for origin in graph.adjacency().vertices() {
        enumerate_from(graph, origin, &mut seen, &mut out);
    }
    out
}

/// Number of triangles in the graph
#[must_use]
pub fn triangles_count(graph: &WeightedGraph) -> usize {
    all_triangles(graph).len()
}
