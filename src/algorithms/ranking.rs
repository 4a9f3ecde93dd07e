//! Degree and triangle-count ranking, hotspot table
//!
//! Rankings cover vertices with at least one incident edge, sorted
//! descending by metric with ties broken by ascending vertex id.

use super::triangles::triangle_count_for;
use crate::storage::{VertexId, WeightedGraph};
use std::collections::HashMap;
use tracing::debug;

/// Every indexed vertex ranked by triangle count
///
/// Built once per graph; see [`WeightedGraph::hotspots`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotspotTable {
    ranking: Vec<(VertexId, usize)>,
    ranks: HashMap<VertexId, usize>,
}

impl HotspotTable {
    fn from_ranking(ranking: Vec<(VertexId, usize)>) -> Self {
        let ranks = ranking
            .iter()
            .enumerate()
            .map(|(rank, &(vertex, _))| (vertex, rank))
            .collect();
        Self { ranking, ranks }
    }

    /// Number of ranked vertices
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    /// Whether no vertex is ranked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }

    /// Full ranking, best first
    #[must_use]
    pub fn entries(&self) -> &[(VertexId, usize)] {
        &self.ranking
    }

    /// First `n` entries
    #[must_use]
    pub fn top(&self, n: usize) -> &[(VertexId, usize)] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    /// Zero-based rank of `vertex`
    #[must_use]
    pub fn rank_of(&self, vertex: VertexId) -> Option<usize> {
        self.ranks.get(&vertex).copied()
    }

    /// Triangle count of `vertex`
    #[must_use]
    pub fn triangles_of(&self, vertex: VertexId) -> Option<usize> {
        self.rank_of(vertex).map(|rank| self.ranking[rank].1)
    }

    /// Number of leading entries counted as hotspots for `fraction`
    ///
    /// Rounded up, so any non-zero fraction of a non-empty table selects
    /// at least one vertex.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Tables >2^52 vertices unlikely
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to len
    pub fn hotspot_count(&self, fraction: f64) -> usize {
        let wanted = (self.ranking.len() as f64 * fraction.clamp(0.0, 1.0)).ceil();
        (wanted as usize).min(self.ranking.len())
    }

    /// Whether `vertex` ranks within the top `fraction`
    #[must_use]
    pub fn is_hotspot(&self, vertex: VertexId, fraction: f64) -> bool {
        self.rank_of(vertex)
            .is_some_and(|rank| rank < self.hotspot_count(fraction))
    }
}

fn sort_ranking(ranking: &mut [(VertexId, usize)]) {
    ranking.sort_unstable_by(|x, y| y.1.cmp(&x.1).then(x.0.cmp(&y.0)));
}

/// Rank every indexed vertex by triangle count
pub(crate) fn compute_hotspot_table(graph: &WeightedGraph) -> HotspotTable {
    let mut ranking: Vec<_> = graph
        .adjacency()
        .vertices()
        .map(|vertex| (vertex, triangle_count_for(graph, vertex)))
        .collect();
    sort_ranking(&mut ranking);

    debug!(
        ranked = ranking.len(),
        top = ?ranking.first(),
        "hotspot table computed"
    );

    HotspotTable::from_ranking(ranking)
}

/// Top `max_vertices` vertices by triangle count
///
/// Reuses the graph's hotspot table, computing it on first use.
///
/// # Example
///
/// ```
/// use fastgraph::{rank_by_triangles, GraphOptions, VertexId, WeightedGraph};
///
/// let graph = WeightedGraph::from_relations(
///     "1,A\n2,B\n3,C\n4,D\n",
///     "1,2\n2,3\n3,1\n3,4\n",
///     GraphOptions::default(),
/// )
/// .unwrap();
///
/// let ranked = rank_by_triangles(&graph, 2);
/// assert_eq!(ranked, vec![(VertexId(1), 1), (VertexId(2), 1)]);
/// ```
#[must_use]
pub fn rank_by_triangles(graph: &WeightedGraph, max_vertices: usize) -> Vec<(VertexId, usize)> {
    let table = match graph.hotspot_cache() {
        Some(table) => table,
        None => graph.hotspots(),
    };
    table.top(max_vertices).to_vec()
}

/// Top `max_vertices` vertices by degree (distinct incident edges)
///
/// # Example
///
/// ```
/// use fastgraph::{rank_by_degree, GraphOptions, VertexId, WeightedGraph};
///
/// let graph = WeightedGraph::from_relations(
///     "1,A\n2,B\n3,C\n4,D\n",
///     "1,2\n2,3\n3,1\n3,4\n",
///     GraphOptions::default(),
/// )
/// .unwrap();
///
/// let ranked = rank_by_degree(&graph, 2);
/// assert_eq!(ranked, vec![(VertexId(3), 3), (VertexId(1), 2)]);
/// ```
#[must_use]
pub fn rank_by_degree(graph: &WeightedGraph, max_vertices: usize) -> Vec<(VertexId, usize)> {
    let adjacency = graph.adjacency();
    let mut ranking: Vec<_> = adjacency
        .vertices()
        .map(|vertex| (vertex, adjacency.degree(vertex)))
        .collect();
    sort_ranking(&mut ranking);
    ranking.truncate(max_vertices);
    ranking
}
