//! Bounded-depth neighborhood exploration
//!
//! Expansion follows each vertex's own incident edges (adjacency index),
//! recursing `depth - 1` levels from every far endpoint. No visited set is
//! kept: a vertex reachable by several routes is written several times and
//! the last write wins, including the origin itself at depth >= 2.

use crate::storage::{VertexId, WeightedGraph};
use std::collections::HashMap;

/// One explored neighbor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    /// Neighbor vertex
    pub vertex: VertexId,

    /// Weight of the edge through which it was last reached
    pub weight: u32,

    /// Walk that last reached it: origin first, `vertex` last
    pub route: Vec<VertexId>,
}

/// Ordered neighbor → weight mapping
///
/// Entries keep the position of their first write; weight and route come
/// from the last write.
#[derive(Debug, Clone, Default)]
pub struct Neighborhood {
    entries: Vec<Neighbor>,
    positions: HashMap<VertexId, usize>,
}

impl Neighborhood {
    fn write(&mut self, vertex: VertexId, weight: u32, route: &[VertexId]) {
        if let Some(&pos) = self.positions.get(&vertex) {
            let entry = &mut self.entries[pos];
            entry.weight = weight;
            entry.route.clear();
            entry.route.extend_from_slice(route);
        } else {
            self.positions.insert(vertex, self.entries.len());
            self.entries.push(Neighbor {
                vertex,
                weight,
                route: route.to_vec(),
            });
        }
    }

    /// Stable sort, descending by `key`, ties ascending by vertex id
    fn sort_descending_by<F: Fn(&Neighbor) -> u64>(&mut self, key: F) {
        self.entries
            .sort_by(|x, y| key(y).cmp(&key(x)).then(x.vertex.cmp(&y.vertex)));
        self.positions = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (entry.vertex, pos))
            .collect();
    }

    /// Number of neighbors
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no neighbor was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight recorded for `vertex`
    #[must_use]
    pub fn get(&self, vertex: VertexId) -> Option<u32> {
        self.entry(vertex).map(|entry| entry.weight)
    }

    /// Full entry for `vertex`
    #[must_use]
    pub fn entry(&self, vertex: VertexId) -> Option<&Neighbor> {
        self.positions.get(&vertex).map(|&pos| &self.entries[pos])
    }

    /// Walk that last reached `vertex`
    #[must_use]
    pub fn route(&self, vertex: VertexId) -> Option<&[VertexId]> {
        self.entry(vertex).map(|entry| entry.route.as_slice())
    }

    /// Whether `vertex` was reached
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.positions.contains_key(&vertex)
    }

    /// Iterate entries in order
    pub fn iter(&self) -> std::slice::Iter<'_, Neighbor> {
        self.entries.iter()
    }

    /// Neighbor ids in order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.entries.iter().map(|entry| entry.vertex)
    }

    /// `(vertex, weight)` pairs in order
    #[must_use]
    pub fn weights(&self) -> Vec<(VertexId, u32)> {
        self.entries
            .iter()
            .map(|entry| (entry.vertex, entry.weight))
            .collect()
    }
}

impl IntoIterator for Neighborhood {
    type Item = Neighbor;
    type IntoIter = std::vec::IntoIter<Neighbor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Neighborhood {
    type Item = &'a Neighbor;
    type IntoIter = std::slice::Iter<'a, Neighbor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Explore neighbors of `vertex` up to `depth` hops
///
/// Ordering: with `sort_by_weight`, descending by weight; otherwise, when a
/// hotspot table is populated, descending by each neighbor's triangle count;
/// otherwise discovery order. Sorted ties fall back to ascending id.
///
/// Unknown vertices and `depth == 0` yield an empty neighborhood.
///
/// # Example
///
/// ```
/// use fastgraph::{neighbors, GraphOptions, VertexId, WeightedGraph};
///
/// let graph = WeightedGraph::from_edge_list(
///     &[
///         (VertexId(1), VertexId(2)),
///         (VertexId(1), VertexId(3)),
///         (VertexId(3), VertexId(1)),
///     ],
///     GraphOptions::default(),
/// );
///
/// let near = neighbors(&graph, VertexId(1), 1, true);
/// assert_eq!(near.weights(), vec![(VertexId(3), 2), (VertexId(2), 1)]);
/// ```
#[must_use]
pub fn neighbors(
    graph: &WeightedGraph,
    vertex: VertexId,
    depth: usize,
    sort_by_weight: bool,
) -> Neighborhood {
    let mut found = Neighborhood::default();
    let mut route = vec![vertex];
    explore(graph, vertex, depth, &mut route, &mut found);

    if sort_by_weight {
        found.sort_descending_by(|entry| u64::from(entry.weight));
    } else if let Some(table) = graph.hotspot_cache() {
        found.sort_descending_by(|entry| table.triangles_of(entry.vertex).unwrap_or(0) as u64);
    }

    found
}

fn explore(
    graph: &WeightedGraph,
    vertex: VertexId,
    depth: usize,
    route: &mut Vec<VertexId>,
    found: &mut Neighborhood,
) {
    if depth == 0 {
        return;
    }

    for &edge_id in graph.adjacency().edges_of(vertex) {
        let Some((far, weight)) = graph
            .edge(edge_id)
            .and_then(|edge| edge.other_end(vertex).map(|far| (far, edge.weight)))
        else {
            continue;
        };

        route.push(far);
        found.write(far, weight, route);
        explore(graph, far, depth - 1, route, found);
        route.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraphOptions;

    fn graph(edges: &[(u32, u32)]) -> WeightedGraph {
        let edges: Vec<_> = edges
            .iter()
            .map(|&(a, b)| (VertexId(a), VertexId(b)))
            .collect();
        WeightedGraph::from_edge_list(&edges, GraphOptions::default())
    }

    #[test]
    fn test_depth_zero_and_unknown_are_empty() {
        let g = graph(&[(1, 2)]);
        assert!(neighbors(&g, VertexId(1), 0, false).is_empty());
        assert!(neighbors(&g, VertexId(9), 3, false).is_empty());
    }

    #[test]
    fn test_direct_neighbors_discovery_order() {
        let g = graph(&[(1, 2), (3, 1), (1, 4)]);
        let near = neighbors(&g, VertexId(1), 1, false);
        let order: Vec<_> = near.vertices().collect();
        assert_eq!(order, vec![VertexId(2), VertexId(3), VertexId(4)]);
        assert_eq!(near.route(VertexId(3)), Some(&[VertexId(1), VertexId(3)][..]));
    }

    #[test]
    fn test_depth_two_reaches_origin_and_beyond() {
        // Path 1 - 2 - 3
        let g = graph(&[(1, 2), (2, 3)]);
        let near = neighbors(&g, VertexId(1), 2, false);

        assert!(near.contains(VertexId(2)));
        assert!(near.contains(VertexId(3)));
        // Origin is rediscovered through 2
        assert!(near.contains(VertexId(1)));
        assert_eq!(
            near.route(VertexId(3)),
            Some(&[VertexId(1), VertexId(2), VertexId(3)][..])
        );
    }

    #[test]
    fn test_last_writer_wins() {
        // 1-2 (w=3), 2-3 (w=1), 1-3 (w=1): vertex 2 is written via edge 1-2
        // first, then overwritten from 3's expansion with weight of 3-2.
        let g = graph(&[(1, 2), (1, 2), (1, 2), (2, 3), (1, 3)]);
        let near = neighbors(&g, VertexId(1), 2, false);
        assert_eq!(near.get(VertexId(2)), Some(1));
        assert_eq!(
            near.route(VertexId(2)),
            Some(&[VertexId(1), VertexId(3), VertexId(2)][..])
        );
    }

    #[test]
    fn test_sort_by_weight_ties_by_id() {
        let g = graph(&[(1, 5), (1, 4), (1, 4), (1, 3)]);
        let near = neighbors(&g, VertexId(1), 1, true);
        assert_eq!(
            near.weights(),
            vec![(VertexId(4), 2), (VertexId(3), 1), (VertexId(5), 1)]
        );
    }

    #[test]
    fn test_hotspot_ordering_once_populated() {
        // Triangle 1-2-3 plus pendant 1-4
        let g = graph(&[(1, 4), (1, 2), (2, 3), (3, 1)]);
        let before: Vec<_> = neighbors(&g, VertexId(1), 1, false).vertices().collect();
        assert_eq!(before, vec![VertexId(4), VertexId(2), VertexId(3)]);

        let _ = g.hotspots();
        let after: Vec<_> = neighbors(&g, VertexId(1), 1, false).vertices().collect();
        assert_eq!(after, vec![VertexId(2), VertexId(3), VertexId(4)]);
    }

    #[test]
    fn test_isolated_cataloged_vertex() {
        let g = WeightedGraph::from_relations("1,A\n2,B\n", "1,1\n", GraphOptions::default())
            .unwrap();
        assert!(neighbors(&g, VertexId(2), 2, true).is_empty());
    }
}
