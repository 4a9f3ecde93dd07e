//! Adjacency index: vertex → incident canonical edge ids
//!
//! Each list is duplicate-free and ordered by the first time the edge
//! touched the vertex. Vertices appear in first-touch order.

use super::{EdgeId, VertexId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Vertex → incident edge list
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// Vertices in first-touch order
    order: Vec<VertexId>,

    /// Incident edges per vertex
    incident: HashMap<VertexId, Vec<EdgeId>>,
}

impl AdjacencyIndex {
    /// Create empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `edge` to the incident list of `vertex`
    ///
    /// Lists stay duplicate-free only if each canonical edge is attached
    /// once per distinct endpoint.
    pub fn attach(&mut self, vertex: VertexId, edge: EdgeId) {
        match self.incident.entry(vertex) {
            Entry::Occupied(entry) => entry.into_mut().push(edge),
            Entry::Vacant(entry) => {
                self.order.push(vertex);
                entry.insert(vec![edge]);
            }
        }
    }

    /// Incident edges of a vertex (empty for unindexed vertices)
    #[must_use]
    pub fn edges_of(&self, vertex: VertexId) -> &[EdgeId] {
        self.incident.get(&vertex).map_or(&[], Vec::as_slice)
    }

    /// Whether the vertex has at least one incident edge
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.incident.contains_key(&vertex)
    }

    /// Number of distinct incident edges
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.edges_of(vertex).len()
    }

    /// Number of indexed vertices
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no vertex is indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Indexed vertices in first-touch order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_appends_in_order() {
        let mut index = AdjacencyIndex::new();
        index.attach(VertexId(1), EdgeId(3));
        index.attach(VertexId(1), EdgeId(1));

        assert_eq!(index.edges_of(VertexId(1)), &[EdgeId(3), EdgeId(1)]);
        assert_eq!(index.degree(VertexId(1)), 2);
    }

    #[test]
    fn test_unindexed_vertex_is_empty() {
        let index = AdjacencyIndex::new();
        let empty: &[EdgeId] = &[];
        assert_eq!(index.edges_of(VertexId(3)), empty);
        assert_eq!(index.degree(VertexId(3)), 0);
        assert!(!index.contains(VertexId(3)));
    }

    #[test]
    fn test_first_touch_order() {
        let mut index = AdjacencyIndex::new();
        index.attach(VertexId(5), EdgeId(1));
        index.attach(VertexId(2), EdgeId(1));
        index.attach(VertexId(9), EdgeId(2));
        index.attach(VertexId(2), EdgeId(2));

        let order: Vec<_> = index.vertices().collect();
        assert_eq!(order, vec![VertexId(5), VertexId(2), VertexId(9)]);
        assert_eq!(index.len(), 3);
    }
}
