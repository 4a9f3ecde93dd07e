//! Canonical undirected edges with accumulated weight
//!
//! # Canonicalization
//!
//! ```text
//! raw edge lines:  #1 1,2   #2 2,1   #3 2,3   #4 3,2   #5 3,4
//!
//! edge store:      #1 {1,2} weight 2
//!                  #3 {2,3} weight 2
//!                  #5 {3,4} weight 1
//! ```
//!
//! A canonical edge takes the raw occurrence number of its pair's first
//! line, so ids are increasing but leave gaps where repeats collapsed.

use super::VertexId;
use std::collections::HashMap;
use std::fmt;

/// Canonical edge identifier: 1-based raw occurrence number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Undirected weighted edge
///
/// `a` and `b` keep the orientation of the pair's first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Canonical id
    pub id: EdgeId,
    /// First endpoint
    pub a: VertexId,
    /// Second endpoint
    pub b: VertexId,
    /// Number of raw occurrences of the pair
    pub weight: u32,
}

impl Edge {
    /// Whether `vertex` is an endpoint
    #[must_use]
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.a == vertex || self.b == vertex
    }

    /// Endpoint opposite `vertex` (`vertex` itself for a self-loop)
    #[must_use]
    pub fn other_end(&self, vertex: VertexId) -> Option<VertexId> {
        if self.a == vertex {
            Some(self.b)
        } else if self.b == vertex {
            Some(self.a)
        } else {
            None
        }
    }

    /// Whether the edge joins exactly `x` and `y`, in either orientation
    #[must_use]
    pub fn joins(&self, x: VertexId, y: VertexId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// Unordered pair key: smaller id first
fn pair_key(x: VertexId, y: VertexId) -> (VertexId, VertexId) {
    if x <= y {
        (x, y)
    } else {
        (y, x)
    }
}

/// Append-only store of canonical edges
#[derive(Debug, Clone, Default)]
pub struct EdgeStore {
    /// Edges in ascending id order
    edges: Vec<Edge>,

    /// Unordered pair → canonical id
    pairs: HashMap<(VertexId, VertexId), EdgeId>,

    /// Raw edge lines seen (including collapsed repeats)
    raw_count: usize,
}

impl EdgeStore {
    /// Create empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one raw occurrence of the pair `{a, b}`
    ///
    /// Returns the canonical id: the raw occurrence number on first
    /// occurrence, otherwise the existing edge whose weight is incremented
    /// by one.
    ///
    /// # Example
    ///
    /// ```
    /// use fastgraph::storage::{EdgeId, EdgeStore, VertexId};
    ///
    /// let mut store = EdgeStore::new();
    /// assert_eq!(store.record(VertexId(1), VertexId(2)), EdgeId(1));
    /// assert_eq!(store.record(VertexId(2), VertexId(1)), EdgeId(1));
    /// assert_eq!(store.record(VertexId(2), VertexId(3)), EdgeId(3));
    /// assert_eq!(store.weight_between(VertexId(1), VertexId(2)), Some(2));
    /// ```
    pub fn record(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        self.raw_count += 1;

        if let Some(&id) = self.pairs.get(&pair_key(a, b)) {
            if let Some(idx) = self.position(id) {
                self.edges[idx].weight += 1;
            }
            return id;
        }

        #[allow(clippy::cast_possible_truncation)] // >4B raw edge lines not supported
        let id = EdgeId(self.raw_count as u32);
        self.edges.push(Edge {
            id,
            a,
            b,
            weight: 1,
        });
        self.pairs.insert(pair_key(a, b), id);
        id
    }

    fn position(&self, id: EdgeId) -> Option<usize> {
        self.edges.binary_search_by_key(&id, |edge| edge.id).ok()
    }

    /// Get edge by canonical id
    #[must_use]
    pub fn get(&self, id: EdgeId) -> Option<&Edge> {
        self.position(id).map(|idx| &self.edges[idx])
    }

    /// Canonical id of the pair `{a, b}`, if present
    #[must_use]
    pub fn find(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.pairs.get(&pair_key(a, b)).copied()
    }

    /// Weight of the pair `{a, b}`, if present
    #[must_use]
    pub fn weight_between(&self, a: VertexId, b: VertexId) -> Option<u32> {
        self.find(a, b)
            .and_then(|id| self.get(id))
            .map(|edge| edge.weight)
    }

    /// Number of canonical edges
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of raw edge occurrences recorded
    #[must_use]
    pub const fn raw_count(&self) -> usize {
        self.raw_count
    }

    /// Iterate edges in id order
    pub fn iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_raw_occurrence() {
        let mut store = EdgeStore::new();
        let ids: Vec<_> = [(1, 2), (2, 3), (2, 1), (3, 4), (3, 2)]
            .iter()
            .map(|&(a, b)| store.record(VertexId(a), VertexId(b)))
            .collect();

        assert_eq!(
            ids,
            vec![EdgeId(1), EdgeId(2), EdgeId(1), EdgeId(4), EdgeId(2)]
        );
        assert_eq!(store.len(), 3);
        assert_eq!(store.raw_count(), 5);
        assert_eq!(store.get(EdgeId(4)).map(|edge| edge.b), Some(VertexId(4)));
        assert!(store.get(EdgeId(3)).is_none());
    }

    #[test]
    fn test_collapsed_repeat_leaves_id_gap() {
        let mut store = EdgeStore::new();
        store.record(VertexId(1), VertexId(2));
        store.record(VertexId(2), VertexId(1));
        store.record(VertexId(2), VertexId(3));

        assert_eq!(store.find(VertexId(3), VertexId(2)), Some(EdgeId(3)));
        let ids: Vec<_> = store.iter().map(|edge| edge.id).collect();
        assert_eq!(ids, vec![EdgeId(1), EdgeId(3)]);
        assert_eq!(store.weight_between(VertexId(1), VertexId(2)), Some(2));
        assert_eq!(store.weight_between(VertexId(2), VertexId(3)), Some(1));
    }

    #[test]
    fn test_weight_accumulates_in_either_orientation() {
        let mut store = EdgeStore::new();
        store.record(VertexId(7), VertexId(9));
        store.record(VertexId(9), VertexId(7));
        store.record(VertexId(7), VertexId(9));

        assert_eq!(store.weight_between(VertexId(9), VertexId(7)), Some(3));
        let edge = store.get(EdgeId(1)).unwrap();
        assert_eq!((edge.a, edge.b), (VertexId(7), VertexId(9)));
    }

    #[test]
    fn test_self_loop_is_stored() {
        let mut store = EdgeStore::new();
        let id = store.record(VertexId(4), VertexId(4));
        store.record(VertexId(4), VertexId(4));

        let edge = store.get(id).unwrap();
        assert_eq!(edge.weight, 2);
        assert_eq!(edge.other_end(VertexId(4)), Some(VertexId(4)));
    }

    #[test]
    fn test_edge_endpoints() {
        let edge = Edge {
            id: EdgeId(1),
            a: VertexId(1),
            b: VertexId(2),
            weight: 1,
        };
        assert!(edge.touches(VertexId(2)));
        assert!(!edge.touches(VertexId(3)));
        assert_eq!(edge.other_end(VertexId(2)), Some(VertexId(1)));
        assert_eq!(edge.other_end(VertexId(3)), None);
        assert!(edge.joins(VertexId(2), VertexId(1)));
    }

    #[test]
    fn test_get_out_of_range() {
        let store = EdgeStore::new();
        assert!(store.get(EdgeId(0)).is_none());
        assert!(store.get(EdgeId(1)).is_none());
    }
}
