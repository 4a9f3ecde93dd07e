//! Vertex catalog: bidirectional id ↔ name mapping
//!
//! Insertion order is preserved. Re-inserting an existing id keeps its
//! position and replaces its name; a name claimed by a second id resolves
//! to the later id (last write wins on both sides).

use std::collections::HashMap;
use std::fmt;

/// Vertex identifier, as supplied by the vertex relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bidirectional vertex catalog
#[derive(Debug, Clone, Default)]
pub struct VertexCatalog {
    /// Ids in first-insertion order, with their current names
    entries: Vec<(VertexId, String)>,

    /// id → position in `entries`
    positions: HashMap<VertexId, usize>,

    /// name → id
    by_name: HashMap<String, VertexId>,
}

impl VertexCatalog {
    /// Create empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a vertex
    pub fn insert(&mut self, id: VertexId, name: impl Into<String>) {
        let name = name.into();

        if let Some(&pos) = self.positions.get(&id) {
            let old = std::mem::replace(&mut self.entries[pos].1, name.clone());
            // Drop the stale reverse entry unless another id has since claimed it
            if self.by_name.get(&old) == Some(&id) {
                self.by_name.remove(&old);
            }
        } else {
            self.positions.insert(id, self.entries.len());
            self.entries.push((id, name.clone()));
        }

        self.by_name.insert(name, id);
    }

    /// Name of a vertex
    #[must_use]
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.positions
            .get(&id)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Exact name lookup
    #[must_use]
    pub fn id(&self, name: &str) -> Option<VertexId> {
        self.by_name.get(name).copied()
    }

    /// Name lookup with optional substring fallback
    ///
    /// When no exact match exists and `pattern_match` is set, returns the
    /// first vertex in catalog order whose name contains `name`.
    ///
    /// # Example
    ///
    /// ```
    /// use fastgraph::storage::{VertexCatalog, VertexId};
    ///
    /// let mut catalog = VertexCatalog::new();
    /// catalog.insert(VertexId(1), "graph");
    /// catalog.insert(VertexId(2), "paragraph");
    ///
    /// assert_eq!(catalog.lookup("raph", true), Some(VertexId(1)));
    /// assert_eq!(catalog.lookup("raph", false), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str, pattern_match: bool) -> Option<VertexId> {
        self.id(name).or_else(|| {
            if pattern_match {
                self.entries
                    .iter()
                    .find(|(_, candidate)| candidate.contains(name))
                    .map(|(id, _)| *id)
            } else {
                None
            }
        })
    }

    /// Whether the id is cataloged
    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Number of cataloged vertices
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(id, name)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &str)> + '_ {
        self.entries.iter().map(|(id, name)| (*id, name.as_str()))
    }
}
