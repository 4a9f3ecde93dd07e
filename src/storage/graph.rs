//! Weighted undirected graph built once from vertex and edge relations
//!
//! ```text
//! vertices: 1,A  2,B  3,C       edges: 1,2  2,3  3,1  2,1
//!
//! edge store:   #1 {1,2} w=2   #2 {2,3} w=1   #3 {3,1} w=1
//! adjacency:    1 → [#1, #3]   2 → [#1, #2]   3 → [#2, #3]
//! ```
//!
//! Catalog, edge store and adjacency index never change after `build`.
//! The hotspot table is the only lazily populated field and is
//! initialized at most once.

use super::relation::{edge_line, parse_edges, parse_vertices, vertex_line};
use super::{AdjacencyIndex, Edge, EdgeId, EdgeStore, VertexCatalog, VertexId};
use crate::algorithms::ranking::{compute_hotspot_table, HotspotTable};
use crate::config::GraphOptions;
use crate::error::RelationError;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Incremental graph ingestion
///
/// # Example
///
/// ```
/// use fastgraph::storage::GraphBuilder;
/// use fastgraph::VertexId;
///
/// let mut builder = GraphBuilder::default();
/// builder.add_vertex(VertexId(1), "A");
/// builder.add_vertex(VertexId(2), "B");
/// builder.add_edge(VertexId(1), VertexId(2));
/// builder.add_edge(VertexId(2), VertexId(1));
///
/// let graph = builder.build();
/// assert_eq!(graph.num_edges(), 1);
/// assert_eq!(graph.edge_weight(VertexId(1), VertexId(2)), Some(2));
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    catalog: VertexCatalog,
    edges: EdgeStore,
    adjacency: AdjacencyIndex,
    options: GraphOptions,
}

impl GraphBuilder {
    /// Create builder with the given options
    #[must_use]
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Insert a vertex (last write wins)
    pub fn add_vertex(&mut self, id: VertexId, name: impl Into<String>) -> &mut Self {
        self.catalog.insert(id, name);
        self
    }

    /// Record one raw edge occurrence
    ///
    /// Only a pair's first occurrence touches the adjacency index; repeats
    /// just bump the weight.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        let fresh = self.edges.find(a, b).is_none();
        let id = self.edges.record(a, b);
        if fresh {
            self.adjacency.attach(a, id);
            if b != a {
                self.adjacency.attach(b, id);
            }
        }
        id
    }

    /// Ingest a whole vertex relation
    ///
    /// # Errors
    ///
    /// Returns `RelationError` if any line is malformed; no row of the
    /// relation is applied in that case.
    pub fn add_vertex_relation(&mut self, text: &str) -> Result<&mut Self, RelationError> {
        for (id, name) in parse_vertices(text)? {
            self.catalog.insert(id, name);
        }
        Ok(self)
    }

    /// Ingest a whole edge relation, in line order
    ///
    /// # Errors
    ///
    /// Returns `RelationError` if any line is malformed; no row of the
    /// relation is applied in that case.
    pub fn add_edge_relation(&mut self, text: &str) -> Result<&mut Self, RelationError> {
        for (a, b) in parse_edges(text)? {
            self.add_edge(a, b);
        }
        Ok(self)
    }

    /// Freeze into an immutable graph
    #[must_use]
    pub fn build(self) -> WeightedGraph {
        let graph = WeightedGraph {
            catalog: self.catalog,
            edges: self.edges,
            adjacency: self.adjacency,
            options: self.options,
            hotspots: OnceLock::new(),
        };

        if !graph.catalog.is_empty() {
            let uncataloged = graph
                .adjacency
                .vertices()
                .filter(|v| !graph.catalog.contains(*v))
                .count();
            if uncataloged > 0 {
                warn!(uncataloged, "edge relation references vertices missing from the catalog");
            }
        }

        if graph.options.precompute_hotspots {
            let table = graph.hotspots();
            debug!(ranked = table.len(), "hotspots precomputed");
        }

        info!(
            vertices = graph.catalog.len(),
            edges = graph.edges.len(),
            raw_edges = graph.edges.raw_count(),
            indexed = graph.adjacency.len(),
            "graph populated"
        );

        graph
    }
}

/// Read-mostly weighted undirected graph
#[derive(Debug)]
pub struct WeightedGraph {
    catalog: VertexCatalog,
    edges: EdgeStore,
    adjacency: AdjacencyIndex,
    options: GraphOptions,
    hotspots: OnceLock<HotspotTable>,
}

impl WeightedGraph {
    /// Build graph from in-memory relation text
    ///
    /// # Errors
    ///
    /// Returns error if either relation is malformed. No graph is produced.
    ///
    /// # Example
    ///
    /// ```
    /// use fastgraph::{GraphOptions, VertexId, WeightedGraph};
    ///
    /// let graph = WeightedGraph::from_relations(
    ///     "1,A\n2,B\n3,C\n",
    ///     "1,2\n2,3\n3,1\n1,2\n",
    ///     GraphOptions::default(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(graph.num_edges(), 3);
    /// assert_eq!(graph.degree(VertexId(2)), Some(2));
    /// ```
    pub fn from_relations(vertices: &str, edges: &str, options: GraphOptions) -> Result<Self> {
        let mut builder = GraphBuilder::new(options);
        builder
            .add_vertex_relation(vertices)
            .context("Failed to load vertex relation")?;
        builder
            .add_edge_relation(edges)
            .context("Failed to load edge relation")?;
        Ok(builder.build())
    }

    /// Build graph from raw edge pairs with an empty catalog
    #[must_use]
    pub fn from_edge_list(edges: &[(VertexId, VertexId)], options: GraphOptions) -> Self {
        let mut builder = GraphBuilder::new(options);
        for &(a, b) in edges {
            builder.add_edge(a, b);
        }
        builder.build()
    }

    /// Load graph from relation files
    ///
    /// # Errors
    ///
    /// Returns error if a file cannot be read or a relation is malformed
    pub async fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        vertices_path: P,
        edges_path: Q,
        options: GraphOptions,
    ) -> Result<Self> {
        let vertices_path = vertices_path.as_ref();
        let edges_path = edges_path.as_ref();

        let vertices = tokio::fs::read_to_string(vertices_path)
            .await
            .with_context(|| format!("Failed to read {}", vertices_path.display()))?;
        let edges = tokio::fs::read_to_string(edges_path)
            .await
            .with_context(|| format!("Failed to read {}", edges_path.display()))?;

        Self::from_relations(&vertices, &edges, options)
            .with_context(|| format!("Failed to build graph from {}", edges_path.display()))
    }

    /// Render both relations in the generated-file format
    ///
    /// Each canonical edge is emitted `weight` times in id order. Reloading
    /// the output reproduces edges, weights and edge order; ids are
    /// renumbered since repeats are written back to back.
    #[must_use]
    pub fn to_relations(&self) -> (String, String) {
        let vertices: String = self
            .catalog
            .iter()
            .map(|(id, name)| vertex_line(id, name))
            .collect();

        let mut edges = String::new();
        for edge in self.edges.iter() {
            let line = edge_line(edge.a, edge.b);
            for _ in 0..edge.weight {
                edges.push_str(&line);
            }
        }

        (vertices, edges)
    }

    /// Write both relations to disk
    ///
    /// # Errors
    ///
    /// Returns error if either file cannot be written
    pub async fn write_relations<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        vertices_path: P,
        edges_path: Q,
    ) -> Result<()> {
        let (vertices, edges) = self.to_relations();
        let vertices_path = vertices_path.as_ref();
        let edges_path = edges_path.as_ref();

        tokio::fs::write(vertices_path, vertices)
            .await
            .with_context(|| format!("Failed to write {}", vertices_path.display()))?;
        tokio::fs::write(edges_path, edges)
            .await
            .with_context(|| format!("Failed to write {}", edges_path.display()))?;

        Ok(())
    }

    /// Vertex catalog
    #[must_use]
    pub const fn catalog(&self) -> &VertexCatalog {
        &self.catalog
    }

    /// Canonical edge store
    #[must_use]
    pub const fn edges(&self) -> &EdgeStore {
        &self.edges
    }

    /// Vertex → incident edge index
    #[must_use]
    pub const fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// Construction options
    #[must_use]
    pub const fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Name of a vertex
    #[must_use]
    pub fn vertex_name(&self, id: VertexId) -> Option<&str> {
        self.catalog.name(id)
    }

    /// Vertex by name, optionally falling back to a substring match
    #[must_use]
    pub fn vertex_by_name(&self, name: &str, pattern_match: bool) -> Option<VertexId> {
        self.catalog.lookup(name, pattern_match)
    }

    /// Whether the vertex is cataloged or has incident edges
    #[must_use]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.catalog.contains(id) || self.adjacency.contains(id)
    }

    /// Number of cataloged vertices
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.catalog.len()
    }

    /// Number of vertices with at least one incident edge
    #[must_use]
    pub fn num_indexed_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of canonical edges
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Canonical edge by id
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Weight of the edge joining `a` and `b`
    ///
    /// Scans the incident lists of `a` then `b`; the first edge whose
    /// endpoints are exactly `{a, b}` supplies the weight.
    #[must_use]
    pub fn edge_weight(&self, a: VertexId, b: VertexId) -> Option<u32> {
        self.adjacency
            .edges_of(a)
            .iter()
            .chain(self.adjacency.edges_of(b))
            .filter_map(|&id| self.edges.get(id))
            .find(|edge| edge.joins(a, b))
            .map(|edge| edge.weight)
    }

    /// Number of distinct canonical edges incident to `id`
    ///
    /// `None` for unknown vertices, `Some(0)` for isolated cataloged ones.
    #[must_use]
    pub fn degree(&self, id: VertexId) -> Option<usize> {
        self.contains_vertex(id).then(|| self.adjacency.degree(id))
    }

    /// Alias of [`degree`](Self::degree)
    #[must_use]
    pub fn edges_count(&self, id: VertexId) -> Option<usize> {
        self.degree(id)
    }

    /// Hotspot table, if populated and consistent with the adjacency index
    #[must_use]
    pub fn hotspot_cache(&self) -> Option<&HotspotTable> {
        self.hotspots
            .get()
            .filter(|table| table.len() == self.adjacency.len())
    }

    /// Hotspot table, computing it on first use
    ///
    /// Concurrent first callers converge on a single table.
    #[must_use]
    pub fn hotspots(&self) -> &HotspotTable {
        self.hotspots.get_or_init(|| compute_hotspot_table(self))
    }

    /// Whether `id` lies in the top `hotspot_fraction` of the hotspot table
    #[must_use]
    pub fn is_hotspot(&self, id: VertexId) -> bool {
        self.hotspots().is_hotspot(id, self.options.hotspot_fraction)
    }
}
