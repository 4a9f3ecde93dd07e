//! Direct connectivity, hotspot-biased trails and bounded path search
//!
//! Path search is a depth-first relay expansion: each relay level explores
//! a bounded neighborhood of one frontier vertex, checks it for the target,
//! and descends into the first unvisited candidate. The number of relay
//! levels is capped by `GraphOptions::relay_ceiling`. Results are the first
//! chain discovered, not the shortest.

use super::neighborhood::{neighbors, Neighbor};
use crate::config::TrailFallback;
use crate::storage::{VertexId, WeightedGraph};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Outcome of a bounded path search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Endpoints share an edge: `[a, b]`
    Direct(Vec<VertexId>),
    /// Chain found through relay vertices, `a` first and `b` last
    Relayed(Vec<VertexId>),
    /// No chain within the relay ceiling
    Exhausted,
    /// Endpoint is neither cataloged nor indexed
    UnknownVertex(VertexId),
}

impl PathOutcome {
    /// The discovered chain, empty when none was found
    #[must_use]
    pub fn into_path(self) -> Vec<VertexId> {
        match self {
            Self::Direct(path) | Self::Relayed(path) => path,
            Self::Exhausted | Self::UnknownVertex(_) => Vec::new(),
        }
    }

    /// Whether a chain was found
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Direct(_) | Self::Relayed(_))
    }
}

/// Whether `a` and `b` share an incident edge
///
/// For `a == b` this holds whenever the vertex has any incident edge.
///
/// # Example
///
/// ```
/// use fastgraph::{is_directly_connected, GraphOptions, VertexId, WeightedGraph};
///
/// let graph = WeightedGraph::from_edge_list(
///     &[(VertexId(1), VertexId(2)), (VertexId(2), VertexId(3))],
///     GraphOptions::default(),
/// );
/// assert!(is_directly_connected(&graph, VertexId(2), VertexId(1)));
/// assert!(!is_directly_connected(&graph, VertexId(1), VertexId(3)));
/// ```
#[must_use]
pub fn is_directly_connected(graph: &WeightedGraph, a: VertexId, b: VertexId) -> bool {
    if a == b {
        graph.adjacency().degree(a) > 0
    } else {
        graph.edges().find(a, b).is_some()
    }
}

/// Whether every consecutive pair of `path` is directly connected
///
/// Sequences shorter than two vertices are trivially valid.
#[must_use]
pub fn is_valid_path(graph: &WeightedGraph, path: &[VertexId]) -> bool {
    path.windows(2)
        .all(|pair| is_directly_connected(graph, pair[0], pair[1]))
}

/// Greedy hotspot-biased walk of up to `max_hops` single hops
///
/// At each hop the one-hop neighborhood of the current vertex is scanned in
/// order and the first unvisited hotspot is taken. When none qualifies the
/// configured [`TrailFallback`] applies: `Stall` ends the walk, `TopCandidate`
/// takes the first unvisited neighbor. The start vertex is never recorded.
///
/// Computes the graph's hotspot table on first use.
#[must_use]
pub fn best_trail(
    graph: &WeightedGraph,
    start: VertexId,
    max_hops: usize,
    sort_by_weight: bool,
) -> Vec<VertexId> {
    let mut trail = Vec::new();
    if !graph.contains_vertex(start) {
        return trail;
    }

    let hotspots = graph.hotspots();
    let fraction = graph.options().hotspot_fraction;
    let fallback = graph.options().trail_fallback;

    let mut visited = HashSet::new();
    let mut current = start;

    for hop in 0..max_hops {
        let candidates = neighbors(graph, current, 1, sort_by_weight);

        let next = candidates
            .vertices()
            .find(|v| !visited.contains(v) && hotspots.is_hotspot(*v, fraction))
            .or_else(|| match fallback {
                TrailFallback::Stall => None,
                TrailFallback::TopCandidate => {
                    candidates.vertices().find(|v| !visited.contains(v))
                }
            });

        let Some(next) = next else {
            trace!(hop, vertex = %current, "trail stalled");
            break;
        };

        visited.insert(next);
        if next != start {
            trail.push(next);
        }
        current = next;
    }

    trail
}

/// Remove cycles from a walk, keeping consecutive vertices adjacent
fn erase_loops(walk: Vec<VertexId>) -> Vec<VertexId> {
    let mut path: Vec<VertexId> = Vec::with_capacity(walk.len());
    let mut positions: HashMap<VertexId, usize> = HashMap::new();

    for vertex in walk {
        if let Some(&pos) = positions.get(&vertex) {
            for removed in path.drain(pos + 1..) {
                positions.remove(&removed);
            }
        } else {
            positions.insert(vertex, path.len());
            path.push(vertex);
        }
    }

    path
}

struct Frame {
    /// Chain from the source to this frame's vertex
    prefix: Vec<VertexId>,
    candidates: std::vec::IntoIter<Neighbor>,
}

/// Bounded search for a chain from `a` to `b`
///
/// Each relay level explores `neighbors(v, depth, sort_by_weight)` of the
/// frontier vertex. A candidate equal to `b` ends the search; otherwise the
/// first unvisited candidate becomes the next frontier vertex, until
/// `relay_ceiling` levels are open. Returned chains are loop-free and every
/// consecutive pair is directly connected.
///
/// # Example
///
/// ```
/// use fastgraph::{search_path, GraphOptions, PathOutcome, VertexId, WeightedGraph};
///
/// let graph = WeightedGraph::from_edge_list(
///     &[(VertexId(1), VertexId(2)), (VertexId(2), VertexId(3))],
///     GraphOptions::default(),
/// );
///
/// let outcome = search_path(&graph, VertexId(1), VertexId(3), 1, false);
/// assert_eq!(
///     outcome,
///     PathOutcome::Relayed(vec![VertexId(1), VertexId(2), VertexId(3)])
/// );
/// assert_eq!(
///     search_path(&graph, VertexId(1), VertexId(9), 1, false),
///     PathOutcome::UnknownVertex(VertexId(9))
/// );
/// ```
#[must_use]
pub fn search_path(
    graph: &WeightedGraph,
    a: VertexId,
    b: VertexId,
    depth: usize,
    sort_by_weight: bool,
) -> PathOutcome {
    for endpoint in [a, b] {
        if !graph.contains_vertex(endpoint) {
            return PathOutcome::UnknownVertex(endpoint);
        }
    }

    if is_directly_connected(graph, a, b) {
        return PathOutcome::Direct(vec![a, b]);
    }

    let ceiling = graph.options().relay_ceiling;
    let mut visited = HashSet::from([a]);
    let mut stack = vec![Frame {
        prefix: vec![a],
        candidates: neighbors(graph, a, depth, sort_by_weight).into_iter(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(candidate) = frame.candidates.next() else {
            stack.pop();
            continue;
        };

        let mut walk = frame.prefix.clone();
        walk.extend(candidate.route.iter().skip(1).copied());

        if candidate.vertex == b {
            let path = erase_loops(walk);
            debug!(source = %a, target = %b, hops = path.len() - 1, "path found");
            return PathOutcome::Relayed(path);
        }

        if stack.len() >= ceiling || !visited.insert(candidate.vertex) {
            continue;
        }

        trace!(level = stack.len() + 1, vertex = %candidate.vertex, "relay expansion");
        stack.push(Frame {
            prefix: walk,
            candidates: neighbors(graph, candidate.vertex, depth, sort_by_weight).into_iter(),
        });
    }

    debug!(source = %a, target = %b, ceiling, "path search exhausted");
    PathOutcome::Exhausted
}

/// Chain from `a` to `b`, empty when unknown or not found within the ceiling
#[must_use]
pub fn path_between(
    graph: &WeightedGraph,
    a: VertexId,
    b: VertexId,
    depth: usize,
    sort_by_weight: bool,
) -> Vec<VertexId> {
    search_path(graph, a, b, depth, sort_by_weight).into_path()
}
