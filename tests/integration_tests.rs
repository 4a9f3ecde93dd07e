//! Integration tests for fastgraph
//!
//! Tests real-world usage scenarios (relation loading, topology queries)

use fastgraph::{
    all_triangles, best_trail, is_directly_connected, is_valid_path, neighbors, path_between,
    rank_by_degree, rank_by_triangles, search_path, triangles_count, GraphOptions, PathOutcome,
    RelationError, TrailFallback, VertexId, WeightedGraph,
};

const VERTICES: &str = "1,A\n2,B\n3,C\n4,D\n";
const EDGES: &str = "1,2\n2,3\n3,1\n3,4\n";

fn scenario() -> WeightedGraph {
    WeightedGraph::from_relations(VERTICES, EDGES, GraphOptions::default()).unwrap()
}

#[test]
fn test_reference_scenario() {
    let graph = scenario();

    // One triangle {A, B, C}
    assert_eq!(triangles_count(&graph), 1);
    let triangle = all_triangles(&graph)[0];
    let mut names: Vec<_> = triangle
        .corners()
        .iter()
        .map(|v| graph.vertex_name(*v).unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["A", "B", "C"]);

    assert_eq!(graph.degree(VertexId(3)), Some(3));
    assert!(!is_directly_connected(&graph, VertexId(1), VertexId(4)));

    // Chain from 1 to 4 must pass through 3
    let path = path_between(&graph, VertexId(1), VertexId(4), 2, false);
    assert_eq!(path.first(), Some(&VertexId(1)));
    assert_eq!(path.last(), Some(&VertexId(4)));
    assert!(path.contains(&VertexId(3)));
    assert!(is_valid_path(&graph, &path));
}

#[test]
fn test_name_lookup() {
    let graph = WeightedGraph::from_relations(
        "1, apple pie\n2, banana\n3, apple\n",
        "1,2\n",
        GraphOptions::default(),
    )
    .unwrap();

    assert_eq!(graph.vertex_by_name("apple", false), Some(VertexId(3)));
    assert_eq!(graph.vertex_by_name("pie", false), None);
    assert_eq!(graph.vertex_by_name("pie", true), Some(VertexId(1)));
    assert_eq!(graph.vertex_by_name("nan", true), Some(VertexId(2)));
    assert_eq!(graph.vertex_name(VertexId(2)), Some("banana"));
}

#[test]
fn test_weights_accumulate_across_orientations() {
    let graph = WeightedGraph::from_relations(
        VERTICES,
        "1,2\n2,1\n1 2\n2 3\n",
        GraphOptions::default(),
    )
    .unwrap();

    assert_eq!(graph.num_edges(), 2);
    assert_eq!(graph.edge_weight(VertexId(1), VertexId(2)), Some(3));
    assert_eq!(graph.degree(VertexId(2)), Some(2));

    let near = neighbors(&graph, VertexId(2), 1, true);
    assert_eq!(near.weights(), vec![(VertexId(1), 3), (VertexId(3), 1)]);
}

#[test]
fn test_isolated_vertex_queries() {
    let graph =
        WeightedGraph::from_relations("1,A\n2,B\n9,Lonely\n", "1,2\n", GraphOptions::default())
            .unwrap();

    let lonely = VertexId(9);
    assert_eq!(graph.degree(lonely), Some(0));
    assert!(neighbors(&graph, lonely, 3, false).is_empty());
    assert_eq!(fastgraph::triangle_count_for(&graph, lonely), 0);
    assert!(best_trail(&graph, lonely, 4, true).is_empty());
    assert_eq!(
        search_path(&graph, lonely, VertexId(1), 2, false),
        PathOutcome::Exhausted
    );
}

#[test]
fn test_malformed_input_aborts_construction() {
    let missing = WeightedGraph::from_relations("1,A\n2\n", EDGES, GraphOptions::default());
    let err = missing.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RelationError>(),
        Some(RelationError::MissingToken { line: 2, .. })
    ));

    let bad_id = WeightedGraph::from_relations(VERTICES, "1,2\n2,three\n", GraphOptions::default());
    assert!(matches!(
        bad_id.unwrap_err().downcast_ref::<RelationError>(),
        Some(RelationError::InvalidId { .. })
    ));
}

#[test]
fn test_blank_or_zero_lines_abort_construction() {
    let blank = WeightedGraph::from_relations("1,A\n\n2,B\n", "1,2\n", GraphOptions::default());
    assert!(matches!(
        blank.unwrap_err().downcast_ref::<RelationError>(),
        Some(RelationError::MissingToken { line: 2, found: 0, .. })
    ));

    let zero = WeightedGraph::from_relations("0,A\n1,B\n", "1,2\n", GraphOptions::default());
    assert!(matches!(
        zero.unwrap_err().downcast_ref::<RelationError>(),
        Some(RelationError::InvalidId { line: 1, .. })
    ));

    // A single trailing newline is not a blank line
    assert!(WeightedGraph::from_relations(VERTICES, "1,2\r\n", GraphOptions::default()).is_ok());
}

#[test]
fn test_rank_by_triangles_reuses_precomputed_table() {
    let graph = WeightedGraph::from_relations(
        VERTICES,
        EDGES,
        GraphOptions::default().with_precompute_hotspots(true),
    )
    .unwrap();

    let table = graph.hotspot_cache().unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(rank_by_triangles(&graph, 4), table.entries().to_vec());
    assert_eq!(rank_by_triangles(&graph, 4)[3], (VertexId(4), 0));
}

#[test]
fn test_concurrent_first_use_converges() {
    let edges: Vec<_> = (0..60u32)
        .flat_map(|i| {
            [
                (VertexId(i), VertexId((i + 1) % 60)),
                (VertexId(i), VertexId((i + 2) % 60)),
            ]
        })
        .collect();
    let graph = WeightedGraph::from_edge_list(&edges, GraphOptions::default());

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| rank_by_triangles(&graph, 10)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in &results[1..] {
        assert_eq!(result, &results[0]);
    }
    assert_eq!(rank_by_triangles(&graph, 10), results[0]);
}

#[test]
fn test_best_trail_over_dense_core() {
    // Two triangles sharing edge 2-3, tail 4-5-6
    let graph = WeightedGraph::from_edge_list(
        &[
            (VertexId(1), VertexId(2)),
            (VertexId(2), VertexId(3)),
            (VertexId(3), VertexId(1)),
            (VertexId(2), VertexId(4)),
            (VertexId(3), VertexId(4)),
            (VertexId(4), VertexId(5)),
            (VertexId(5), VertexId(6)),
        ],
        GraphOptions::default().with_trail_fallback(TrailFallback::TopCandidate),
    );

    let trail = best_trail(&graph, VertexId(6), 4, false);
    assert_eq!(trail.len(), 4);
    assert!(!trail.contains(&VertexId(6)));
    // Every hop is a real edge
    let mut walk = vec![VertexId(6)];
    walk.extend(&trail);
    assert!(is_valid_path(&graph, &walk));
}

#[test]
fn test_rank_by_degree_scenario() {
    let graph = scenario();
    assert_eq!(
        rank_by_degree(&graph, 10),
        vec![
            (VertexId(3), 3),
            (VertexId(1), 2),
            (VertexId(2), 2),
            (VertexId(4), 1),
        ]
    );
}

#[tokio::test]
async fn test_relation_file_roundtrip() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let vertices_path = dir.path().join("vertices.csv");
    let edges_path = dir.path().join("edges.csv");

    let edges = "1,2\n2,1\n2,3\n3,1\n3,4\n";
    let graph = WeightedGraph::from_relations(VERTICES, edges, GraphOptions::default()).unwrap();
    graph.write_relations(&vertices_path, &edges_path).await.unwrap();

    // Generated files use "<id>, <value>\r\n"
    let written = std::fs::read_to_string(&vertices_path).unwrap();
    assert_eq!(written, "1, A\r\n2, B\r\n3, C\r\n4, D\r\n");

    let loaded = WeightedGraph::load(&vertices_path, &edges_path, GraphOptions::default())
        .await
        .unwrap();
    assert_eq!(loaded.edge_weight(VertexId(1), VertexId(2)), Some(2));
    assert_eq!(loaded.num_edges(), graph.num_edges());
    assert_eq!(triangles_count(&loaded), 1);
}
