//! Build a small co-occurrence graph, query it, and round-trip it through disk
//!
//! Run with: cargo run --example relation_demo
//! Set `RUST_LOG=fastgraph=debug` to see ingestion and ranking events.

use fastgraph::{
    best_trail, neighbors, path_between, rank_by_degree, rank_by_triangles, triangles_count,
    GraphBuilder, GraphOptions, TrailFallback, VertexId, WeightedGraph,
};
use tracing_subscriber::EnvFilter;

const VERTICES: &str = "\
1, rust
2, cargo
3, crates
4, tokio
5, async
6, tracing
";

const EDGES: &str = "\
1, 2
2, 3
3, 1
1, 4
4, 5
5, 1
4, 6
2, 1
";

fn describe(graph: &WeightedGraph, path: &[VertexId]) -> String {
    path.iter()
        .map(|v| graph.vertex_name(*v).unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(" → ")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🦀 fastgraph relation demo\n");

    // 1. Ingest relations
    println!("📊 Building graph from relations...");
    let options = GraphOptions::default()
        .with_precompute_hotspots(true)
        .with_hotspot_fraction(0.34)
        .with_trail_fallback(TrailFallback::TopCandidate);
    let mut builder = GraphBuilder::new(options);
    builder.add_vertex_relation(VERTICES)?.add_edge_relation(EDGES)?;
    let graph = builder.build();
    println!(
        "  ✅ Graph built: {} vertices, {} edges ({} triangles)\n",
        graph.num_vertices(),
        graph.num_edges(),
        triangles_count(&graph)
    );

    // 2. Topology queries
    println!("🔍 Querying graph...");
    let rust = graph.vertex_by_name("rust", false).unwrap_or(VertexId(1));
    for neighbor in &neighbors(&graph, rust, 1, true) {
        let name = graph.vertex_name(neighbor.vertex).unwrap_or("unknown");
        println!("    {name} (weight {})", neighbor.weight);
    }

    println!("\n  Top by degree:");
    for (vertex, degree) in rank_by_degree(&graph, 3) {
        println!("    {} → {degree}", graph.vertex_name(vertex).unwrap_or("unknown"));
    }

    println!("\n  Top by triangles:");
    for (vertex, count) in rank_by_triangles(&graph, 3) {
        println!("    {} → {count}", graph.vertex_name(vertex).unwrap_or("unknown"));
    }

    let tracing_id = VertexId(6);
    let path = path_between(&graph, tracing_id, VertexId(3), 2, true);
    println!("\n  tracing to crates: {}", describe(&graph, &path));

    let trail = best_trail(&graph, tracing_id, 3, true);
    println!("  best trail from tracing: {}", describe(&graph, &trail));

    // 3. Persist relations
    println!("\n💾 Writing relations...");
    let dir = std::env::temp_dir();
    let vertices_path = dir.join("fastgraph_vertices.csv");
    let edges_path = dir.join("fastgraph_edges.csv");
    graph.write_relations(&vertices_path, &edges_path).await?;
    println!("  ✅ Saved to {}", edges_path.display());

    // 4. Reload and verify
    println!("\n📂 Reloading...");
    let loaded = WeightedGraph::load(&vertices_path, &edges_path, GraphOptions::default()).await?;
    assert_eq!(loaded.num_edges(), graph.num_edges());
    assert_eq!(
        loaded.edge_weight(VertexId(1), VertexId(2)),
        graph.edge_weight(VertexId(1), VertexId(2))
    );
    println!(
        "  ✅ Loaded: {} vertices, {} edges",
        loaded.num_vertices(),
        loaded.num_edges()
    );

    println!("\n✨ Demo complete!");

    Ok(())
}
