#![allow(unused, reason = "not every test file uses every helper")]

use cutgraph::prelude::*;

/// Opt into log output with RUST_LOG.
pub fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a graph with `n` vertices and the given (from, to, weight)
/// edges, added in order.
pub fn build_graph(
    n: usize,
    edges: &[(usize, usize, i32)],
) -> (Graph, Vec<VertexId>, Vec<EdgeId>) {
    let mut graph = Graph::new();
    let vertices: Vec<VertexId> = (0..n).map(|_| graph.new_vertex()).collect();
    let edge_ids = edges
        .iter()
        .map(|&(from, to, weight)| graph.new_edge(vertices[from], vertices[to], weight))
        .collect();
    (graph, vertices, edge_ids)
}
