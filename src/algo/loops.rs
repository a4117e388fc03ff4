use crate::graph::{EdgeId, Graph, VertexId, VertexMap};

use super::{VertexList, followed};

/// DFS from `vertex` looking for a cycle along followed edges.
///
/// Returns a trace witnessing the first cycle found: it starts at
/// `vertex`, walks followed edges, and ends by repeating the vertex
/// that closes the loop. Returns an empty trace when nothing reachable
/// from `vertex` cycles.
pub fn report_loops<F>(graph: &Graph, vertex: VertexId, func: F) -> VertexList
where
    F: Fn(&Graph, EdgeId) -> bool,
{
    let mut call_trace = VertexList::new();
    let mut visited: VertexMap<u32> = VertexMap::new();
    vertex_iterate(graph, vertex, &func, &mut call_trace, &mut visited);
    call_trace
}

fn vertex_iterate<F>(
    graph: &Graph,
    vertex: VertexId,
    func: &F,
    call_trace: &mut VertexList,
    visited: &mut VertexMap<u32>,
) -> bool
where
    F: Fn(&Graph, EdgeId) -> bool,
{
    call_trace.push(vertex);
    if visited[vertex] == 1 {
        return true; // Back on the current path: the trace is the loop
    }
    if visited[vertex] == 2 {
        call_trace.pop();
        return false; // Already processed
    }
    visited[vertex] = 1;
    for &edge in graph.out_edges(vertex) {
        if followed(graph, edge, func) && vertex_iterate(graph, graph.to(edge), func, call_trace, visited)
        {
            return true;
        }
    }
    visited[vertex] = 2;
    call_trace.pop();
    false
}
