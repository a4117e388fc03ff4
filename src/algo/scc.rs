use crate::graph::{EdgeId, Graph, VertexId, VertexMap};

use super::followed;

/// Color each vertex by the non-trivial strongly connected component it
/// belongs to.
///
/// Uses Tarjan's algorithm over edges that are alive and accepted by
/// `func`. Vertices in the same component share a non-zero color;
/// vertices outside any non-trivial component (no cycle back to
/// themselves, self-loops included) all read color `0`. Color values
/// are opaque; only equality between them is meaningful.
///
/// Output is a deterministic function of vertex order, edge order, and
/// the predicate. Runs in O(V + E).
pub fn strongly<F>(graph: &Graph, func: F) -> VertexMap<u32>
where
    F: Fn(&Graph, EdgeId) -> bool,
{
    // user: DFS number marking a possible subtree root, 0 = not visited
    // color: output component number, complete once a root is found
    let mut user: VertexMap<u32> = VertexMap::new();
    let mut color: VertexMap<u32> = VertexMap::new();
    let mut current_dfs = 0u32;
    let mut call_trace: Vec<VertexId> = Vec::new();

    for vertex in graph.vertices() {
        if user[vertex] == 0 {
            current_dfs += 1;
            vertex_iterate(
                graph,
                vertex,
                &func,
                &mut current_dfs,
                &mut user,
                &mut color,
                &mut call_trace,
            );
        }
    }

    // A color held by a single vertex is not a component; collapse
    // those to zero so consumers only see real cycles.
    for vertex in graph.vertices() {
        let mut onecolor = true;
        for &edge in graph.out_edges(vertex) {
            if followed(graph, edge, &func) && color[vertex] == color[graph.to(edge)] {
                onecolor = false;
                break;
            }
        }
        if onecolor {
            color[vertex] = 0;
        }
    }

    color
}

fn vertex_iterate<F>(
    graph: &Graph,
    vertex: VertexId,
    func: &F,
    current_dfs: &mut u32,
    user: &mut VertexMap<u32>,
    color: &mut VertexMap<u32>,
    call_trace: &mut Vec<VertexId>,
) where
    F: Fn(&Graph, EdgeId) -> bool,
{
    let this_dfs = *current_dfs;
    *current_dfs += 1;
    user[vertex] = this_dfs;
    color[vertex] = 0;
    for &edge in graph.out_edges(vertex) {
        if followed(graph, edge, func) {
            let to = graph.to(edge);
            if user[to] == 0 {
                // Destination not computed yet
                vertex_iterate(graph, to, func, current_dfs, user, color, call_trace);
            }
            if color[to] == 0 {
                // Destination not in a component
                user[vertex] = user[vertex].min(user[to]);
            }
        }
    }
    if user[vertex] == this_dfs {
        // New head of subtree
        color[vertex] = this_dfs;
        // Everything above us on the trace with an equal-or-later DFS
        // number is part of this subtree
        while let Some(&pop_vertex) = call_trace.last() {
            if user[pop_vertex] >= this_dfs {
                call_trace.pop();
                color[pop_vertex] = this_dfs;
            } else {
                break;
            }
        }
    } else {
        // In another subtree (maybe)
        call_trace.push(vertex);
    }
}
