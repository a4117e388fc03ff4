use crate::graph::{EdgeId, Graph, VertexId, VertexMap};

use super::{VertexList, followed, report_loops};

/// Longest-path rank of every vertex, counting 1 apart. See
/// [`rank_with_adder`].
pub fn rank<F>(graph: &Graph, func: F) -> (VertexMap<u32>, VertexMap<VertexList>)
where
    F: Fn(&Graph, EdgeId) -> bool,
{
    rank_with_adder(graph, func, 1)
}

/// Assign each vertex its longest-path level along followed edges.
///
/// Ranks are 1-indexed: a source has rank 1, and every followed edge
/// raises the destination to at least the source's rank plus `adder`.
/// Hitting a back edge is not an error; the entry vertex is recorded in
/// the returned loop map together with a trace from [`report_loops`]
/// witnessing the cycle, and ranking continues past it.
pub fn rank_with_adder<F>(
    graph: &Graph,
    func: F,
    adder: u32,
) -> (VertexMap<u32>, VertexMap<VertexList>)
where
    F: Fn(&Graph, EdgeId) -> bool,
{
    let mut ranks: VertexMap<u32> = VertexMap::new();
    let mut visited: VertexMap<u32> = VertexMap::new();
    let mut loops_map: VertexMap<VertexList> = VertexMap::new();
    for vertex in graph.vertices() {
        if visited[vertex] == 0 {
            vertex_iterate(
                graph,
                vertex,
                &func,
                adder,
                1,
                &mut visited,
                &mut ranks,
                &mut loops_map,
            );
        }
    }
    (ranks, loops_map)
}

#[allow(clippy::too_many_arguments)]
fn vertex_iterate<F>(
    graph: &Graph,
    vertex: VertexId,
    func: &F,
    adder: u32,
    current_rank: u32,
    visited: &mut VertexMap<u32>,
    ranks: &mut VertexMap<u32>,
    loops_map: &mut VertexMap<VertexList>,
) where
    F: Fn(&Graph, EdgeId) -> bool,
{
    // Assign a rank to each unvisited vertex; revisits along a longer
    // path raise the rank and sweep through again. A vertex still on
    // the current DFS path means a back edge: record the loop.
    if visited[vertex] == 1 {
        loops_map[vertex] = report_loops(graph, vertex, func);
        return;
    }
    if ranks[vertex] >= current_rank {
        return; // Already processed at this depth or deeper
    }
    visited[vertex] = 1;
    ranks[vertex] = current_rank;
    for &edge in graph.out_edges(vertex) {
        if followed(graph, edge, func) {
            vertex_iterate(
                graph,
                graph.to(edge),
                func,
                adder,
                current_rank + adder,
                visited,
                ranks,
                loops_map,
            );
        }
    }
    visited[vertex] = 2;
}
