mod acyclic;
mod loops;
mod rank;
mod scc;

use smallvec::SmallVec;

use crate::graph::{EdgeId, Graph, VertexId};

pub use acyclic::{Acyclic, acyclic};
pub use loops::report_loops;
pub use rank::{rank, rank_with_adder};
pub use scc::strongly;

/// A trace of vertices, as produced by [`report_loops`] and the loop
/// map of [`rank`].
pub type VertexList = SmallVec<[VertexId; 8]>;

/// The default edge predicate: follow every live edge.
pub fn follow_all(_graph: &Graph, _edge: EdgeId) -> bool {
    true
}

/// Follow only edges that must not be cut. The acyclic pipeline ranks
/// with this predicate; it is also the right one for ranking an input
/// graph by its mandatory ordering alone.
pub fn follow_not_cutable(graph: &Graph, edge: EdgeId) -> bool {
    !graph.cutable(edge)
}

/// An edge is followed only when it is alive (non-zero weight) and the
/// caller's predicate accepts it.
pub(crate) fn followed<F>(graph: &Graph, edge: EdgeId, func: &F) -> bool
where
    F: Fn(&Graph, EdgeId) -> bool,
{
    graph.weight(edge) != 0 && func(graph, edge)
}
