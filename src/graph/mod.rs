pub(crate) mod maps;

use slotmap::{SlotMap, new_key_type};

pub use maps::{EdgeMap, KeyedMap, VertexMap};

new_key_type! {
    /// Identity of a vertex within its owning [`Graph`].
    pub struct VertexId;
    /// Identity of an edge within its owning [`Graph`].
    pub struct EdgeId;
}

#[derive(Debug, Default)]
struct VertexData {
    ins: Vec<EdgeId>,
    outs: Vec<EdgeId>,
}

#[derive(Debug)]
struct EdgeData {
    from: VertexId,
    to: VertexId,
    weight: i32,
    cutable: bool,
    cut: bool,
}

/// A directed multigraph that owns its vertices and edges.
///
/// Vertices and edges live in generational arenas, so an id stays valid
/// exactly as long as the entity it names; a reused slot gets a fresh
/// generation and never aliases a stale id. Parallel edges and
/// self-loops are allowed. Iteration over vertices and over a vertex's
/// in/out edge lists follows insertion order, which every algorithm in
/// this crate relies on for determinism.
///
/// Accessors panic when handed an id that does not name a live entity
/// of this graph; ids must not be carried across graphs.
#[derive(Debug, Default)]
pub struct Graph {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    /// Vertex insertion order, kept stable across unrelated removals so
    /// slot reuse can never perturb iteration.
    order: Vec<VertexId>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh vertex with no edges.
    pub fn new_vertex(&mut self) -> VertexId {
        let id = self.vertices.insert(VertexData::default());
        self.order.push(id);
        id
    }

    /// Allocate an edge from `from` to `to` and link it into both
    /// endpoints' edge lists. The edge starts out cutable and uncut.
    ///
    /// A weight of zero makes the edge logically dead: no algorithm
    /// will follow it.
    pub fn new_edge(&mut self, from: VertexId, to: VertexId, weight: i32) -> EdgeId {
        let id = self.edges.insert(EdgeData {
            from,
            to,
            weight,
            cutable: true,
            cut: false,
        });
        self.vertices[from].outs.push(id);
        self.vertices[to].ins.push(id);
        id
    }

    /// Remove an edge, unlinking it from both endpoints. Removing an
    /// edge that is already gone is a no-op.
    pub fn remove_edge(&mut self, edge: EdgeId) {
        if let Some(data) = self.edges.remove(edge) {
            self.vertices[data.from].outs.retain(|&e| e != edge);
            self.vertices[data.to].ins.retain(|&e| e != edge);
        }
    }

    /// Remove a vertex and every edge incident to it.
    pub fn remove_vertex(&mut self, vertex: VertexId) {
        let Some(data) = self.vertices.get(vertex) else {
            return;
        };
        let incident: Vec<EdgeId> = data.ins.iter().chain(data.outs.iter()).copied().collect();
        for edge in incident {
            self.remove_edge(edge);
        }
        self.vertices.remove(vertex);
        self.order.retain(|&v| v != vertex);
    }

    /// Iterate over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order.iter().copied()
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `true` if the id names a live vertex of this graph.
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// `true` if the id names a live edge of this graph.
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains_key(edge)
    }

    /// Outgoing edges of `vertex`, in insertion order.
    pub fn out_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.vertices[vertex].outs
    }

    /// Incoming edges of `vertex`, in insertion order.
    pub fn in_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.vertices[vertex].ins
    }

    /// Source vertex of an edge.
    pub fn from(&self, edge: EdgeId) -> VertexId {
        self.edges[edge].from
    }

    /// Destination vertex of an edge.
    pub fn to(&self, edge: EdgeId) -> VertexId {
        self.edges[edge].to
    }

    /// Edge weight. Zero means the edge is logically dead.
    pub fn weight(&self, edge: EdgeId) -> i32 {
        self.edges[edge].weight
    }

    /// Replace an edge's weight.
    pub fn set_weight(&mut self, edge: EdgeId, weight: i32) {
        self.edges[edge].weight = weight;
    }

    /// Whether the edge may be cut to break a cycle. Non-cutable edges
    /// express mandatory ordering.
    pub fn cutable(&self, edge: EdgeId) -> bool {
        self.edges[edge].cutable
    }

    /// Mark an edge cutable or mandatory.
    pub fn set_cutable(&mut self, edge: EdgeId, cutable: bool) {
        self.edges[edge].cutable = cutable;
    }

    /// Record that cycle breaking chose to cut this edge. The edge
    /// stays in the graph with its weight untouched; consumers decide
    /// what a cut means for them.
    pub fn cut_edge(&mut self, edge: EdgeId) {
        self.edges[edge].cut = true;
    }

    /// Whether [`Graph::cut_edge`] has marked this edge.
    pub fn is_cut(&self, edge: EdgeId) -> bool {
        self.edges[edge].cut
    }
}
