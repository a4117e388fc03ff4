use tracing::*;

use crate::algo::followed;
use crate::graph::{EdgeId, Graph, VertexId, VertexMap};

use super::Acyclic;

impl<'g, F> Acyclic<'g, F>
where
    F: Fn(&Graph, EdgeId) -> bool,
{
    /// Project every origin vertex with a non-zero color into the break
    /// graph, then replicate the followed edges between them.
    pub(super) fn build(&mut self, color: &VertexMap<u32>) {
        let origin_vertices: Vec<VertexId> = self.origin.vertices().collect();
        for &vertex in &origin_vertices {
            if color[vertex] != 0 {
                let break_vertex = self.break_graph.new_vertex();
                self.to_break.insert(vertex, break_vertex);
                self.to_origin.insert(break_vertex, vertex);
            }
        }
        for &vertex in &origin_vertices {
            if color[vertex] == 0 {
                continue;
            }
            let from = self.to_break[vertex];
            for &edge in self.origin.out_edges(vertex) {
                if !followed(&*self.origin, edge, &self.func) {
                    continue;
                }
                let to_vertex = self.origin.to(edge);
                if color[to_vertex] == 0 {
                    continue;
                }
                // Replicate the edge into the break graph. Parallel
                // edges stay parallel here; simplify_dup merges them.
                let to = self.to_break[to_vertex];
                let weight = self.origin.weight(edge);
                let cutable = self.origin.cutable(edge);
                let break_edge = self.break_graph.new_edge(from, to, weight);
                self.break_graph.set_cutable(break_edge, cutable);
                // Remember the origin edge so a cut can find it
                self.orig_edges[break_edge].push(edge);
            }
        }
        debug!(
            "break graph: {} vertices, {} edges",
            self.break_graph.vertex_count(),
            self.break_graph.edge_count()
        );
    }

    /// New break edge between `from` and `to` with `template`'s weight
    /// and cutable flag, inheriting its origin-edge list.
    pub(super) fn edge_from_edge(
        &mut self,
        template: EdgeId,
        from: VertexId,
        to: VertexId,
    ) -> EdgeId {
        let weight = self.break_graph.weight(template);
        let cutable = self.break_graph.cutable(template);
        let edge = self.break_graph.new_edge(from, to, weight);
        self.break_graph.set_cutable(edge, cutable);
        if let Some(list) = self.orig_edges.remove(template) {
            self.orig_edges.insert(edge, list);
        }
        edge
    }

    /// Fold `from_edge`'s origin edges into `into`'s list.
    pub(super) fn merge_orig_edges(&mut self, into: EdgeId, from_edge: EdgeId) {
        if let Some(mut list) = self.orig_edges.remove(from_edge) {
            self.orig_edges[into].append(&mut list);
        }
    }

    /// Cut every origin edge this break edge stands in for.
    pub(super) fn cut_break_edge(&mut self, edge: EdgeId, why: &str) {
        if let Some(list) = self.orig_edges.remove(edge) {
            for origin_edge in list {
                debug!(
                    "{why}: cutting {:?} -> {:?}",
                    self.origin.from(origin_edge),
                    self.origin.to(origin_edge)
                );
                self.origin.cut_edge(origin_edge);
                self.cut.push(origin_edge);
            }
        }
    }

    /// Drop a break edge along with whatever origin list it still
    /// carries.
    pub(super) fn remove_break_edge(&mut self, edge: EdgeId) {
        self.orig_edges.remove(edge);
        self.break_graph.remove_edge(edge);
    }
}
