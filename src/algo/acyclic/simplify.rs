use indexmap::IndexSet;
use tracing::*;

use crate::graph::{EdgeId, Graph, VertexId, VertexMap};

use super::Acyclic;

impl<'g, F> Acyclic<'g, F>
where
    F: Fn(&Graph, EdgeId) -> bool,
{
    /// Run the reduction rules over the work list until it drains,
    /// then leave the list primed with every vertex for the next
    /// phase.
    ///
    /// The structural rules alone cannot remove a cycle; the two cut
    /// rules (enabled by `allow_cut`) handle the loops that are cheap
    /// to decide without placement.
    pub(super) fn simplify(&mut self, allow_cut: bool) {
        while let Some(vertex) = self.pop_work() {
            self.simplify_none(vertex);
            self.simplify_one(vertex);
            self.simplify_out(vertex);
            self.simplify_dup(vertex);
            if allow_cut {
                self.cut_basic(vertex);
                self.cut_backward(vertex);
            }
        }
        self.seed_work();
    }

    /// A vertex without inputs, or without outputs, cannot lie on a
    /// cycle: drop it and its edges.
    fn simplify_none(&mut self, vertex: VertexId) {
        if self.attribs[vertex].deleted {
            return;
        }
        if !self.break_graph.in_edges(vertex).is_empty()
            && !self.break_graph.out_edges(vertex).is_empty()
        {
            return;
        }
        debug!("simplify none: removing {vertex:?}");
        self.attribs[vertex].deleted = true;
        let outs = self.break_graph.out_edges(vertex).to_vec();
        for edge in outs {
            let other = self.break_graph.to(edge);
            self.remove_break_edge(edge);
            self.push_work(other);
        }
        let ins = self.break_graph.in_edges(vertex).to_vec();
        for edge in ins {
            let other = self.break_graph.from(edge);
            self.remove_break_edge(edge);
            self.push_work(other);
        }
    }

    /// A vertex with exactly one input and one output can be bypassed:
    /// splice its neighbors together and drop it.
    fn simplify_one(&mut self, vertex: VertexId) {
        if self.attribs[vertex].deleted {
            return;
        }
        if self.break_graph.in_edges(vertex).len() != 1
            || self.break_graph.out_edges(vertex).len() != 1
        {
            return;
        }
        let in_edge = self.break_graph.in_edges(vertex)[0];
        let out_edge = self.break_graph.out_edges(vertex)[0];
        let in_vertex = self.break_graph.from(in_edge);
        let out_vertex = self.break_graph.to(out_edge);
        // The two neighbors may coincide; the splice then makes a
        // loop. If either end is this vertex itself we cannot drop it.
        if in_vertex == vertex || out_vertex == vertex {
            return;
        }
        debug!("simplify one: bypassing {vertex:?}");
        self.attribs[vertex].deleted = true;
        // Only one of the two origin sets would need cutting to break
        // a cycle through here. The bypass keeps the cutable one, or
        // the cheaper when both are.
        let in_cutable = self.break_graph.cutable(in_edge);
        let out_cutable = self.break_graph.cutable(out_edge);
        let use_in = in_cutable
            && (!out_cutable
                || self.break_graph.weight(in_edge) < self.break_graph.weight(out_edge));
        let template = if use_in { in_edge } else { out_edge };
        self.edge_from_edge(template, in_vertex, out_vertex);
        self.remove_break_edge(in_edge);
        self.remove_break_edge(out_edge);
        self.push_work(in_vertex);
        self.push_work(out_vertex);
    }

    /// A vertex whose only way out is a mandatory edge adds nothing:
    /// reroute every input straight to the out-target and drop it.
    fn simplify_out(&mut self, vertex: VertexId) {
        if self.attribs[vertex].deleted {
            return;
        }
        if self.break_graph.out_edges(vertex).len() != 1 {
            return;
        }
        let out_edge = self.break_graph.out_edges(vertex)[0];
        if self.break_graph.cutable(out_edge) {
            return;
        }
        let out_vertex = self.break_graph.to(out_edge);
        debug!("simplify out: bypassing {vertex:?}");
        self.attribs[vertex].deleted = true;
        let ins = self.break_graph.in_edges(vertex).to_vec();
        for in_edge in ins {
            let in_vertex = self.break_graph.from(in_edge);
            if in_vertex == vertex {
                // A self-loop over mandatory edges is circular
                // ordering in the input. Report it, then force the
                // edge cutable so the pipeline can still finish.
                self.report_mandatory_loop(vertex);
                self.break_graph.set_cutable(in_edge, true);
                return;
            }
            self.edge_from_edge(in_edge, in_vertex, out_vertex);
            self.remove_break_edge(in_edge);
            self.push_work(in_vertex);
        }
        self.remove_break_edge(out_edge);
        self.push_work(out_vertex);
    }

    /// Collapse parallel edges to one survivor per destination.
    fn simplify_dup(&mut self, vertex: VertexId) {
        if self.attribs[vertex].deleted {
            return;
        }
        // First edge seen toward each destination; later duplicates
        // fold into it or replace it.
        let mut prev_edges: VertexMap<EdgeId> = VertexMap::new();
        let outs = self.break_graph.out_edges(vertex).to_vec();
        for edge in outs {
            let out_vertex = self.break_graph.to(edge);
            let Some(prev_edge) = prev_edges.get(out_vertex).copied() else {
                prev_edges.insert(out_vertex, edge);
                continue;
            };
            if !self.break_graph.cutable(prev_edge) {
                // Anything duplicating a mandatory edge is redundant
                debug!("simplify dup: dropping {edge:?}");
                self.remove_break_edge(edge);
            } else if !self.break_graph.cutable(edge) {
                // A mandatory edge replaces its earlier cutable twin
                debug!("simplify dup: dropping {prev_edge:?}");
                self.remove_break_edge(prev_edge);
                prev_edges.insert(out_vertex, edge);
            } else {
                // Two cutable edges combine: weights add, and the
                // survivor stands in for both origin sets
                debug!("simplify dup: folding {edge:?} into {prev_edge:?}");
                let weight = self.break_graph.weight(prev_edge) + self.break_graph.weight(edge);
                self.break_graph.set_weight(prev_edge, weight);
                self.merge_orig_edges(prev_edge, edge);
                self.remove_break_edge(edge);
            }
            self.push_work(out_vertex);
            self.push_work(vertex);
        }
    }

    /// Cut every cutable self-loop on this vertex.
    fn cut_basic(&mut self, vertex: VertexId) {
        if self.attribs[vertex].deleted {
            return;
        }
        let outs = self.break_graph.out_edges(vertex).to_vec();
        for edge in outs {
            if self.break_graph.cutable(edge) && self.break_graph.to(edge) == vertex {
                self.cut_break_edge(edge, "cut self-loop");
                self.remove_break_edge(edge);
                self.push_work(vertex);
            }
        }
    }

    /// A cutable edge back to a vertex that already reaches us over a
    /// mandatory edge is certain to be in a loop: cut it now.
    fn cut_backward(&mut self, vertex: VertexId) {
        if self.attribs[vertex].deleted {
            return;
        }
        let mut mandatory_sources: IndexSet<VertexId> = IndexSet::new();
        for &edge in self.break_graph.in_edges(vertex) {
            if !self.break_graph.cutable(edge) {
                mandatory_sources.insert(self.break_graph.from(edge));
            }
        }
        let outs = self.break_graph.out_edges(vertex).to_vec();
        for edge in outs {
            if self.break_graph.cutable(edge)
                && mandatory_sources.contains(&self.break_graph.to(edge))
            {
                self.cut_break_edge(edge, "cut backward");
                self.remove_break_edge(edge);
                self.push_work(vertex);
            }
        }
    }
}
