use tracing::*;

use crate::graph::{EdgeId, Graph, VertexId};

use super::Acyclic;

impl<'g, F> Acyclic<'g, F>
where
    F: Fn(&Graph, EdgeId) -> bool,
{
    /// Try to keep every remaining cutable edge, heaviest first. Each
    /// trial pins the edge as mandatory and pushes ranks downstream;
    /// an edge whose placement closes a loop is cut instead.
    pub(super) fn place(&mut self) {
        let mut edges: Vec<EdgeId> = Vec::new();
        for vertex in self.break_graph.vertices() {
            for &edge in self.break_graph.out_edges(vertex) {
                if self.break_graph.weight(edge) != 0 && self.break_graph.cutable(edge) {
                    edges.push(edge);
                }
            }
        }
        debug!("placing {} cutable edges", edges.len());
        // The sort is stable, so tied weights keep the vertex-order
        // discovery above and one vertex is finished as a block where
        // possible.
        edges.sort_by(|&a, &b| self.break_graph.weight(b).cmp(&self.break_graph.weight(a)));

        self.place_step = 10;
        for edge in edges {
            self.place_try_edge(edge);
        }
    }

    /// One placement trial: pin `edge` as mandatory and re-rank
    /// downstream of it. Commit the new ranks on success; on a loop,
    /// cut the edge and restore every touched rank.
    fn place_try_edge(&mut self, edge: EdgeId) {
        self.place_step += 1;
        trace!(
            "place step {} weight {} edge {edge:?}",
            self.place_step,
            self.break_graph.weight(edge)
        );
        self.break_graph.set_cutable(edge, false);
        let from_rank = self.attribs[self.break_graph.from(edge)].rank;
        let to = self.break_graph.to(edge);
        let looped = self.place_iterate(to, from_rank + 1, self.place_step);
        if !looped {
            // The edge stays mandatory. The recalculated ranks are
            // already in place; just drain the touch list.
            while self.pop_work().is_some() {}
        } else {
            // Placing the edge would close a loop: cut it instead and
            // back out the ranks the trial changed.
            self.break_graph.set_cutable(edge, true);
            self.cut_break_edge(edge, "cut loop");
            self.remove_break_edge(edge);
            while let Some(vertex) = self.pop_work() {
                self.attribs[vertex].rank = self.attribs[vertex].stored_rank;
            }
        }
    }

    /// Push `current_rank` through every mandatory edge below
    /// `vertex`. Returns true when the walk runs back into this
    /// trial's own step marker, i.e. the pinned edge closed a loop.
    fn place_iterate(&mut self, vertex: VertexId, current_rank: u32, place_step: u32) -> bool {
        if self.attribs[vertex].rank >= current_rank {
            return false; // Already settled at least this deep
        }
        if self.user[vertex] == place_step {
            return true; // Loop detected
        }
        self.user[vertex] = place_step;
        // Remember the rank we are about to change; a loop backs it out
        if !self.attribs[vertex].on_work_list {
            self.attribs[vertex].stored_rank = self.attribs[vertex].rank;
            self.push_work(vertex);
        }
        self.attribs[vertex].rank = current_rank;
        let outs = self.break_graph.out_edges(vertex).to_vec();
        for edge in outs {
            if self.break_graph.weight(edge) != 0
                && !self.break_graph.cutable(edge)
                && self.place_iterate(self.break_graph.to(edge), current_rank + 1, place_step)
            {
                // No need to clear the markers on the way out; the
                // next trial uses a fresh step number
                return true;
            }
        }
        self.user[vertex] = 0;
        false
    }
}
