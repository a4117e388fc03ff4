mod build;
mod place;
mod simplify;

use std::collections::VecDeque;

use tracing::*;

use crate::error::CycleError;
use crate::graph::{EdgeId, EdgeMap, Graph, VertexId, VertexMap};

use super::{follow_all, follow_not_cutable, rank, report_loops, strongly};

/// Per-vertex bookkeeping for the break graph.
#[derive(Debug, Default, Clone, Copy)]
struct AcycAttrib {
    /// Committed rank, known good without loops.
    rank: u32,
    /// Rank held until a trial edge placement commits.
    stored_rank: u32,
    on_work_list: bool,
    deleted: bool,
}

/// Break every cycle in `graph` by cutting cutable edges, preferring to
/// keep heavy ones.
///
/// Cut edges are marked through [`Graph::cut_edge`] and returned in cut
/// order; they are not removed, and their weights are untouched. Edges
/// the caller made non-cutable are honored as mandatory ordering. An
/// already-acyclic graph comes back without any cuts.
///
/// This is the convenience form of [`Acyclic`] with the default
/// mandatory-loop handling.
pub fn acyclic<F>(graph: &mut Graph, func: F) -> Vec<EdgeId>
where
    F: Fn(&Graph, EdgeId) -> bool,
{
    Acyclic::new(graph, func).run()
}

/// The cycle breaker behind [`acyclic`].
///
/// Pipeline: color non-trivial SCCs, project them into a reduced break
/// graph whose edges remember the origin edges they stand in for,
/// shrink it with a work-list of reduction rules, rank what remains by
/// its mandatory edges, then trial-place the cutable edges in
/// descending weight order. An edge whose placement closes a loop is
/// cut instead, which cuts every origin edge it represents.
pub struct Acyclic<'g, F> {
    origin: &'g mut Graph,
    func: F,
    reporter: Option<Box<dyn FnMut(&CycleError) + 'g>>,
    break_graph: Graph,
    /// Origin vertex to its break-graph projection.
    to_break: VertexMap<VertexId>,
    /// Break-graph vertex back to the origin vertex, for diagnostics.
    to_origin: VertexMap<VertexId>,
    /// Origin edges each break edge stands in for.
    orig_edges: EdgeMap<Vec<EdgeId>>,
    attribs: VertexMap<AcycAttrib>,
    work: VecDeque<VertexId>,
    /// Trial markers for placement; see `place_step`.
    user: VertexMap<u32>,
    place_step: u32,
    cut: Vec<EdgeId>,
}

impl<'g, F> Acyclic<'g, F>
where
    F: Fn(&Graph, EdgeId) -> bool,
{
    /// Set up a breaker over `graph`. Only edges that are alive and
    /// accepted by `func` take part; everything else is invisible to
    /// the pipeline.
    pub fn new(graph: &'g mut Graph, func: F) -> Self {
        Self {
            origin: graph,
            func,
            reporter: None,
            break_graph: Graph::new(),
            to_break: VertexMap::new(),
            to_origin: VertexMap::new(),
            orig_edges: EdgeMap::new(),
            attribs: VertexMap::new(),
            work: VecDeque::new(),
            user: VertexMap::new(),
            place_step: 0,
            cut: Vec::new(),
        }
    }

    /// Install a reporter for loops made entirely of non-cutable edges.
    ///
    /// Such a loop cannot be broken; the breaker hands the reporter a
    /// [`CycleError::MandatoryLoop`] with a trace through the input
    /// graph, forces one of the loop's edges cutable, and carries on
    /// best-effort. Without a reporter the event is logged at error
    /// level.
    pub fn on_mandatory_loop(mut self, reporter: impl FnMut(&CycleError) + 'g) -> Self {
        self.reporter = Some(Box::new(reporter));
        self
    }

    /// Run the pipeline and return the origin edges that were cut, in
    /// cut order.
    pub fn run(mut self) -> Vec<EdgeId> {
        let color = strongly(&*self.origin, follow_all);
        self.build(&color);
        self.seed_work();
        debug!("simplifying");
        self.simplify(false);
        debug!("cutting trivial loops");
        self.simplify(true);
        debug!("ranking");
        self.rank_break_graph();
        debug!("placing");
        self.place();
        debug!("final ranking");
        self.verify_acyclic();
        self.cut
    }

    /// Add a vertex to the list of vertices needing further work, once.
    fn push_work(&mut self, vertex: VertexId) {
        let attrib = &mut self.attribs[vertex];
        if !attrib.on_work_list {
            attrib.on_work_list = true;
            self.work.push_back(vertex);
        }
    }

    fn pop_work(&mut self) -> Option<VertexId> {
        let vertex = self.work.pop_front()?;
        self.attribs[vertex].on_work_list = false;
        Some(vertex)
    }

    fn seed_work(&mut self) {
        let vertices: Vec<VertexId> = self.break_graph.vertices().collect();
        for vertex in vertices {
            self.push_work(vertex);
        }
    }

    /// Rank the break graph by its mandatory edges and commit the
    /// result as each vertex's starting rank for placement.
    fn rank_break_graph(&mut self) {
        let (ranks, _loops) = rank(&self.break_graph, follow_not_cutable);
        for (vertex, r) in ranks.iter() {
            self.attribs[vertex].rank = *r;
        }
    }

    /// Re-rank to confirm no loops survived the pipeline.
    fn verify_acyclic(&self) {
        let (_ranks, loops) = rank(&self.break_graph, follow_not_cutable);
        if !loops.is_empty() {
            error!("{} loop(s) remain after cycle breaking", loops.len());
        }
    }

    /// Report a loop that consists only of non-cutable edges, traced
    /// through the origin graph so the caller sees input vertices.
    fn report_mandatory_loop(&mut self, vertex: VertexId) {
        let origin_vertex = self.to_origin[vertex];
        let trace = report_loops(&*self.origin, origin_vertex, follow_not_cutable);
        let error = CycleError::MandatoryLoop(trace.into_vec());
        match self.reporter.as_mut() {
            Some(reporter) => reporter(&error),
            None => error!("{error}"),
        }
    }
}
