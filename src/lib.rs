#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

/// Graph algorithms: SCC coloring, rank assignment, loop reporting, and
/// the acyclic-break pipeline.
pub mod algo;
/// Error types shared by the algorithm layer.
pub mod error;
/// The graph container and its identity-keyed scratch maps.
pub mod graph;

#[allow(missing_docs)]
pub mod prelude {
    pub use crate::{
        algo::{
            Acyclic, VertexList, acyclic, follow_all, follow_not_cutable, rank, rank_with_adder,
            report_loops, strongly,
        },
        error::CycleError,
        graph::{EdgeId, EdgeMap, Graph, VertexId, VertexMap},
    };
}
