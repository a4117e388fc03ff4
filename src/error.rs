use thiserror::Error;

use crate::graph::VertexId;

/// Structural errors detected while breaking cycles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CycleError {
    /// A cycle made entirely of non-cutable edges. It cannot be broken,
    /// so the breaker reports it and continues best-effort.
    ///
    /// The trace starts and ends at the same vertex of the input graph
    /// and walks only non-cutable edges.
    #[error("graph contains a loop of non-cutable edges: {0:?}")]
    MandatoryLoop(Vec<VertexId>),
}
