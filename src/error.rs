//! Crate error type.

use thiserror::Error;

/// Errors surfaced by graph evaluation and swarm construction.
///
/// Every variant is fatal to the computation that raised it. Nothing is
/// retried or locally recovered; errors propagate straight to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwarmError {
    /// Tour-cost evaluation hit a vertex pair with no recorded edge.
    ///
    /// The supplied cost graph is not complete enough for the tours
    /// being evaluated.
    #[error("no edge cost recorded from vertex {from} to vertex {to}")]
    MissingEdge {
        /// Source vertex of the missing edge.
        from: usize,
        /// Destination vertex of the missing edge.
        to: usize,
    },

    /// Tour generation was anchored at a vertex outside the vertex set.
    #[error("vertex {vertex} is not part of the graph")]
    UnknownVertex {
        /// The unknown anchor vertex.
        vertex: usize,
    },

    /// Random tour generation produced zero distinct tours, so no
    /// population could be formed.
    #[error("initial population is empty: no distinct tours could be generated")]
    EmptyPopulation,
}
