//! CdIndexError: Unified error type for cdindex public APIs
//!
//! Every fallible operation in this crate (graph mutation, index queries,
//! handle lookups) reports failure through this type instead of aborting.

use thiserror::Error;

/// Unified error type for cdindex operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CdIndexError {
    /// Growing vertex or adjacency storage failed.
    #[error("Problem (re)allocating memory for {0}")]
    AllocationFailure(&'static str),
    /// `add_vertex` was called with an id other than the current vertex count.
    #[error("Vertex ids must be added sequentially from 0: expected {expected}, found {found}")]
    OutOfOrderVertexId { expected: i64, found: i64 },
    /// An id does not name a vertex of the graph.
    #[error("Vertex {0} is not in the graph")]
    VertexNotFound(i64),
    /// The directed edge already exists.
    #[error("The edge ({source_id} -> {target_id}) is already in the graph")]
    DuplicateEdge { source_id: i64, target_id: i64 },
    /// Self-loop rejected by [`SelfLoopPolicy::Reject`](crate::graph::SelfLoopPolicy).
    #[error("Self-loop on vertex {0} is not allowed by the graph options")]
    SelfLoop(i64),
    /// Index queries need a non-negative window.
    #[error("Time delta must be non-negative, found {0}")]
    NegativeTimeDelta(i64),
    /// A raw graph handle that was never issued or was already destroyed.
    #[error("Unknown or destroyed graph handle {0}")]
    UnknownHandle(u64),
    #[error("Vertex name `{0}` already added to graph")]
    DuplicateVertexName(String),
    #[error("Vertex name `{0}` is not in the graph")]
    UnknownVertexName(String),
    /// Vertex at `position` does not carry id `position`.
    #[error("Invariant violated: vertex at position {position} has id {found}")]
    VertexIdMismatch { position: usize, found: i64 },
    /// One half of an edge is present in the adjacency lists without the other.
    #[error("Invariant violated: edge ({source_id} -> {target_id}) is missing its mirror")]
    MissingMirror { source_id: i64, target_id: i64 },
    #[error("Invariant violated: edge count is {recorded} but adjacency holds {counted}")]
    EdgeCountMismatch { recorded: usize, counted: usize },
}
