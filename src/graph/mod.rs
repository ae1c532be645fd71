//! Graph storage for time-stamped citation networks.
//!
//! This module provides:
//! - [`CitationGraph`], the append-only vertex/edge store with mirrored adjacency
//! - [`IdSet`], the ordered id sequence used for adjacency and witness sets
//! - [`CitationNetwork`], the read-only view the index algorithms run against
//! - [`SharedGraph`], a read-write-locked handle for multi-threaded callers
//! - [`NamedGraph`], a façade keyed by caller-chosen vertex names
//!
//! Most users build a [`CitationGraph`] (or a [`NamedGraph`]) once, then run the
//! functions in [`crate::algs`] against it.

pub mod id_set;
pub mod named;
pub mod network;
pub mod options;
#[cfg(feature = "rand")]
pub mod random;
pub mod shared;
pub mod store;
pub mod vertex;

pub use id_set::IdSet;
pub use named::NamedGraph;
pub use network::CitationNetwork;
pub use options::{GraphOptions, SelfLoopPolicy};
#[cfg(feature = "rand")]
pub use random::random_graph;
pub use shared::SharedGraph;
pub use store::CitationGraph;
pub use vertex::Vertex;

/// Vertex identifier; the k-th appended vertex has id `k`.
pub type VertexId = i64;

/// Vertex timestamp in caller-defined units (e.g. Unix seconds).
pub type Timestamp = i64;

#[cfg(test)]
mod tests;
