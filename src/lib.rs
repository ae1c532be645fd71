#![cfg_attr(docsrs, feature(doc_cfg))]
//! # cdindex
//!
//! cdindex computes disruption indices over time-stamped citation networks:
//! the CD index, its mass-scaled variant (mCD) and the I index. A citation
//! network is an append-only directed graph in which `a -> b` means "a cites b"
//! and every vertex carries an integer timestamp.
//!
//! ## Features
//! - [`graph::CitationGraph`], an in-memory store with dense `i64` vertex ids and
//!   mirrored in/out adjacency
//! - [`algs`], the index algorithms, generic over the [`graph::CitationNetwork`] view
//! - [`graph::NamedGraph`] for vertices keyed by caller-chosen names
//! - [`graph::SharedGraph`] for concurrent queries behind a read-write lock
//! - [`api::GraphRegistry`], a handle-based surface for bindings
//! - Optional `parallel` (rayon) batch reports and a `random` graph generator
//!
//! ## Time windows
//!
//! For a focal vertex with timestamp `t` and a delta `dt`, CD witnesses must
//! satisfy `t < t_w <= t + dt`; the I index counts citers with `t_c <= t + dt`.
//! Both bounds are inclusive above, and `t + dt` saturates at `i64::MAX`.
//!
//! ## Self-loops
//!
//! `add_edge(v, v)` is rejected by default. Opt in with
//! [`graph::SelfLoopPolicy::Allow`] through [`graph::GraphOptions`].
//!
//! ## Usage
//! ```rust
//! use cdindex::prelude::*;
//!
//! let mut g = CitationGraph::new();
//! g.add_vertex(0, 2000).unwrap();
//! g.add_vertex(1, 2001).unwrap();
//! g.add_vertex(2, 2002).unwrap();
//! g.add_edge(1, 0).unwrap();
//! g.add_edge(2, 1).unwrap();
//! // 2 cites 1 but not 0: fully disruptive
//! assert_eq!(cdindex(&g, 1, 5).unwrap(), 1.0);
//! assert_eq!(iindex(&g, 1, 5).unwrap(), 1);
//! ```

pub mod algs;
pub mod api;
pub mod cdindex_error;
pub mod debug_invariants;
pub mod graph;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::{
        CdOutcome, IndexReport, TimeWindow, UNDEFINED_INDEX, cdindex, cdindex_outcome, iindex,
        index_report, index_reports, mcdindex,
    };
    pub use crate::api::{GraphHandle, GraphRegistry};
    pub use crate::cdindex_error::CdIndexError;
    pub use crate::debug_invariants::DebugInvariants;
    #[cfg(feature = "rand")]
    pub use crate::graph::random_graph;
    pub use crate::graph::{
        CitationGraph, CitationNetwork, GraphOptions, NamedGraph, SelfLoopPolicy, SharedGraph,
        Timestamp, VertexId,
    };
}
