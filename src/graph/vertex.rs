//! A single time-stamped vertex and its mirrored adjacency.

use super::id_set::IdSet;
use super::{Timestamp, VertexId};

/// One vertex of a [`CitationGraph`](super::CitationGraph).
///
/// Degrees are not stored; they are the lengths of the two edge lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex {
    pub(crate) id: VertexId,
    pub(crate) timestamp: Timestamp,
    /// Vertices citing this one.
    pub(crate) in_edges: IdSet,
    /// Vertices this one cites.
    pub(crate) out_edges: IdSet,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, timestamp: Timestamp) -> Self {
        Self {
            id,
            timestamp,
            in_edges: IdSet::new(),
            out_edges: IdSet::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    #[inline]
    pub fn in_edges(&self) -> &[VertexId] {
        self.in_edges.as_slice()
    }

    #[inline]
    pub fn out_edges(&self) -> &[VertexId] {
        self.out_edges.as_slice()
    }

    #[inline]
    pub fn in_degree(&self) -> usize {
        self.in_edges.len()
    }

    #[inline]
    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    /// `true` if this vertex cites `target`.
    #[inline]
    pub fn cites(&self, target: VertexId) -> bool {
        self.out_edges.contains(target)
    }
}
