//! Read-only view consumed by the index algorithms.

use super::{Timestamp, VertexId};
use crate::cdindex_error::CdIndexError;

/// Read access to a time-stamped directed citation graph with dense ids
/// `0..vertex_count()`.
///
/// The algorithms in [`crate::algs`] only ever see a graph through this trait.
/// Implementors return [`CdIndexError::VertexNotFound`] for ids outside the
/// id range and must not mutate anything while answering.
pub trait CitationNetwork {
    fn vertex_count(&self) -> usize;

    fn timestamp(&self, id: VertexId) -> Result<Timestamp, CdIndexError>;

    /// Sources of edges pointing at `id`, in insertion order.
    fn in_edges(&self, id: VertexId) -> Result<&[VertexId], CdIndexError>;

    /// Targets of edges leaving `id`, in insertion order.
    fn out_edges(&self, id: VertexId) -> Result<&[VertexId], CdIndexError>;

    /// `true` if `id` lies in `0..vertex_count()`.
    fn contains(&self, id: VertexId) -> bool {
        usize::try_from(id).is_ok_and(|i| i < self.vertex_count())
    }
}
