//! Append-only, in-memory citation graph.
//!
//! [`CitationGraph`] owns a dense vertex table indexed by id together with the
//! mirrored in/out adjacency of every vertex. Vertices must be appended with
//! ids `0, 1, 2, ...` in order; edges may only connect vertices already
//! present, and each ordered `(source, target)` pair is stored at most once.
//! Nothing is ever removed or re-numbered; the whole structure is released
//! when the graph is dropped or passed to [`CitationGraph::destroy`].

use super::network::CitationNetwork;
use super::options::{GraphOptions, SelfLoopPolicy};
use super::vertex::Vertex;
use super::{Timestamp, VertexId};
use crate::cdindex_error::CdIndexError;
use crate::debug_invariants::DebugInvariants;

/// Directed, time-stamped citation graph with dense `i64` vertex ids.
///
/// # Example
/// ```rust
/// use cdindex::graph::CitationGraph;
/// let mut g = CitationGraph::new();
/// g.add_vertex(0, 100).unwrap();
/// g.add_vertex(1, 200).unwrap();
/// g.add_edge(1, 0).unwrap();
/// assert_eq!(g.edge_count(), 1);
/// assert_eq!(g.in_edges(0).unwrap(), &[1]);
/// assert!(g.is_sane());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CitationGraph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edge_count: usize,
    options: GraphOptions,
}

impl CitationGraph {
    /// Creates an empty graph with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph, reserving `options.vertex_capacity` vertex slots.
    pub fn with_options(options: GraphOptions) -> Result<Self, CdIndexError> {
        let mut vertices = Vec::new();
        vertices
            .try_reserve(options.vertex_capacity)
            .map_err(|_| CdIndexError::AllocationFailure("vertex table"))?;
        Ok(Self {
            vertices,
            edge_count: 0,
            options,
        })
    }

    #[inline]
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Appends vertex `id` with the given timestamp.
    ///
    /// `id` must equal the current vertex count; anything else fails with
    /// [`CdIndexError::OutOfOrderVertexId`] and leaves the graph unchanged.
    pub fn add_vertex(&mut self, id: VertexId, timestamp: Timestamp) -> Result<(), CdIndexError> {
        let expected = self.vertices.len() as VertexId;
        if id != expected {
            log::debug!("rejected vertex {id}: next id must be {expected}");
            return Err(CdIndexError::OutOfOrderVertexId {
                expected,
                found: id,
            });
        }
        self.vertices
            .try_reserve(1)
            .map_err(|_| CdIndexError::AllocationFailure("vertex table"))?;
        self.vertices.push(Vertex::new(id, timestamp));
        Ok(())
    }

    /// Adds the directed edge `source_id -> target_id` ("source cites target").
    ///
    /// # Errors
    /// - [`CdIndexError::VertexNotFound`] if either endpoint is not a vertex.
    /// - [`CdIndexError::SelfLoop`] for `source_id == target_id` under
    ///   [`SelfLoopPolicy::Reject`].
    /// - [`CdIndexError::DuplicateEdge`] if the edge already exists.
    /// - [`CdIndexError::AllocationFailure`] if adjacency storage cannot grow.
    ///
    /// On error the graph is unchanged.
    pub fn add_edge(&mut self, source_id: VertexId, target_id: VertexId) -> Result<(), CdIndexError> {
        let src = self.slot(source_id)?;
        let dst = self.slot(target_id)?;
        if src == dst && self.options.self_loops == SelfLoopPolicy::Reject {
            log::debug!("rejected self-loop on vertex {source_id}");
            return Err(CdIndexError::SelfLoop(source_id));
        }
        if self.vertices[src].cites(target_id) {
            log::debug!("rejected duplicate edge ({source_id} -> {target_id})");
            return Err(CdIndexError::DuplicateEdge {
                source_id,
                target_id,
            });
        }

        // Reserve both halves first so a failed allocation cannot leave an
        // unmirrored edge behind.
        self.vertices[src].out_edges.reserve(1)?;
        self.vertices[dst].in_edges.reserve(1)?;
        self.vertices[src].out_edges.push(target_id)?;
        self.vertices[dst].in_edges.push(source_id)?;
        self.edge_count += 1;

        crate::debug_invariants!(
            self.check_mirrored(source_id, target_id),
            "CitationGraph::add_edge"
        );
        Ok(())
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Ids of all vertices, in insertion order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.vertices.iter().map(Vertex::id)
    }

    /// All vertex records, in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges as `(source, target)`, grouped by source in id order and
    /// then in per-source insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices
            .iter()
            .flat_map(|v| v.out_edges.iter().map(move |t| (v.id, t)))
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, CdIndexError> {
        self.slot(id).map(|i| &self.vertices[i])
    }

    pub fn timestamp(&self, id: VertexId) -> Result<Timestamp, CdIndexError> {
        self.vertex(id).map(Vertex::timestamp)
    }

    pub fn in_degree(&self, id: VertexId) -> Result<usize, CdIndexError> {
        self.vertex(id).map(Vertex::in_degree)
    }

    pub fn out_degree(&self, id: VertexId) -> Result<usize, CdIndexError> {
        self.vertex(id).map(Vertex::out_degree)
    }

    pub fn in_edges(&self, id: VertexId) -> Result<&[VertexId], CdIndexError> {
        self.vertex(id).map(Vertex::in_edges)
    }

    pub fn out_edges(&self, id: VertexId) -> Result<&[VertexId], CdIndexError> {
        self.vertex(id).map(Vertex::out_edges)
    }

    /// `true` if the edge `source_id -> target_id` exists.
    pub fn has_edge(&self, source_id: VertexId, target_id: VertexId) -> bool {
        self.vertex(source_id).is_ok_and(|v| v.cites(target_id))
    }

    /// Basic (not comprehensive) structural check: vertex ids are exactly
    /// `0..vertex_count()` in insertion order. An empty graph is sane.
    ///
    /// [`DebugInvariants::validate_invariants`] runs the full set of checks.
    pub fn is_sane(&self) -> bool {
        self.check_vertex_ids().is_ok()
    }

    /// Releases all vertex and adjacency storage. Consuming `self` makes any
    /// later use of the graph a compile error.
    pub fn destroy(self) {
        log::trace!(
            "releasing graph with {} vertices and {} edges",
            self.vertices.len(),
            self.edge_count
        );
        drop(self);
    }

    #[inline]
    fn slot(&self, id: VertexId) -> Result<usize, CdIndexError> {
        usize::try_from(id)
            .ok()
            .filter(|&i| i < self.vertices.len())
            .ok_or(CdIndexError::VertexNotFound(id))
    }

    fn check_vertex_ids(&self) -> Result<(), CdIndexError> {
        for (position, v) in self.vertices.iter().enumerate() {
            if v.id != position as VertexId {
                return Err(CdIndexError::VertexIdMismatch {
                    position,
                    found: v.id,
                });
            }
        }
        Ok(())
    }

    fn check_mirrored(&self, source_id: VertexId, target_id: VertexId) -> Result<(), CdIndexError> {
        let mirrored = self.vertex(source_id).is_ok_and(|v| v.cites(target_id))
            && self
                .vertex(target_id)
                .is_ok_and(|v| v.in_edges.contains(source_id));
        if mirrored {
            Ok(())
        } else {
            Err(CdIndexError::MissingMirror {
                source_id,
                target_id,
            })
        }
    }
}

impl DebugInvariants for CitationGraph {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "CitationGraph");
    }

    fn validate_invariants(&self) -> Result<(), CdIndexError> {
        self.check_vertex_ids()?;
        let mut counted = 0usize;
        for v in &self.vertices {
            for target_id in &v.out_edges {
                self.check_mirrored(v.id, target_id)?;
            }
            for source_id in &v.in_edges {
                self.check_mirrored(source_id, v.id)?;
            }
            counted += v.out_degree();
        }
        if counted != self.edge_count {
            return Err(CdIndexError::EdgeCountMismatch {
                recorded: self.edge_count,
                counted,
            });
        }
        Ok(())
    }
}

impl CitationNetwork for CitationGraph {
    fn vertex_count(&self) -> usize {
        CitationGraph::vertex_count(self)
    }

    fn timestamp(&self, id: VertexId) -> Result<Timestamp, CdIndexError> {
        CitationGraph::timestamp(self, id)
    }

    fn in_edges(&self, id: VertexId) -> Result<&[VertexId], CdIndexError> {
        CitationGraph::in_edges(self, id)
    }

    fn out_edges(&self, id: VertexId) -> Result<&[VertexId], CdIndexError> {
        CitationGraph::out_edges(self, id)
    }
}

impl CitationGraph {
    /// Builds a graph from `(id, timestamp)` vertices and `(source, target)`
    /// edges, applying the same checks as the incremental API.
    pub fn from_parts<V, E>(vertices: V, edges: E) -> Result<Self, CdIndexError>
    where
        V: IntoIterator<Item = (VertexId, Timestamp)>,
        E: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut g = Self::new();
        for (id, t) in vertices {
            g.add_vertex(id, t)?;
        }
        for (s, t) in edges {
            g.add_edge(s, t)?;
        }
        Ok(g)
    }

    /// Inverse of [`CitationGraph::from_parts`]: `(id, timestamp)` pairs in id
    /// order and edges as yielded by [`CitationGraph::edges`].
    pub fn to_parts(&self) -> (Vec<(VertexId, Timestamp)>, Vec<(VertexId, VertexId)>) {
        let vertices = self.vertices.iter().map(|v| (v.id, v.timestamp)).collect();
        (vertices, self.edges().collect())
    }
}
