//! Handle-based graph surface.
//!
//! [`GraphRegistry`] owns any number of graphs and hands out opaque
//! [`GraphHandle`]s, one per graph. Every operation takes a handle, uses
//! signed 64-bit counts and ids, and fails with
//! [`CdIndexError::UnknownHandle`] when the handle was never issued or its graph
//! has been destroyed. This is the shape a foreign-language binding wraps.
//!
//! ```rust
//! use cdindex::api::GraphRegistry;
//! let mut reg = GraphRegistry::new();
//! let h = reg.create_graph();
//! reg.add_vertex(&h, 0, 10).unwrap();
//! reg.add_vertex(&h, 1, 20).unwrap();
//! reg.add_edge(&h, 1, 0).unwrap();
//! assert_eq!(reg.in_edges(&h, 0).unwrap(), vec![1]);
//! reg.destroy(h).unwrap();
//! ```

use std::collections::HashMap;

use crate::algs;
use crate::cdindex_error::CdIndexError;
use crate::graph::{CitationGraph, GraphOptions, Timestamp, VertexId};

/// Opaque token naming one graph in a [`GraphRegistry`].
///
/// Not `Clone`: [`GraphRegistry::destroy`] consumes it. A raw value recovered
/// with [`GraphHandle::from_raw`] after destruction is simply unknown.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GraphHandle(u64);

impl GraphHandle {
    pub fn into_raw(self) -> u64 {
        self.0
    }

    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Owner of all graphs created through the handle surface.
#[derive(Debug)]
pub struct GraphRegistry {
    next_handle: u64,
    graphs: HashMap<u64, CitationGraph>,
}

impl Default for GraphRegistry {
    fn default() -> Self {
        Self {
            next_handle: 1,
            graphs: HashMap::new(),
        }
    }
}

impl GraphRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live graphs.
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Creates an empty graph with default options.
    pub fn create_graph(&mut self) -> GraphHandle {
        self.insert(CitationGraph::new())
    }

    pub fn create_graph_with(&mut self, options: GraphOptions) -> Result<GraphHandle, CdIndexError> {
        Ok(self.insert(CitationGraph::with_options(options)?))
    }

    /// Takes ownership of an already built graph.
    pub fn insert(&mut self, graph: CitationGraph) -> GraphHandle {
        let raw = self.next_handle;
        self.next_handle += 1;
        self.graphs.insert(raw, graph);
        log::trace!("issued graph handle {raw}");
        GraphHandle(raw)
    }

    pub fn graph(&self, handle: &GraphHandle) -> Result<&CitationGraph, CdIndexError> {
        self.graphs
            .get(&handle.0)
            .ok_or(CdIndexError::UnknownHandle(handle.0))
    }

    fn graph_mut(&mut self, handle: &GraphHandle) -> Result<&mut CitationGraph, CdIndexError> {
        self.graphs
            .get_mut(&handle.0)
            .ok_or(CdIndexError::UnknownHandle(handle.0))
    }

    pub fn add_vertex(&mut self, handle: &GraphHandle, id: VertexId, timestamp: Timestamp) -> Result<(), CdIndexError> {
        self.graph_mut(handle)?.add_vertex(id, timestamp)
    }

    pub fn add_edge(&mut self, handle: &GraphHandle, source_id: VertexId, target_id: VertexId) -> Result<(), CdIndexError> {
        self.graph_mut(handle)?.add_edge(source_id, target_id)
    }

    pub fn vertex_count(&self, handle: &GraphHandle) -> Result<i64, CdIndexError> {
        Ok(self.graph(handle)?.vertex_count() as i64)
    }

    pub fn edge_count(&self, handle: &GraphHandle) -> Result<i64, CdIndexError> {
        Ok(self.graph(handle)?.edge_count() as i64)
    }

    pub fn vertex_ids(&self, handle: &GraphHandle) -> Result<Vec<VertexId>, CdIndexError> {
        Ok(self.graph(handle)?.vertex_ids().collect())
    }

    pub fn vertex_timestamp(&self, handle: &GraphHandle, id: VertexId) -> Result<Timestamp, CdIndexError> {
        self.graph(handle)?.timestamp(id)
    }

    pub fn in_degree(&self, handle: &GraphHandle, id: VertexId) -> Result<i64, CdIndexError> {
        Ok(self.graph(handle)?.in_degree(id)? as i64)
    }

    pub fn out_degree(&self, handle: &GraphHandle, id: VertexId) -> Result<i64, CdIndexError> {
        Ok(self.graph(handle)?.out_degree(id)? as i64)
    }

    pub fn in_edges(&self, handle: &GraphHandle, id: VertexId) -> Result<Vec<VertexId>, CdIndexError> {
        Ok(self.graph(handle)?.in_edges(id)?.to_vec())
    }

    pub fn out_edges(&self, handle: &GraphHandle, id: VertexId) -> Result<Vec<VertexId>, CdIndexError> {
        Ok(self.graph(handle)?.out_edges(id)?.to_vec())
    }

    pub fn is_sane(&self, handle: &GraphHandle) -> Result<bool, CdIndexError> {
        Ok(self.graph(handle)?.is_sane())
    }

    pub fn cdindex(&self, handle: &GraphHandle, id: VertexId, time_delta: i64) -> Result<f64, CdIndexError> {
        algs::cdindex(self.graph(handle)?, id, time_delta)
    }

    pub fn mcdindex(&self, handle: &GraphHandle, id: VertexId, time_delta: i64) -> Result<f64, CdIndexError> {
        algs::mcdindex(self.graph(handle)?, id, time_delta)
    }

    pub fn iindex(&self, handle: &GraphHandle, id: VertexId, time_delta: i64) -> Result<i64, CdIndexError> {
        Ok(algs::iindex(self.graph(handle)?, id, time_delta)? as i64)
    }

    /// Releases the graph behind `handle`.
    pub fn destroy(&mut self, handle: GraphHandle) -> Result<(), CdIndexError> {
        self.take(handle)?.destroy();
        Ok(())
    }

    /// Removes the graph from the registry and returns it.
    pub fn take(&mut self, handle: GraphHandle) -> Result<CitationGraph, CdIndexError> {
        self.graphs
            .remove(&handle.0)
            .ok_or(CdIndexError::UnknownHandle(handle.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_distinct_and_start_at_one() {
        let mut reg = GraphRegistry::new();
        let a = reg.create_graph();
        let b = reg.create_graph();
        assert_eq!(a.raw(), 1);
        assert_eq!(b.raw(), 2);
        reg.add_vertex(&a, 0, 5).unwrap();
        assert_eq!(reg.vertex_count(&a).unwrap(), 1);
        assert_eq!(reg.vertex_count(&b).unwrap(), 0);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn stale_raw_handle_is_unknown() {
        let mut reg = GraphRegistry::new();
        let h = reg.create_graph();
        let raw = h.raw();
        reg.destroy(h).unwrap();
        assert!(reg.is_empty());
        let stale = GraphHandle::from_raw(raw);
        assert_eq!(reg.edge_count(&stale), Err(CdIndexError::UnknownHandle(raw)));
        assert_eq!(reg.destroy(stale), Err(CdIndexError::UnknownHandle(raw)));
        // raw values are never reissued
        assert_eq!(reg.create_graph().into_raw(), raw + 1);
    }

    #[test]
    fn create_with_options_applies_them() {
        let mut reg = GraphRegistry::new();
        let opts = GraphOptions::default().with_self_loops(crate::graph::SelfLoopPolicy::Allow);
        let h = reg.create_graph_with(opts).unwrap();
        reg.add_vertex(&h, 0, 0).unwrap();
        reg.add_edge(&h, 0, 0).unwrap();
        assert_eq!(reg.in_edges(&h, 0).unwrap(), vec![0]);
        assert_eq!(reg.take(h).unwrap().edge_count(), 1);
    }
}
