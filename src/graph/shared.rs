//! `SharedGraph`: a [`CitationGraph`] behind a read-write lock.
//!
//! Index queries only read the graph, so any number of them may run at once;
//! `add_vertex` and `add_edge` take the write lock and therefore never overlap
//! a query or another mutation.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::{CitationGraph, Timestamp, VertexId};
use crate::algs;
use crate::cdindex_error::CdIndexError;

/// Cloneable, thread-safe handle to one [`CitationGraph`].
#[derive(Clone, Debug, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<CitationGraph>>,
}

impl SharedGraph {
    pub fn new(graph: CitationGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn add_vertex(&self, id: VertexId, timestamp: Timestamp) -> Result<(), CdIndexError> {
        self.inner.write().add_vertex(id, timestamp)
    }

    pub fn add_edge(&self, source_id: VertexId, target_id: VertexId) -> Result<(), CdIndexError> {
        self.inner.write().add_edge(source_id, target_id)
    }

    /// Shared read access for running several queries against one snapshot.
    pub fn read(&self) -> RwLockReadGuard<'_, CitationGraph> {
        self.inner.read()
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.read().vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.read().edge_count()
    }

    pub fn cdindex(&self, focal: VertexId, time_delta: i64) -> Result<f64, CdIndexError> {
        algs::cdindex(&*self.inner.read(), focal, time_delta)
    }

    pub fn mcdindex(&self, focal: VertexId, time_delta: i64) -> Result<f64, CdIndexError> {
        algs::mcdindex(&*self.inner.read(), focal, time_delta)
    }

    pub fn iindex(&self, focal: VertexId, time_delta: i64) -> Result<usize, CdIndexError> {
        algs::iindex(&*self.inner.read(), focal, time_delta)
    }

    /// Unwraps the graph if this is the last handle; otherwise gives `self` back.
    pub fn try_into_inner(self) -> Result<CitationGraph, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl From<CitationGraph> for SharedGraph {
    fn from(graph: CitationGraph) -> Self {
        Self::new(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;
    use std::thread;

    assert_impl_all!(CitationGraph: Send, Sync);
    assert_impl_all!(SharedGraph: Send, Sync, Clone);

    fn star(n: i64) -> SharedGraph {
        let shared = SharedGraph::default();
        shared.add_vertex(0, 0).unwrap();
        for id in 1..=n {
            shared.add_vertex(id, id).unwrap();
            shared.add_edge(id, 0).unwrap();
        }
        shared
    }

    #[test]
    fn concurrent_readers_agree() {
        let shared = star(16);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let g = shared.clone();
                thread::spawn(move || (g.cdindex(0, 100).unwrap(), g.iindex(0, 100).unwrap()))
            })
            .collect();
        for h in handles {
            let (cd, i) = h.join().unwrap();
            // every citer cites only the focal vertex: fully disruptive
            assert_eq!(cd, 1.0);
            assert_eq!(i, 16);
        }
    }

    #[test]
    fn writer_and_readers_interleave_safely() {
        let shared = star(4);
        let writer = {
            let g = shared.clone();
            thread::spawn(move || {
                for id in 5..50 {
                    g.add_vertex(id, id).unwrap();
                    g.add_edge(id, 0).unwrap();
                }
            })
        };
        let reader = {
            let g = shared.clone();
            thread::spawn(move || {
                let mut last = 0;
                for _ in 0..200 {
                    let i = g.iindex(0, 1_000).unwrap();
                    assert!(i >= last);
                    last = i;
                }
            })
        };
        writer.join().unwrap();
        reader.join().unwrap();
        assert_eq!(shared.edge_count(), 49);
        let graph = shared.try_into_inner().unwrap();
        assert!(graph.is_sane());
    }

    #[test]
    fn try_into_inner_refuses_while_shared() {
        let a = star(2);
        let b = a.clone();
        let a = a.try_into_inner().unwrap_err();
        drop(b);
        assert_eq!(a.try_into_inner().unwrap().vertex_count(), 3);
    }
}
