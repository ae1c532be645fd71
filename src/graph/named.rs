//! `NamedGraph`: address vertices by caller-chosen names instead of dense ids.
//!
//! Names are mapped to ids in insertion order (the first name gets id 0), so
//! callers never have to track the sequential-id rule themselves. Every
//! accessor and index takes names and returns names; the underlying
//! [`CitationGraph`] stays reachable through [`NamedGraph::graph`].

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::{CitationGraph, CitationNetwork, GraphOptions, Timestamp, VertexId};
use crate::algs;
use crate::cdindex_error::CdIndexError;

/// Citation graph keyed by vertex names of type `N`.
///
/// # Example
/// ```rust
/// use cdindex::graph::NamedGraph;
/// let mut g = NamedGraph::new();
/// g.add_vertex("old", 1990).unwrap();
/// g.add_vertex("new", 1995).unwrap();
/// g.add_edge(&"new", &"old").unwrap();
/// assert_eq!(g.out_edges(&"new").unwrap(), vec!["old"]);
/// ```
#[derive(Clone, Debug)]
pub struct NamedGraph<N> {
    graph: CitationGraph,
    ids: HashMap<N, VertexId>,
    names: Vec<N>,
}

impl<N> Default for NamedGraph<N> {
    fn default() -> Self {
        Self {
            graph: CitationGraph::default(),
            ids: HashMap::new(),
            names: Vec::new(),
        }
    }
}

impl<N> NamedGraph<N>
where
    N: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GraphOptions) -> Result<Self, CdIndexError> {
        Ok(Self {
            graph: CitationGraph::with_options(options)?,
            ids: HashMap::new(),
            names: Vec::new(),
        })
    }

    /// Builds a graph from `(name, timestamp)` vertices and `(source, target)` edges.
    pub fn from_parts<V, E>(vertices: V, edges: E) -> Result<Self, CdIndexError>
    where
        V: IntoIterator<Item = (N, Timestamp)>,
        E: IntoIterator<Item = (N, N)>,
    {
        let mut g = Self::new();
        for (name, t) in vertices {
            g.add_vertex(name, t)?;
        }
        for (source, target) in edges {
            g.add_edge(&source, &target)?;
        }
        Ok(g)
    }

    /// Adds a vertex under `name`, returning the id it was given.
    pub fn add_vertex(&mut self, name: N, timestamp: Timestamp) -> Result<VertexId, CdIndexError> {
        if self.ids.contains_key(&name) {
            return Err(CdIndexError::DuplicateVertexName(format!("{name:?}")));
        }
        let id = self.graph.vertex_count() as VertexId;
        self.graph.add_vertex(id, timestamp)?;
        self.ids.insert(name.clone(), id);
        self.names.push(name);
        Ok(id)
    }

    pub fn add_edge(&mut self, source: &N, target: &N) -> Result<(), CdIndexError> {
        let s = self.id_of(source)?;
        let t = self.id_of(target)?;
        self.graph.add_edge(s, t)
    }

    pub fn id_of(&self, name: &N) -> Result<VertexId, CdIndexError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| CdIndexError::UnknownVertexName(format!("{name:?}")))
    }

    pub fn name_of(&self, id: VertexId) -> Option<&N> {
        usize::try_from(id).ok().and_then(|i| self.names.get(i))
    }

    /// Names in id order.
    pub fn names(&self) -> &[N] {
        &self.names
    }

    pub fn graph(&self) -> &CitationGraph {
        &self.graph
    }

    pub fn into_graph(self) -> CitationGraph {
        self.graph
    }

    pub fn vcount(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn ecount(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn timestamp(&self, name: &N) -> Result<Timestamp, CdIndexError> {
        self.graph.timestamp(self.id_of(name)?)
    }

    pub fn in_degree(&self, name: &N) -> Result<usize, CdIndexError> {
        self.graph.in_degree(self.id_of(name)?)
    }

    pub fn out_degree(&self, name: &N) -> Result<usize, CdIndexError> {
        self.graph.out_degree(self.id_of(name)?)
    }

    /// Names of the vertices citing `name`.
    pub fn in_edges(&self, name: &N) -> Result<Vec<N>, CdIndexError> {
        let ids = self.graph.in_edges(self.id_of(name)?)?;
        Ok(self.resolve(ids))
    }

    /// Names of the vertices `name` cites.
    pub fn out_edges(&self, name: &N) -> Result<Vec<N>, CdIndexError> {
        let ids = self.graph.out_edges(self.id_of(name)?)?;
        Ok(self.resolve(ids))
    }

    pub fn cdindex(&self, name: &N, time_delta: i64) -> Result<f64, CdIndexError> {
        algs::cdindex(&self.graph, self.id_of(name)?, time_delta)
    }

    pub fn mcdindex(&self, name: &N, time_delta: i64) -> Result<f64, CdIndexError> {
        algs::mcdindex(&self.graph, self.id_of(name)?, time_delta)
    }

    pub fn iindex(&self, name: &N, time_delta: i64) -> Result<usize, CdIndexError> {
        algs::iindex(&self.graph, self.id_of(name)?, time_delta)
    }

    pub fn is_sane(&self) -> bool {
        self.graph.is_sane() && self.names.len() == self.graph.vertex_count()
    }

    fn resolve(&self, ids: &[VertexId]) -> Vec<N> {
        // ids come from the graph itself, so each one has a name
        ids.iter()
            .filter_map(|&id| self.name_of(id).cloned())
            .collect()
    }
}

impl<N> CitationNetwork for NamedGraph<N> {
    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn timestamp(&self, id: VertexId) -> Result<Timestamp, CdIndexError> {
        self.graph.timestamp(id)
    }

    fn in_edges(&self, id: VertexId) -> Result<&[VertexId], CdIndexError> {
        self.graph.in_edges(id)
    }

    fn out_edges(&self, id: VertexId) -> Result<&[VertexId], CdIndexError> {
        self.graph.out_edges(id)
    }
}
