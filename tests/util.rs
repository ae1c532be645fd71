#![allow(dead_code)]
use cdindex::graph::{CitationGraph, VertexId};

pub const REFERENCE_TIMESTAMPS: [i64; 11] = [
    694245600, 694245600, 725868000, 725868000, 788940000, 852098400, 883634400, 915170400,
    915170400, 883634400, 852098400,
];

pub const REFERENCE_EDGES: [(VertexId, VertexId); 13] = [
    (4, 2),
    (4, 0),
    (4, 1),
    (4, 3),
    (5, 2),
    (6, 2),
    (6, 4),
    (7, 4),
    (8, 4),
    (9, 4),
    (9, 1),
    (9, 3),
    (10, 4),
];

/// Five years in seconds (365-day years).
pub const FIVE_YEARS: i64 = 157680000;

/// The 11-vertex, 13-edge reference citation graph.
pub fn reference_graph() -> CitationGraph {
    let mut g = CitationGraph::new();
    for (id, &t) in REFERENCE_TIMESTAMPS.iter().enumerate() {
        g.add_vertex(id as VertexId, t).unwrap();
    }
    for &(s, t) in &REFERENCE_EDGES {
        g.add_edge(s, t).unwrap();
    }
    g
}

/// Build a graph from timestamps (ids 0..n) and edges.
pub fn graph_from(timestamps: &[i64], edges: &[(VertexId, VertexId)]) -> CitationGraph {
    CitationGraph::from_parts(
        timestamps.iter().enumerate().map(|(i, &t)| (i as VertexId, t)),
        edges.iter().copied(),
    )
    .unwrap()
}
