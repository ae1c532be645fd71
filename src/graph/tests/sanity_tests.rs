//! `is_sane` and `validate_invariants` against hand-corrupted stores.

use crate::cdindex_error::CdIndexError;
use crate::debug_invariants::DebugInvariants;
use crate::graph::{CitationGraph, IdSet};

fn three() -> CitationGraph {
    CitationGraph::from_parts([(0, 10), (1, 20), (2, 30)], [(1, 0), (2, 0), (2, 1)]).unwrap()
}

#[test]
fn empty_graph_is_sane() {
    let g = CitationGraph::new();
    assert!(g.is_sane());
    assert_eq!(g.validate_invariants(), Ok(()));
}

#[test]
fn built_graph_is_sane() {
    let g = three();
    assert!(g.is_sane());
    assert!(g.invariants_hold());
}

#[test]
fn gap_in_ids_is_not_sane() {
    let mut g = three();
    g.vertices[1].id = 5;
    assert!(!g.is_sane());
    assert_eq!(
        g.validate_invariants(),
        Err(CdIndexError::VertexIdMismatch { position: 1, found: 5 })
    );
}

#[test]
fn swapped_ids_are_not_sane() {
    let mut g = three();
    g.vertices.swap(0, 1);
    assert!(!g.is_sane());
}

#[test]
fn repeated_id_is_not_sane() {
    let mut g = three();
    let copy = g.vertices[0].clone();
    g.vertices.push(copy);
    assert!(!g.is_sane());
    assert_eq!(
        g.validate_invariants(),
        Err(CdIndexError::VertexIdMismatch { position: 3, found: 0 })
    );
}

#[test]
fn missing_mirror_passes_sanity_but_not_validation() {
    let mut g = three();
    g.vertices[0].in_edges = IdSet::new();
    // is_sane only looks at the id sequence
    assert!(g.is_sane());
    assert_eq!(
        g.validate_invariants(),
        Err(CdIndexError::MissingMirror { source_id: 1, target_id: 0 })
    );
    assert!(!g.invariants_hold());
}

#[test]
fn dangling_in_edge_is_reported() {
    let mut g = three();
    g.vertices[2].in_edges.push(0).unwrap();
    assert_eq!(
        g.validate_invariants(),
        Err(CdIndexError::MissingMirror { source_id: 0, target_id: 2 })
    );
}

#[test]
fn stale_edge_count_is_reported() {
    let mut g = three();
    g.edge_count += 1;
    assert_eq!(
        g.validate_invariants(),
        Err(CdIndexError::EdgeCountMismatch { recorded: 4, counted: 3 })
    );
}
