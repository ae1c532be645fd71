mod util;

use cdindex::api::{GraphHandle, GraphRegistry};
use cdindex::cdindex_error::CdIndexError;
use util::{FIVE_YEARS, REFERENCE_EDGES, REFERENCE_TIMESTAMPS};

fn load_reference(reg: &mut GraphRegistry) -> GraphHandle {
    let h = reg.create_graph();
    for (id, &t) in REFERENCE_TIMESTAMPS.iter().enumerate() {
        reg.add_vertex(&h, id as i64, t).unwrap();
    }
    for &(s, t) in &REFERENCE_EDGES {
        reg.add_edge(&h, s, t).unwrap();
    }
    h
}

#[test]
fn reference_scenario_through_handles() {
    let mut reg = GraphRegistry::new();
    let h = load_reference(&mut reg);
    assert_eq!(reg.vertex_count(&h).unwrap(), 11);
    assert_eq!(reg.edge_count(&h).unwrap(), 13);
    assert_eq!(reg.vertex_ids(&h).unwrap(), (0..11).collect::<Vec<i64>>());
    assert_eq!(reg.vertex_timestamp(&h, 4).unwrap(), 788940000);
    assert_eq!(reg.in_degree(&h, 4).unwrap(), 5);
    assert_eq!(reg.out_degree(&h, 4).unwrap(), 4);
    assert_eq!(reg.out_edges(&h, 9).unwrap(), vec![4, 1, 3]);
    assert_eq!(reg.in_edges(&h, 1).unwrap(), vec![4, 9]);
    assert!(reg.is_sane(&h).unwrap());
    assert_eq!(reg.cdindex(&h, 4, FIVE_YEARS).unwrap(), 1.0 / 6.0);
    assert_eq!(reg.mcdindex(&h, 4, FIVE_YEARS).unwrap(), (1.0 / 6.0) * 5.0);
    assert_eq!(reg.iindex(&h, 4, FIVE_YEARS).unwrap(), 5);
    reg.destroy(h).unwrap();
    assert!(reg.is_empty());
}

#[test]
fn graphs_are_independent() {
    let mut reg = GraphRegistry::new();
    let a = load_reference(&mut reg);
    let b = reg.create_graph();
    assert_eq!(reg.vertex_count(&b).unwrap(), 0);
    reg.destroy(a).unwrap();
    reg.add_vertex(&b, 0, 1).unwrap();
    assert_eq!(reg.vertex_count(&b).unwrap(), 1);
}

#[test]
fn errors_pass_through_handles() {
    let mut reg = GraphRegistry::new();
    let h = load_reference(&mut reg);
    assert_eq!(
        reg.add_vertex(&h, 3, 0),
        Err(CdIndexError::OutOfOrderVertexId { expected: 11, found: 3 })
    );
    assert_eq!(reg.add_edge(&h, 4, 20), Err(CdIndexError::VertexNotFound(20)));
    assert_eq!(
        reg.add_edge(&h, 4, 2),
        Err(CdIndexError::DuplicateEdge { source_id: 4, target_id: 2 })
    );
    assert_eq!(reg.cdindex(&h, 99, 1), Err(CdIndexError::VertexNotFound(99)));
}

#[test]
fn destroyed_handle_cannot_be_reused() {
    let mut reg = GraphRegistry::new();
    let h = reg.create_graph();
    let raw = h.raw();
    reg.destroy(h).unwrap();
    let forged = GraphHandle::from_raw(raw);
    assert_eq!(reg.is_sane(&forged), Err(CdIndexError::UnknownHandle(raw)));
    assert_eq!(reg.add_vertex(&forged, 0, 0), Err(CdIndexError::UnknownHandle(raw)));
    assert_eq!(reg.destroy(forged), Err(CdIndexError::UnknownHandle(raw)));
}
