//! Per-vertex index reports.
//!
//! One [`IndexReport`] row carries everything a caller typically prints for a
//! vertex: its degrees and the three indices over a fixed window.

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::disruption::{cdindex_outcome, iindex};
use crate::cdindex_error::CdIndexError;
use crate::graph::{CitationNetwork, Timestamp, VertexId};

/// Degrees and indices of one vertex for one time delta.
///
/// `cdindex` and `mcdindex` are `None` when the CD index is undefined (no
/// witnesses in the window), so rows serialize without NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexReport {
    pub vertex: VertexId,
    pub timestamp: Timestamp,
    pub in_degree: usize,
    pub out_degree: usize,
    pub cdindex: Option<f64>,
    pub mcdindex: Option<f64>,
    pub iindex: usize,
}

/// Builds the report row for `focal`.
pub fn index_report<G>(graph: &G, focal: VertexId, time_delta: i64) -> Result<IndexReport, CdIndexError>
where
    G: CitationNetwork + ?Sized,
{
    let cd = cdindex_outcome(graph, focal, time_delta)?.defined();
    let i = iindex(graph, focal, time_delta)?;
    Ok(IndexReport {
        vertex: focal,
        timestamp: graph.timestamp(focal)?,
        in_degree: graph.in_edges(focal)?.len(),
        out_degree: graph.out_edges(focal)?.len(),
        cdindex: cd,
        mcdindex: cd.map(|v| v * i as f64),
        iindex: i,
    })
}

/// One [`IndexReport`] per vertex, in id order.
///
/// With the `parallel` feature the rows are computed on the rayon pool.
pub fn index_reports<G>(graph: &G, time_delta: i64) -> Result<Vec<IndexReport>, CdIndexError>
where
    G: CitationNetwork + Sync + ?Sized,
{
    if time_delta < 0 {
        return Err(CdIndexError::NegativeTimeDelta(time_delta));
    }
    let n = graph.vertex_count();
    log::debug!("building index reports for {n} vertices (dt = {time_delta})");

    #[cfg(feature = "rayon")]
    let rows = (0..n)
        .into_par_iter()
        .map(|i| index_report(graph, i as VertexId, time_delta))
        .collect();
    #[cfg(not(feature = "rayon"))]
    let rows = (0..n)
        .map(|i| index_report(graph, i as VertexId, time_delta))
        .collect();
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CitationGraph;

    fn chain() -> CitationGraph {
        // 2 -> 1 -> 0, and 2 -> 0
        CitationGraph::from_parts([(0, 0), (1, 1), (2, 2)], [(1, 0), (2, 1), (2, 0)]).unwrap()
    }

    #[test]
    fn single_row() {
        let g = chain();
        let r = index_report(&g, 1, 5).unwrap();
        assert_eq!(r.vertex, 1);
        assert_eq!(r.timestamp, 1);
        assert_eq!((r.in_degree, r.out_degree), (1, 1));
        // 2 cites 1 and also 0, which 1 cites
        assert_eq!(r.cdindex, Some(-1.0));
        assert_eq!(r.mcdindex, Some(-1.0));
        assert_eq!(r.iindex, 1);
    }

    #[test]
    fn undefined_rows_have_no_value() {
        let g = chain();
        let r = index_report(&g, 2, 5).unwrap();
        assert_eq!(r.cdindex, None);
        assert_eq!(r.mcdindex, None);
        assert_eq!(r.iindex, 0);
    }

    #[test]
    fn all_rows_in_id_order() {
        let g = chain();
        let rows = index_reports(&g, 5).unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.vertex).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(rows[1], index_report(&g, 1, 5).unwrap());
        assert!(index_reports(&CitationGraph::new(), 5).unwrap().is_empty());
        assert_eq!(
            index_reports(&g, -1),
            Err(CdIndexError::NegativeTimeDelta(-1))
        );
    }
}
