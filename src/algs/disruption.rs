//! CD index, mCD index and I index of a focal vertex.
//!
//! Given a focal vertex `f` and a window `(t_f, t_f + delta]`, the *witnesses*
//! of `f` are the vertices inside the window that either cite `f` or cite
//! something `f` cites. Each witness `w` scores
//!
//! - `+1` if `w` cites `f` but none of `f`'s references (disruptive),
//! - `-1` if `w` cites `f` and at least one of `f`'s references (consolidating),
//! - `0` if `w` does not cite `f`.
//!
//! The CD index is the mean score over witnesses. It is undefined when there
//! are no witnesses; [`cdindex_outcome`] reports that as
//! [`CdOutcome::Undefined`] and [`cdindex`] as [`UNDEFINED_INDEX`] (NaN).
//!
//! The upper window bound is inclusive. Earlier releases of the reference
//! tool disagreed on `<` vs `<=` there; this crate uses `<=` throughout.

use crate::algs::window::TimeWindow;
use crate::cdindex_error::CdIndexError;
use crate::graph::id_set::{IdSet, intersects};
use crate::graph::{CitationNetwork, VertexId};

/// Value returned by [`cdindex`] and [`mcdindex`] when the witness set is empty.
pub const UNDEFINED_INDEX: f64 = f64::NAN;

/// Result of a CD index computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CdOutcome {
    /// Mean witness score in `[-1, 1]` over `witnesses > 0` vertices.
    Defined { value: f64, witnesses: usize },
    /// No vertex fell inside the window.
    Undefined,
}

impl CdOutcome {
    /// The index value, or [`UNDEFINED_INDEX`].
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            CdOutcome::Defined { value, .. } => value,
            CdOutcome::Undefined => UNDEFINED_INDEX,
        }
    }

    #[inline]
    pub fn is_defined(self) -> bool {
        matches!(self, CdOutcome::Defined { .. })
    }

    /// `Some(value)` when defined.
    #[inline]
    pub fn defined(self) -> Option<f64> {
        match self {
            CdOutcome::Defined { value, .. } => Some(value),
            CdOutcome::Undefined => None,
        }
    }

    #[inline]
    pub fn witnesses(self) -> usize {
        match self {
            CdOutcome::Defined { witnesses, .. } => witnesses,
            CdOutcome::Undefined => 0,
        }
    }
}

/// Collects the deduplicated witnesses of `focal` inside `window`:
/// in-window citers of `focal`'s references first, then in-window citers of
/// `focal`, each in first-seen order.
pub fn witnesses<G>(graph: &G, focal: VertexId, window: TimeWindow) -> Result<IdSet, CdIndexError>
where
    G: CitationNetwork + ?Sized,
{
    let mut found = IdSet::new();
    for &cited in graph.out_edges(focal)? {
        for &citer in graph.in_edges(cited)? {
            if window.contains(graph.timestamp(citer)?) {
                found.insert_unique(citer)?;
            }
        }
    }
    for &citer in graph.in_edges(focal)? {
        if window.contains(graph.timestamp(citer)?) {
            found.insert_unique(citer)?;
        }
    }
    Ok(found)
}

/// CD index of `focal` over `(t_focal, t_focal + time_delta]`, as a [`CdOutcome`].
///
/// # Errors
/// - [`CdIndexError::VertexNotFound`] if `focal` is not a vertex.
/// - [`CdIndexError::NegativeTimeDelta`] if `time_delta < 0`.
pub fn cdindex_outcome<G>(
    graph: &G,
    focal: VertexId,
    time_delta: i64,
) -> Result<CdOutcome, CdIndexError>
where
    G: CitationNetwork + ?Sized,
{
    if !graph.contains(focal) {
        return Err(CdIndexError::VertexNotFound(focal));
    }
    let window = TimeWindow::after(graph.timestamp(focal)?, time_delta)?;
    let found = witnesses(graph, focal, window)?;
    log::trace!("cdindex({focal}, {time_delta}): {} witnesses", found.len());
    if found.is_empty() {
        log::debug!("cdindex({focal}, {time_delta}) is undefined: no witnesses in window");
        return Ok(CdOutcome::Undefined);
    }

    let references = graph.out_edges(focal)?;
    let mut score = 0.0f64;
    for w in &found {
        let cites_focal = graph.out_edges(w)?.contains(&focal);
        if !cites_focal {
            continue;
        }
        let shares_reference = intersects(graph.out_edges(w)?, references);
        score += if shares_reference { -1.0 } else { 1.0 };
    }

    Ok(CdOutcome::Defined {
        value: score / found.len() as f64,
        witnesses: found.len(),
    })
}

/// CD index of `focal`, or [`UNDEFINED_INDEX`] (NaN) when no witness falls
/// inside the window. See [`cdindex_outcome`] for errors.
pub fn cdindex<G>(graph: &G, focal: VertexId, time_delta: i64) -> Result<f64, CdIndexError>
where
    G: CitationNetwork + ?Sized,
{
    cdindex_outcome(graph, focal, time_delta).map(CdOutcome::value)
}

/// Number of vertices citing `focal` with timestamp `<= t_focal + time_delta`.
///
/// There is no lower bound here, unlike the CD window. Non-decreasing in
/// `time_delta`.
pub fn iindex<G>(graph: &G, focal: VertexId, time_delta: i64) -> Result<usize, CdIndexError>
where
    G: CitationNetwork + ?Sized,
{
    let window = TimeWindow::after(graph.timestamp(focal)?, time_delta)?;
    let mut count = 0;
    for &citer in graph.in_edges(focal)? {
        if window.reaches(graph.timestamp(citer)?) {
            count += 1;
        }
    }
    Ok(count)
}

/// Mass-scaled CD index: `cdindex * iindex`. Undefined (NaN) whenever the CD
/// index is.
pub fn mcdindex<G>(graph: &G, focal: VertexId, time_delta: i64) -> Result<f64, CdIndexError>
where
    G: CitationNetwork + ?Sized,
{
    let cd = cdindex(graph, focal, time_delta)?;
    let mass = iindex(graph, focal, time_delta)?;
    Ok(cd * mass as f64)
}
