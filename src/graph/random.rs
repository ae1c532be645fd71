//! Seeded random citation graphs for testing and benchmarking.

use itertools::iproduct;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::{NamedGraph, Timestamp};
use crate::cdindex_error::CdIndexError;

/// Generates a layered random citation graph.
///
/// Generation `g` contributes `generations[g]` vertices named `v{k}g{g}`, all
/// with timestamp `g`. Every ordered pair whose source is strictly newer than
/// its target is a candidate edge; the candidates are shuffled with a
/// `SmallRng` seeded from `seed` and the first `ceil(edge_fraction * n)` are
/// kept. `edge_fraction` is clamped to `[0, 1]` (NaN counts as 0).
///
/// Equal seeds and arguments always produce identical graphs.
pub fn random_graph(
    generations: &[usize],
    edge_fraction: f64,
    seed: u64,
) -> Result<NamedGraph<String>, CdIndexError> {
    let vertices: Vec<(String, Timestamp)> = generations
        .iter()
        .enumerate()
        .flat_map(|(g, &size)| (0..size).map(move |k| (format!("v{k}g{g}"), g as Timestamp)))
        .collect();

    let mut candidates: Vec<(usize, usize)> = iproduct!(0..vertices.len(), 0..vertices.len())
        .filter(|&(s, t)| vertices[s].1 > vertices[t].1)
        .collect();
    let mut rng = SmallRng::seed_from_u64(seed);
    candidates.shuffle(&mut rng);

    let fraction = if edge_fraction.is_nan() {
        0.0
    } else {
        edge_fraction.clamp(0.0, 1.0)
    };
    let keep = (fraction * candidates.len() as f64).ceil() as usize;
    candidates.truncate(keep);
    log::debug!(
        "random graph: {} vertices, {} edges (seed {seed})",
        vertices.len(),
        candidates.len()
    );

    let mut graph = NamedGraph::new();
    for (name, t) in &vertices {
        graph.add_vertex(name.clone(), *t)?;
    }
    for (s, t) in candidates {
        graph.add_edge(&vertices[s].0, &vertices[t].0)?;
    }
    Ok(graph)
}
