//! Karger's randomized contraction algorithm.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::result::{ContractionStep, CutEdge, MinCut};

/// Runs a single contraction trial with the supplied generator.
///
/// Picks an edge uniformly at random from the current multiset, merges its
/// second endpoint into the first, drops the self-loops that appear and
/// keeps parallel edges as separate multi-edges so no crossing weight is
/// lost. When two supernodes remain, the surviving edges form a candidate
/// cut. Supernodes keep one of their original node ids, so the per-step
/// edge snapshots stay meaningful to the caller.
///
/// One trial finds the true minimum cut with probability at least
/// `2 / (n (n - 1))`; callers wanting confidence repeat trials and keep the
/// lightest result, which is what [`karger_best_of`] does. A two-node graph
/// is already terminal: zero steps, cut = all edges.
///
/// # Errors
///
/// - [`GraphError::CutTooSmall`] when the graph has fewer than two nodes
/// - [`GraphError::Disconnected`] when the edges run out while more than
///   two supernodes remain
pub fn karger<R: Rng>(graph: &Graph, rng: &mut R) -> Result<MinCut> {
    let node_count = graph.node_count();
    if node_count < 2 {
        return Err(GraphError::CutTooSmall { node_count });
    }

    let mut edges: Vec<CutEdge> = graph
        .edges()
        .iter()
        .map(|e| CutEdge {
            u: e.u,
            v: e.v,
            weight: e.weight,
        })
        .collect();
    let mut steps = Vec::with_capacity(node_count - 2);
    let mut supernodes = node_count;

    while supernodes > 2 {
        if edges.is_empty() {
            // nothing left to contract; some component never joined
            return Err(GraphError::Disconnected { node_count });
        }
        let pick = rng.random_range(0..edges.len());
        let CutEdge {
            u: kept,
            v: absorbed,
            ..
        } = edges[pick];

        edges.retain_mut(|edge| {
            if edge.u == absorbed {
                edge.u = kept;
            }
            if edge.v == absorbed {
                edge.v = kept;
            }
            edge.u != edge.v
        });
        supernodes -= 1;
        steps.push(ContractionStep {
            kept,
            absorbed,
            edges: edges.clone(),
        });
    }

    let cut_weight = edges.iter().map(|edge| edge.weight).sum();
    tracing::debug!(
        "karger: {} contractions, cut weight {}",
        steps.len(),
        cut_weight
    );
    Ok(MinCut {
        steps,
        cut_edges: edges,
        cut_weight,
    })
}

/// Best-of-`trials` wrapper around [`karger`].
///
/// Each trial gets its own PCG stream derived from `seed` and the trial
/// index, so trials are statistically independent and the whole run is
/// reproducible. `trials` is clamped to at least one. Finding the true
/// minimum with high probability takes on the order of `n^2 log n` trials.
pub fn karger_best_of(graph: &Graph, trials: usize, seed: u64) -> Result<MinCut> {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut best = karger(graph, &mut rng)?;
    for trial in 1..trials.max(1) {
        let mut rng = Pcg64Mcg::seed_from_u64(seed.wrapping_add(trial as u64));
        let cut = karger(graph, &mut rng)?;
        if cut.cut_weight < best.cut_weight {
            best = cut;
        }
    }
    Ok(best)
}
