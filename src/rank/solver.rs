// Power-iteration rank solver.
//
// Each step recomputes every node's score as a convex combination of a
// damping-weighted base score and the weighted sum of its neighbors' scores,
// then renormalizes the vector to unit L1 mass so scores cannot diverge.
//
// The base (teleport) distribution is proportional to count × character
// length rather than uniform: every substring of a token shares the same
// neighborhood, so with a uniform base a fragment like "eco" would tie its
// parent word "economy" exactly. Weighting by length breaks that tie in
// favor of complete words.

use std::collections::HashMap;

use tracing::debug;

use super::graph::SubstringGraph;

/// Parameters for the power iteration.
#[derive(Debug, Clone)]
pub struct SolverParams {
    /// Damping factor: weight of the neighbor term vs the base term.
    pub beta: f64,
    /// Iteration cap. Hitting it is a diagnostic, not an error.
    pub max_iter: usize,
    /// L1 delta below which the iteration is considered converged.
    pub epsilon: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            beta: 0.85,
            max_iter: 10,
            epsilon: 1e-6,
        }
    }
}

/// Solver output: per-candidate scores plus convergence diagnostics.
pub struct RankScores {
    pub scores: HashMap<String, f64>,
    /// False when max_iter was reached before the epsilon criterion.
    pub converged: bool,
    pub iterations: usize,
}

/// Run damped power iteration over the substring graph.
///
/// An empty graph returns empty scores and counts as converged. The result
/// is deterministic: iteration follows the graph's stable node ordering and
/// never depends on hash-map traversal order.
pub fn solve(graph: &SubstringGraph, params: &SolverParams) -> RankScores {
    let n = graph.len();
    if n == 0 {
        return RankScores {
            scores: HashMap::new(),
            converged: true,
            iterations: 0,
        };
    }

    let base = base_distribution(graph);
    let out_weight: Vec<f64> = (0..n)
        .map(|id| graph.neighbors(id).iter().map(|&(_, w)| w).sum())
        .collect();

    let mut scores = base.clone();
    let mut converged = false;
    let mut iterations = 0;

    for iter in 1..=params.max_iter {
        iterations = iter;

        let mut next: Vec<f64> = base.iter().map(|b| (1.0 - params.beta) * b).collect();
        for source in 0..n {
            if out_weight[source] <= 0.0 {
                continue;
            }
            let share = params.beta * scores[source] / out_weight[source];
            for &(target, w) in graph.neighbors(source) {
                next[target] += share * w;
            }
        }

        // Renormalize to unit mass. Isolated nodes leak their damped share,
        // so the total drifts below 1.0 without this.
        let total: f64 = next.iter().sum();
        if total > 0.0 {
            for score in &mut next {
                *score /= total;
            }
        }

        let delta: f64 = next
            .iter()
            .zip(&scores)
            .map(|(a, b)| (a - b).abs())
            .sum();
        scores = next;

        if delta < params.epsilon {
            converged = true;
            break;
        }
    }

    debug!(nodes = n, iterations, converged, "Power iteration finished");

    let scores = graph
        .nodes()
        .iter()
        .cloned()
        .zip(scores)
        .collect::<HashMap<_, _>>();

    RankScores {
        scores,
        converged,
        iterations,
    }
}

/// Teleport distribution: count × char length, normalized to unit L1 mass.
fn base_distribution(graph: &SubstringGraph) -> Vec<f64> {
    let raw: Vec<f64> = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(id, text)| graph.count(id) as f64 * text.chars().count() as f64)
        .collect();
    let total: f64 = raw.iter().sum();
    if total > 0.0 {
        raw.iter().map(|v| v / total).collect()
    } else {
        raw
    }
}
