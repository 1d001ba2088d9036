//! Exact PageRank via power iteration.

use crate::graph::Graph;
use crate::{Error, Result};

/// Outcome of a power-iteration solve.
///
/// `converged == false` means the iteration cap was hit before the residual
/// fell below tolerance; the scores are still a valid best-effort
/// distribution (non-negative, sum 1) and callers decide how to react.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankRun {
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub diff_l1: f64,
    pub converged: bool,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    pub damping: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self { damping: 0.85, max_iterations: 100, tolerance: 1e-8 }
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.damping.is_finite() || !(0.0 < self.damping && self.damping < 1.0) {
            return Err(Error::InvalidParameter(
                "damping must be in (0,1)".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidParameter(
                "max_iterations must be > 0".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::InvalidParameter(
                "tolerance must be finite and > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Checked PageRank.
///
/// Validates `config` and rejects obviously-invalid numeric settings.
pub fn pagerank_checked<G: Graph>(graph: &G, config: PageRankConfig) -> Result<Vec<f64>> {
    config.validate()?;
    Ok(pagerank(graph, config))
}

pub fn pagerank<G: Graph>(graph: &G, config: PageRankConfig) -> Vec<f64> {
    pagerank_run(graph, config).scores
}

pub fn pagerank_checked_run<G: Graph>(graph: &G, config: PageRankConfig) -> Result<PageRankRun> {
    config.validate()?;
    Ok(pagerank_run(graph, config))
}

/// PageRank with convergence reporting.
///
/// Power iteration `x ← x·G` from the uniform distribution. Dangling nodes
/// redistribute their mass uniformly every iteration; without that the
/// total probability leaks and the result is wrong, not merely approximate.
///
/// `iterations` is the number of update steps performed.
/// `diff_l1` is the final \(L_1\) residual (sum of absolute deltas).
pub fn pagerank_run<G: Graph>(graph: &G, config: PageRankConfig) -> PageRankRun {
    let n = graph.node_count();
    if n == 0 {
        return PageRankRun { scores: Vec::new(), iterations: 0, diff_l1: 0.0, converged: true };
    }
    let n_f64 = n as f64;
    let mut scores = vec![1.0 / n_f64; n];
    let mut new_scores = vec![0.0; n];
    let out_degrees: Vec<usize> = (0..n).map(|i| graph.out_degree(i)).collect();

    let mut iters = 0usize;
    let mut last_diff = f64::INFINITY;
    let mut converged = false;
    for _ in 0..config.max_iterations {
        iters += 1;
        let dangling_sum: f64 = out_degrees
            .iter()
            .enumerate()
            .filter(|(_, &deg)| deg == 0)
            .map(|(i, _)| scores[i])
            .sum();
        let dangling_contrib = config.damping * dangling_sum / n_f64;
        let teleport = (1.0 - config.damping) / n_f64;
        new_scores.fill(teleport + dangling_contrib);

        for u in 0..n {
            let deg = out_degrees[u];
            if deg > 0 {
                let share = config.damping * scores[u] / deg as f64;
                for v in graph.neighbors(u) {
                    new_scores[v] += share;
                }
            }
        }

        let diff: f64 = scores
            .iter()
            .zip(new_scores.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();
        last_diff = diff;
        std::mem::swap(&mut scores, &mut new_scores);
        if diff < config.tolerance {
            converged = true;
            break;
        }
    }
    PageRankRun { scores, iterations: iters, diff_l1: last_diff, converged }
}

/// The explicit dense Google matrix for a graph.
///
/// Cell `(u, v)` is `(1-d)/n` teleportation plus `d / out_degree(u)` when
/// the edge `u -> v` exists; dangling rows are uniform `1/n`. Every row is
/// stochastic (sums to 1 within fp tolerance). Only practical for small
/// graphs — the iterative solver never materializes this.
pub fn transition_matrix<G: Graph>(graph: &G, damping: f64) -> Vec<Vec<f64>> {
    let n = graph.node_count();
    let n_f64 = n as f64;
    let teleport = (1.0 - damping) / n_f64;
    let mut m = vec![vec![teleport; n]; n];
    for u in 0..n {
        let nbrs = graph.neighbors(u);
        if nbrs.is_empty() {
            // Dangling row: the surfer jumps anywhere, link mass included.
            for cell in &mut m[u] {
                *cell = 1.0 / n_f64;
            }
        } else {
            let share = damping / nbrs.len() as f64;
            for v in nbrs {
                m[u][v] += share;
            }
        }
    }
    m
}
