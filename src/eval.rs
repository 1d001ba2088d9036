//! Error measurement: Monte Carlo estimates against the exact solution.

use crate::graph::{GraphRef, LinkGraph};
use crate::ranking::ranked_order;
use crate::surfer::{estimate, SurferConfig};
use crate::{Error, Result};

/// One point on the error-vs-sample-size curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorPoint {
    pub samples: usize,
    pub error: f64,
}

/// Sum of squared error between an estimate and the exact distribution.
///
/// With `top_k = Some(k)` the sum runs over the exact ranking's top-`k`
/// node set (ties broken by node id); `None` sums over all nodes.
pub fn squared_error(exact: &[f64], estimate: &[f64], top_k: Option<usize>) -> Result<f64> {
    if exact.len() != estimate.len() {
        return Err(Error::InvalidParameter(format!(
            "length mismatch: exact={} estimate={}",
            exact.len(),
            estimate.len()
        )));
    }
    let sum = match top_k {
        Some(k) => ranked_order(exact)
            .into_iter()
            .take(k)
            .map(|i| (estimate[i] - exact[i]).powi(2))
            .sum(),
        None => exact
            .iter()
            .zip(estimate)
            .map(|(e, m)| (m - e).powi(2))
            .sum(),
    };
    Ok(sum)
}

/// Run the estimator at each sample size and measure its error against the
/// exact distribution.
///
/// Everything but the walk count is held constant across sample sizes
/// (seed, start policy, tally policy, horizon), so the points are
/// comparable. The error is expected to trend toward zero as the sample
/// count grows — a statistical trend, not a pointwise guarantee.
pub fn error_curve<G: GraphRef>(
    graph: &G,
    exact: &[f64],
    base: SurferConfig,
    sample_sizes: &[usize],
    top_k: Option<usize>,
) -> Result<Vec<ErrorPoint>> {
    let mut points = Vec::with_capacity(sample_sizes.len());
    for &samples in sample_sizes {
        let cfg = SurferConfig { walks: samples, ..base };
        let est = estimate(graph, cfg)?;
        let error = squared_error(exact, &est, top_k)?;
        points.push(ErrorPoint { samples, error });
    }
    Ok(points)
}

/// Reorder a parsed `(label, score)` reference file into the graph's node
/// order.
///
/// Fails with [`Error::InvalidGraph`] when a label does not exist in the
/// graph; nodes absent from the file keep a zero score.
pub fn align_scores(graph: &LinkGraph, pairs: &[(String, f64)]) -> Result<Vec<f64>> {
    let mut scores = vec![0.0; graph.node_count()];
    for (label, score) in pairs {
        let node = graph.node_id(label).ok_or_else(|| {
            Error::InvalidGraph(format!("unknown node '{label}' in reference scores"))
        })?;
        scores[node] = *score;
    }
    Ok(scores)
}
