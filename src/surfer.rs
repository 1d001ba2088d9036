//! Monte Carlo random-surfer estimation.
//!
//! Each walk runs for a fixed horizon of steps: with probability `damping`
//! the surfer follows a uniformly chosen out-link (jumping uniformly at
//! random when the current node is dangling), otherwise it teleports to a
//! uniformly random node. After the horizon the walk is tallied per the
//! configured [`TallyPolicy`], and the per-node counts are normalized into
//! a probability distribution.
//!
//! Every walk derives its own ChaCha8 stream from `(seed, walk index)`, so
//! the output is reproducible bit-for-bit and identical between
//! [`estimate`] and the `parallel`-feature [`estimate_parallel`].

use crate::graph::GraphRef;
use crate::ranking::normalize;
use crate::{Error, Result};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// What a finished walk contributes to the per-node tally.
///
/// Both are consistent PageRank estimators; the endpoint form has lower
/// bias (the chain is near-stationary after the horizon) while the
/// visited-path form extracts more counts per walk at the cost of start
/// bias from the early steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TallyPolicy {
    /// Count only the walk's final position.
    EndPoint,
    /// Count every visited position, the start included.
    VisitedPath,
}

/// Where walks begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartPolicy {
    /// Each walk starts at a uniformly random node (drawn from that walk's
    /// own RNG stream).
    UniformRandom,
    /// Walk `w` starts at node `w mod n`, cycling over all nodes.
    Cyclic,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurferConfig {
    pub damping: f64,
    /// Number of independent walks (the sample count).
    pub walks: usize,
    /// Steps per walk before tallying.
    pub horizon: usize,
    pub tally: TallyPolicy,
    pub start: StartPolicy,
    pub seed: u64,
}

impl Default for SurferConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            walks: 1000,
            horizon: 100,
            tally: TallyPolicy::EndPoint,
            start: StartPolicy::UniformRandom,
            seed: 42,
        }
    }
}

impl SurferConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.damping.is_finite() || !(0.0 < self.damping && self.damping < 1.0) {
            return Err(Error::InvalidParameter(
                "damping must be in (0,1)".to_string(),
            ));
        }
        if self.walks == 0 {
            return Err(Error::InvalidParameter("walks must be > 0".to_string()));
        }
        if self.horizon == 0 {
            return Err(Error::InvalidParameter("horizon must be > 0".to_string()));
        }
        Ok(())
    }
}

/// Estimate the stationary distribution by simulating `config.walks`
/// independent surfer walks.
///
/// Fails with [`Error::InvalidGraph`] on a zero-node graph.
pub fn estimate<G: GraphRef>(graph: &G, config: SurferConfig) -> Result<Vec<f64>> {
    config.validate()?;
    let n = graph.node_count();
    if n == 0 {
        return Err(Error::InvalidGraph("graph has no nodes".to_string()));
    }

    let mut tallies = vec![0u64; n];
    for w in 0..config.walks {
        let mut rng = walk_rng(config.seed, w as u64);
        let start = start_node(config.start, w, n, &mut rng);
        surf(graph, start, config, &mut tallies, &mut rng);
    }
    Ok(counts_to_scores(tallies))
}

/// Parallel [`estimate`]: per-worker partial tallies merged at the end.
///
/// Invariant: output is stable for a fixed `seed`, independent of Rayon
/// thread count, and equal to the serial result.
#[cfg(feature = "parallel")]
pub fn estimate_parallel<G: GraphRef + Sync>(graph: &G, config: SurferConfig) -> Result<Vec<f64>> {
    use rayon::prelude::*;

    config.validate()?;
    let n = graph.node_count();
    if n == 0 {
        return Err(Error::InvalidGraph("graph has no nodes".to_string()));
    }

    let tallies = (0..config.walks)
        .into_par_iter()
        .fold(
            || vec![0u64; n],
            |mut acc, w| {
                let mut rng = walk_rng(config.seed, w as u64);
                let start = start_node(config.start, w, n, &mut rng);
                surf(graph, start, config, &mut acc, &mut rng);
                acc
            },
        )
        .reduce(
            || vec![0u64; n],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        );
    Ok(counts_to_scores(tallies))
}

fn walk_rng(seed: u64, walk: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(mix64(seed ^ walk.wrapping_mul(0x9e3779b97f4a7c15)))
}

fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^= x >> 31;
    x
}

fn start_node<R: Rng>(policy: StartPolicy, walk: usize, n: usize, rng: &mut R) -> usize {
    match policy {
        StartPolicy::UniformRandom => rng.random_range(0..n),
        StartPolicy::Cyclic => walk % n,
    }
}

fn surf<G: GraphRef, R: Rng>(
    graph: &G,
    start: usize,
    config: SurferConfig,
    tallies: &mut [u64],
    rng: &mut R,
) {
    let n = graph.node_count();
    let mut curr = start;
    if config.tally == TallyPolicy::VisitedPath {
        tallies[curr] += 1;
    }
    for _ in 0..config.horizon {
        if rng.random::<f64>() < config.damping {
            let nbrs = graph.neighbors_ref(curr);
            if nbrs.is_empty() {
                // Dangling: the surfer jumps anywhere.
                curr = rng.random_range(0..n);
            } else {
                curr = *nbrs.choose(rng).unwrap();
            }
        } else {
            curr = rng.random_range(0..n);
        }
        if config.tally == TallyPolicy::VisitedPath {
            tallies[curr] += 1;
        }
    }
    if config.tally == TallyPolicy::EndPoint {
        tallies[curr] += 1;
    }
}

fn counts_to_scores(tallies: Vec<u64>) -> Vec<f64> {
    let mut scores: Vec<f64> = tallies.into_iter().map(|c| c as f64).collect();
    normalize(&mut scores);
    scores
}
