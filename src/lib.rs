//! `surfrank`: random-surfer PageRank — exact solve + Monte Carlo estimation.
//!
//! Two computation modes over a shared directed-graph representation:
//! - [`pagerank`]: power iteration on the damped surfer chain, with
//!   convergence reporting ([`PageRankRun`]).
//! - [`estimate`]: seeded Monte Carlo random walks, tallied into a visit
//!   frequency distribution ([`SurferConfig`]).
//!
//! The [`eval`] module compares the two, producing sum-of-squared-error
//! points as the walk count grows.
//!
//! Public invariants (must not drift):
//! - **Node order**: outputs are indexed by node id \(0..n-1\) consistent
//!   with the input graph's adapter semantics ([`LinkGraph`] interns labels
//!   in first-seen order).
//! - **Determinism**: all stochastic paths are driven by a seeded RNG;
//!   identical inputs + configs give bit-identical outputs, independent of
//!   thread count under the `parallel` feature.
//! - **Probability outputs**: rank vectors are non-negative and sum to 1
//!   (dangling mass is redistributed, never dropped).
//!
//! Swappable (allowed to change without breaking the contract):
//! - iteration strategy (serial vs parallel)
//! - convergence details (so long as tolerance semantics remain correct)
//! - internal data structures (so long as invariants hold)

pub mod eval;
pub mod graph;
pub mod io;
pub mod pagerank;
pub mod ranking;
pub mod surfer;

pub use eval::{align_scores, error_curve, squared_error, ErrorPoint};
pub use graph::{Graph, GraphRef, LinkGraph};
pub use io::{
    format_ranking, parse_exact_scores, parse_ranking, read_exact_scores, read_ranking,
    write_ranking,
};
pub use pagerank::{
    pagerank, pagerank_checked, pagerank_checked_run, pagerank_run, transition_matrix,
    PageRankConfig, PageRankRun,
};
pub use ranking::{normalize, ranked_order, top_k};
pub use surfer::{estimate, StartPolicy, SurferConfig, TallyPolicy};

#[cfg(feature = "parallel")]
pub use surfer::estimate_parallel;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
