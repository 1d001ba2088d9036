//! Benchmarks for the exact solver and the Monte Carlo estimator.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand::SeedableRng;
use std::hint::black_box;
use surfrank::{estimate, pagerank_run, LinkGraph, PageRankConfig, SurferConfig};

fn ring(n: usize) -> LinkGraph {
    let mut text = String::new();
    for i in 0..n {
        text.push_str(&format!("{i};{}\n", (i + 1) % n));
    }
    LinkGraph::parse(&text).unwrap()
}

/// Sparse random directed graph: each node links to `m` targets drawn
/// uniformly, some nodes left dangling to keep the redistribution path hot.
fn random_directed(n: usize, m: usize, seed: u64) -> LinkGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut text = String::new();
    for i in 0..n {
        if rng.random::<f64>() < 0.05 {
            text.push_str(&format!("{i};\n"));
            continue;
        }
        let outs: Vec<String> =
            (0..m).map(|_| rng.random_range(0..n).to_string()).collect();
        text.push_str(&format!("{i};{}\n", outs.join(",")));
    }
    LinkGraph::parse(&text).unwrap()
}

fn bench_rank_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_ops");

    for n in [1_000usize, 10_000] {
        let graphs = [("ring", ring(n)), ("rnd_m4", random_directed(n, 4, 123))];

        for (name, g) in graphs {
            let pr_cfg = PageRankConfig { tolerance: 1e-10, ..Default::default() };
            group.bench_with_input(BenchmarkId::new(format!("{name}/power"), n), &n, |b, _| {
                b.iter(|| {
                    let run = pagerank_run(black_box(&g), black_box(pr_cfg));
                    black_box(run);
                })
            });

            let mc_cfg = SurferConfig { walks: 5_000, seed: 123, ..Default::default() };
            group.bench_with_input(BenchmarkId::new(format!("{name}/surfer"), n), &n, |b, _| {
                b.iter(|| {
                    let scores = estimate(black_box(&g), black_box(mc_cfg)).unwrap();
                    black_box(scores);
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_rank_ops);
criterion_main!(benches);
