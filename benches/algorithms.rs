//! wgraph 算法基准测试

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use wgraph::algorithm::{self, AlgorithmOptions, Algorithms, QueueBackend};
use wgraph::graph::Graph;

/// 随机连通图：先连一条链，再补随机边
fn make_graph(num_vertices: usize, extra_edges: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = Graph::new(num_vertices).unwrap();

    for v in 1..num_vertices {
        graph.add_edge(v - 1, v, rng.gen_range(1..100)).unwrap();
    }
    for _ in 0..extra_edges {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        if u != v && !graph.has_edge(u, v) {
            graph.add_edge(u, v, rng.gen_range(1..100)).unwrap();
        }
    }
    graph
}

fn bench_traversal(c: &mut Criterion) {
    let graph = make_graph(2_000, 8_000);

    c.bench_function("bfs_2k", |b| {
        b.iter(|| algorithm::bfs(black_box(&graph), 0).unwrap())
    });

    c.bench_function("dfs_2k", |b| {
        b.iter(|| algorithm::dfs(black_box(&graph), 0).unwrap())
    });
}

fn bench_priority_algorithms(c: &mut Criterion) {
    let graph = make_graph(2_000, 8_000);

    let mut group = c.benchmark_group("priority_queue_backend");
    for backend in [QueueBackend::LinearScan, QueueBackend::Heap] {
        let algorithms = Algorithms::with_options(AlgorithmOptions {
            queue_backend: backend,
            record_metrics: false,
        });

        group.bench_function(format!("dijkstra_2k_{}", backend), |b| {
            b.iter(|| algorithms.dijkstra(black_box(&graph), 0).unwrap())
        });
        group.bench_function(format!("prim_2k_{}", backend), |b| {
            b.iter(|| algorithms.prim(black_box(&graph)).unwrap())
        });
        group.bench_function(format!("kruskal_2k_{}", backend), |b| {
            b.iter(|| algorithms.kruskal(black_box(&graph)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_traversal, bench_priority_algorithms);
criterion_main!(benches);
