//! Criterion benches for shortest-path queries.
//!
//! - `reference`: the fifteen-node graph, eight queries per iteration, by
//!   key and by position, on one reused graph.
//! - `random`: seeded random geometric graphs of growing size, one query
//!   between the first and last node.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use eucpath::{Graph, Key, VertexSpec};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn reference() -> Vec<VertexSpec> {
    vec![
        VertexSpec::at(0, [0.0, 0.0], [1, 5, 11]),
        VertexSpec::at(1, [10.0, 0.0], [0, 2]),
        VertexSpec::at(2, [20.0, 0.0], [1, 3]),
        VertexSpec::at(3, [30.0, 0.0], [2, 4]),
        VertexSpec::at(4, [40.0, 0.0], [3, 5]),
        VertexSpec::at(5, [5.0, 0.0], [4, 6, 11, 0]),
        VertexSpec::at(6, [60.0, 0.0], [5, 7]),
        VertexSpec::at(7, [70.0, 0.0], [6, 8]),
        VertexSpec::at(8, [80.0, 0.0], [7, 9]),
        VertexSpec::at(9, [90.0, 0.0], [7, 10, 12, 14]),
        VertexSpec::at(10, [5.0, 5.0], [9, 14, 11]),
        VertexSpec::at(11, [0.0, 5.0], [0, 5, 12, 10]),
        VertexSpec::at(12, [0.0, 20.0], [11, 9]),
        VertexSpec::at(13, [0.0, 30.0], [12, 14]),
        VertexSpec::at(14, [0.0, 40.0], [13, 9, 10]),
    ]
}

const QUERIES: [(Key, Key); 8] = [
    (0, 10),
    (0, 14),
    (0, 7),
    (0, 13),
    (0, 11),
    (0, 12),
    (0, 13),
    (0, 6),
];

fn random_graph(n: usize, degree: usize, seed: u64) -> Vec<VertexSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let coords: Vec<f64> = (0..3).map(|_| rng.random_range(0.0..100.0)).collect();
            let mut connections: Vec<Key> = (0..degree)
                .map(|_| rng.random_range(0..n) as Key)
                .collect();
            // Keep the chain so the last node stays reachable.
            if i + 1 < n {
                connections.push(i as Key + 1);
            }
            VertexSpec::at(i as Key, coords, connections)
        })
        .collect()
}

fn bench_reference(c: &mut Criterion) {
    let specs = reference();
    let mut group = c.benchmark_group("reference");

    let mut graph = Graph::new(specs.iter()).expect("valid graph");
    group.bench_function("by_key", |b| {
        b.iter(|| {
            for (st, fin) in QUERIES {
                graph.path_by_key(st, fin).expect("path exists");
            }
        })
    });

    let positions: Vec<_> = QUERIES
        .iter()
        .map(|&(st, fin)| {
            (
                VertexSpec::position_by_key(&specs, st).expect("known key"),
                VertexSpec::position_by_key(&specs, fin).expect("known key"),
            )
        })
        .collect();
    group.bench_function("by_position", |b| {
        b.iter(|| {
            for &(st, fin) in &positions {
                graph.path_by_position(st, fin).expect("path exists");
            }
        })
    });

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    for n in [100usize, 1_000, 10_000] {
        let specs = random_graph(n, 4, 42);
        let mut graph = Graph::new(specs).expect("valid graph");
        let last = n as Key - 1;
        group.bench_with_input(BenchmarkId::new("path_by_key", n), &last, |b, &last| {
            b.iter(|| graph.path_by_key(0, last).expect("chain keeps it reachable"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reference, bench_random);
criterion_main!(benches);
