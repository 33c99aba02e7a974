#![forbid(unsafe_code)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use umbra::{Direction, Graph, GraphBuilder, PageRank, ProcedureConfig, TerminationFlag};

const NODE_COUNT: u64 = 8_192;
const RELATIONSHIP_COUNT: usize = 65_536;

fn random_graph(seed: u64) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new(Direction::Outgoing);
    for original in 0..NODE_COUNT {
        builder.add_node(original);
    }
    for _ in 0..RELATIONSHIP_COUNT {
        let source = rng.gen_range(0..NODE_COUNT);
        let target = rng.gen_range(0..NODE_COUNT);
        builder.add_relationship(source, target);
    }
    builder.build()
}

fn micro_pagerank(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro/pagerank");
    group.sample_size(20);

    let graph = random_graph(0xDECAF);
    let termination = TerminationFlag::new();
    for concurrency in [1usize, 4] {
        let config = ProcedureConfig::default()
            .with_iterations(5)
            .with_concurrency(concurrency)
            .with_batch_size(512);
        group.bench_with_input(
            BenchmarkId::new("iterations_5", concurrency),
            &config,
            |b, config| {
                let engine = PageRank::new(&graph, config).expect("engine");
                b.iter(|| black_box(engine.compute(config.iterations, &termination).expect("scores")));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, micro_pagerank);
criterion_main!(benches);
