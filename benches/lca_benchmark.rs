use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lca_index::{EulerLca, NaiveLca};
use rand::distributions::{Distribution, Uniform};
use rand::prelude::ThreadRng;
use rand::Rng;

const SIZES: [usize; 7] = [
    1 << 8,
    1 << 10,
    1 << 12,
    1 << 14,
    1 << 16,
    1 << 18,
    1 << 20,
];

fn random_tree(rng: &mut ThreadRng, len: usize) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); len];
    for node in 1..len {
        adjacency[rng.gen_range(0..node)].push(node);
    }
    adjacency
}

fn bench_query(b: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let mut group = b.benchmark_group("LCA Benchmark: Randomized Trees");

    for l in SIZES {
        let tree = random_tree(&mut rng, l);
        let euler = EulerLca::from_adjacency(&tree).unwrap();
        let naive = NaiveLca::from_adjacency(&tree).unwrap();
        let sample = Uniform::new(0, l);

        group.bench_with_input(BenchmarkId::new("euler", l), &l, |b, _| {
            b.iter_batched(
                || (sample.sample(&mut rng), sample.sample(&mut rng)),
                |(a, v)| black_box(euler.lca(a, v)),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("naive", l), &l, |b, _| {
            b.iter_batched(
                || (sample.sample(&mut rng), sample.sample(&mut rng)),
                |(a, v)| black_box(naive.lca(a, v)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_construction(b: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let mut group = b.benchmark_group("LCA Benchmark: Construction");
    group.sample_size(20);

    for l in SIZES {
        let tree = random_tree(&mut rng, l);
        group.bench_with_input(BenchmarkId::new("euler", l), &l, |b, _| {
            b.iter(|| black_box(EulerLca::from_adjacency(&tree).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_query, bench_construction);
criterion_main!(benches);
