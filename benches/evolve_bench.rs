//! Criterion benchmarks for the evolutionary core.
//!
//! Measures the three hot operations in isolation: random genome
//! construction (block shuffles plus the eager fitness pass), point
//! mutation (swap plus fitness recompute), and one full engine generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sudoku_evo::board::Genome;
use sudoku_evo::ga::{GaConfig, GeneticAlgorithm};
use sudoku_evo::random::create_rng;

fn bench_random_genome(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_genome");

    for &base in &[2usize, 3, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(base), &base, |b, &base| {
            let mut rng = create_rng(42);
            b.iter(|| black_box(Genome::random(base, &mut rng)))
        });
    }
    group.finish();
}

fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutation");

    for &base in &[2usize, 3, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(base), &base, |b, &base| {
            let mut rng = create_rng(42);
            let mut genome = Genome::random(base, &mut rng);
            b.iter(|| {
                genome.mutate(&mut rng);
                black_box(genome.fitness())
            })
        });
    }
    group.finish();
}

fn bench_step_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_generation");
    group.sample_size(10);

    for (base, pop) in [(2usize, 200usize), (3, 200), (3, 1000)] {
        let config = GaConfig::default().with_population_size(pop).with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{base}_p{pop}"), pop),
            &(base, config),
            |b, (base, config)| {
                let mut engine = GeneticAlgorithm::new(*base, config.clone());
                b.iter(|| engine.step_generation().expect("engine invariant broken"))
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_random_genome,
    bench_mutation,
    bench_step_generation
);
criterion_main!(benches);
