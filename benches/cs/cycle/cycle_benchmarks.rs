use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cycle_finder::cycle::{
    find_cycle_floyd, find_cycle_set, generate_problem, LinkedArena, ProblemConfig, Strategy,
};

fn bench_array_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_duplicate");
    group.sample_size(20);

    for &n in &[10_000usize, 1_000_000] {
        let config = ProblemConfig {
            n,
            max_duplicate_count: 1_000,
            seed: Some(0x5eed),
        };
        let problem = generate_problem::<u32>(&config).unwrap();

        for strategy in Strategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), n),
                &problem.values,
                |b, data| b.iter(|| strategy.run(black_box(data)).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_linked_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_cycle");

    for &len in &[1_000usize, 100_000] {
        // Tail loops back to the middle of the chain.
        let (list, head) = LinkedArena::with_cycle(0..len, len / 2).unwrap();

        group.bench_with_input(BenchmarkId::new("set", len), &list, |b, list| {
            b.iter(|| find_cycle_set(list, black_box(head)))
        });
        group.bench_with_input(BenchmarkId::new("floyd", len), &list, |b, list| {
            b.iter(|| find_cycle_floyd(list, black_box(head)))
        });
    }
    group.finish();
}

criterion_group!(cycle, bench_array_strategies, bench_linked_strategies);
criterion_main!(cycle);
