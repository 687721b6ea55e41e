//! Maker throughput per calculator strategy.

use calc_strategy::{DefinitionCounter, StrategyKind};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const INSTANCES: usize = 10_000;

fn bench_makers(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_10k_calculators");

    for kind in StrategyKind::ALL {
        let counter = DefinitionCounter::shared();
        let maker = kind.strategy().build(&counter);

        group.bench_with_input(BenchmarkId::from_parameter(kind), &maker, |b, maker| {
            b.iter(|| {
                for _ in 0..INSTANCES {
                    black_box(maker.make());
                }
            });
        });
    }

    group.finish();
}

fn bench_chaining(c: &mut Criterion) {
    let counter = DefinitionCounter::shared();
    let maker = StrategyKind::SharedBehaviorTable.strategy().build(&counter);

    c.bench_function("chain_times_add_times", |b| {
        b.iter(|| {
            let mut calculator = maker.make();
            let _ = calculator.times(black_box(2.0)).add(black_box(10.0));
            black_box(calculator.result())
        });
    });
}

criterion_group!(benches, bench_makers, bench_chaining);
criterion_main!(benches);
