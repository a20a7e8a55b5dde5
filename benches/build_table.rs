use criterion::{criterion_group, criterion_main, Criterion};
use pow10_tables::{build_table, cached_power, Config, TableRange};
use std::hint::black_box;

fn bench_build_table(c: &mut Criterion) {
    let config = Config::default();

    let mut group = c.benchmark_group("build_table");
    group.bench_function("fine", |b| {
        b.iter(|| build_table(black_box(TableRange::FINE), &config));
    });
    group.bench_function("coarse", |b| {
        b.iter(|| build_table(black_box(TableRange::COARSE), &config));
    });
    group.finish();

    let mut group = c.benchmark_group("cached_power");
    for dec_exp in [-330, -1, 0, 27, 308] {
        group.bench_function(format!("1e{dec_exp}"), |b| {
            b.iter(|| cached_power(black_box(dec_exp), false));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_table);
criterion_main!(benches);
