use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ws2812_tab::{gamma, render, Table};

fn bench(c: &mut Criterion) {
    c.bench_function("correct all levels", |b| {
        b.iter(|| gamma::levels().map(|(_, l)| l as u32).sum::<u32>())
    });

    c.bench_function("generate table", |b| b.iter(Table::generate));

    let table = Table::generate();
    c.bench_function("render table", |b| b.iter(|| render(black_box(&table))));
}

criterion_group!(benches, bench);
criterion_main!(benches);
