use criterion::{Criterion, criterion_group, criterion_main};
use legline::prelude::*;
use std::hint::black_box;

const CODES: [&str; 6] = ["BLR", "MAA", "HYD", "DEL", "GOA", "BOM"];

fn long_ledger(len: usize) -> Ledger {
    let mut ledger = Ledger::new();
    for i in 0..len {
        let origin = CODES[i % CODES.len()];
        let destination = CODES[(i * 7 + 1) % CODES.len()];
        let _ = ledger.append(origin, destination);
    }
    ledger
}

fn recompute(ledger: &mut Ledger) {
    ledger.recompute();
    black_box(ledger.trips());
}

fn remove_middle(ledger: &Ledger) {
    let mut ledger = Ledger::from_trips(ledger.trips().to_vec());
    let _ = black_box(ledger.remove(ledger.len() / 2));
}

fn build_layout(ledger: &Ledger, config: &layout::Config) {
    let _ = black_box(Layout::build(ledger.trips(), config));
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut ledger = long_ledger(64);
    let config = layout::Config::default();

    let mut group = c.benchmark_group("Ledger");

    group.bench_function("Recompute 64 trips", |b| {
        b.iter(|| recompute(&mut ledger))
    });

    group.bench_function("Remove middle of 64 trips", |b| {
        b.iter(|| remove_middle(&ledger))
    });

    group.bench_function("Layout 64 trips", |b| {
        b.iter(|| build_layout(&ledger, &config))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
