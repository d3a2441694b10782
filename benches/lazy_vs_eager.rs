use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fx::prelude::*;

#[inline(never)]
fn eager_chain(n: i64) -> Vec<i64> {
    go!(
        0..n,
        map(|i: i64| i * i),
        filter(|i: &i64| i % 3 == 1),
        take(16),
    )
}

#[inline(never)]
fn lazy_chain(n: usize) -> Option<Vec<usize>> {
    let out = go!(
        L::range(n),
        L::lift,
        L::map(|i: usize| Value::plain(i * i)),
        L::filter(|i: &usize| Value::plain(i % 3 == 1)),
        L::take(16),
    );
    match out.into_ready() {
        Ok(res) => res.ok(),
        Err(_) => None,
    }
}

fn take_from_large_source(c: &mut Criterion) {
    let n = 1 << 16;

    c.bench_function("eager", |b| b.iter(|| black_box(eager_chain(black_box(n)))));

    c.bench_function("lazy", |b| {
        b.iter(|| black_box(lazy_chain(black_box(n as usize))))
    });
}

criterion_group!(benches, take_from_large_source);
criterion_main!(benches);
