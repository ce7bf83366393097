//! Benchmarks comparing the evaluation strategies.

use calc_rs::eval::{Evaluator, RecursiveEvaluator, ShuntingEvaluator};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SIMPLE: &str = "2+3*4";
const NESTED: &str = "((1+2)*(3+4)-5)/(6-(7-8))*9+10/4";

fn bench_evaluate(c: &mut Criterion) {
    let recursive = RecursiveEvaluator::new();
    let shunting = ShuntingEvaluator::new();

    let mut group = c.benchmark_group("evaluate");

    group.bench_function("recursive/simple", |b| {
        b.iter(|| recursive.evaluate(black_box(SIMPLE)));
    });
    group.bench_function("shunting/simple", |b| {
        b.iter(|| shunting.evaluate(black_box(SIMPLE)));
    });
    group.bench_function("recursive/nested", |b| {
        b.iter(|| recursive.evaluate(black_box(NESTED)));
    });
    group.bench_function("shunting/nested", |b| {
        b.iter(|| shunting.evaluate(black_box(NESTED)));
    });

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize/nested", |b| {
        b.iter(|| calc_rs::eval::tokenize(black_box(NESTED)));
    });
}

criterion_group!(benches, bench_evaluate, bench_tokenize);
criterion_main!(benches);
