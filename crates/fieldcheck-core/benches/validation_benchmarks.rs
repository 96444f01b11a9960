//! Benchmarks for rule parsing and field validation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fieldcheck_core::{is_cpf, parse_rules, validate, RuleSet, ValidationMode};

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_rules", |b| {
        b.iter(|| parse_rules(black_box("required|minLength:5|maxLength:80|email")))
    });
}

fn bench_validate(c: &mut Criterion) {
    let rules = parse_rules("required|minLength:5|maxLength:80|email");
    let compiled = RuleSet::compile(&rules, ValidationMode::Strict).expect("rules compile");

    let mut group = c.benchmark_group("validate");
    group.bench_function("uncompiled", |b| {
        b.iter(|| validate(black_box("someone@example.com"), &rules))
    });
    group.bench_function("compiled", |b| {
        b.iter(|| compiled.check(black_box(Some("someone@example.com"))))
    });
    group.finish();
}

fn bench_tax_id(c: &mut Criterion) {
    c.bench_function("is_cpf", |b| b.iter(|| is_cpf(black_box("111.444.777-35"))));
}

criterion_group!(benches, bench_parse, bench_validate, bench_tax_id);
criterion_main!(benches);
