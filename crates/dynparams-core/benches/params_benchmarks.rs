//! Benchmarks for typed lookups, argument parsing and scanning

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dynparams_core::{ArgsSource, Params, SharedParams, TypedParams};

fn build_tokens(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let group = if i % 2 == 0 { "header" } else { "body" };
            format!("--{}-field-{}={}", group, letters(i), i + 1)
        })
        .collect()
}

/// Keys only allow letters and hyphens
fn letters(mut i: usize) -> String {
    let mut out = String::new();
    loop {
        out.push((b'a' + (i % 26) as u8) as char);
        i /= 26;
        if i == 0 {
            break out;
        }
    }
}

fn bench_args_parse(c: &mut Criterion) {
    let tokens = build_tokens(1_000);
    c.bench_function("args_parse_1000", |b| {
        b.iter(|| ArgsSource::new(black_box(&tokens)))
    });
}

fn bench_typed_get(c: &mut Criterion) {
    let params = Params::from_args(build_tokens(1_000));
    let key = format!("header-field-{}", letters(0));
    c.bench_function("get_string_as_int", |b| {
        b.iter(|| params.get_string_as_int(black_box(&key)))
    });

    let shared = SharedParams::from_params(params.clone());
    c.bench_function("shared_get_string_as_int", |b| {
        b.iter(|| shared.get_string_as_int(black_box(&key)))
    });
}

fn bench_scan(c: &mut Criterion) {
    let params = Params::from_args(build_tokens(1_000));
    c.bench_function("scan_header_prefix", |b| {
        b.iter(|| params.scan(black_box("^header-.+$")))
    });
}

criterion_group!(benches, bench_args_parse, bench_typed_get, bench_scan);
criterion_main!(benches);
