//! Benchmarks for short and detailed rendering of deep error chains

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use errnote::{Fault, Message};

/// Build a chain of `depth` wrapped errors, each carrying two annotations
fn build_chain(depth: usize) -> Fault {
    let mut err: Fault = Box::new(Message::new("root cause"));
    for level in 0..depth {
        let wrapped = errnote::wrap!(Some(err), "level {}", level).map(Fault::from);
        let noted = errnote::note(wrapped, "first note");
        let noted = errnote::note(noted, "second note");
        err = match noted {
            Some(noted) => noted,
            None => return Box::new(Message::new("chain vanished")),
        };
    }
    err
}

/// Benchmark one-line rendering across chain depths
fn benchmark_short_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("short_rendering");

    for depth in [1usize, 8, 64] {
        let err = build_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &err, |b, err| {
            b.iter(|| std::hint::black_box(err.to_string()));
        });
    }
    group.finish();
}

/// Benchmark located, multi-line rendering across chain depths
fn benchmark_detailed_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("detailed_rendering");

    for depth in [1usize, 8, 64] {
        let err = build_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &err, |b, err| {
            b.iter(|| std::hint::black_box(errnote::details(Some(&**err))));
        });
    }
    group.finish();
}

/// Benchmark construction cost, dominated by call-site capture
fn benchmark_construction(c: &mut Criterion) {
    c.bench_function("new_with_call_site", |b| {
        b.iter(|| std::hint::black_box(errnote::new("boom")));
    });
    c.bench_function("new_macro", |b| {
        b.iter(|| std::hint::black_box(errnote::new!("boom {}", 1)));
    });
}

criterion_group!(
    benches,
    benchmark_short_rendering,
    benchmark_detailed_rendering,
    benchmark_construction
);
criterion_main!(benches);
