use criterion::{black_box, criterion_group, criterion_main, Criterion};
use relaxed_semver::Version;

fn bench_parse(c: &mut Criterion) {
    let inputs = [
        "1.0.7+61",
        "1.0.17",
        "1.2",
        "0",
        "10.20.30+40",
        "18446744073709551615",
        "1.0.1+abc",
        "1-0-1+abc",
    ];

    c.bench_function("version_parse", |b| {
        b.iter(|| {
            for input in inputs {
                black_box(Version::new(black_box(input)).ok());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let cases = [
        ("1.1", "1.0.6"),
        ("1.0.7", "1.0.6"),
        ("1.0.6+25", "1.0.26"),
        ("0.19.5", "1.0.0"),
        ("1.0", "1.0.0"),
        ("0", "1.0.7"),
    ];

    let parsed: Vec<(Version, Version)> = cases
        .iter()
        .map(|(a, b)| {
            (
                Version::new(a).expect("valid version"),
                Version::new(b).expect("valid version"),
            )
        })
        .collect();

    c.bench_function("version_compare", |b| {
        b.iter(|| {
            for (a, bver) in &parsed {
                black_box(black_box(a).compare_to(black_box(bver)));
                black_box(black_box(a).is_greater_or_equal(black_box(bver)));
            }
        })
    });
}

fn bench_to_string(c: &mut Criterion) {
    let versions: Vec<Version> = ["1.0.7+61", "1.0.17", "1.2", "0"]
        .iter()
        .map(|input| Version::new(input).expect("valid version"))
        .collect();

    c.bench_function("version_to_string", |b| {
        b.iter(|| {
            for version in &versions {
                black_box(black_box(version).to_string());
            }
        })
    });
}

criterion_group!(benches, bench_parse, bench_compare, bench_to_string);
criterion_main!(benches);
