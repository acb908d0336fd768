use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use model_version::ModelVersion;

fn parse_known(c: &mut Criterion) {
    let s = "4.1.0";
    c.bench_function(&format!("Parse {s}"), |b| {
        b.iter(|| {
            let _ver = black_box(ModelVersion::parse(black_box(s)));
        })
    });
}

fn parse_unknown(c: &mut Criterion) {
    let s = "5.12.3";
    c.bench_function(&format!("Parse {s}"), |b| {
        b.iter(|| {
            let _ver = black_box(ModelVersion::parse(black_box(s)));
        })
    });
}

fn parse_non_numeric(c: &mut Criterion) {
    let s = "${project.modelVersion}";
    c.bench_function(&format!("Parse {s}"), |b| {
        b.iter(|| {
            let _ver = black_box(ModelVersion::parse(black_box(s)));
        })
    });
}

fn version_cmp(c: &mut Criterion) {
    let sa = "4.0.0";
    let sb = "4.0.1";
    let va = sa.parse::<ModelVersion>().unwrap();
    let vb = sb.parse::<ModelVersion>().unwrap();
    c.bench_function(&format!("Compare {sa} and {sb}"), |b| {
        b.iter(|| {
            let _ord = black_box(va.cmp(&vb));
        })
    });
}

criterion_group!(
    benches,
    parse_known,
    parse_unknown,
    parse_non_numeric,
    version_cmp
);
criterion_main!(benches);
