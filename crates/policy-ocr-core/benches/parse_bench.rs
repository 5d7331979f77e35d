use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use policy_ocr_core::sample::{generate_document, SampleCounts};
use policy_ocr_core::{parse_document_with, ParseOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Mostly valid numbers, with a share that needs correction and a share that
// stays illegible
fn sample_document(total: usize) -> String {
    let counts = SampleCounts {
        valid: total * 6 / 10,
        correctable: total / 10,
        illegible: total * 2 / 10,
        checksum_errors: total / 10,
        unparseable: 0,
    };
    let mut rng = StdRng::seed_from_u64(2024);
    generate_document(&counts, &mut rng)
}

fn benchmark_document_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_sizes");

    for size in [10, 100, 1000].iter() {
        let text = sample_document(*size);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_numbers", size)),
            &text,
            |b, text| {
                let options = ParseOptions::default();
                b.iter(|| parse_document_with(black_box(text), &options));
            },
        );
    }

    group.finish();
}

fn benchmark_options(c: &mut Criterion) {
    let text = sample_document(1000);
    let mut group = c.benchmark_group("options");

    group.bench_function("serial", |b| {
        let options = ParseOptions::default();
        b.iter(|| parse_document_with(black_box(&text), &options));
    });

    group.bench_function("parallel", |b| {
        let options = ParseOptions::default().with_parallel(true);
        b.iter(|| parse_document_with(black_box(&text), &options));
    });

    group.bench_function("no_correction", |b| {
        let options = ParseOptions::default().with_correction(false);
        b.iter(|| parse_document_with(black_box(&text), &options));
    });

    group.finish();
}

criterion_group!(benches, benchmark_document_sizes, benchmark_options);
criterion_main!(benches);
