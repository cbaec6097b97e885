// ============================================================================
// Composite Numerics Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Wrapped Integer - promoted arithmetic against the bare primitive
// 2. Elastic Arithmetic - format promotion plus raw arithmetic per operator
// 3. Elastic Conversion - settling wide results back into storage format
// 4. Fraction - cross-multiplied arithmetic and reduction
// ============================================================================

use composite_numerics::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// ============================================================================
// Wrapped Integer Benchmarks
// ============================================================================

fn benchmark_integer(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer");

    let values: Vec<i16> = (0..1000).map(|i| (i * 37 % 2000 - 1000) as i16).collect();

    group.bench_function("wrapped_sum", |b| {
        b.iter(|| {
            values
                .iter()
                .fold(Integer::from_rep(0i64), |acc, &v| acc + Integer::from_rep(v))
        });
    });

    group.bench_function("bare_sum", |b| {
        b.iter(|| values.iter().fold(0i64, |acc, &v| acc + black_box(v) as i64));
    });

    group.finish();
}

// ============================================================================
// Elastic Arithmetic Benchmarks
// ============================================================================

fn benchmark_elastic_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("elastic_arithmetic");
    let format = ElasticFormat::FFT_DEFAULT;

    let a = ElasticNumber::<i64>::from_f64(0.707_106_78, format).unwrap();
    let b = ElasticNumber::<i64>::from_f64(-0.382_683_43, format).unwrap();

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(a) + black_box(b));
    });

    group.bench_function("multiply", |bench| {
        bench.iter(|| black_box(a) * black_box(b));
    });

    group.bench_function("divide", |bench| {
        let narrow = ElasticFormat::Q15_16;
        let x = ElasticNumber::<i64>::from_f64(3.25, narrow).unwrap();
        let y = ElasticNumber::<i64>::from_f64(1.5, narrow).unwrap();
        bench.iter(|| black_box(x).checked_div(black_box(y)));
    });

    group.bench_function("compare_across_formats", |bench| {
        let wide = ElasticNumber::<i64>::from_f64(0.707_106_78, ElasticFormat::Q31_32).unwrap();
        bench.iter(|| black_box(a) < black_box(wide));
    });

    group.finish();
}

// ============================================================================
// Elastic Conversion Benchmarks
// ============================================================================

fn benchmark_elastic_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("elastic_conversion");
    let format = ElasticFormat::FFT_DEFAULT;

    for fractional_digits in [0, 16, 32].iter() {
        let source = ElasticFormat::from_parts(28, *fractional_digits).unwrap();
        let value = ElasticNumber::<i64>::from_f64(1234.567, source).unwrap();

        group.bench_with_input(
            BenchmarkId::new("convert", fractional_digits),
            &value,
            |b, value| {
                b.iter(|| black_box(*value).convert(format));
            },
        );
    }

    let x = ElasticNumber::<i64>::from_f64(-1.25, format).unwrap();
    group.bench_function("to_decimal", |b| {
        b.iter(|| black_box(x).to_decimal());
    });
    group.bench_function("from_f64", |b| {
        b.iter(|| ElasticNumber::<i64>::from_f64(black_box(0.123_456), format));
    });

    group.finish();
}

// ============================================================================
// Fraction Benchmarks
// ============================================================================

fn benchmark_fraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("fraction");

    let a = make_fraction(355i32, 113i32);
    let b = make_fraction(-22i64, 7i32);

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(a) + black_box(b));
    });

    group.bench_function("compare", |bench| {
        bench.iter(|| black_box(a) < black_box(b));
    });

    for numerator in [1024i64, 1_048_576, 1_073_741_824].iter() {
        let f = make_fraction(*numerator, 360i64);
        group.bench_with_input(BenchmarkId::new("reduce", numerator), &f, |bench, f| {
            bench.iter(|| reduce(black_box(*f)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_integer,
    benchmark_elastic_arithmetic,
    benchmark_elastic_conversion,
    benchmark_fraction,
);
criterion_main!(benches);
