//! Benchmarks for arithmetic and printing

extern crate criterion;
extern crate oorandom;
extern crate segnum;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use segnum::{DigitWord, WordSequence};

mod common;
use common::*;

criterion_main!(
    arithmetic,
    printing,
);

criterion_group!(
    name = arithmetic;
    config = Criterion::default()
                       .sample_size(300);
    targets =
        bench_digit_word,
        bench_sequence_addition,
        bench_sequence_scale,
);

criterion_group!(
    name = printing;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(7));
    targets =
        bench_radix_printing,
);


const SEQUENCE_LENGTHS: [usize; 4] = [1, 4, 16, 64];


fn bench_digit_word(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(7);
    let operands = (0..256)
                    .map(|_| DigitWord::<u32, 10>::from_scalar(rng.rand_range(0..10_000)))
                    .collect::<Vec<_>>();

    let mut lhs = RandomIterator::new_with_seed(&operands, 31);
    let mut rhs = RandomIterator::new_with_seed(&operands, 73);

    c.bench_function("digit word add", |b| {
        b.iter(|| black_box(lhs.next() + rhs.next()))
    });

    c.bench_function("digit word long multiply", |b| {
        b.iter(|| black_box(lhs.next() * rhs.next()))
    });

    c.bench_function("digit word scalar multiply", |b| {
        b.iter(|| black_box(lhs.next() * 9u32))
    });
}

fn bench_sequence_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence addition");
    let mut rng = oorandom::Rand32::new(1);

    for len in SEQUENCE_LENGTHS {
        let x = random_decimal_sequence(&mut rng, len);
        let y = random_decimal_sequence(&mut rng, len);
        group.bench_with_input(BenchmarkId::new("decimal words", len), &len, |b, _| {
            b.iter(|| black_box(&x + &y))
        });

        let x = random_native_sequence(&mut rng, len);
        let y = random_native_sequence(&mut rng, len);
        group.bench_with_input(BenchmarkId::new("native words", len), &len, |b, _| {
            b.iter(|| black_box(&x + &y))
        });
    }

    group.finish();
}

fn bench_sequence_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence scale");
    let mut rng = oorandom::Rand32::new(2);
    let factor = Decimal::from_scalar(9_876);

    for len in SEQUENCE_LENGTHS {
        let x = random_decimal_sequence(&mut rng, len);
        group.bench_with_input(BenchmarkId::new("decimal words", len), &len, |b, _| {
            b.iter(|| black_box(&x * &factor))
        });
    }

    group.finish();
}

fn bench_radix_printing(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix printing");
    let mut rng = oorandom::Rand32::new(3);

    for len in SEQUENCE_LENGTHS {
        let decimal: WordSequence<Decimal> = random_decimal_sequence(&mut rng, len);
        group.bench_with_input(BenchmarkId::new("direct", len), &len, |b, _| {
            b.iter(|| black_box(decimal.to_radix_string::<10>()))
        });

        let native = random_native_sequence(&mut rng, len);
        group.bench_with_input(BenchmarkId::new("fallback", len), &len, |b, _| {
            b.iter(|| black_box(native.to_radix_string::<10>()))
        });
    }

    group.finish();
}
