use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fwnum::primitives::{widening_div, widening_div_portable};
use fwnum::U128;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Operand pairs per benchmark iteration.
const N_OPS: usize = 1_000;

fn operands(seed: u64) -> Vec<(U128, U128)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..N_OPS)
        .map(|_| {
            let a = U128::from(rng.gen::<u128>());
            // Divisors above 2^64 take the long division path
            let b = U128::from(rng.gen::<u128>() | (1 << 100));
            (a, b)
        })
        .collect()
}

fn arithmetic(c: &mut Criterion) {
    let pairs = operands(0);

    c.bench_function("u128_add", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(x + y);
            }
        })
    });
    c.bench_function("u128_mul", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(x * y);
            }
        })
    });
    c.bench_function("u128_div_long", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(x.div_rem(y));
            }
        })
    });
    c.bench_function("u128_div_word", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(x / (y.lo() | 1));
            }
        })
    });
}

fn widening_divide(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let inputs: Vec<(u64, u64, u64)> = (0..N_OPS)
        .map(|_| {
            let divisor = rng.gen_range(1..=u64::MAX);
            (rng.gen(), rng.gen_range(0..divisor), divisor)
        })
        .collect();

    c.bench_function("widening_div", |b| {
        b.iter(|| {
            for &(lo, hi, d) in &inputs {
                black_box(widening_div(lo, hi, d));
            }
        })
    });
    c.bench_function("widening_div_portable", |b| {
        b.iter(|| {
            for &(lo, hi, d) in &inputs {
                black_box(widening_div_portable(lo, hi, d));
            }
        })
    });
}

fn text(c: &mut Criterion) {
    let values: Vec<U128> = operands(2).into_iter().map(|(a, _)| a).collect();
    let strings: Vec<String> = values.iter().map(U128::to_string).collect();

    c.bench_function("u128_to_string", |b| {
        b.iter(|| {
            for v in &values {
                black_box(v.to_string());
            }
        })
    });
    c.bench_function("u128_parse", |b| {
        b.iter(|| {
            for s in &strings {
                let _ = black_box(s.parse::<U128>());
            }
        })
    });
}

criterion_group!(benches, arithmetic, widening_divide, text);
criterion_main!(benches);
