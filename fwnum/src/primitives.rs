//! Word-level building blocks the two-word arithmetic is written against.
//!
//! Everything target specific lives here: the 64x64 -> 128 multiply, the 128-by-64 divide, the
//! leading-zero count and the IEEE754 bit reinterpretation.

/// Multiplies `a` by `b` and returns the exact product as `(low, high)` words.
#[inline]
pub const fn widening_mul(a: u64, b: u64) -> (u64, u64) {
    let product = a as u128 * b as u128;
    (product as u64, (product >> u64::BITS) as u64)
}

/// Divides the 128-bit value `hi * 2^64 + lo` by `divisor`, returning `(quotient, remainder)`.
///
/// The quotient must fit in a single word, which is the case exactly when `hi < divisor`.
///
/// # Panics
///
/// Panics if `hi >= divisor` (this includes a zero divisor).
#[inline]
pub fn widening_div(lo: u64, hi: u64, divisor: u64) -> (u64, u64) {
    assert!(
        hi < divisor,
        "128-by-64 division quotient does not fit in 64 bits"
    );

    #[cfg(all(target_arch = "x86_64", not(feature = "software-div")))]
    {
        let quotient: u64;
        let remainder: u64;
        // SAFETY
        //
        // `div` reads rdx:rax and writes the quotient to rax and the remainder to rdx, both
        // declared below. It faults only for a zero divisor or a quotient wider than 64 bits,
        // and `hi < divisor` (checked above) excludes both.
        unsafe {
            core::arch::asm!(
                "div {divisor}",
                divisor = in(reg) divisor,
                inout("rax") lo => quotient,
                inout("rdx") hi => remainder,
                options(pure, nomem, nostack),
            );
        }
        (quotient, remainder)
    }

    #[cfg(not(all(target_arch = "x86_64", not(feature = "software-div"))))]
    {
        widening_div_portable(lo, hi, divisor)
    }
}

/// Restoring long division of `hi * 2^64 + lo` by a single word.
///
/// Same contract as [`widening_div`], without relying on a native divide instruction.
///
/// # Panics
///
/// Panics if `hi >= divisor`.
pub fn widening_div_portable(lo: u64, hi: u64, divisor: u64) -> (u64, u64) {
    assert!(
        hi < divisor,
        "128-by-64 division quotient does not fit in 64 bits"
    );

    // Invariant: remainder < divisor at the top of every iteration
    let mut remainder = hi;
    let mut quotient = 0u64;
    for bit in (0..u64::BITS).rev() {
        let overflow = remainder >> (u64::BITS - 1) != 0;
        remainder = (remainder << 1) | ((lo >> bit) & 1);
        quotient <<= 1;
        // With the bit shifted out the partial remainder is 2^64 + remainder > divisor, and the
        // wrapping subtraction yields the correct (sub 2^64) result.
        if overflow || remainder >= divisor {
            remainder = remainder.wrapping_sub(divisor);
            quotient |= 1;
        }
    }
    (quotient, remainder)
}

/// Number of leading zero bits of a nonzero word.
#[inline]
pub const fn leading_zeros(word: u64) -> u32 {
    debug_assert!(word != 0);
    word.leading_zeros()
}

#[inline]
pub fn f32_to_bits(value: f32) -> u32 {
    value.to_bits()
}

#[inline]
pub fn f64_to_bits(value: f64) -> u64 {
    value.to_bits()
}

#[inline]
pub fn f32_from_bits(bits: u32) -> f32 {
    f32::from_bits(bits)
}

#[inline]
pub fn f64_from_bits(bits: u64) -> f64 {
    f64::from_bits(bits)
}

/// Single precision `±2^exponent`.
///
/// Exact for `-126 <= exponent <= 127`; `-127` gives a signed zero and `128` an infinity.
///
/// # Panics
///
/// Panics if `exponent` is outside `[-127, 128]`.
pub fn pow2_f32(exponent: i32, negative: bool) -> f32 {
    assert!(
        (-127..=128).contains(&exponent),
        "exponent {exponent} has no single precision power of two"
    );
    let biased = (exponent + 127) as u32;
    f32_from_bits((u32::from(negative) << 31) | (biased << 23))
}

/// Double precision `±2^exponent`.
///
/// Exact for `-1022 <= exponent <= 1023`; `-1023` gives a signed zero and `1024` an infinity.
///
/// # Panics
///
/// Panics if `exponent` is outside `[-1023, 1024]`.
pub fn pow2_f64(exponent: i32, negative: bool) -> f64 {
    assert!(
        (-1023..=1024).contains(&exponent),
        "exponent {exponent} has no double precision power of two"
    );
    let biased = (exponent + 1023) as u64;
    f64_from_bits((u64::from(negative) << 63) | (biased << 52))
}

#[cfg(test)]
mod tests {
    use std::panic::catch_unwind;

    use rand::Rng;

    use super::*;

    #[test]
    fn test_widening_mul() {
        assert_eq!(widening_mul(0, u64::MAX), (0, 0));
        assert_eq!(widening_mul(u64::MAX, u64::MAX), (1, u64::MAX - 1));
        assert_eq!(widening_mul(1 << 63, 2), (0, 1));

        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = rng.gen::<u64>();
            let b = rng.gen::<u64>();
            let expected = a as u128 * b as u128;
            assert_eq!(widening_mul(a, b), (expected as u64, (expected >> 64) as u64));
        }
    }

    #[test]
    fn test_widening_div() {
        assert_eq!(widening_div(0, 0, 1), (0, 0));
        assert_eq!(widening_div(u64::MAX, u64::MAX - 1, u64::MAX), (u64::MAX, u64::MAX - 1));
        assert_eq!(widening_div(5, 1, 2), ((1 << 63) | 2, 1));

        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let divisor = rng.gen_range(1..=u64::MAX);
            let hi = rng.gen_range(0..divisor);
            let lo = rng.gen::<u64>();
            let dividend = ((hi as u128) << 64) | lo as u128;
            let expected = (
                (dividend / divisor as u128) as u64,
                (dividend % divisor as u128) as u64,
            );
            assert_eq!(widening_div(lo, hi, divisor), expected);
            assert_eq!(widening_div_portable(lo, hi, divisor), expected);
        }
    }

    #[test]
    fn test_widening_div_small_divisors() {
        for divisor in 1..=64u64 {
            let hi = divisor - 1;
            let dividend = ((hi as u128) << 64) | 0xDEAD_BEEF_u128;
            let expected = (
                (dividend / divisor as u128) as u64,
                (dividend % divisor as u128) as u64,
            );
            assert_eq!(widening_div_portable(0xDEAD_BEEF, hi, divisor), expected);
        }
    }

    #[test]
    fn test_widening_div_quotient_overflow() {
        assert!(catch_unwind(|| widening_div(0, 1, 1)).is_err());
        assert!(catch_unwind(|| widening_div(7, 0, 0)).is_err());
        assert!(catch_unwind(|| widening_div_portable(0, 5, 5)).is_err());
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(leading_zeros(1), 63);
        assert_eq!(leading_zeros(u64::MAX), 0);
        assert_eq!(leading_zeros(1 << 40), 23);
    }

    #[test]
    fn test_float_bits() {
        assert_eq!(f32_to_bits(1.0), 0x3F80_0000);
        assert_eq!(f64_to_bits(-2.0), 0xC000_0000_0000_0000);
        assert_eq!(f32_from_bits(0x4049_0FDB), std::f32::consts::PI);
        assert_eq!(f64_from_bits(f64_to_bits(1e300)), 1e300);
    }

    #[test]
    fn test_float_bits_at_runtime() {
        let to_bits: fn(f64) -> u64 = f64_to_bits;
        let from_bits: fn(u64) -> f64 = f64_from_bits;
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let value = rng.gen::<f64>() * 1e18;
            assert_eq!(from_bits(to_bits(value)), value);
            let single = value as f32;
            assert_eq!(f32_from_bits(f32_to_bits(single)), single);
        }
    }

    #[test]
    fn test_pow2() {
        assert_eq!(pow2_f32(0, false), 1.0);
        assert_eq!(pow2_f32(64, false), 18446744073709551616.0);
        assert_eq!(pow2_f32(3, true), -8.0);
        assert_eq!(pow2_f32(128, false), f32::INFINITY);
        assert_eq!(pow2_f64(-1, false), 0.5);
        assert_eq!(pow2_f64(64, true), -18446744073709551616.0);
        assert_eq!(pow2_f64(1024, false), f64::INFINITY);
        assert!(catch_unwind(|| pow2_f32(129, false)).is_err());
    }
}
