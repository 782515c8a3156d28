//! Arithmetic on the little endian `[lo, hi]` word pair backing [`U128`](super::U128).
//!
//! All operations wrap modulo 2^128.

use std::cmp::Ordering;

use crate::primitives::{leading_zeros, widening_div, widening_mul};

pub(crate) type Words = [u64; 2];

const LO: usize = 0;
const HI: usize = 1;

#[inline]
pub(crate) fn compare(lhs: &Words, rhs: &Words) -> Ordering {
    lhs[HI].cmp(&rhs[HI]).then(lhs[LO].cmp(&rhs[LO]))
}

/// Returns true if the addition carried out of the high word.
#[inline]
pub(crate) fn add_assign_words(lhs: &mut Words, rhs: &Words) -> bool {
    let old_lo = lhs[LO];
    lhs[LO] = lhs[LO].wrapping_add(rhs[LO]);
    // The low word wrapped iff the sum is smaller than an operand
    let carry = u64::from(lhs[LO] < old_lo);
    let (hi, overflow_a) = lhs[HI].overflowing_add(rhs[HI]);
    let (hi, overflow_b) = hi.overflowing_add(carry);
    lhs[HI] = hi;
    overflow_a || overflow_b
}

/// Returns true if the subtraction borrowed past the high word.
#[inline]
pub(crate) fn sub_assign_words(lhs: &mut Words, rhs: &Words) -> bool {
    let old_lo = lhs[LO];
    lhs[LO] = lhs[LO].wrapping_sub(rhs[LO]);
    let borrow = u64::from(lhs[LO] > old_lo);
    let (hi, underflow_a) = lhs[HI].overflowing_sub(rhs[HI]);
    let (hi, underflow_b) = hi.overflowing_sub(borrow);
    lhs[HI] = hi;
    underflow_a || underflow_b
}

#[inline]
pub(crate) fn add_assign_word(lhs: &mut Words, rhs: u64) {
    let old_lo = lhs[LO];
    lhs[LO] = lhs[LO].wrapping_add(rhs);
    lhs[HI] = lhs[HI].wrapping_add(u64::from(lhs[LO] < old_lo));
}

#[inline]
pub(crate) fn sub_assign_word(lhs: &mut Words, rhs: u64) {
    let old_lo = lhs[LO];
    lhs[LO] = lhs[LO].wrapping_sub(rhs);
    lhs[HI] = lhs[HI].wrapping_sub(u64::from(lhs[LO] > old_lo));
}

/// Schoolbook multiplication keeping only the low 128 bits of the product.
///
/// `lo * rhs.hi` and `hi * rhs.lo` only contribute their low word, and `hi * rhs.hi` does not
/// contribute at all.
#[inline]
pub(crate) fn mul_assign_words(lhs: &mut Words, rhs: &Words) {
    let cross = lhs[LO]
        .wrapping_mul(rhs[HI])
        .wrapping_add(lhs[HI].wrapping_mul(rhs[LO]));
    let (lo, carry) = widening_mul(lhs[LO], rhs[LO]);
    lhs[LO] = lo;
    lhs[HI] = carry.wrapping_add(cross);
}

#[inline]
pub(crate) fn mul_assign_word(lhs: &mut Words, rhs: u64) {
    let (lo, carry) = widening_mul(lhs[LO], rhs);
    lhs[LO] = lo;
    lhs[HI] = lhs[HI].wrapping_mul(rhs).wrapping_add(carry);
}

/// Divides by a single word, returning the quotient and the remainder.
///
/// The high word is divided first; its remainder is below the divisor, so the second
/// 128-by-64 division always has a quotient that fits in a word.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[inline]
pub(crate) fn div_rem_word(dividend: &Words, divisor: u64) -> (Words, u64) {
    if divisor == 0 {
        panic!("attempt to divide by zero");
    }
    let quotient_hi = dividend[HI] / divisor;
    let remainder_hi = dividend[HI] % divisor;
    let (quotient_lo, remainder) = widening_div(dividend[LO], remainder_hi, divisor);
    ([quotient_lo, quotient_hi], remainder)
}

/// Binary long division by a divisor whose high word is nonzero.
///
/// The quotient is then below 2^64 and is returned as a single word.
pub(crate) fn div_rem_long(dividend: &Words, divisor: &Words) -> (u64, Words) {
    debug_assert!(divisor[HI] != 0);

    if compare(dividend, divisor) == Ordering::Less {
        return (0, *dividend);
    }

    // dividend >= divisor, so dividend[HI] >= divisor[HI] != 0 and the shift is in [0, 63]
    let shift = leading_zeros(divisor[HI]) - leading_zeros(dividend[HI]);

    let mut remainder = *dividend;
    let mut shifted_divisor = *divisor;
    shl_assign(&mut shifted_divisor, shift);

    let mut quotient = 0u64;
    for _ in 0..=shift {
        quotient <<= 1;
        if compare(&remainder, &shifted_divisor) != Ordering::Less {
            sub_assign_words(&mut remainder, &shifted_divisor);
            quotient |= 1;
        }
        shr_assign(&mut shifted_divisor, 1);
    }

    (quotient, remainder)
}

/// Returns `(quotient, remainder)`.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[inline]
pub(crate) fn div_rem(dividend: &Words, divisor: &Words) -> (Words, Words) {
    if divisor[HI] == 0 {
        let (quotient, remainder) = div_rem_word(dividend, divisor[LO]);
        (quotient, [remainder, 0])
    } else {
        let (quotient, remainder) = div_rem_long(dividend, divisor);
        ([quotient, 0], remainder)
    }
}

/// Shifts left by `shift` modulo 128.
#[inline]
pub(crate) fn shl_assign(words: &mut Words, shift: u32) {
    let shift = shift % 128;
    if shift >= u64::BITS {
        // Shifting a word by 64 or more overflows, so whole-word moves are handled apart
        words[HI] = words[LO] << (shift - u64::BITS);
        words[LO] = 0;
    } else if shift > 0 {
        words[HI] = (words[HI] << shift) | (words[LO] >> (u64::BITS - shift));
        words[LO] <<= shift;
    }
}

/// Shifts right by `shift` modulo 128.
#[inline]
pub(crate) fn shr_assign(words: &mut Words, shift: u32) {
    let shift = shift % 128;
    if shift >= u64::BITS {
        words[LO] = words[HI] >> (shift - u64::BITS);
        words[HI] = 0;
    } else if shift > 0 {
        words[LO] = (words[LO] >> shift) | (words[HI] << (u64::BITS - shift));
        words[HI] >>= shift;
    }
}

#[inline]
pub(crate) fn bitnot_assign(words: &mut Words) {
    words[LO] = !words[LO];
    words[HI] = !words[HI];
}

#[inline]
pub(crate) fn bitand_assign(lhs: &mut Words, rhs: &Words) {
    lhs[LO] &= rhs[LO];
    lhs[HI] &= rhs[HI];
}

#[inline]
pub(crate) fn bitor_assign(lhs: &mut Words, rhs: &Words) {
    lhs[LO] |= rhs[LO];
    lhs[HI] |= rhs[HI];
}

#[inline]
pub(crate) fn bitxor_assign(lhs: &mut Words, rhs: &Words) {
    lhs[LO] ^= rhs[LO];
    lhs[HI] ^= rhs[HI];
}

/// Two's complement negation: invert then add one.
#[inline]
pub(crate) fn neg_assign(words: &mut Words) {
    bitnot_assign(words);
    add_assign_word(words, 1);
}

#[inline]
pub(crate) fn leading_zeros_words(words: &Words) -> u32 {
    if words[HI] != 0 {
        words[HI].leading_zeros()
    } else {
        u64::BITS + words[LO].leading_zeros()
    }
}

#[inline]
pub(crate) fn trailing_zeros_words(words: &Words) -> u32 {
    if words[LO] != 0 {
        words[LO].trailing_zeros()
    } else {
        u64::BITS + words[HI].trailing_zeros()
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn to_u128(words: Words) -> u128 {
        words[LO] as u128 | ((words[HI] as u128) << 64)
    }

    fn from_u128(value: u128) -> Words {
        [value as u64, (value >> 64) as u64]
    }

    #[test]
    fn test_add_sub_carry_flags() {
        let mut a = [u64::MAX, u64::MAX];
        assert!(add_assign_words(&mut a, &[1, 0]));
        assert_eq!(a, [0, 0]);

        let mut a = [u64::MAX, 3];
        assert!(!add_assign_words(&mut a, &[1, 0]));
        assert_eq!(a, [0, 4]);

        let mut a = [0, 0];
        assert!(sub_assign_words(&mut a, &[1, 0]));
        assert_eq!(a, [u64::MAX, u64::MAX]);

        let mut a = [0, 1];
        assert!(!sub_assign_words(&mut a, &[1, 0]));
        assert_eq!(a, [u64::MAX, 0]);
    }

    #[test]
    fn test_single_word_ops() {
        let mut a = [1 << 63, 0];
        add_assign_word(&mut a, 1 << 63);
        assert_eq!(a, [0, 1]);
        sub_assign_word(&mut a, 1);
        assert_eq!(a, [u64::MAX, 0]);
        mul_assign_word(&mut a, u64::MAX);
        assert_eq!(a, [1, u64::MAX - 1]);
    }

    #[test]
    fn test_long_division_against_native() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = rng.gen::<u128>();
            // Force the divisor above 64 bits to stay on the long division path
            let b = rng.gen::<u128>() | (1u128 << rng.gen_range(64..128));
            let (q, r) = div_rem_long(&from_u128(a), &from_u128(b));
            assert_eq!(q as u128, a / b);
            assert_eq!(to_u128(r), a % b);
        }
    }

    #[test]
    fn test_long_division_single_iteration() {
        // Equal high words: a zero shift still runs one iteration
        let (q, r) = div_rem_long(&[10, 5], &[3, 5]);
        assert_eq!(q, 1);
        assert_eq!(r, [7, 0]);

        let (q, r) = div_rem_long(&[2, 5], &[3, 5]);
        assert_eq!(q, 0);
        assert_eq!(r, [2, 5]);
    }

    #[test]
    fn test_word_division_against_native() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = rng.gen::<u128>();
            let b = rng.gen_range(1..=u64::MAX);
            let (q, r) = div_rem_word(&from_u128(a), b);
            assert_eq!(to_u128(q), a / b as u128);
            assert_eq!(r as u128, a % b as u128);
        }
    }

    #[test]
    fn test_shifts_against_native() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = rng.gen::<u128>();
            for shift in 0..128 {
                let mut words = from_u128(a);
                shl_assign(&mut words, shift);
                assert_eq!(to_u128(words), a << shift);

                let mut words = from_u128(a);
                shr_assign(&mut words, shift);
                assert_eq!(to_u128(words), a >> shift);
            }
        }
    }

    #[test]
    fn test_zero_counts() {
        assert_eq!(leading_zeros_words(&[0, 0]), 128);
        assert_eq!(leading_zeros_words(&[1, 0]), 127);
        assert_eq!(leading_zeros_words(&[0, 1]), 63);
        assert_eq!(trailing_zeros_words(&[0, 0]), 128);
        assert_eq!(trailing_zeros_words(&[0, 1 << 3]), 67);
        assert_eq!(trailing_zeros_words(&[1 << 5, 1]), 5);
    }

    #[test]
    fn test_neg() {
        let mut a = [1, 0];
        neg_assign(&mut a);
        assert_eq!(a, [u64::MAX, u64::MAX]);

        let mut a = [0, 0];
        neg_assign(&mut a);
        assert_eq!(a, [0, 0]);
    }
}
