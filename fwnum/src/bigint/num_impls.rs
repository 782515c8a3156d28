//! [`num_traits`] integration so [`U128`] can be used by generic numeric code.

use num_traits::{
    Bounded, CheckedAdd, CheckedDiv, CheckedRem, CheckedSub, FromPrimitive, Num, One,
    ToPrimitive, Unsigned, WrappingAdd, WrappingMul, WrappingNeg, WrappingShl, WrappingShr,
    WrappingSub, Zero,
};

use super::U128;
use crate::error::ParseError;
use crate::numeric::CastFrom;

impl Zero for U128 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(*self)
    }
}

impl One for U128 {
    fn one() -> Self {
        Self::ONE
    }
}

impl Bounded for U128 {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl Num for U128 {
    type FromStrRadixErr = ParseError;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        Self::from_str_radix(s, radix)
    }
}

impl Unsigned for U128 {}

impl WrappingAdd for U128 {
    fn wrapping_add(&self, v: &Self) -> Self {
        Self::wrapping_add(*self, *v)
    }
}

impl WrappingSub for U128 {
    fn wrapping_sub(&self, v: &Self) -> Self {
        Self::wrapping_sub(*self, *v)
    }
}

impl WrappingMul for U128 {
    fn wrapping_mul(&self, v: &Self) -> Self {
        Self::wrapping_mul(*self, *v)
    }
}

impl WrappingNeg for U128 {
    fn wrapping_neg(&self) -> Self {
        Self::wrapping_neg(*self)
    }
}

impl WrappingShl for U128 {
    fn wrapping_shl(&self, rhs: u32) -> Self {
        Self::wrapping_shl(*self, rhs)
    }
}

impl WrappingShr for U128 {
    fn wrapping_shr(&self, rhs: u32) -> Self {
        Self::wrapping_shr(*self, rhs)
    }
}

impl CheckedAdd for U128 {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        match self.overflowing_add(*v) {
            (result, false) => Some(result),
            (_, true) => None,
        }
    }
}

impl CheckedSub for U128 {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        match self.overflowing_sub(*v) {
            (result, false) => Some(result),
            (_, true) => None,
        }
    }
}

impl CheckedDiv for U128 {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        Self::checked_div(*self, *v)
    }
}

impl CheckedRem for U128 {
    fn checked_rem(&self, v: &Self) -> Option<Self> {
        Self::checked_rem(*self, *v)
    }
}

impl ToPrimitive for U128 {
    fn to_i64(&self) -> Option<i64> {
        self.to_u64().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        (self.hi() == 0).then_some(self.lo())
    }

    fn to_i128(&self) -> Option<i128> {
        i128::try_from(u128::from(*self)).ok()
    }

    fn to_u128(&self) -> Option<u128> {
        Some(u128::from(*self))
    }

    fn to_f32(&self) -> Option<f32> {
        Some(f32::cast_from(*self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(f64::cast_from(*self))
    }
}

// 2^128
const F64_EXCLUSIVE_BOUND: f64 = 340282366920938463463374607431768211456.0;

impl FromPrimitive for U128 {
    fn from_i64(n: i64) -> Option<Self> {
        u64::try_from(n).ok().map(Self::from)
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        u128::try_from(n).ok().map(Self::from)
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from(n))
    }

    /// Truncates toward zero; `None` unless `-1 < n < 2^128`.
    fn from_f64(n: f64) -> Option<Self> {
        (n > -1.0 && n < F64_EXCLUSIVE_BOUND).then(|| Self::cast_from(n.max(0.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gcd<T: Num + Copy>(mut a: T, mut b: T) -> T {
        while !b.is_zero() {
            let r = a % b;
            a = b;
            b = r;
        }
        a
    }

    fn sum_wrapping<T: WrappingAdd + Zero>(values: &[T]) -> T {
        values.iter().fold(T::zero(), |acc, v| acc.wrapping_add(v))
    }

    #[test]
    fn test_generic_gcd() {
        let a = 2u128.pow(100) * 3 * 5 * 7;
        let b = 2u128.pow(90) * 7 * 11;
        let expected = gcd(a, b);
        assert_eq!(gcd(U128::from(a), U128::from(b)), U128::from(expected));
        assert_eq!(expected, 2u128.pow(90) * 7);
    }

    #[test]
    fn test_identities() {
        assert!(<U128 as Zero>::is_zero(&U128::zero()));
        assert!(!<U128 as Zero>::is_zero(&U128::one()));
        assert_eq!(<U128 as Bounded>::max_value(), U128::MAX);
        assert_eq!(<U128 as Bounded>::min_value(), U128::ZERO);
        assert_eq!(
            <U128 as Num>::from_str_radix("zz", 36).unwrap(),
            U128::from(1295u32)
        );
    }

    #[test]
    fn test_wrapping_and_checked() {
        assert_eq!(sum_wrapping(&[U128::MAX, U128::TWO]), U128::ONE);
        assert_eq!(CheckedAdd::checked_add(&U128::MAX, &U128::ONE), None);
        assert_eq!(CheckedSub::checked_sub(&U128::ZERO, &U128::ONE), None);
        assert_eq!(
            CheckedSub::checked_sub(&U128::TWO, &U128::ONE),
            Some(U128::ONE)
        );
        assert_eq!(CheckedDiv::checked_div(&U128::ONE, &U128::ZERO), None);
        assert_eq!(CheckedRem::checked_rem(&U128::ONE, &U128::ZERO), None);
        assert_eq!(WrappingNeg::wrapping_neg(&U128::ONE), U128::MAX);
        assert_eq!(WrappingShl::wrapping_shl(&U128::ONE, 129), U128::TWO);
        assert_eq!(WrappingShr::wrapping_shr(&U128::TWO, 1), U128::ONE);
    }

    #[test]
    fn test_to_primitive() {
        assert_eq!(U128::from_words(5, 0).to_u64(), Some(5));
        assert_eq!(U128::from_words(5, 1).to_u64(), None);
        assert_eq!(U128::from(u64::MAX).to_i64(), None);
        assert_eq!(U128::MAX.to_i128(), None);
        assert_eq!(U128::MAX.to_u128(), Some(u128::MAX));
        assert_eq!(U128::from_words(0, 1).to_f64(), Some(18446744073709551616.0));
    }

    #[test]
    fn test_from_primitive() {
        assert_eq!(U128::from_i64(-1), None);
        assert_eq!(U128::from_i64(7), Some(U128::from(7u32)));
        assert_eq!(U128::from_i128(-1), None);
        assert_eq!(U128::from_f64(-0.5), Some(U128::ZERO));
        assert_eq!(U128::from_f64(-1.0), None);
        assert_eq!(U128::from_f64(1e40), None);
        assert_eq!(U128::from_f64(f64::NAN), None);
        assert_eq!(U128::from_f64(1e35), Some(U128::from_words(0, 5421010862427522)));
    }
}
