use serde::{Deserialize, Serialize};

use super::algorithms;
use crate::numeric::{split_bits_string, Numeric, NumericLimits, UnsignedInteger, UnsignedNumeric};

/// Unsigned 128-bit integer stored as two 64-bit words.
///
/// Word 0 is the low word, word 1 the high word; the value is `lo + hi * 2^64`. Arithmetic wraps
/// modulo 2^128 like the native unsigned integers, shifts are taken modulo 128 and division by
/// zero panics.
///
/// Widening conversions from the primitive integers are provided through [`From`], narrowing
/// ones (and everything involving floats) through [`CastFrom`](crate::numeric::CastFrom).
// Little endian order
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct U128(pub(crate) [u64; 2]);

impl U128 {
    pub const BITS: u32 = 128;
    pub const MAX: Self = Self([u64::MAX; 2]);
    pub const MIN: Self = Self([0; 2]);
    pub const ZERO: Self = Self([0; 2]);
    pub const ONE: Self = Self([1, 0]);
    pub const TWO: Self = Self([2, 0]);

    #[inline]
    pub const fn from_words(lo: u64, hi: u64) -> Self {
        Self([lo, hi])
    }

    #[inline]
    pub const fn from_array(words: [u64; 2]) -> Self {
        Self(words)
    }

    #[inline]
    pub const fn lo(self) -> u64 {
        self.0[0]
    }

    #[inline]
    pub const fn hi(self) -> u64 {
        self.0[1]
    }

    /// The `[lo, hi]` words.
    #[inline]
    pub const fn words(&self) -> &[u64; 2] {
        &self.0
    }

    #[inline]
    pub fn words_mut(&mut self) -> &mut [u64; 2] {
        &mut self.0
    }

    /// Returns word `index` (0 is the low word).
    ///
    /// # Panics
    ///
    /// Panics if `index > 1`.
    #[inline]
    pub const fn get(self, index: usize) -> u64 {
        self.0[index]
    }

    /// Replaces word `index` (0 is the low word).
    ///
    /// # Panics
    ///
    /// Panics if `index > 1`.
    #[inline]
    pub fn set(&mut self, index: usize, word: u64) {
        self.0[index] = word;
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0[0] == 0 && self.0[1] == 0
    }

    /// Returns whether bit `index` is set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 128`.
    #[inline]
    pub fn bit(self, index: u32) -> bool {
        assert!(index < Self::BITS, "bit index {index} out of range");
        (self.0[(index / u64::BITS) as usize] >> (index % u64::BITS)) & 1 == 1
    }

    #[inline]
    pub fn leading_zeros(self) -> u32 {
        algorithms::leading_zeros_words(&self.0)
    }

    #[inline]
    pub fn trailing_zeros(self) -> u32 {
        algorithms::trailing_zeros_words(&self.0)
    }

    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.0[0].count_ones() + self.0[1].count_ones()
    }

    pub fn is_power_of_two(self) -> bool {
        self.count_ones() == 1
    }

    pub fn ilog2(self) -> u32 {
        // Rust has the same assert
        assert!(
            !self.is_zero(),
            "argument of integer logarithm must be positive"
        );
        Self::BITS - self.leading_zeros() - 1
    }

    pub fn ceil_ilog2(self) -> u32 {
        self.ilog2() + u32::from(!self.is_power_of_two())
    }

    /// Adds one in place, wrapping `MAX` to zero.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        algorithms::add_assign_word(&mut self.0, 1);
        self
    }

    /// Subtracts one in place, wrapping zero to `MAX`.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        algorithms::sub_assign_word(&mut self.0, 1);
        self
    }

    #[inline]
    #[must_use]
    pub fn wrapping_add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }

    #[inline]
    #[must_use]
    pub fn wrapping_sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }

    #[inline]
    #[must_use]
    pub fn wrapping_mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }

    /// Same as `self / rhs`: unsigned division never overflows.
    #[inline]
    #[must_use]
    pub fn wrapping_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline]
    #[must_use]
    pub fn wrapping_rem(self, rhs: Self) -> Self {
        self % rhs
    }

    /// Two's complement negation, `2^128 - self`.
    #[inline]
    #[must_use]
    pub fn wrapping_neg(mut self) -> Self {
        algorithms::neg_assign(&mut self.0);
        self
    }

    #[inline]
    #[must_use]
    pub fn wrapping_shl(mut self, rhs: u32) -> Self {
        algorithms::shl_assign(&mut self.0, rhs);
        self
    }

    #[inline]
    #[must_use]
    pub fn wrapping_shr(mut self, rhs: u32) -> Self {
        algorithms::shr_assign(&mut self.0, rhs);
        self
    }

    #[must_use]
    pub fn wrapping_pow(self, mut exp: u32) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exp >>= 1;
        }
        acc
    }

    #[inline]
    #[must_use]
    pub fn overflowing_add(mut self, rhs: Self) -> (Self, bool) {
        let overflow = algorithms::add_assign_words(&mut self.0, &rhs.0);
        (self, overflow)
    }

    #[inline]
    #[must_use]
    pub fn overflowing_sub(mut self, rhs: Self) -> (Self, bool) {
        let overflow = algorithms::sub_assign_words(&mut self.0, &rhs.0);
        (self, overflow)
    }

    /// Returns `(self / rhs, self % rhs)` from a single division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn div_rem(self, rhs: Self) -> (Self, Self) {
        let (q, r) = algorithms::div_rem(&self.0, &rhs.0);
        (Self(q), Self(r))
    }

    #[inline]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        (!rhs.is_zero()).then(|| self / rhs)
    }

    #[inline]
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        (!rhs.is_zero()).then(|| self % rhs)
    }

    pub const fn to_le_bytes(self) -> [u8; 16] {
        let lo = self.0[0].to_le_bytes();
        let hi = self.0[1].to_le_bytes();
        let mut bytes = [0u8; 16];
        let mut i = 0;
        while i < 8 {
            bytes[i] = lo[i];
            bytes[i + 8] = hi[i];
            i += 1;
        }
        bytes
    }

    pub const fn to_be_bytes(self) -> [u8; 16] {
        let le = self.to_le_bytes();
        let mut bytes = [0u8; 16];
        let mut i = 0;
        while i < 16 {
            bytes[i] = le[15 - i];
            i += 1;
        }
        bytes
    }

    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        let mut i = 0;
        while i < 8 {
            lo[i] = bytes[i];
            hi[i] = bytes[i + 8];
            i += 1;
        }
        Self([u64::from_le_bytes(lo), u64::from_le_bytes(hi)])
    }

    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        let mut le = [0u8; 16];
        let mut i = 0;
        while i < 16 {
            le[i] = bytes[15 - i];
            i += 1;
        }
        Self::from_le_bytes(le)
    }
}

#[cfg(test)]
impl rand::distributions::Distribution<U128> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> U128 {
        let mut s = U128::ZERO;
        rng.fill(s.0.as_mut_slice());
        s
    }
}

impl std::cmp::Ord for U128 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        algorithms::compare(&self.0, &other.0)
    }
}

impl std::cmp::PartialOrd for U128 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::ops::AddAssign<Self> for U128 {
    fn add_assign(&mut self, rhs: Self) {
        algorithms::add_assign_words(&mut self.0, &rhs.0);
    }
}

impl std::ops::AddAssign<u64> for U128 {
    fn add_assign(&mut self, rhs: u64) {
        algorithms::add_assign_word(&mut self.0, rhs);
    }
}

impl std::ops::SubAssign<Self> for U128 {
    fn sub_assign(&mut self, rhs: Self) {
        algorithms::sub_assign_words(&mut self.0, &rhs.0);
    }
}

impl std::ops::SubAssign<u64> for U128 {
    fn sub_assign(&mut self, rhs: u64) {
        algorithms::sub_assign_word(&mut self.0, rhs);
    }
}

impl std::ops::MulAssign<Self> for U128 {
    fn mul_assign(&mut self, rhs: Self) {
        algorithms::mul_assign_words(&mut self.0, &rhs.0);
    }
}

impl std::ops::MulAssign<u64> for U128 {
    fn mul_assign(&mut self, rhs: u64) {
        algorithms::mul_assign_word(&mut self.0, rhs);
    }
}

impl std::ops::DivAssign<Self> for U128 {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.div_rem(rhs).0;
    }
}

impl std::ops::DivAssign<u64> for U128 {
    fn div_assign(&mut self, rhs: u64) {
        self.0 = algorithms::div_rem_word(&self.0, rhs).0;
    }
}

impl std::ops::RemAssign<Self> for U128 {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.div_rem(rhs).1;
    }
}

impl std::ops::RemAssign<u64> for U128 {
    fn rem_assign(&mut self, rhs: u64) {
        self.0 = [algorithms::div_rem_word(&self.0, rhs).1, 0];
    }
}

// `a op b` for U128 on the left, forwarding to the compound assignment
macro_rules! forward_binop {
    ($Trait: ident, $method: ident, $AssignTrait: ident, $assign_method: ident, $Rhs: ty) => {
        impl std::ops::$Trait<$Rhs> for U128 {
            type Output = Self;

            fn $method(mut self, rhs: $Rhs) -> Self::Output {
                std::ops::$AssignTrait::$assign_method(&mut self, rhs);
                self
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, Self);
forward_binop!(Add, add, AddAssign, add_assign, u64);
forward_binop!(Sub, sub, SubAssign, sub_assign, Self);
forward_binop!(Sub, sub, SubAssign, sub_assign, u64);
forward_binop!(Mul, mul, MulAssign, mul_assign, Self);
forward_binop!(Mul, mul, MulAssign, mul_assign, u64);
forward_binop!(Div, div, DivAssign, div_assign, Self);
forward_binop!(Div, div, DivAssign, div_assign, u64);
forward_binop!(Rem, rem, RemAssign, rem_assign, Self);
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, Self);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign, Self);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, Self);
forward_binop!(Shl, shl, ShlAssign, shl_assign, u32);
forward_binop!(Shl, shl, ShlAssign, shl_assign, usize);
forward_binop!(Shr, shr, ShrAssign, shr_assign, u32);
forward_binop!(Shr, shr, ShrAssign, shr_assign, usize);

/// The remainder of a division by a single word fits in a word.
impl std::ops::Rem<u64> for U128 {
    type Output = u64;

    fn rem(self, rhs: u64) -> Self::Output {
        algorithms::div_rem_word(&self.0, rhs).1
    }
}

impl std::ops::Add<U128> for u64 {
    type Output = U128;

    fn add(self, rhs: U128) -> Self::Output {
        rhs + self
    }
}

impl std::ops::Sub<U128> for u64 {
    type Output = U128;

    fn sub(self, rhs: U128) -> Self::Output {
        U128::from(self) - rhs
    }
}

impl std::ops::Mul<U128> for u64 {
    type Output = U128;

    fn mul(self, rhs: U128) -> Self::Output {
        rhs * self
    }
}

/// A word divided by anything with a nonzero high word is zero.
impl std::ops::Div<U128> for u64 {
    type Output = u64;

    fn div(self, rhs: U128) -> Self::Output {
        if rhs.hi() != 0 {
            0
        } else {
            self / rhs.lo()
        }
    }
}

impl std::ops::Rem<U128> for u64 {
    type Output = u64;

    fn rem(self, rhs: U128) -> Self::Output {
        if rhs.hi() != 0 {
            self
        } else {
            self % rhs.lo()
        }
    }
}

impl std::ops::ShlAssign<u32> for U128 {
    fn shl_assign(&mut self, shift: u32) {
        algorithms::shl_assign(&mut self.0, shift);
    }
}

impl std::ops::ShrAssign<u32> for U128 {
    fn shr_assign(&mut self, shift: u32) {
        algorithms::shr_assign(&mut self.0, shift);
    }
}

impl std::ops::ShlAssign<usize> for U128 {
    fn shl_assign(&mut self, shift: usize) {
        algorithms::shl_assign(&mut self.0, (shift % Self::BITS as usize) as u32);
    }
}

impl std::ops::ShrAssign<usize> for U128 {
    fn shr_assign(&mut self, shift: usize) {
        algorithms::shr_assign(&mut self.0, (shift % Self::BITS as usize) as u32);
    }
}

impl std::ops::Not for U128 {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        algorithms::bitnot_assign(&mut self.0);
        self
    }
}

impl std::ops::Neg for U128 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl std::ops::BitAndAssign<Self> for U128 {
    fn bitand_assign(&mut self, rhs: Self) {
        algorithms::bitand_assign(&mut self.0, &rhs.0);
    }
}

impl std::ops::BitOrAssign<Self> for U128 {
    fn bitor_assign(&mut self, rhs: Self) {
        algorithms::bitor_assign(&mut self.0, &rhs.0);
    }
}

impl std::ops::BitXorAssign<Self> for U128 {
    fn bitxor_assign(&mut self, rhs: Self) {
        algorithms::bitxor_assign(&mut self.0, &rhs.0);
    }
}

impl std::iter::Sum for U128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl std::iter::Product for U128 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

// SAFETY
//
// U128 is allowed to be all zeros
unsafe impl bytemuck::Zeroable for U128 {}

// SAFETY
//
// u64 impl bytemuck::Pod,
// [T; N] impl bytemuck::Pod if T: bytemuck::Pod
//
// https://docs.rs/bytemuck/latest/bytemuck/trait.Pod.html#foreign-impls
//
// Thus U128 can safely be considered Pod
unsafe impl bytemuck::Pod for U128 {}

impl Numeric for U128 {
    const BITS: usize = Self::BITS as usize;

    const ZERO: Self = Self::ZERO;

    const ONE: Self = Self::ONE;

    const TWO: Self = Self::TWO;

    const MAX: Self = Self::MAX;
}

impl UnsignedNumeric for U128 {}

impl NumericLimits for U128 {
    const MIN: Self = Self::MIN;
    const IS_SIGNED: bool = false;
    const IS_INTEGER: bool = true;
    const IS_EXACT: bool = true;
    const IS_BOUNDED: bool = true;
    const IS_MODULO: bool = true;
    const HAS_INFINITY: bool = false;
    const HAS_NAN: bool = false;
    // div by 0
    const TRAPS: bool = true;
    const RADIX: u32 = 2;
    const DIGITS: u32 = Self::BITS;
    // floor(128 * log10(2))
    const DIGITS10: u32 = 38;

    fn epsilon() -> Self {
        Self::ZERO
    }

    fn infinity() -> Self {
        Self::ZERO
    }

    fn nan() -> Self {
        Self::ZERO
    }
}

impl UnsignedInteger for U128 {
    fn to_bits_string(&self, break_every: usize) -> String {
        split_bits_string(format!("{:0128b}", self), Self::BITS as usize, break_every)
    }
    #[inline]
    fn wrapping_add(self, other: Self) -> Self {
        self.wrapping_add(other)
    }
    #[inline]
    fn wrapping_sub(self, other: Self) -> Self {
        self.wrapping_sub(other)
    }
    #[inline]
    fn wrapping_div(self, other: Self) -> Self {
        self.wrapping_div(other)
    }
    #[inline]
    fn wrapping_mul(self, other: Self) -> Self {
        self.wrapping_mul(other)
    }
    #[inline]
    fn wrapping_rem(self, other: Self) -> Self {
        self.wrapping_rem(other)
    }
    #[inline]
    fn wrapping_neg(self) -> Self {
        self.wrapping_neg()
    }
    #[inline]
    fn wrapping_pow(self, exp: u32) -> Self {
        self.wrapping_pow(exp)
    }
    #[inline]
    fn wrapping_shl(self, rhs: u32) -> Self {
        self.wrapping_shl(rhs)
    }
    #[inline]
    fn wrapping_shr(self, rhs: u32) -> Self {
        self.wrapping_shr(rhs)
    }
    #[inline]
    fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        self.overflowing_add(rhs)
    }
    #[inline]
    fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        self.overflowing_sub(rhs)
    }
    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        self.checked_div(rhs)
    }
    #[inline]
    fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.checked_rem(rhs)
    }
    #[inline]
    fn leading_zeros(self) -> u32 {
        self.leading_zeros()
    }
    #[inline]
    fn trailing_zeros(self) -> u32 {
        self.trailing_zeros()
    }
    #[inline]
    fn count_ones(self) -> u32 {
        self.count_ones()
    }
    #[inline]
    fn is_power_of_two(self) -> bool {
        self.is_power_of_two()
    }
    #[inline]
    fn ilog2(self) -> u32 {
        self.ilog2()
    }
}
