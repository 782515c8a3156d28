use super::U128;
use crate::numeric::CastFrom;
use crate::primitives::{f32_to_bits, f64_to_bits, pow2_f32, pow2_f64};

impl U128 {
    /// Builds a value from four 32-bit words, least significant first.
    pub const fn from_u32_words(words: [u32; 4]) -> Self {
        Self([
            words[0] as u64 | (words[1] as u64) << 32,
            words[2] as u64 | (words[3] as u64) << 32,
        ])
    }

    /// Builds a value from eight 16-bit words, least significant first.
    pub const fn from_u16_words(words: [u16; 8]) -> Self {
        let mut result = [0u64; 2];
        let mut i = 0;
        while i < 8 {
            result[i / 4] |= (words[i] as u64) << (16 * (i % 4));
            i += 1;
        }
        Self(result)
    }

    /// Builds a value from sixteen bytes, least significant first.
    pub const fn from_u8_words(bytes: [u8; 16]) -> Self {
        Self::from_le_bytes(bytes)
    }

    /// Builds a value from its 128 bits, least significant first.
    pub fn from_bits(bits: [bool; 128]) -> Self {
        let mut result = Self::ZERO;
        for (i, bit) in bits.into_iter().enumerate() {
            result.0[i / 64] |= u64::from(bit) << (i % 64);
        }
        result
    }

    /// Explicit truth value: true if nonzero.
    #[inline]
    pub const fn to_bool(self) -> bool {
        !self.is_zero()
    }
}

macro_rules! impl_from_unsigned {
    ($($Type: ty),*) => {
        $(
            impl From<$Type> for U128 {
                #[inline]
                fn from(value: $Type) -> Self {
                    Self([value as u64, 0])
                }
            }
        )*
    };
}

impl_from_unsigned!(bool, u8, u16, u32, u64, usize);

// The high word replicates the sign bit of the 64-bit pattern
macro_rules! impl_from_signed {
    ($($Type: ty),*) => {
        $(
            impl From<$Type> for U128 {
                #[inline]
                fn from(value: $Type) -> Self {
                    let value = value as i64;
                    Self([value as u64, (value >> 63) as u64])
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);

impl From<u128> for U128 {
    #[inline]
    fn from(value: u128) -> Self {
        Self([value as u64, (value >> 64) as u64])
    }
}

impl From<U128> for u128 {
    #[inline]
    fn from(value: U128) -> Self {
        value.0[0] as u128 | (value.0[1] as u128) << 64
    }
}

/// `(lo, hi)`
impl From<(u64, u64)> for U128 {
    #[inline]
    fn from((lo, hi): (u64, u64)) -> Self {
        Self([lo, hi])
    }
}

impl CastFrom<u128> for U128 {
    #[inline]
    fn cast_from(input: u128) -> Self {
        Self::from(input)
    }
}

impl CastFrom<U128> for u128 {
    #[inline]
    fn cast_from(input: U128) -> Self {
        Self::from(input)
    }
}

impl CastFrom<U128> for bool {
    #[inline]
    fn cast_from(input: U128) -> Self {
        input.to_bool()
    }
}

// Narrowing keeps the low bits of the low word
macro_rules! impl_cast_to_primitive {
    ($($Type: ty),*) => {
        $(
            impl CastFrom<U128> for $Type {
                #[inline]
                fn cast_from(input: U128) -> Self {
                    input.0[0] as $Type
                }
            }
        )*
    };
}

impl_cast_to_primitive!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Rebuilds an integer from the IEEE754 fields of a float.
///
/// The implicit leading one is put back on the mantissa, which is then shifted by the distance
/// between the unbiased exponent and the mantissa width. Bits shifted past 2^128 are dropped, a
/// right shift larger than the mantissa width yields zero and negative inputs are negated modulo
/// 2^128. Infinities and NaNs give zero.
fn from_ieee754_parts(
    negative: bool,
    biased_exponent: i32,
    mantissa: u64,
    exponent_bias: i32,
    mantissa_width: u32,
    max_biased_exponent: i32,
) -> U128 {
    if biased_exponent == max_biased_exponent {
        return U128::ZERO;
    }

    let mut magnitude = U128::from((1u64 << mantissa_width) | mantissa);
    let shift = biased_exponent - exponent_bias - mantissa_width as i32;
    if shift > 0 {
        if shift >= U128::BITS as i32 {
            return U128::ZERO;
        }
        magnitude <<= shift as u32;
    } else if shift < 0 {
        if shift.unsigned_abs() > mantissa_width {
            return U128::ZERO;
        }
        magnitude >>= shift.unsigned_abs();
    }

    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

impl CastFrom<f32> for U128 {
    fn cast_from(input: f32) -> Self {
        let bits = f32_to_bits(input);
        from_ieee754_parts(
            bits >> 31 == 1,
            ((bits >> 23) & 0xFF) as i32,
            u64::from(bits & ((1 << 23) - 1)),
            127,
            23,
            0xFF,
        )
    }
}

impl CastFrom<f64> for U128 {
    fn cast_from(input: f64) -> Self {
        let bits = f64_to_bits(input);
        from_ieee754_parts(
            bits >> 63 == 1,
            ((bits >> 52) & 0x7FF) as i32,
            bits & ((1 << 52) - 1),
            1023,
            52,
            0x7FF,
        )
    }
}

impl CastFrom<U128> for f32 {
    fn cast_from(input: U128) -> Self {
        input.hi() as f32 * pow2_f32(64, false) + input.lo() as f32
    }
}

impl CastFrom<U128> for f64 {
    fn cast_from(input: U128) -> Self {
        input.hi() as f64 * pow2_f64(64, false) + input.lo() as f64
    }
}
