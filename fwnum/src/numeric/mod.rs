//! Traits describing the unsigned integer types, native and emulated, so generic code can be
//! written once for all of them.

mod unsigned;

pub(crate) use unsigned::split_bits_string;
pub use unsigned::UnsignedInteger;

/// A trait shared by all the numeric types.
pub trait Numeric: Sized + Copy + PartialEq + PartialOrd {
    /// The size of the type in bits.
    const BITS: usize;

    /// The value 0.
    const ZERO: Self;

    /// The value 1.
    const ONE: Self;

    /// The value 2.
    const TWO: Self;

    /// The largest value that can be encoded by the type.
    const MAX: Self;
}

/// A trait shared by all the unsigned numeric types.
pub trait UnsignedNumeric: Numeric {}

/// A trait that allows to generically cast one type from another.
///
/// This type is similar to the [`std::convert::From`] trait, but the conversion between the two
/// types is deferred to the `as` keyword semantics: it may truncate, wrap or round.
pub trait CastFrom<Input> {
    fn cast_from(input: Input) -> Self;
}

/// A trait that allows to generically cast one type into another.
///
/// This type is similar to the [`std::convert::Into`] trait, but the conversion between the two
/// types is deferred to the `as` keyword semantics.
pub trait CastInto<Output> {
    fn cast_into(self) -> Output;
}

impl<Input, Output> CastInto<Output> for Input
where
    Output: CastFrom<Input>,
{
    fn cast_into(self) -> Output {
        Output::cast_from(self)
    }
}

/// Compile time description of the value set of a numeric type.
///
/// Integer types have no infinity, NaN or epsilon; the corresponding functions return zero for
/// them.
pub trait NumericLimits: Numeric {
    /// The smallest value that can be encoded by the type.
    const MIN: Self;
    const IS_SIGNED: bool;
    const IS_INTEGER: bool;
    /// Every value of the type is represented exactly.
    const IS_EXACT: bool;
    const IS_BOUNDED: bool;
    /// Arithmetic results that leave the value range wrap around.
    const IS_MODULO: bool;
    const HAS_INFINITY: bool;
    const HAS_NAN: bool;
    /// Some arithmetic operation (integer division by zero) traps.
    const TRAPS: bool;
    const RADIX: u32;
    /// Number of radix digits represented without change.
    const DIGITS: u32;
    /// Number of decimal digits represented without change.
    const DIGITS10: u32;

    fn epsilon() -> Self;

    fn infinity() -> Self;

    fn nan() -> Self;
}

macro_rules! implement_native {
    ($Type: tt, $digits10: expr) => {
        impl Numeric for $Type {
            const BITS: usize = <$Type>::BITS as usize;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;
            const MAX: Self = <$Type>::MAX;
        }

        impl UnsignedNumeric for $Type {}

        impl NumericLimits for $Type {
            const MIN: Self = <$Type>::MIN;
            const IS_SIGNED: bool = false;
            const IS_INTEGER: bool = true;
            const IS_EXACT: bool = true;
            const IS_BOUNDED: bool = true;
            const IS_MODULO: bool = true;
            const HAS_INFINITY: bool = false;
            const HAS_NAN: bool = false;
            const TRAPS: bool = true;
            const RADIX: u32 = 2;
            const DIGITS: u32 = <$Type>::BITS;
            const DIGITS10: u32 = $digits10;

            fn epsilon() -> Self {
                0
            }

            fn infinity() -> Self {
                0
            }

            fn nan() -> Self {
                0
            }
        }

        impl CastFrom<f64> for $Type {
            #[inline]
            fn cast_from(input: f64) -> Self {
                input as $Type
            }
        }

        impl CastFrom<$Type> for f64 {
            #[inline]
            fn cast_from(input: $Type) -> Self {
                input as f64
            }
        }

        impl CastFrom<u128> for $Type {
            #[inline]
            fn cast_from(input: u128) -> Self {
                input as $Type
            }
        }
    };
}

implement_native!(u8, 2);
implement_native!(u16, 4);
implement_native!(u32, 9);
implement_native!(u64, 19);
implement_native!(usize, (usize::BITS * 3 / 10));
implement_native!(u128, 38);

macro_rules! implement_widen_to_u128 {
    ($($Type: tt),*) => {
        $(
            impl CastFrom<$Type> for u128 {
                #[inline]
                fn cast_from(input: $Type) -> Self {
                    input as u128
                }
            }
        )*
    };
}

implement_widen_to_u128!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn digits10_of<T: NumericLimits>() -> u32 {
        T::DIGITS10
    }

    #[test]
    fn test_digits10_matches_max() {
        // DIGITS10 is the largest n such that every n digit decimal fits
        assert_eq!(digits10_of::<u8>(), 2);
        assert_eq!(u64::MAX.to_string().len() as u32 - 1, digits10_of::<u64>());
        assert_eq!(u128::MAX.to_string().len() as u32 - 1, digits10_of::<u128>());
        assert_eq!(
            usize::MAX.to_string().len() as u32 - 1,
            digits10_of::<usize>()
        );
    }

    #[test]
    fn test_cast_into() {
        let x: u8 = 300u128.cast_into();
        assert_eq!(x, 44);
        let y: u128 = 7u16.cast_into();
        assert_eq!(y, 7);
        let z: f64 = u64::MAX.cast_into();
        assert_eq!(z, 18446744073709551616.0);
        let w: u32 = (-3.5f64).cast_into();
        assert_eq!(w, 0);
    }
}
