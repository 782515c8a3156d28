//! Fixed-width unsigned 128-bit integer arithmetic built from pairs of 64-bit words.
//!
//! [`U128`] behaves like the native `u128`: arithmetic wraps modulo 2^128, shifts are taken
//! modulo 128 and division by zero panics. Generic code can target it alongside the native
//! unsigned integers through [`UnsignedInteger`] or the [`num_traits`] traits.
//!
//! ```
//! use fwnum::U128;
//!
//! let a: U128 = "170141183460469231731687303715884105727".parse().unwrap();
//! assert_eq!(a + U128::ONE, U128::from_words(0, 1 << 63));
//! assert_eq!((a * 3u64).to_string(), "170141183460469231731687303715884105725");
//! ```

pub mod bigint;
pub mod error;
pub mod numeric;
pub mod primitives;

pub use bigint::U128;
pub use error::{ParseError, ParseErrorKind};
pub use numeric::{CastFrom, CastInto, Numeric, NumericLimits, UnsignedInteger, UnsignedNumeric};
