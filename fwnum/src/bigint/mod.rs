pub(crate) mod algorithms;
mod conversion;
mod num_impls;
mod text;
mod uint128;

pub use uint128::U128;
