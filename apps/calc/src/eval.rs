use std::cmp::Ordering;
use std::fmt;

use anyhow::{anyhow, Context};
use fwnum::{CastFrom, U128};

/// Binary operation applied by the `eval` command.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    Cmp,
}

/// How operands are read and results printed.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    pub base: u32,
    pub uppercase: bool,
}

impl Codec {
    pub fn read(&self, text: &str) -> anyhow::Result<U128> {
        U128::parse(text, self.base, self.uppercase)
            .with_context(|| format!("cannot read {text:?} in base {}", self.base))
    }

    pub fn write(&self, value: U128) -> String {
        value.to_string_radix(self.base, self.uppercase)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluated {
    Number(U128),
    Ordering(Ordering),
}

impl Evaluated {
    pub fn display(self, codec: Codec) -> impl fmt::Display {
        match self {
            Self::Number(value) => codec.write(value),
            Self::Ordering(Ordering::Less) => "<".to_owned(),
            Self::Ordering(Ordering::Equal) => "=".to_owned(),
            Self::Ordering(Ordering::Greater) => ">".to_owned(),
        }
    }
}

pub fn evaluate(op: Op, lhs: U128, rhs: U128) -> anyhow::Result<Evaluated> {
    tracing::debug!(?op, %lhs, %rhs, "evaluate");
    let division_by_zero = || anyhow!("division by zero");
    let value = match op {
        Op::Add => lhs + rhs,
        Op::Sub => lhs - rhs,
        Op::Mul => lhs * rhs,
        Op::Div => lhs.checked_div(rhs).ok_or_else(division_by_zero)?,
        Op::Rem => lhs.checked_rem(rhs).ok_or_else(division_by_zero)?,
        Op::And => lhs & rhs,
        Op::Or => lhs | rhs,
        Op::Xor => lhs ^ rhs,
        // Shift amounts are taken modulo 128
        Op::Shl => lhs << u32::cast_from(rhs % U128::from(U128::BITS)),
        Op::Shr => lhs >> u32::cast_from(rhs % U128::from(U128::BITS)),
        Op::Cmp => return Ok(Evaluated::Ordering(lhs.cmp(&rhs))),
    };
    Ok(Evaluated::Number(value))
}

/// `n!` modulo 2^128.
pub fn factorial(n: u32) -> U128 {
    (2..=u64::from(n)).fold(U128::ONE, |acc, i| acc * i)
}

/// Word by word breakdown of a value.
pub fn words(value: U128) -> String {
    format!(
        "lo = {:#018x}\nhi = {:#018x}\nbits = {}",
        value.lo(),
        value.hi(),
        U128::BITS - value.leading_zeros()
    )
}
