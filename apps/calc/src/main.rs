//! Command line calculator over the fwnum 128-bit unsigned integer.
//!
//! Operands and results use the base selected with `--base` (or FWNUM_BASE). Arithmetic wraps
//! modulo 2^128, so `fwnum-calc eval 0 sub 1` prints the largest value.

mod eval;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use eval::{Codec, Op};

/// Define CLI arguments
#[derive(clap::Parser, Debug, Clone)]
#[clap(long_about = "Wrapping 128-bit unsigned integer calculator.")]
pub struct Args {
    /// Base of the operands and of the printed results, in [2, 36]
    #[clap(
        long,
        short,
        env = "FWNUM_BASE",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(2..=36)
    )]
    pub base: u32,

    /// Letter digits are uppercase, both when reading and when printing
    #[clap(long, short, env = "FWNUM_UPPERCASE")]
    pub uppercase: bool,

    /// Trace every step. RUST_LOG takes precedence when set
    #[clap(long, short)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Evaluate `LHS OP RHS`
    Eval {
        #[clap(allow_hyphen_values = true)]
        lhs: String,
        #[clap(value_enum)]
        op: Op,
        #[clap(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Factorial modulo 2^128
    Factorial { n: u32 },
    /// Print a value in another base
    Convert {
        value: String,
        /// Output base, in [2, 36]
        #[clap(long, value_parser = clap::value_parser!(u32).range(2..=36))]
        to: u32,
    },
    /// Show the two 64-bit words of a value
    Words { value: String },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "trace" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .compact()
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .init();
    tracing::debug!(?args, "parsed arguments");

    let codec = Codec {
        base: args.base,
        uppercase: args.uppercase,
    };

    match args.command {
        Command::Eval { lhs, op, rhs } => {
            let result = eval::evaluate(op, codec.read(&lhs)?, codec.read(&rhs)?)?;
            println!("{}", result.display(codec));
        }
        Command::Factorial { n } => {
            println!("{}", codec.write(eval::factorial(n)));
        }
        Command::Convert { value, to } => {
            let output = Codec {
                base: to,
                uppercase: args.uppercase,
            };
            println!("{}", output.write(codec.read(&value)?));
        }
        Command::Words { value } => {
            println!("{}", eval::words(codec.read(&value)?));
        }
    }

    Ok(())
}
