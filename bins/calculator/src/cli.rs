//! Command-line surface.

use std::cmp::Ordering;

use clap::{Parser, Subcommand};
use tally_core::prelude::*;

/// Exact decimal money calculator.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Operation to evaluate
    #[command(subcommand)]
    pub command: Command,
}

/// One money expression.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add the right amount to the left one
    Add(BinaryArgs),
    /// Subtract the right amount from the left one
    Sub(BinaryArgs),
    /// Compare two amounts; prints -1, 0 or 1
    Cmp(BinaryArgs),
    /// Multiply an amount by a whole number
    Mul {
        /// Amount as decimal text
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Currency of the amount
        currency: String,
        /// Whole-number factor
        #[arg(allow_hyphen_values = true)]
        factor: i64,
        /// Digits after the decimal point
        #[arg(short, long)]
        precision: Option<u32>,
    },
    /// Convert an amount into another currency
    Convert {
        /// Amount as decimal text
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Source currency
        from: String,
        /// Target currency
        to: String,
        /// Digits after the decimal point
        #[arg(short, long)]
        precision: Option<u32>,
    },
}

/// Operands of a binary expression.
#[derive(Debug, clap::Args)]
pub struct BinaryArgs {
    /// Left amount as decimal text
    #[arg(allow_hyphen_values = true)]
    pub left: String,
    /// Left currency (use "" for unknown)
    pub left_currency: String,
    /// Right amount as decimal text
    #[arg(allow_hyphen_values = true)]
    pub right: String,
    /// Right currency (use "" for unknown)
    pub right_currency: String,
    /// Digits after the decimal point for both operands
    #[arg(short, long)]
    pub precision: Option<u32>,
}

impl BinaryArgs {
    fn operands(&self, ctx: &MoneyContext) -> MoneyResult<(Money, Money)> {
        Ok((
            Money::create(ctx, self.left.as_str(), self.left_currency.as_str(), self.precision)?,
            Money::create(ctx, self.right.as_str(), self.right_currency.as_str(), self.precision)?,
        ))
    }
}

impl Command {
    /// Evaluates the expression against `ctx` and renders the result.
    pub fn run(&self, ctx: &MoneyContext) -> MoneyResult<String> {
        match self {
            Self::Add(args) => {
                let (left, right) = args.operands(ctx)?;
                Ok(left.add(&right)?.to_display_string())
            }
            Self::Sub(args) => {
                let (left, right) = args.operands(ctx)?;
                Ok(left.subtract(&right)?.to_display_string())
            }
            Self::Cmp(args) => {
                let (left, right) = args.operands(ctx)?;
                let sign = match left.compare(&right)? {
                    Ordering::Less => "-1",
                    Ordering::Equal => "0",
                    Ordering::Greater => "1",
                };
                Ok(sign.to_string())
            }
            Self::Mul {
                amount,
                currency,
                factor,
                precision,
            } => {
                let value = Money::create(ctx, amount.as_str(), currency.as_str(), *precision)?;
                Ok(value.multiply_by_integer(*factor)?.to_display_string())
            }
            Self::Convert {
                amount,
                from,
                to,
                precision,
            } => {
                let value = Money::create(ctx, amount.as_str(), from.as_str(), *precision)?;
                Ok(value.convert_to(to.as_str())?.to_display_string())
            }
        }
    }
}
