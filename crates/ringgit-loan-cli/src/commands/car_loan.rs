use clap::Args;
use serde_json::Value;

use ringgit_loan_core::{CarLoan, CurrencyFormat};

use super::quote::{gather_fields, run_quote};

/// Arguments for a flat-rate car loan quote
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CarLoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount (RM)
    #[arg(long)]
    pub amount: Option<String>,

    /// Flat interest rate (% p.a.); must be above zero
    #[arg(long)]
    pub rate: Option<String>,

    /// Loan period (years)
    #[arg(long, alias = "years")]
    pub period: Option<String>,
}

pub fn run_car_loan(args: CarLoanArgs, fmt: &CurrencyFormat) -> Result<Value, Box<dyn std::error::Error>> {
    let fields = gather_fields(args.input.as_deref(), args.amount, args.rate, args.period)?;
    run_quote::<CarLoan>(&fields, fmt)
}
