use clap::Args;
use serde_json::Value;

use ringgit_loan_core::{CurrencyFormat, HomeLoan};

use super::quote::{gather_fields, run_quote};

/// Arguments for a fixed-rate EMI home loan quote
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct HomeLoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount (RM); thousands separators are allowed, e.g. 400,000
    #[arg(long)]
    pub amount: Option<String>,

    /// Annual interest rate (% p.a.); zero is allowed
    #[arg(long)]
    pub rate: Option<String>,

    /// Loan tenure (years)
    #[arg(long, alias = "years")]
    pub tenure: Option<String>,
}

pub fn run_home_loan(args: HomeLoanArgs, fmt: &CurrencyFormat) -> Result<Value, Box<dyn std::error::Error>> {
    let fields = gather_fields(args.input.as_deref(), args.amount, args.rate, args.tenure)?;
    run_quote::<HomeLoan>(&fields, fmt)
}
