use clap::Args;
use serde_json::{json, Value};

use ringgit_loan_core::format::{format_amount_input, unformat_amount_input};
use ringgit_loan_core::CurrencyFormat;

/// Arguments for home loan amount field formatting
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FormatAmountArgs {
    /// Raw text as typed into the amount field
    pub text: String,
}

/// Show what the home loan amount field displays for `text`, and the digits
/// that would be parsed from it.
pub fn run_format_amount(args: FormatAmountArgs, fmt: &CurrencyFormat) -> Result<Value, Box<dyn std::error::Error>> {
    let display = format_amount_input(&args.text, fmt);
    let digits = unformat_amount_input(&display, fmt);
    Ok(json!({
        "result": {
            "display": display,
            "digits": digits,
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_command() {
        let args = FormatAmountArgs { text: "RM400000".into() };
        let value = run_format_amount(args, &CurrencyFormat::default()).unwrap();
        assert_eq!(value["result"]["display"], "400,000");
        assert_eq!(value["result"]["digits"], "400000");
    }
}
