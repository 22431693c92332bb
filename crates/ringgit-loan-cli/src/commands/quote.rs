use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};

use ringgit_loan_core::form::{self, LoanProduct};
use ringgit_loan_core::format::format_result;
use ringgit_loan_core::{
    with_metadata, CurrencyFormat, FormattedLoanResult, LoanCalcError, LoanKind, LoanResult,
};

use crate::input;

/// The three form fields as raw text, exactly as a user would type them.
///
/// JSON numbers are accepted and turned into their text form.
#[derive(Debug, Default, Deserialize)]
pub struct RawLoanFields {
    #[serde(default, deserialize_with = "text_or_number")]
    pub loan_amount: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub interest_rate: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub loan_term: String,
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Where the raw fields come from: `--input` file, explicit flags, then
/// piped stdin. Flags that are not given count as empty fields.
pub fn gather_fields(
    input_path: Option<&str>,
    amount: Option<String>,
    rate: Option<String>,
    term: Option<String>,
) -> Result<RawLoanFields, Box<dyn std::error::Error>> {
    if let Some(path) = input_path {
        return input::file::read_json(path);
    }
    if amount.is_some() || rate.is_some() || term.is_some() {
        return Ok(RawLoanFields {
            loan_amount: amount.unwrap_or_default(),
            interest_rate: rate.unwrap_or_default(),
            loan_term: term.unwrap_or_default(),
        });
    }
    Ok(input::stdin::read_stdin()?.unwrap_or_default())
}

#[derive(Debug, Serialize)]
struct QuoteOutput {
    loan_type: LoanKind,
    #[serde(flatten)]
    formatted: FormattedLoanResult,
    figures: LoanResult,
}

/// Whole microseconds, saturating at `u64::MAX`.
fn elapsed_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

/// Validate, calculate and wrap one quote in the computation envelope.
pub fn run_quote<P: LoanProduct>(
    fields: &RawLoanFields,
    fmt: &CurrencyFormat,
) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();

    let loan_input = form::validate_inputs::<P>(
        &fields.loan_amount,
        &fields.interest_rate,
        &fields.loan_term,
        fmt,
    )
    .map_err(LoanCalcError::from)?;

    let figures = P::calculate(&loan_input);
    let output = QuoteOutput {
        loan_type: P::KIND,
        formatted: format_result(&figures, fmt),
        figures,
    };

    let elapsed = elapsed_micros(start.elapsed());
    tracing::debug!(kind = %P::KIND, elapsed_us = elapsed, "quote computed");

    let envelope = with_metadata(
        P::METHODOLOGY,
        &loan_input,
        P::warnings(&loan_input),
        elapsed,
        output,
    );
    Ok(serde_json::to_value(envelope)?)
}
