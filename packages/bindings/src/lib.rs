use napi::Result as NapiResult;
use napi_derive::napi;
use ringgit_loan_core::form::{self, LoanProduct};
use ringgit_loan_core::format::format_amount_input as group_amount_text;
use ringgit_loan_core::{CarLoan, CurrencyFormat, HomeLoan};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_format(format_json: Option<String>) -> NapiResult<CurrencyFormat> {
    match format_json {
        Some(json) => CurrencyFormat::from_json_str(&json).map_err(to_napi_error),
        None => Ok(CurrencyFormat::default()),
    }
}

fn calculate_json<P: LoanProduct>(input_json: &str) -> NapiResult<String> {
    let output = form::calculate_from_json::<P>(input_json).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

fn validate_json<P: LoanProduct>(
    loan_amount: &str,
    interest_rate: &str,
    loan_term: &str,
    format_json: Option<String>,
) -> NapiResult<String> {
    let fmt = parse_format(format_json)?;
    form::validate_to_json::<P>(loan_amount, interest_rate, loan_term, &fmt).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Calculators
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_flat_rate_loan(input_json: String) -> NapiResult<String> {
    calculate_json::<CarLoan>(&input_json)
}

#[napi]
pub fn calculate_amortized_loan(input_json: String) -> NapiResult<String> {
    calculate_json::<HomeLoan>(&input_json)
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[napi]
pub fn validate_car_loan(
    loan_amount: String,
    interest_rate: String,
    loan_period: String,
    format_json: Option<String>,
) -> NapiResult<String> {
    validate_json::<CarLoan>(&loan_amount, &interest_rate, &loan_period, format_json)
}

#[napi]
pub fn validate_home_loan(
    loan_amount: String,
    interest_rate: String,
    loan_tenure: String,
    format_json: Option<String>,
) -> NapiResult<String> {
    validate_json::<HomeLoan>(&loan_amount, &interest_rate, &loan_tenure, format_json)
}

#[napi]
pub fn format_amount_input(raw: String, format_json: Option<String>) -> NapiResult<String> {
    let fmt = parse_format(format_json)?;
    Ok(group_amount_text(&raw, &fmt))
}
