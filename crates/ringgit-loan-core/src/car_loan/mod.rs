//! Hire-purchase car loans with flat-rate interest.

pub mod flat_rate;

pub use flat_rate::calculate_flat_rate_loan;

use crate::config::CurrencyFormat;
use crate::form::{self, LoanForm, LoanProduct};
use crate::types::{FormattedLoanResult, LoanInput, LoanKind, LoanResult};
use crate::validation::{FieldMessages, RateRule, ValidationErrors, ValidationRules};

/// Car loan product. A zero interest rate is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarLoan;

impl LoanProduct for CarLoan {
    const KIND: LoanKind = LoanKind::Car;
    const RULES: ValidationRules = ValidationRules {
        rate: RateRule::Positive,
        messages: FieldMessages {
            loan_amount: "Please enter a valid loan amount (RM)",
            interest_rate: "Please enter a valid interest rate (%)",
            loan_term: "Please enter a valid loan period (years)",
        },
    };
    const METHODOLOGY: &'static str = "Flat-rate hire purchase: interest = principal x rate x years";

    fn calculate(input: &LoanInput) -> LoanResult {
        calculate_flat_rate_loan(input)
    }
}

/// Form session for the car loan tab.
pub type CarLoanForm = LoanForm<CarLoan>;

/// Validate the raw car loan fields.
pub fn validate_inputs(
    raw_amount: &str,
    raw_rate: &str,
    raw_period: &str,
) -> Result<LoanInput, ValidationErrors> {
    form::validate_inputs::<CarLoan>(raw_amount, raw_rate, raw_period, &CurrencyFormat::default())
}

/// Validate, calculate and format a car loan with ringgit formatting.
pub fn validate_and_calculate(
    raw_amount: &str,
    raw_rate: &str,
    raw_period: &str,
) -> Result<FormattedLoanResult, ValidationErrors> {
    validate_and_calculate_with(&CurrencyFormat::default(), raw_amount, raw_rate, raw_period)
}

pub fn validate_and_calculate_with(
    fmt: &CurrencyFormat,
    raw_amount: &str,
    raw_rate: &str,
    raw_period: &str,
) -> Result<FormattedLoanResult, ValidationErrors> {
    form::validate_and_calculate::<CarLoan>(raw_amount, raw_rate, raw_period, fmt)
}
