//! Input coordination shared by the car and home loan forms.
//!
//! A form holds the three raw text fields and the outcome of the last
//! `calculate` action. Parsing, validation and formatting all happen here so
//! the calculators only ever see well-formed numbers.

use std::marker::PhantomData;

use serde::Serialize;

use crate::config::CurrencyFormat;
use crate::format::format_result;
use crate::types::{FormattedLoanResult, LoanInput, LoanKind, LoanResult};
use crate::validation::{check_input, validate_fields, ValidationErrors, ValidationRules};
use crate::LoanCalcResult;

/// A loan product: its validation rules, its calculator, and how its amount
/// field behaves while being edited.
pub trait LoanProduct {
    const KIND: LoanKind;
    const RULES: ValidationRules;
    const METHODOLOGY: &'static str;

    fn calculate(input: &LoanInput) -> LoanResult;

    /// Text stored after the user edits the amount field.
    fn edit_amount(raw: &str, _fmt: &CurrencyFormat) -> String {
        raw.to_string()
    }

    /// Text handed to the number parser for the amount field.
    fn amount_for_parsing(display: &str, _fmt: &CurrencyFormat) -> String {
        display.to_string()
    }

    /// Caveats attached to a successful calculation.
    fn warnings(_input: &LoanInput) -> Vec<String> {
        Vec::new()
    }
}

/// Parse and validate raw form text for product `P`.
pub fn validate_inputs<P: LoanProduct>(
    raw_amount: &str,
    raw_rate: &str,
    raw_term: &str,
    fmt: &CurrencyFormat,
) -> Result<LoanInput, ValidationErrors> {
    let amount = P::amount_for_parsing(raw_amount, fmt);
    validate_fields(&amount, raw_rate, raw_term, &P::RULES)
}

/// Validate, calculate and format in one step. The calculator is not called
/// when any field fails.
pub fn validate_and_calculate<P: LoanProduct>(
    raw_amount: &str,
    raw_rate: &str,
    raw_term: &str,
    fmt: &CurrencyFormat,
) -> Result<FormattedLoanResult, ValidationErrors> {
    let input = validate_inputs::<P>(raw_amount, raw_rate, raw_term, fmt)?;
    let result = P::calculate(&input);

    tracing::debug!(
        kind = %P::KIND,
        principal = input.principal,
        rate = input.annual_rate_percent,
        years = input.term_years,
        monthly = result.monthly_payment,
        "loan calculated"
    );

    Ok(format_result(&result, fmt))
}

/// Run the calculator for an already-numeric input, rejecting values the
/// form would not have let through.
pub fn calculate_checked<P: LoanProduct>(input: &LoanInput) -> LoanCalcResult<LoanResult> {
    check_input(input, P::RULES.rate)?;
    Ok(P::calculate(input))
}

/// Parse a JSON `LoanInput` and run the checked calculator on it.
pub fn calculate_from_json<P: LoanProduct>(input_json: &str) -> LoanCalcResult<LoanResult> {
    let input: LoanInput = serde_json::from_str(input_json)?;
    calculate_checked::<P>(&input)
}

/// Validation outcome in the shape a UI consumes:
/// `{"status":"ok","result":{...}}` or `{"status":"invalid","errors":{field: message}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormOutcome {
    Ok { result: FormattedLoanResult },
    Invalid { errors: ValidationErrors },
}

impl From<Result<FormattedLoanResult, ValidationErrors>> for FormOutcome {
    fn from(outcome: Result<FormattedLoanResult, ValidationErrors>) -> Self {
        match outcome {
            Ok(result) => FormOutcome::Ok { result },
            Err(errors) => FormOutcome::Invalid { errors },
        }
    }
}

/// Validate and calculate raw form text, then serialize the outcome.
pub fn validate_to_json<P: LoanProduct>(
    raw_amount: &str,
    raw_rate: &str,
    raw_term: &str,
    fmt: &CurrencyFormat,
) -> LoanCalcResult<String> {
    let outcome: FormOutcome =
        validate_and_calculate::<P>(raw_amount, raw_rate, raw_term, fmt).into();
    Ok(serde_json::to_string(&outcome)?)
}

// ---------------------------------------------------------------------------
// Form session
// ---------------------------------------------------------------------------

/// Outcome of the most recent `calculate` action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// No result on display. `errors` is empty before the first calculation.
    Editing { errors: ValidationErrors },
    /// The last calculation passed validation.
    ResultShown(FormattedLoanResult),
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Editing {
            errors: ValidationErrors::new(),
        }
    }
}

/// One open loan form. Owns its raw inputs and last outcome exclusively.
#[derive(Debug, Clone)]
pub struct LoanForm<P: LoanProduct> {
    loan_amount: String,
    interest_rate: String,
    loan_term: String,
    state: FormState,
    format: CurrencyFormat,
    _product: PhantomData<P>,
}

impl<P: LoanProduct> Default for LoanForm<P> {
    fn default() -> Self {
        Self::with_format(CurrencyFormat::default())
    }
}

impl<P: LoanProduct> LoanForm<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: CurrencyFormat) -> Self {
        Self {
            loan_amount: String::new(),
            interest_rate: String::new(),
            loan_term: String::new(),
            state: FormState::default(),
            format,
            _product: PhantomData,
        }
    }

    pub fn set_loan_amount(&mut self, raw: &str) {
        self.loan_amount = P::edit_amount(raw, &self.format);
    }

    pub fn set_interest_rate(&mut self, raw: &str) {
        self.interest_rate = raw.to_string();
    }

    pub fn set_loan_term(&mut self, raw: &str) {
        self.loan_term = raw.to_string();
    }

    /// Amount text as displayed (grouped, for home loans).
    pub fn loan_amount(&self) -> &str {
        &self.loan_amount
    }

    pub fn interest_rate(&self) -> &str {
        &self.interest_rate
    }

    pub fn loan_term(&self) -> &str {
        &self.loan_term
    }

    /// Clear the shown result, then validate and calculate.
    pub fn calculate(&mut self) -> &FormState {
        self.state = FormState::default();

        self.state = match validate_and_calculate::<P>(
            &self.loan_amount,
            &self.interest_rate,
            &self.loan_term,
            &self.format,
        ) {
            Ok(result) => FormState::ResultShown(result),
            Err(errors) => FormState::Editing { errors },
        };

        &self.state
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn result(&self) -> Option<&FormattedLoanResult> {
        match &self.state {
            FormState::ResultShown(result) => Some(result),
            FormState::Editing { .. } => None,
        }
    }

    /// Field messages from the last failed calculation, if any.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match &self.state {
            FormState::Editing { errors } if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }
}
