use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::LoanInput;
use crate::{LoanCalcError, LoanCalcResult};

/// The three inputs of a loan form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanField {
    LoanAmount,
    InterestRate,
    LoanTerm,
}

impl LoanField {
    pub const ALL: [LoanField; 3] = [Self::LoanAmount, Self::InterestRate, Self::LoanTerm];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoanAmount => "loan_amount",
            Self::InterestRate => "interest_rate",
            Self::LoanTerm => "loan_term",
        }
    }
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages. Empty means every field passed.
///
/// Iterates in form order (amount, rate, term) regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<LoanField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: LoanField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: LoanField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: LoanField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = LoanField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LoanField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Lower bound applied to the interest rate field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateRule {
    /// Rate must be strictly positive (car loans).
    Positive,
    /// Zero is accepted (home loans fall back to principal / months).
    NonNegative,
}

impl RateRule {
    fn accepts(self, rate: f64) -> bool {
        match self {
            Self::Positive => rate > 0.0,
            Self::NonNegative => rate >= 0.0,
        }
    }
}

/// Messages shown next to each field when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMessages {
    pub loan_amount: &'static str,
    pub interest_rate: &'static str,
    pub loan_term: &'static str,
}

/// Everything that differs between the car and home validation passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub rate: RateRule,
    pub messages: FieldMessages,
}

/// Parse a raw field. Leading and trailing whitespace is ignored; anything
/// else that is not a complete finite number is rejected.
pub fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validate the three raw fields independently and build a `LoanInput` only
/// if all of them pass.
pub fn validate_fields(
    raw_amount: &str,
    raw_rate: &str,
    raw_term: &str,
    rules: &ValidationRules,
) -> Result<LoanInput, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let amount = parse_field(raw_amount).filter(|v| *v > 0.0);
    if amount.is_none() {
        errors.insert(LoanField::LoanAmount, rules.messages.loan_amount);
    }

    let rate = parse_field(raw_rate).filter(|v| rules.rate.accepts(*v));
    if rate.is_none() {
        errors.insert(LoanField::InterestRate, rules.messages.interest_rate);
    }

    let term = parse_field(raw_term).filter(|v| *v > 0.0);
    if term.is_none() {
        errors.insert(LoanField::LoanTerm, rules.messages.loan_term);
    }

    match (amount, rate, term) {
        (Some(principal), Some(rate), Some(term)) => Ok(LoanInput::new(principal, rate, term)),
        _ => {
            let rejected: Vec<&str> = errors.fields().map(LoanField::as_str).collect();
            tracing::debug!(fields = %rejected.join(","), "loan input rejected");
            Err(errors)
        }
    }
}

/// Check an already-numeric `LoanInput` before it reaches a calculator.
///
/// For callers that bypass the text form (JSON bindings, typed API users).
/// Stops at the first offending field.
pub fn check_input(input: &LoanInput, rate: RateRule) -> LoanCalcResult<()> {
    if !input.principal.is_finite() || input.principal <= 0.0 {
        return Err(LoanCalcError::InvalidInput {
            field: LoanField::LoanAmount.to_string(),
            reason: "Loan amount must be a positive number.".into(),
        });
    }
    if !input.annual_rate_percent.is_finite() || !rate.accepts(input.annual_rate_percent) {
        let reason = match rate {
            RateRule::Positive => "Interest rate must be greater than zero.",
            RateRule::NonNegative => "Interest rate cannot be negative.",
        };
        return Err(LoanCalcError::InvalidInput {
            field: LoanField::InterestRate.to_string(),
            reason: reason.into(),
        });
    }
    if !input.term_years.is_finite() || input.term_years <= 0.0 {
        return Err(LoanCalcError::InvalidInput {
            field: LoanField::LoanTerm.to_string(),
            reason: "Loan term must be a positive number of years.".into(),
        });
    }
    Ok(())
}
