//! Home loans estimated with a fixed-rate EMI.

pub mod emi;

pub use emi::calculate_amortized_loan;

use crate::config::CurrencyFormat;
use crate::form::{self, LoanForm, LoanProduct};
use crate::format::{format_amount_input, unformat_amount_input};
use crate::types::{FormattedLoanResult, LoanInput, LoanKind, LoanResult};
use crate::validation::{FieldMessages, RateRule, ValidationErrors, ValidationRules};

/// Home loan product. Zero interest is accepted; the amount field is grouped
/// in thousands while typing.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeLoan;

impl LoanProduct for HomeLoan {
    const KIND: LoanKind = LoanKind::Home;
    const RULES: ValidationRules = ValidationRules {
        rate: RateRule::NonNegative,
        messages: FieldMessages {
            loan_amount: "Please enter a valid loan amount (RM)",
            interest_rate: "Please enter a valid interest rate (%)",
            loan_term: "Please enter a valid loan tenure (years)",
        },
    };
    const METHODOLOGY: &'static str = "Fixed-rate EMI: P * r * (1+r)^n / ((1+r)^n - 1)";

    fn calculate(input: &LoanInput) -> LoanResult {
        calculate_amortized_loan(input)
    }

    fn edit_amount(raw: &str, fmt: &CurrencyFormat) -> String {
        format_amount_input(raw, fmt)
    }

    fn amount_for_parsing(display: &str, fmt: &CurrencyFormat) -> String {
        unformat_amount_input(display, fmt)
    }

    fn warnings(input: &LoanInput) -> Vec<String> {
        let mut warnings = vec![
            "Simplified EMI estimate; Malaysian home loans normally use a reducing balance \
             on Base Rate plus margin, which can change over the tenure."
                .to_string(),
        ];
        if input.annual_rate_percent == 0.0 {
            warnings.push("Interest rate is zero; monthly repayment is the loan amount divided by the number of months.".to_string());
        }
        warnings
    }
}

/// Form session for the home loan tab.
pub type HomeLoanForm = LoanForm<HomeLoan>;

/// Validate the raw home loan fields. The amount may carry grouping commas.
pub fn validate_inputs(
    raw_amount: &str,
    raw_rate: &str,
    raw_tenure: &str,
) -> Result<LoanInput, ValidationErrors> {
    form::validate_inputs::<HomeLoan>(raw_amount, raw_rate, raw_tenure, &CurrencyFormat::default())
}

/// Validate, calculate and format a home loan with ringgit formatting.
pub fn validate_and_calculate(
    raw_amount: &str,
    raw_rate: &str,
    raw_tenure: &str,
) -> Result<FormattedLoanResult, ValidationErrors> {
    validate_and_calculate_with(&CurrencyFormat::default(), raw_amount, raw_rate, raw_tenure)
}

pub fn validate_and_calculate_with(
    fmt: &CurrencyFormat,
    raw_amount: &str,
    raw_rate: &str,
    raw_tenure: &str,
) -> Result<FormattedLoanResult, ValidationErrors> {
    form::validate_and_calculate::<HomeLoan>(raw_amount, raw_rate, raw_tenure, fmt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::LoanField;

    #[test]
    fn test_reference_example_formatted() {
        let r = validate_and_calculate("400,000", "4.5", "30").unwrap();
        assert_eq!(r.monthly_payment, "RM 2,026.74");
    }

    #[test]
    fn test_zero_rate_accepted() {
        let r = validate_and_calculate("120,000", "0", "10").unwrap();
        assert_eq!(r.monthly_payment, "RM 1,000.00");
        assert_eq!(r.total_interest, "RM 0.00");
        assert_eq!(r.total_repayment, "RM 120,000.00");
    }

    #[test]
    fn test_tiny_positive_rate_displays_like_zero_rate() {
        for rate in ["0.0000000001", "1e-17"] {
            let r = validate_and_calculate("120000", rate, "10").unwrap();
            assert_eq!(r.monthly_payment, "RM 1,000.00");
            assert_eq!(r.total_interest, "RM 0.00");
        }
    }

    #[test]
    fn test_very_long_tenure_displays_finite_figures() {
        let r = validate_and_calculate("400000", "4.5", "100000").unwrap();
        assert_eq!(r.monthly_payment, "RM 1,500.00");
        assert!(!r.total_repayment.contains("NaN"));
        assert!(!r.total_interest.contains("NaN"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let errors = validate_and_calculate("120000", "-1", "10").unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![LoanField::InterestRate]);
    }

    #[test]
    fn test_tenure_message() {
        let errors = validate_inputs("120000", "4", "").unwrap_err();
        assert_eq!(
            errors.get(LoanField::LoanTerm),
            Some("Please enter a valid loan tenure (years)")
        );
    }

    #[test]
    fn test_form_groups_amount_while_typing() {
        let mut form = HomeLoanForm::new();
        form.set_loan_amount("4000");
        assert_eq!(form.loan_amount(), "4,000");
        form.set_loan_amount("4,0000");
        assert_eq!(form.loan_amount(), "40,000");
        form.set_loan_amount("400000.75");
        // Non-digits are dropped, including the decimal point.
        assert_eq!(form.loan_amount(), "40,000,075");
    }

    #[test]
    fn test_warnings_mention_zero_rate() {
        let input = LoanInput::new(120_000.0, 0.0, 10.0);
        assert_eq!(HomeLoan::warnings(&input).len(), 2);
        let input = LoanInput::new(120_000.0, 4.0, 10.0);
        assert_eq!(HomeLoan::warnings(&input).len(), 1);
    }
}
