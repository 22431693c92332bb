use crate::types::{LoanInput, LoanResult};

/// Malaysian hire-purchase (flat-rate) car loan.
///
/// Interest is charged once on the full principal for the whole term:
///
/// - total interest = principal × (rate / 100) × years
/// - total repayment = principal + total interest
/// - monthly installment = total repayment / (years × 12)
///
/// `term_years` must be positive; callers validate before getting here.
pub fn calculate_flat_rate_loan(input: &LoanInput) -> LoanResult {
    let total_interest = input.principal * (input.annual_rate_percent / 100.0) * input.term_years;
    let total_repayment = input.principal + total_interest;
    let monthly_payment = total_repayment / input.term_months();

    LoanResult {
        total_interest,
        total_repayment,
        monthly_payment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_rate_reference_example() {
        // RM70,000 at 3.5% p.a. over 5 years
        let r = calculate_flat_rate_loan(&LoanInput::new(70_000.0, 3.5, 5.0));
        assert_relative_eq!(r.total_interest, 12_250.0, epsilon = 1e-9);
        assert_relative_eq!(r.total_repayment, 82_250.0, epsilon = 1e-9);
        assert_relative_eq!(r.monthly_payment, 1_370.833_333, epsilon = 1e-6);
    }

    #[test]
    fn test_repayment_is_principal_plus_interest() {
        let input = LoanInput::new(55_123.45, 2.88, 7.0);
        let r = calculate_flat_rate_loan(&input);
        assert_eq!(r.total_repayment, input.principal + r.total_interest);
    }

    #[test]
    fn test_installments_sum_to_repayment() {
        let input = LoanInput::new(98_000.0, 2.45, 9.0);
        let r = calculate_flat_rate_loan(&input);
        assert_relative_eq!(r.monthly_payment * 108.0, r.total_repayment, max_relative = 1e-12);
    }

    #[test]
    fn test_fractional_term() {
        // 2.5 years = 30 installments
        let r = calculate_flat_rate_loan(&LoanInput::new(30_000.0, 4.0, 2.5));
        assert_relative_eq!(r.total_interest, 3_000.0, epsilon = 1e-9);
        assert_relative_eq!(r.monthly_payment, 1_100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_is_principal_spread_evenly() {
        let r = calculate_flat_rate_loan(&LoanInput::new(60_000.0, 0.0, 5.0));
        assert_eq!(r.total_interest, 0.0);
        assert_eq!(r.monthly_payment, 1_000.0);
    }
}
