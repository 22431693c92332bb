use crate::types::{LoanInput, LoanResult};

/// Fixed-rate EMI (equated monthly installment) for a home loan.
///
/// With r = rate / 12 / 100 and n = years × 12:
///
/// ```text
/// EMI = P · r · (1 + r)^n / ((1 + r)^n − 1)
/// ```
///
/// evaluated as `P · r / (1 − (1 + r)^−n)` through `ln_1p`/`exp_m1`, which
/// stays accurate for tiny positive rates and tends to `P · r` instead of
/// overflowing when n is very large.
///
/// A zero rate falls back to P / n. Total repayment is EMI × n and total
/// interest is what remains after the principal. This is a planning estimate:
/// it does not model reducing-balance loans on Base Rate plus margin.
pub fn calculate_amortized_loan(input: &LoanInput) -> LoanResult {
    let monthly_rate = input.annual_rate_percent / 12.0 / 100.0;
    let months = input.term_months();

    // 1 − (1 + r)^−n
    let discount = -(-months * monthly_rate.ln_1p()).exp_m1();

    // discount underflows to zero only when r · n is below f64 resolution
    let monthly_payment = if monthly_rate == 0.0 || discount == 0.0 {
        input.principal / months
    } else {
        input.principal * monthly_rate / discount
    };

    let total_repayment = monthly_payment * months;
    let total_interest = total_repayment - input.principal;

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
    fn test_emi_thirty_year_reference() {
        // RM400,000 at 4.5% p.a. over 30 years
        let r = calculate_amortized_loan(&LoanInput::new(400_000.0, 4.5, 30.0));
        assert!((r.monthly_payment - 2_026.74).abs() < 0.01, "EMI was {}", r.monthly_payment);
        assert_relative_eq!(r.total_repayment, r.monthly_payment * 360.0);
        assert_relative_eq!(r.total_interest, r.total_repayment - 400_000.0);
    }

    #[test]
    fn test_zero_rate_divides_principal() {
        let r = calculate_amortized_loan(&LoanInput::new(120_000.0, 0.0, 10.0));
        assert_eq!(r.monthly_payment, 1_000.0);
        assert_eq!(r.total_repayment, 120_000.0);
        assert_eq!(r.total_interest, 0.0);
    }

    #[test]
    fn test_one_month_at_interest() {
        // n = 1: EMI = P · (1 + r)
        let r = calculate_amortized_loan(&LoanInput::new(12_000.0, 12.0, 1.0 / 12.0));
        assert_relative_eq!(r.monthly_payment, 12_120.0, max_relative = 1e-9);
    }

    #[test]
    fn test_emi_exceeds_interest_only_payment() {
        let input = LoanInput::new(500_000.0, 3.9, 35.0);
        let r = calculate_amortized_loan(&input);
        let interest_only = input.principal * 3.9 / 1200.0;
        assert!(r.monthly_payment > interest_only);
        assert!(r.total_interest > 0.0);
    }

    #[test]
    fn test_tiny_rate_matches_zero_rate_payment() {
        let flat = 120_000.0 / 120.0;
        for rate in [1e-10, 1e-17] {
            let r = calculate_amortized_loan(&LoanInput::new(120_000.0, rate, 10.0));
            assert!(r.monthly_payment.is_finite());
            assert!((r.monthly_payment - flat).abs() < 0.01, "EMI at {rate} was {}", r.monthly_payment);
            assert!(r.total_interest.abs() < 0.005, "interest at {rate} was {}", r.total_interest);
        }
    }

    #[test]
    fn test_very_long_tenure_tends_to_interest_only() {
        // (1 + r)^n overflows here; the payment converges to P · r
        let r = calculate_amortized_loan(&LoanInput::new(400_000.0, 4.5, 100_000.0));
        assert_relative_eq!(r.monthly_payment, 1_500.0, max_relative = 1e-12);
        assert!(r.total_repayment.is_finite());
        assert!(r.total_interest.is_finite());
    }

    #[test]
    fn test_emi_is_deterministic() {
        let input = LoanInput::new(650_000.0, 4.15, 25.0);
        let a = calculate_amortized_loan(&input);
        let b = calculate_amortized_loan(&input);
        assert_eq!(a.monthly_payment.to_bits(), b.monthly_payment.to_bits());
        assert_eq!(a.total_interest.to_bits(), b.total_interest.to_bits());
    }
}
