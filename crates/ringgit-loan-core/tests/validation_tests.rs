use rstest::rstest;
use ringgit_loan_core::{car_loan, home_loan, LoanField};

// ===========================================================================
// Rules shared by both forms
// ===========================================================================

#[rstest]
#[case("")]
#[case("   ")]
#[case("abc")]
#[case("0")]
#[case("-5000")]
#[case("NaN")]
#[case("inf")]
fn test_bad_amount_rejected_by_both(#[case] amount: &str) {
    let car = car_loan::validate_inputs(amount, "3.5", "5").unwrap_err();
    assert_eq!(car.fields().collect::<Vec<_>>(), vec![LoanField::LoanAmount]);

    let home = home_loan::validate_inputs(amount, "3.5", "5").unwrap_err();
    assert_eq!(home.fields().collect::<Vec<_>>(), vec![LoanField::LoanAmount]);
}

#[rstest]
#[case("")]
#[case("x")]
#[case("0")]
#[case("-1")]
#[case("0.0")]
fn test_bad_term_rejected_by_both(#[case] term: &str) {
    let car = car_loan::validate_inputs("70000", "3.5", term).unwrap_err();
    assert_eq!(car.fields().collect::<Vec<_>>(), vec![LoanField::LoanTerm]);

    let home = home_loan::validate_inputs("70000", "3.5", term).unwrap_err();
    assert_eq!(home.fields().collect::<Vec<_>>(), vec![LoanField::LoanTerm]);
}

#[rstest]
#[case("", true)]
#[case("rate", true)]
#[case("-0.5", true)]
#[case("0", false)]
#[case("0.00", false)]
fn test_rate_zero_boundary_differs(#[case] rate: &str, #[case] home_rejects: bool) {
    assert!(car_loan::validate_inputs("70000", rate, "5").is_err());
    assert_eq!(home_loan::validate_inputs("70000", rate, "5").is_err(), home_rejects);
}

#[test]
fn test_all_fields_checked_without_short_circuit() {
    let errors = car_loan::validate_and_calculate("", "", "").unwrap_err();
    assert_eq!(errors.len(), 3);
    for field in LoanField::ALL {
        assert!(errors.contains(field), "missing {field}");
    }
}

#[rstest]
#[case("70000", "3.5", "5")]
#[case(" 1e5 ", "2", "0.5")]
#[case("0.01", "99", "100")]
fn test_valid_inputs_accepted_by_both(#[case] amount: &str, #[case] rate: &str, #[case] term: &str) {
    assert!(car_loan::validate_and_calculate(amount, rate, term).is_ok());
    assert!(home_loan::validate_and_calculate(amount, rate, term).is_ok());
}
