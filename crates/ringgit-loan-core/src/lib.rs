pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod types;
pub mod validation;

#[cfg(feature = "car_loan")]
pub mod car_loan;

#[cfg(feature = "home_loan")]
pub mod home_loan;

pub use config::CurrencyFormat;
pub use error::LoanCalcError;
pub use form::{FormOutcome, FormState, LoanForm, LoanProduct};
pub use types::*;
pub use validation::{LoanField, ValidationErrors};

#[cfg(feature = "car_loan")]
pub use car_loan::{calculate_flat_rate_loan, CarLoan, CarLoanForm};

#[cfg(feature = "home_loan")]
pub use home_loan::{calculate_amortized_loan, HomeLoan, HomeLoanForm};

/// Standard result type for all ringgit-loan operations
pub type LoanCalcResult<T> = Result<T, LoanCalcError>;
