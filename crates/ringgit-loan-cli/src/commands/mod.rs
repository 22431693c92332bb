pub mod amount;
pub mod car_loan;
pub mod home_loan;
mod quote;
