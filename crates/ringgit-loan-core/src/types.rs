use serde::{Deserialize, Serialize};

/// Monetary amounts in ringgit.
pub type Money = f64;

/// Annual rates quoted in percent (3.5 = 3.5% p.a.), as entered on the form.
pub type RatePercent = f64;

/// Loan term in years. Fractional years are allowed.
pub type Years = f64;

/// Parsed and validated loan parameters for a single calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    pub annual_rate_percent: RatePercent,
    pub term_years: Years,
}

impl LoanInput {
    pub fn new(principal: Money, annual_rate_percent: RatePercent, term_years: Years) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    /// Term converted to months, without rounding to whole months.
    pub fn term_months(&self) -> f64 {
        self.term_years * 12.0
    }
}

/// Raw repayment figures. Never rounded; rounding is a display concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub total_interest: Money,
    pub total_repayment: Money,
    pub monthly_payment: Money,
}

/// Repayment figures rendered as currency strings, e.g. `RM 1,370.83`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedLoanResult {
    pub total_interest: String,
    pub total_repayment: String,
    pub monthly_payment: String,
}

/// Which loan product a calculation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanKind {
    /// Hire-purchase car loan with flat-rate interest.
    Car,
    /// Housing loan estimated with a fixed-rate EMI.
    Home,
}

impl std::fmt::Display for LoanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Car => write!(f, "car"),
            Self::Home => write!(f, "home"),
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "f64, display rounded to 2dp".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_months_keeps_fractional_years() {
        let input = LoanInput::new(10_000.0, 3.0, 2.5);
        assert_eq!(input.term_months(), 30.0);
    }

    #[test]
    fn test_envelope_carries_assumptions_and_version() {
        let input = LoanInput::new(70_000.0, 3.5, 5.0);
        let out = with_metadata("Flat rate", &input, vec![], 12, "ok");
        assert_eq!(out.assumptions["principal"], 70_000.0);
        assert_eq!(out.metadata.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(out.metadata.computation_time_us, 12);
    }

    #[test]
    fn test_loan_kind_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&LoanKind::Home).unwrap(), "\"home\"");
        assert_eq!(LoanKind::Car.to_string(), "car");
    }
}
