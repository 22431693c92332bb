use serde::{Deserialize, Serialize};

/// How currency amounts and the home-loan amount field are rendered.
///
/// Defaults match the `en-MY` locale: `RM 1,234.56`. Every field has a
/// default, so a config file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Prefix placed before the amount, separated by one space.
    pub symbol: String,
    /// Inserted between groups of three integer digits.
    pub grouping_separator: String,
    /// Separates the integer part from the two fraction digits.
    pub decimal_separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: "RM".to_string(),
            grouping_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

impl CurrencyFormat {
    /// Parse a JSON config document, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> crate::LoanCalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
