//! Recoverable conversion errors
//!
//! Errors never end the session. Each one is reported to the user as a
//! single line and the loop waits for the next request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const NEGATIVE_QUANTITY: &str = "NEGATIVE_QUANTITY";
}

/// Why a single conversion request was rejected.
///
/// `Display` is the exact diagnostic line written to the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ConvertError {
    /// The numeric part of the request is not a decimal literal
    #[error("Parse error")]
    #[serde(rename = "PARSE_ERROR")]
    Parse { input: String },

    /// Units of different categories, or an unrecognized source unit
    #[error("Conversion from {from} to {to} is impossible")]
    #[serde(rename = "INCOMPATIBLE_UNITS")]
    Incompatible { from: String, to: String },

    /// Negative amount for a category that has no negative values
    #[error("{category} shouldn't be negative.")]
    #[serde(rename = "NEGATIVE_QUANTITY")]
    Negative { category: String },
}

impl ConvertError {
    pub fn parse(input: impl Into<String>) -> Self {
        Self::Parse { input: input.into() }
    }

    pub fn incompatible(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Incompatible { from: from.into(), to: to.into() }
    }

    pub fn negative(category: impl ToString) -> Self {
        Self::Negative { category: category.to_string() }
    }

    /// Machine-readable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => codes::PARSE_ERROR,
            Self::Incompatible { .. } => codes::INCOMPATIBLE_UNITS,
            Self::Negative { .. } => codes::NEGATIVE_QUANTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_terminal_output() {
        assert_eq!(ConvertError::parse("abc").to_string(), "Parse error");
        assert_eq!(
            ConvertError::incompatible("kilometers", "???").to_string(),
            "Conversion from kilometers to ??? is impossible"
        );
        assert_eq!(
            ConvertError::negative("Weight").to_string(),
            "Weight shouldn't be negative."
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(ConvertError::parse("x").code(), codes::PARSE_ERROR);
        assert_eq!(ConvertError::incompatible("a", "b").code(), codes::INCOMPATIBLE_UNITS);
        assert_eq!(ConvertError::negative("Length").code(), codes::NEGATIVE_QUANTITY);
    }

    #[test]
    fn test_serialized_code_tag() {
        let json = serde_json::to_value(ConvertError::negative("Length")).unwrap();
        assert_eq!(json["code"], codes::NEGATIVE_QUANTITY);
        assert_eq!(json["category"], "Length");

        let back: ConvertError = serde_json::from_value(json).unwrap();
        assert_eq!(back, ConvertError::negative("Length"));
    }
}
