use crate::engine::category::{Category, Indicator};
use crate::engine::error::{Reason, ValidationError};
use serde::Serialize;

/// Weight and height normalized to kilograms and meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalMeasurement {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl CanonicalMeasurement {
    pub fn bmi(&self) -> f64 {
        self.weight_kg / (self.height_m * self.height_m)
    }
}

/// Result of a successful computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    /// Full precision BMI
    pub value: f64,
    pub category: Category,
    pub measurement: CanonicalMeasurement,
}

impl BmiResult {
    /// Value rounded half-up to two decimals, for display
    pub fn rounded(&self) -> f64 {
        round_to_hundredths(self.value)
    }

    /// Display text, always two decimals (e.g. "22.86")
    pub fn display_value(&self) -> String {
        format!("{:.2}", self.rounded())
    }
}

/// Serializable payload handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Success {
        value: f64,
        category: Category,
        indicator: Indicator,
    },
    Failure {
        reason: Reason,
        message: String,
    },
}

impl From<&BmiResult> for Outcome {
    fn from(bmi: &BmiResult) -> Self {
        Outcome::Success {
            value: bmi.rounded(),
            category: bmi.category,
            indicator: bmi.category.indicator(),
        }
    }
}

impl From<&ValidationError> for Outcome {
    fn from(e: &ValidationError) -> Self {
        Outcome::Failure {
            reason: e.reason,
            message: e.message.clone(),
        }
    }
}

impl From<&Result<BmiResult, ValidationError>> for Outcome {
    fn from(result: &Result<BmiResult, ValidationError>) -> Self {
        match result {
            Ok(bmi) => Outcome::from(bmi),
            Err(e) => Outcome::from(e),
        }
    }
}

impl From<Result<BmiResult, ValidationError>> for Outcome {
    fn from(result: Result<BmiResult, ValidationError>) -> Self {
        Outcome::from(&result)
    }
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_to_hundredths(22.857142), 22.86);
        assert_eq!(round_to_hundredths(22.741), 22.74);
        assert_eq!(round_to_hundredths(18.125), 18.13);
        assert_eq!(round_to_hundredths(20.0), 20.0);
    }

    #[test]
    fn test_display_value_keeps_two_decimals() {
        let result = BmiResult {
            value: 20.0,
            category: Category::Normal,
            measurement: CanonicalMeasurement {
                weight_kg: 80.0,
                height_m: 2.0,
            },
        };
        assert_eq!(result.display_value(), "20.00");
    }

    #[test]
    fn test_outcome_json() {
        let failure: Outcome = Err::<BmiResult, _>(ValidationError::invalid_weight()).into();
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["reason"], "InvalidWeight");
        assert_eq!(json["message"], "Please enter a valid number for weight.");
    }
}
