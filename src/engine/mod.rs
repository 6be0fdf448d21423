// BMI computation: input parsing, unit conversion, classification
// Stateless: every call is a pure function of its inputs and the thresholds

pub mod category;
pub mod error;
pub mod input;
pub mod types;
pub mod units;


pub use category::{Category, Indicator, Thresholds};
pub use error::{Reason, ValidationError};
pub use input::{parse_feet_inches, parse_number, FeetInches, HeightParseError};
pub use types::{BmiResult, CanonicalMeasurement, Outcome};
pub use units::{unit_options, HeightUnit, UnitOption, UnitParseError, WeightUnit};

use crate::config::Config;
use log::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct BmiEngine {
    thresholds: Thresholds,
}

impl BmiEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            thresholds: config.thresholds,
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Validate raw input, convert to kilograms and meters, then compute and
    /// classify the BMI.
    ///
    /// # Errors
    /// `InvalidWeight` or `InvalidHeight` when the text does not parse or the
    /// value is not strictly positive.
    pub fn compute(
        &self,
        weight_text: &str,
        weight_unit: WeightUnit,
        height_text: &str,
        height_unit: HeightUnit,
    ) -> Result<BmiResult, ValidationError> {
        let measurement = canonicalize(weight_text, weight_unit, height_text, height_unit)
            .inspect_err(|e| {
                info!(
                    "Rejected input (weight '{}' {}, height '{}' {}): {}",
                    weight_text, weight_unit, height_text, height_unit, e.reason
                )
            })?;

        let value = measurement.bmi();
        if !value.is_finite() {
            // A zero square means the height underflowed; otherwise the weight is too large
            let squared = measurement.height_m * measurement.height_m;
            warn!(
                "BMI overflowed for {} kg at {} m",
                measurement.weight_kg, measurement.height_m
            );
            return Err(if squared == 0.0 {
                height_error(height_unit)
            } else {
                ValidationError::invalid_weight()
            });
        }
        let category = self.thresholds.classify(value);

        debug!(
            "BMI {:.4} ({}) from {:.3} kg, {:.4} m",
            value, category, measurement.weight_kg, measurement.height_m
        );

        Ok(BmiResult {
            value,
            category,
            measurement,
        })
    }
}

/// Compute with the default thresholds
///
/// # Errors
/// See [`BmiEngine::compute`].
pub fn compute_bmi(
    weight_text: &str,
    weight_unit: WeightUnit,
    height_text: &str,
    height_unit: HeightUnit,
) -> Result<BmiResult, ValidationError> {
    BmiEngine::default().compute(weight_text, weight_unit, height_text, height_unit)
}

/// Parse and convert both inputs. Weight is checked first, so a request with
/// two bad fields reports `InvalidWeight`.
pub fn canonicalize(
    weight_text: &str,
    weight_unit: WeightUnit,
    height_text: &str,
    height_unit: HeightUnit,
) -> Result<CanonicalMeasurement, ValidationError> {
    let weight_kg = parse_weight(weight_text, weight_unit)?;
    let height_m = parse_height(height_text, height_unit)?;

    Ok(CanonicalMeasurement {
        weight_kg,
        height_m,
    })
}

fn parse_weight(text: &str, unit: WeightUnit) -> Result<f64, ValidationError> {
    let raw = parse_number(text).ok_or_else(ValidationError::invalid_weight)?;
    let kg = unit.to_kilograms(raw);
    positive(kg).ok_or_else(ValidationError::invalid_weight)
}

fn parse_height(text: &str, unit: HeightUnit) -> Result<f64, ValidationError> {
    match unit {
        HeightUnit::Meter => parse_number(text)
            .and_then(positive)
            .ok_or_else(|| height_error(unit)),
        HeightUnit::FeetInches => {
            let FeetInches { feet, inches } = parse_feet_inches(text).map_err(|e| {
                debug!("Feet/inches parse failed for '{}': {}", text, e);
                height_error(unit)
            })?;
            positive(units::feet_inches_to_meters(feet, inches)).ok_or_else(|| height_error(unit))
        }
    }
}

fn height_error(unit: HeightUnit) -> ValidationError {
    match unit {
        HeightUnit::Meter => ValidationError::invalid_height_meters(),
        HeightUnit::FeetInches => ValidationError::invalid_height_feet_inches(),
    }
}

fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}
