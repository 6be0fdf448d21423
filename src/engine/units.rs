use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kilograms per pound
pub const KG_PER_POUND: f64 = 0.453592;
/// Meters per inch
pub const METERS_PER_INCH: f64 = 0.0254;
pub const INCHES_PER_FOOT: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightUnit {
    #[default]
    Kilogram,
    Pound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeightUnit {
    Meter,
    #[default]
    FeetInches,
}

/// One entry of a unit picker: the value the UI sends back and its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} unit: '{input}'")]
pub struct UnitParseError {
    pub kind: &'static str,
    pub input: String,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 2] = [WeightUnit::Kilogram, WeightUnit::Pound];

    /// Short symbol shown next to the input ("kg" / "lbs")
    pub fn symbol(&self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kg",
            WeightUnit::Pound => "lbs",
        }
    }

    /// Label used by the unit picker
    pub fn label(&self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "Kilograms (kg)",
            WeightUnit::Pound => "Pounds (lbs)",
        }
    }

    pub fn placeholder(&self) -> String {
        format!("Enter weight in {}", self.symbol())
    }

    pub fn to_kilograms(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kilogram => value,
            WeightUnit::Pound => pounds_to_kg(value),
        }
    }
}

impl HeightUnit {
    pub const ALL: [HeightUnit; 2] = [HeightUnit::FeetInches, HeightUnit::Meter];

    pub fn symbol(&self) -> &'static str {
        match self {
            HeightUnit::Meter => "m",
            HeightUnit::FeetInches => "ft",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeightUnit::Meter => "Meters (m)",
            HeightUnit::FeetInches => "Feet (ft)",
        }
    }

    pub fn placeholder(&self) -> String {
        match self {
            HeightUnit::Meter => "Enter height in meters".to_string(),
            HeightUnit::FeetInches => "Enter height in feet".to_string(),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for WeightUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilogram),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pound),
            _ => Err(UnitParseError {
                kind: "weight",
                input: s.to_string(),
            }),
        }
    }
}

impl FromStr for HeightUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(HeightUnit::Meter),
            "ft" | "feet" | "feet-inches" | "ft-in" => Ok(HeightUnit::FeetInches),
            _ => Err(UnitParseError {
                kind: "height",
                input: s.to_string(),
            }),
        }
    }
}

/// Picker entries for the "weight" or "height" field, in display order
pub fn unit_options(field: &str) -> Option<Vec<UnitOption>> {
    match field {
        "weight" => Some(
            WeightUnit::ALL
                .iter()
                .map(|u| UnitOption {
                    value: u.symbol(),
                    label: u.label(),
                })
                .collect(),
        ),
        "height" => Some(
            HeightUnit::ALL
                .iter()
                .map(|u| UnitOption {
                    value: u.symbol(),
                    label: u.label(),
                })
                .collect(),
        ),
        _ => None,
    }
}

pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_POUND
}

pub fn kg_to_pounds(kg: f64) -> f64 {
    kg / KG_PER_POUND
}

/// Convert a feet/inches pair to meters via total inches
pub fn feet_inches_to_meters(feet: u32, inches: u32) -> f64 {
    let total_inches = f64::from(feet) * f64::from(INCHES_PER_FOOT) + f64::from(inches);
    total_inches * METERS_PER_INCH
}

pub fn meters_to_total_inches(meters: f64) -> f64 {
    meters / METERS_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pound_round_trip() {
        for pounds in [1.0, 98.6, 154.0, 220.5, 400.0] {
            let back = kg_to_pounds(pounds_to_kg(pounds));
            assert!((back - pounds).abs() < 0.001, "{} came back as {}", pounds, back);
        }
    }

    #[test]
    fn test_feet_inches_to_meters() {
        assert!((feet_inches_to_meters(5, 9) - 1.7526).abs() < 1e-9);
        assert!((feet_inches_to_meters(6, 0) - 1.8288).abs() < 1e-9);
        assert!((meters_to_total_inches(feet_inches_to_meters(6, 1)) - 73.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("kg".parse::<WeightUnit>().unwrap(), WeightUnit::Kilogram);
        assert_eq!(" LBS ".parse::<WeightUnit>().unwrap(), WeightUnit::Pound);
        assert_eq!("pound".parse::<WeightUnit>().unwrap(), WeightUnit::Pound);
        assert_eq!("m".parse::<HeightUnit>().unwrap(), HeightUnit::Meter);
        assert_eq!("feet-inches".parse::<HeightUnit>().unwrap(), HeightUnit::FeetInches);

        let err = "stone".parse::<WeightUnit>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown weight unit: 'stone'");
        assert!("cm".parse::<HeightUnit>().is_err());
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(WeightUnit::Kilogram.placeholder(), "Enter weight in kg");
        assert_eq!(WeightUnit::Pound.placeholder(), "Enter weight in lbs");
        assert_eq!(HeightUnit::Meter.placeholder(), "Enter height in meters");
        assert_eq!(HeightUnit::FeetInches.placeholder(), "Enter height in feet");
    }

    #[test]
    fn test_picker_labels() {
        assert_eq!(WeightUnit::Kilogram.label(), "Kilograms (kg)");
        assert_eq!(WeightUnit::Pound.label(), "Pounds (lbs)");
        assert_eq!(HeightUnit::Meter.label(), "Meters (m)");
        assert_eq!(HeightUnit::FeetInches.label(), "Feet (ft)");
    }

    #[test]
    fn test_unit_options() {
        let weight = unit_options("weight").unwrap();
        assert_eq!(
            weight,
            vec![
                UnitOption {
                    value: "kg",
                    label: "Kilograms (kg)"
                },
                UnitOption {
                    value: "lbs",
                    label: "Pounds (lbs)"
                },
            ]
        );

        let height = unit_options("height").unwrap();
        let labels: Vec<_> = height.iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["Feet (ft)", "Meters (m)"]);

        // Every value round-trips through FromStr
        for option in &height {
            assert!(option.value.parse::<HeightUnit>().is_ok());
        }
        for option in &weight {
            assert!(option.value.parse::<WeightUnit>().is_ok());
        }

        let json = serde_json::to_value(&weight).unwrap();
        assert_eq!(json[1]["value"], "lbs");
        assert_eq!(json[1]["label"], "Pounds (lbs)");

        assert!(unit_options("age").is_none());
    }

    #[test]
    fn test_default_selection() {
        assert_eq!(WeightUnit::default(), WeightUnit::Kilogram);
        assert_eq!(HeightUnit::default(), HeightUnit::FeetInches);
    }
}
