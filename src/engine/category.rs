use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Underweight,
    #[serde(rename = "Normal weight")]
    Normal,
    Overweight,
    Obese,
}

/// How the presentation layer should flag a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    /// check-circle, green
    Healthy,
    /// alert-circle, red
    Attention,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }

    pub fn indicator(&self) -> Indicator {
        match self {
            Category::Normal => Indicator::Healthy,
            _ => Indicator::Attention,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category cut points, evaluated in order with the first match winning:
///
/// - `v < underweight_below` -> Underweight
/// - `underweight_below <= v < normal_below` -> Normal weight
/// - `overweight_from <= v < obese_from` -> Overweight
/// - anything else -> Obese
///
/// With the default values, `[24.9, 25.0)` matches neither Normal nor
/// Overweight and lands in Obese. Set `normal_below = overweight_from` to
/// close that gap.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Thresholds {
    pub underweight_below: f64,
    pub normal_below: f64,
    pub overweight_from: f64,
    pub obese_from: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            underweight_below: 18.5,
            normal_below: 24.9,
            overweight_from: 25.0,
            obese_from: 29.9,
        }
    }
}

impl Thresholds {
    pub fn classify(&self, bmi: f64) -> Category {
        if bmi < self.underweight_below {
            Category::Underweight
        } else if bmi >= self.underweight_below && bmi < self.normal_below {
            Category::Normal
        } else if bmi >= self.overweight_from && bmi < self.obese_from {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    /// Finite and non-decreasing
    pub fn is_ordered(&self) -> bool {
        let points = [
            self.underweight_below,
            self.normal_below,
            self.overweight_from,
            self.obese_from,
        ];
        points.iter().all(|p| p.is_finite()) && points.windows(2).all(|w| w[0] <= w[1])
    }

    /// Human-readable range for each category, for listings
    pub fn describe(&self) -> Vec<(Category, String)> {
        Category::ALL
            .iter()
            .map(|category| (*category, self.range_of(*category)))
            .collect()
    }

    fn range_of(&self, category: Category) -> String {
        match category {
            Category::Underweight => format!("< {}", self.underweight_below),
            Category::Normal => format!("{} - {}", self.underweight_below, self.normal_below),
            Category::Overweight => format!("{} - {}", self.overweight_from, self.obese_from),
            Category::Obese if self.normal_below < self.overweight_from => format!(
                ">= {} (also {} - {})",
                self.obese_from, self.normal_below, self.overweight_from
            ),
            Category::Obese => format!(">= {}", self.obese_from),
        }
    }
}
