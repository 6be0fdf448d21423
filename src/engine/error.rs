use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which input a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Reason {
    InvalidWeight,
    InvalidHeight,
}

impl Reason {
    pub fn code(&self) -> &'static str {
        match self {
            Reason::InvalidWeight => "InvalidWeight",
            Reason::InvalidHeight => "InvalidHeight",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A rejected computation attempt. Always caused by user input and always
/// recoverable: the caller shows `message` and withholds the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub reason: Reason,
    pub message: String,
}

impl ValidationError {
    pub fn invalid_weight() -> Self {
        Self {
            reason: Reason::InvalidWeight,
            message: "Please enter a valid number for weight.".to_string(),
        }
    }

    pub fn invalid_height_meters() -> Self {
        Self {
            reason: Reason::InvalidHeight,
            message: "Please enter a valid height in meters.".to_string(),
        }
    }

    pub fn invalid_height_feet_inches() -> Self {
        Self {
            reason: Reason::InvalidHeight,
            message: "Please enter a valid height in feet and inches (e.g., 6'1\").".to_string(),
        }
    }
}
