use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// Feet and inches separated by a single apostrophe, optional closing `"`
    /// Examples: "6'1", "5' 11", "5'11\"", " 6'0 "
    static ref FEET_INCHES_PATTERN: Regex =
        Regex::new(r#"^\s*(?P<feet>[^'"]*)'(?P<inches>[^'"]*)"?\s*$"#).unwrap();
}

/// A height entered as whole feet plus whole inches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeetInches {
    pub feet: u32,
    pub inches: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeightParseError {
    /// Not `<feet>'<inches>`: no apostrophe, or more than one
    Malformed,
    InvalidFeet(String),
    InvalidInches(String),
}

impl fmt::Display for HeightParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeightParseError::Malformed => {
                write!(f, "Expected feet and inches separated by a single apostrophe")
            }
            HeightParseError::InvalidFeet(s) => write!(f, "Invalid feet: '{}'", s),
            HeightParseError::InvalidInches(s) => write!(f, "Invalid inches: '{}'", s),
        }
    }
}

impl std::error::Error for HeightParseError {}

/// Parse a height such as `6'1` into feet and inches.
/// Both parts must be non-negative integers.
pub fn parse_feet_inches(input: &str) -> Result<FeetInches, HeightParseError> {
    let caps = FEET_INCHES_PATTERN
        .captures(input)
        .ok_or(HeightParseError::Malformed)?;

    let feet_text = caps["feet"].trim();
    let inches_text = caps["inches"].trim();

    let feet = parse_whole(feet_text)
        .ok_or_else(|| HeightParseError::InvalidFeet(feet_text.to_string()))?;
    let inches = parse_whole(inches_text)
        .ok_or_else(|| HeightParseError::InvalidInches(inches_text.to_string()))?;

    Ok(FeetInches { feet, inches })
}

fn parse_whole(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok()
}

/// Parse decimal text into a finite number. Surrounding whitespace is ignored;
/// `inf`, `NaN` and empty input are rejected.
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
