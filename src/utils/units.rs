use crate::utils::error::{GardenError, Result};
use crate::utils::validation::validate_finite;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length units accepted in plan files. Everything is stored in inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Inches,
    Feet,
    Yards,
    Centimeters,
    Meters,
}

impl LengthUnit {
    pub fn inches_per_unit(self) -> f64 {
        match self {
            LengthUnit::Inches => 1.0,
            LengthUnit::Feet => 12.0,
            LengthUnit::Yards => 36.0,
            LengthUnit::Centimeters => 1.0 / 2.54,
            LengthUnit::Meters => 100.0 / 2.54,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Inches => "in",
            LengthUnit::Feet => "ft",
            LengthUnit::Yards => "yd",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Meters => "m",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(LengthUnit::Inches),
            "ft" | "foot" | "feet" => Ok(LengthUnit::Feet),
            "yd" | "yard" | "yards" => Ok(LengthUnit::Yards),
            "cm" | "centimeter" | "centimeters" => Ok(LengthUnit::Centimeters),
            "m" | "meter" | "meters" => Ok(LengthUnit::Meters),
            _ => Err(GardenError::unsupported("unit", s)),
        }
    }
}

pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> Result<f64> {
    validate_finite("value", value)?;
    Ok(value * from.inches_per_unit() / to.inches_per_unit())
}

pub fn to_inches(value: f64, from: LengthUnit) -> Result<f64> {
    convert_length(value, from, LengthUnit::Inches)
}

pub const CUBIC_INCHES_PER_CUBIC_FOOT: f64 = 1728.0;

pub fn cubic_inches_to_feet(volume: f64) -> f64 {
    volume / CUBIC_INCHES_PER_CUBIC_FOOT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_length() {
        assert_eq!(convert_length(4.0, LengthUnit::Feet, LengthUnit::Inches).unwrap(), 48.0);
        assert_eq!(convert_length(36.0, LengthUnit::Inches, LengthUnit::Yards).unwrap(), 1.0);
        let cm = convert_length(1.0, LengthUnit::Inches, LengthUnit::Centimeters).unwrap();
        assert!((cm - 2.54).abs() < 1e-9);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("FT".parse::<LengthUnit>().unwrap(), LengthUnit::Feet);
        assert_eq!("inches".parse::<LengthUnit>().unwrap(), LengthUnit::Inches);
        assert!(matches!(
            "furlong".parse::<LengthUnit>(),
            Err(GardenError::UnsupportedVariant { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(to_inches(f64::INFINITY, LengthUnit::Feet).is_err());
    }
}
