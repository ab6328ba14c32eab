use crate::utils::error::{GardenError, Result};

/// Largest horizontal dimension accepted for a container (20 feet).
pub const MAX_HORIZONTAL_INCHES: f64 = 240.0;
pub const MIN_DEPTH_INCHES: f64 = 2.0;
pub const MAX_DEPTH_INCHES: f64 = 48.0;

/// pH band most vegetables tolerate.
pub const GARDEN_PH_RANGE: (f64, f64) = (6.0, 7.5);

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GardenError::invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons, so test for membership rather than exclusion.
    if !(value >= min && value <= max) {
        return Err(GardenError::invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(GardenError::invalid(field_name, value, "Value must be a finite number"));
    }
    Ok(())
}

fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value <= 0.0 {
        return Err(GardenError::invalid(field_name, value, "Value must be positive"));
    }
    Ok(())
}

/// Checks that container dimensions (inches) are reasonable for a garden.
///
/// `width` is `None` for round containers, whose `length` is the diameter.
pub fn validate_container_dimensions(length: f64, width: Option<f64>, depth: f64) -> Result<()> {
    validate_positive("length", length)?;
    if let Some(width) = width {
        validate_positive("width", width)?;
    }
    validate_positive("depth", depth)?;

    if length > MAX_HORIZONTAL_INCHES {
        return Err(GardenError::invalid(
            "length",
            length,
            format!("Length is larger than maximum limit ({} inches)", MAX_HORIZONTAL_INCHES),
        ));
    }
    if let Some(width) = width {
        if width > MAX_HORIZONTAL_INCHES {
            return Err(GardenError::invalid(
                "width",
                width,
                format!("Width is larger than maximum limit ({} inches)", MAX_HORIZONTAL_INCHES),
            ));
        }
    }

    validate_range("depth", depth, MIN_DEPTH_INCHES, MAX_DEPTH_INCHES)
}

/// Validates a soil pH reading.
///
/// Returns `Ok(true)` when the reading sits inside [`GARDEN_PH_RANGE`] and
/// `Ok(false)` for a valid pH outside it. Non-finite values and readings
/// outside 0–14 are errors.
pub fn validate_ph(ph: f64) -> Result<bool> {
    validate_finite("ph", ph)?;
    validate_range("ph", ph, 0.0, 14.0)?;
    let (low, high) = GARDEN_PH_RANGE;
    Ok(ph >= low && ph <= high)
}

/// Reduces a species string to its first word, capitalized ("cherry tomato" → "Cherry").
pub fn parse_species(name: &str) -> Result<String> {
    let first = name
        .split_whitespace()
        .next()
        .ok_or_else(|| GardenError::invalid("species", name, "Species name cannot be empty"))?;

    let mut chars = first.chars();
    Ok(match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_container_dimensions() {
        assert!(validate_container_dimensions(4.0, Some(3.0), 6.0).is_ok());
        assert!(validate_container_dimensions(300.0, Some(3.0), 6.0).is_err());
        assert!(validate_container_dimensions(4.0, Some(241.0), 6.0).is_err());
        assert!(validate_container_dimensions(4.0, None, 6.0).is_ok());
    }

    #[test]
    fn test_depth_limits() {
        assert!(validate_container_dimensions(24.0, Some(24.0), 2.0).is_ok());
        assert!(validate_container_dimensions(24.0, Some(24.0), 48.0).is_ok());
        assert!(validate_container_dimensions(24.0, Some(24.0), 1.5).is_err());
        assert!(validate_container_dimensions(24.0, Some(24.0), 49.0).is_err());
    }

    #[test]
    fn test_non_positive_and_nan_dimensions() {
        assert!(validate_container_dimensions(0.0, Some(3.0), 6.0).is_err());
        assert!(validate_container_dimensions(4.0, Some(-1.0), 6.0).is_err());
        assert!(validate_container_dimensions(f64::NAN, Some(3.0), 6.0).is_err());
        assert!(validate_container_dimensions(4.0, Some(3.0), f64::NAN).is_err());
    }

    #[test]
    fn test_validate_ph() {
        assert!(validate_ph(6.5).unwrap());
        assert!(!validate_ph(5.0).unwrap());
        assert!(validate_ph(14.5).is_err());
        assert!(validate_ph(f64::NAN).is_err());
    }

    #[test]
    fn test_parse_species() {
        assert_eq!(parse_species("cherry tomato").unwrap(), "Cherry");
        assert_eq!(parse_species("  BASIL ").unwrap(), "Basil");
        assert!(parse_species("   ").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Backyard").is_ok());
        assert!(validate_non_empty_string("name", " \t").is_err());
    }
}
