use crate::domain::model::{CompostSplit, ShapeKind};
use crate::utils::error::{GardenError, Result};
use crate::utils::validation::{validate_finite, validate_range};
use std::f64::consts::PI;

pub const DEFAULT_COMPOST_RATIO: f64 = 0.25;

pub fn rectangle_area(length: f64, width: f64) -> f64 {
    length * width
}

/// Area of a circle given its diameter.
pub fn circle_area(diameter: f64) -> f64 {
    let radius = diameter / 2.0;
    PI * radius * radius
}

/// Area in square inches for a shape tag (`"rectangle"` or `"circle"`).
pub fn calculate_area(length: f64, width: Option<f64>, shape: &str) -> Result<f64> {
    match shape.parse::<ShapeKind>()? {
        ShapeKind::Rectangle => {
            let width = width.ok_or_else(|| {
                GardenError::invalid("width", "none", "Width must be provided for rectangle")
            })?;
            Ok(rectangle_area(length, width))
        }
        ShapeKind::Circle => Ok(circle_area(length)),
    }
}

pub fn calculate_soil_volume(length: f64, width: Option<f64>, depth: f64, shape: &str) -> Result<f64> {
    Ok(calculate_area(length, width, shape)? * depth)
}

/// Splits a soil volume into compost and soil at `ratio` compost.
pub fn split_compost(volume: f64, ratio: f64) -> Result<CompostSplit> {
    validate_range("ratio", ratio, 0.0, 1.0)?;
    validate_finite("volume", volume)?;
    if volume <= 0.0 {
        return Err(GardenError::invalid("volume", volume, "Volume must be positive"));
    }

    let compost = volume * ratio;
    Ok(CompostSplit {
        volume,
        ratio,
        compost,
        soil: volume - compost,
    })
}

/// Centre-to-centre spacing in inches when `plant_count` plants share
/// `area` square inches on a square grid.
pub fn calculate_plant_spacing(area: f64, plant_count: u32) -> Result<f64> {
    validate_finite("area", area)?;
    if area <= 0.0 {
        return Err(GardenError::invalid("area", area, "Area must be positive"));
    }
    if plant_count == 0 {
        return Err(GardenError::invalid("plant_count", plant_count, "At least one plant is required"));
    }
    Ok((area / f64::from(plant_count)).sqrt())
}
