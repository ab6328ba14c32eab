use crate::domain::model::ShapeKind;
use crate::domain::ports::Footprint;
use crate::utils::error::{GardenError, Result};
use crate::utils::geometry::{circle_area, rectangle_area};
use crate::utils::validation::{validate_container_dimensions, validate_non_empty_string};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub length: f64,
    pub width: f64,
}

impl Footprint for Rectangle {
    fn shape_name(&self) -> &'static str {
        ShapeKind::Rectangle.as_str()
    }

    fn area(&self) -> f64 {
        rectangle_area(self.length, self.width)
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn width(&self) -> Option<f64> {
        Some(self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub diameter: f64,
}

impl Footprint for Circle {
    fn shape_name(&self) -> &'static str {
        ShapeKind::Circle.as_str()
    }

    fn area(&self) -> f64 {
        circle_area(self.diameter)
    }

    fn length(&self) -> f64 {
        self.diameter
    }
}

/// Builds the outline for a built-in shape. Rectangles need a width; circles
/// ignore it.
pub fn footprint_for(shape: ShapeKind, length: f64, width: Option<f64>) -> Result<Arc<dyn Footprint>> {
    match shape {
        ShapeKind::Rectangle => {
            let width = width.ok_or_else(|| {
                GardenError::invalid("width", "none", "Width must be provided for rectangle")
            })?;
            Ok(Arc::new(Rectangle { length, width }))
        }
        ShapeKind::Circle => Ok(Arc::new(Circle { diameter: length })),
    }
}

/// A planting vessel. Area and volume are computed once, when the container is
/// built, and never change afterwards.
#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    footprint: Arc<dyn Footprint>,
    depth: f64,
    area: f64,
    volume: f64,
}

impl Container {
    pub fn new(id: &str, footprint: Arc<dyn Footprint>, depth: f64) -> Result<Self> {
        validate_non_empty_string("id", id)?;
        validate_container_dimensions(footprint.length(), footprint.width(), depth)?;

        let area = footprint.area();
        if !area.is_finite() || area <= 0.0 {
            return Err(GardenError::invalid(
                "area",
                area,
                format!("{} outline produced no usable area", footprint.shape_name()),
            ));
        }

        Ok(Self {
            id: id.to_string(),
            footprint,
            depth,
            area,
            volume: area * depth,
        })
    }

    pub fn rectangle(id: &str, length: f64, width: f64, depth: f64) -> Result<Self> {
        Self::new(id, Arc::new(Rectangle { length, width }), depth)
    }

    pub fn circle(id: &str, diameter: f64, depth: f64) -> Result<Self> {
        Self::new(id, Arc::new(Circle { diameter }), depth)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shape_name(&self) -> &'static str {
        self.footprint.shape_name()
    }

    pub fn length(&self) -> f64 {
        self.footprint.length()
    }

    pub fn width(&self) -> Option<f64> {
        self.footprint.width()
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Square inches.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Cubic inches of soil the container holds.
    pub fn volume(&self) -> f64 {
        self.volume
    }
}
