use anyhow::Result;
use garden_planner::{Container, ContainerRegistry, Footprint, GardenError};
use std::sync::Arc;

#[test]
fn test_raised_bed_end_to_end() -> Result<()> {
    let mut registry = ContainerRegistry::new();
    let bed = registry.add_container("bed1", 48.0, Some(24.0), 12.0, "rectangle")?;

    assert_eq!(bed.area(), 1152.0);
    assert_eq!(bed.volume(), 13824.0);

    let split = registry.calculate_compost("bed1", Some(0.25))?;
    assert_eq!(split.compost, 3456.0);
    assert_eq!(split.soil, 10368.0);
    Ok(())
}

#[test]
fn test_mixed_shapes_keep_insertion_order() -> Result<()> {
    let mut registry = ContainerRegistry::new();
    registry.add_container("pot-a", 16.0, None, 14.0, "circle")?;
    registry.add_container("bed-b", 96.0, Some(36.0), 18.0, "Rectangle")?;
    registry.add_container("pot-c", 10.0, None, 8.0, "circle")?;

    let shapes: Vec<(String, &str)> = registry
        .list_containers()
        .iter()
        .map(|c| (c.id().to_string(), c.shape_name()))
        .collect();
    assert_eq!(
        shapes,
        vec![
            ("pot-a".to_string(), "circle"),
            ("bed-b".to_string(), "rectangle"),
            ("pot-c".to_string(), "circle"),
        ]
    );
    Ok(())
}

#[test]
fn test_error_kinds_are_distinguishable() {
    let mut registry = ContainerRegistry::new();

    let unknown_shape = registry
        .add_container("x", 10.0, Some(10.0), 10.0, "pentagon")
        .unwrap_err();
    assert!(matches!(unknown_shape, GardenError::UnsupportedVariant { .. }));

    let too_long = registry
        .add_container("x", 300.0, Some(10.0), 10.0, "rectangle")
        .unwrap_err();
    assert!(matches!(too_long, GardenError::InvalidInput { .. }));

    let missing = registry.get_container("x").unwrap_err();
    assert!(missing.is_not_found());
}

#[test]
fn test_plant_spacing_for_bed() -> Result<()> {
    let mut registry = ContainerRegistry::new();
    registry.add_container("square", 24.0, Some(24.0), 10.0, "rectangle")?;

    assert_eq!(registry.plant_spacing("square", 4)?, 12.0);
    assert_eq!(registry.plant_spacing("square", 16)?, 6.0);
    assert!(registry.plant_spacing("square", 0).is_err());
    Ok(())
}

#[derive(Debug)]
struct Trapezoid {
    top: f64,
    bottom: f64,
    height: f64,
}

impl Footprint for Trapezoid {
    fn shape_name(&self) -> &'static str {
        "trapezoid"
    }

    fn area(&self) -> f64 {
        (self.top + self.bottom) / 2.0 * self.height
    }

    fn length(&self) -> f64 {
        self.top.max(self.bottom)
    }

    fn width(&self) -> Option<f64> {
        Some(self.height)
    }
}

#[test]
fn test_new_shape_without_touching_registry() -> Result<()> {
    let mut registry = ContainerRegistry::new();
    let corner = Container::new(
        "corner",
        Arc::new(Trapezoid {
            top: 24.0,
            bottom: 48.0,
            height: 20.0,
        }),
        10.0,
    )?;
    registry.register(corner)?;

    let found = registry.get_container("corner")?;
    assert_eq!(found.shape_name(), "trapezoid");
    assert_eq!(found.area(), 720.0);
    assert_eq!(found.volume(), 7200.0);

    let split = registry.calculate_compost("corner", None)?;
    assert_eq!(split.compost, 1800.0);
    Ok(())
}

#[test]
fn test_register_rejects_duplicate_ids() -> Result<()> {
    let mut registry = ContainerRegistry::new();
    registry.register(Container::circle("pot", 12.0, 10.0)?)?;
    let err = registry.register(Container::circle("pot", 14.0, 10.0)?).unwrap_err();
    assert!(matches!(err, GardenError::DuplicateId { .. }));
    assert_eq!(registry.len(), 1);
    Ok(())
}
