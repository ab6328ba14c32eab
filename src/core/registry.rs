use crate::core::container::{footprint_for, Container};
use crate::domain::model::{CompostSplit, ShapeKind};
use crate::utils::error::{GardenError, Result};
use crate::utils::geometry::{calculate_plant_spacing, split_compost, DEFAULT_COMPOST_RATIO};
use crate::utils::validation::validate_non_empty_string;

/// Insertion-ordered set of containers with unique ids.
///
/// Lookups are linear; a plan holds a handful of beds and pots, not thousands.
#[derive(Debug, Clone, Default)]
pub struct ContainerRegistry {
    containers: Vec<Container>,
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a container of a built-in shape and registers it.
    pub fn add_container(
        &mut self,
        id: &str,
        length: f64,
        width: Option<f64>,
        depth: f64,
        shape: &str,
    ) -> Result<Container> {
        let kind: ShapeKind = shape.parse()?;
        validate_non_empty_string("id", id)?;
        self.ensure_unused(id)?;

        let container = Container::new(id, footprint_for(kind, length, width)?, depth)?;
        self.register(container.clone())?;
        Ok(container)
    }

    /// Registers an already built container, e.g. one with a custom outline.
    pub fn register(&mut self, container: Container) -> Result<()> {
        self.ensure_unused(container.id())?;
        tracing::debug!(
            "Registered {} container '{}' (area {:.2} sq in, volume {:.2} cu in)",
            container.shape_name(),
            container.id(),
            container.area(),
            container.volume()
        );
        self.containers.push(container);
        Ok(())
    }

    fn ensure_unused(&self, id: &str) -> Result<()> {
        if self.containers.iter().any(|c| c.id() == id) {
            return Err(GardenError::DuplicateId { id: id.to_string() });
        }
        Ok(())
    }

    pub fn get_container(&self, id: &str) -> Result<&Container> {
        self.containers
            .iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| GardenError::not_found("container", id))
    }

    /// Compost/soil split for a container; `None` uses [`DEFAULT_COMPOST_RATIO`].
    pub fn calculate_compost(&self, id: &str, ratio: Option<f64>) -> Result<CompostSplit> {
        let container = self.get_container(id)?;
        split_compost(container.volume(), ratio.unwrap_or(DEFAULT_COMPOST_RATIO))
    }

    /// Square-grid spacing for `plant_count` plants in a container.
    pub fn plant_spacing(&self, id: &str, plant_count: u32) -> Result<f64> {
        calculate_plant_spacing(self.get_container(id)?.area(), plant_count)
    }

    /// Snapshot of the registered containers, in insertion order.
    pub fn list_containers(&self) -> Vec<Container> {
        self.containers.clone()
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}
