pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::toml_config::PlanConfig;
pub use crate::core::{
    container::{Circle, Container, Rectangle},
    garden::{estimate_harvest_yield, Garden},
    planner::{GardenPlanner, PlanReport},
    registry::ContainerRegistry,
    schedule::PlantingSchedule,
};
pub use domain::model::{FrostTolerance, Season, SeasonInfo, ShapeKind};
pub use domain::ports::Footprint;
pub use utils::error::{ErrorCategory, GardenError, Result};
