pub mod container;
pub mod garden;
pub mod planner;
pub mod registry;
pub mod schedule;

pub use crate::domain::model::{PlantEntry, PlantingRecord, Season, SeasonInfo};
pub use crate::domain::ports::Footprint;
pub use crate::utils::error::Result;
