use crate::domain::model::{PlantingRecord, Season, SeasonInfo};
use crate::utils::dates::IntoDate;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use chrono::{Local, NaiveDate};

/// Append-only log of plantings at one location.
#[derive(Debug, Clone, Default)]
pub struct PlantingSchedule {
    location: String,
    records: Vec<PlantingRecord>,
}

impl PlantingSchedule {
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
            records: Vec::new(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Season details for `date`, or for today when `None`.
    pub fn get_season_info(&self, date: Option<NaiveDate>) -> Result<SeasonInfo> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        SeasonInfo::for_date(date)
    }

    /// Logs a planting. `container_id` is kept as given; it is not checked
    /// against any registry.
    pub fn add_planting_record(
        &mut self,
        plant_name: &str,
        date: impl IntoDate,
        container_id: Option<&str>,
    ) -> Result<()> {
        validate_non_empty_string("plant_name", plant_name)?;
        let date = date.into_date()?;

        tracing::debug!(
            "Schedule '{}': {} planted {} in {}",
            self.location,
            plant_name,
            date,
            container_id.unwrap_or("-")
        );
        self.records.push(PlantingRecord {
            plant_name: plant_name.to_string(),
            date,
            container_id: container_id.map(str::to_string),
        });
        Ok(())
    }

    /// Records whose date falls in the named season, in log order.
    pub fn get_plantings_by_season(&self, season: &str) -> Result<Vec<PlantingRecord>> {
        let season: Season = season.parse()?;
        Ok(self
            .records
            .iter()
            .filter(|record| record.season() == season)
            .cloned()
            .collect())
    }

    pub fn records(&self) -> &[PlantingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
