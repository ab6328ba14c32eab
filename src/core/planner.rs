use crate::config::toml_config::PlanConfig;
use crate::core::garden::Garden;
use crate::core::registry::ContainerRegistry;
use crate::core::schedule::PlantingSchedule;
use crate::domain::model::{CompostSplit, PlantingSafety, Season, SeasonInfo, YieldSummary};
use crate::utils::dates::format_date;
use crate::utils::error::Result;
use crate::utils::units::to_inches;
use crate::utils::validation::{parse_species, validate_ph, Validate};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, Default)]
struct ContainerOptions {
    compost_ratio: Option<f64>,
    soil_ph: Option<f64>,
}

/// The three aggregates of a plan, built from a [`PlanConfig`].
#[derive(Debug, Clone)]
pub struct GardenPlanner {
    registry: ContainerRegistry,
    garden: Garden,
    schedule: PlantingSchedule,
    options: HashMap<String, ContainerOptions>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContainerReport {
    pub id: String,
    pub shape: String,
    pub area_sq_in: f64,
    pub volume_cu_in: f64,
    pub compost: CompostSplit,
    pub compost_cu_ft: f64,
    pub soil_cu_ft: f64,
    pub soil_ph: Option<f64>,
    pub ph_suitable: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlantingReport {
    pub plant_name: String,
    pub species: String,
    pub date: NaiveDate,
    pub season: Season,
    pub container_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub garden: String,
    pub location: String,
    pub today: NaiveDate,
    pub season: SeasonInfo,
    pub days_until_first_frost: i64,
    pub containers: Vec<ContainerReport>,
    pub planting_safety: Vec<PlantingSafety>,
    pub yield_summary: YieldSummary,
    pub plantings: Vec<PlantingReport>,
}

impl GardenPlanner {
    pub fn from_config(config: &PlanConfig) -> Result<Self> {
        config.validate()?;

        let mut registry = ContainerRegistry::new();
        let mut options = HashMap::new();
        for entry in &config.containers {
            let unit = entry.length_unit()?;
            let width = entry.width.map(|w| to_inches(w, unit)).transpose()?;
            registry.add_container(
                &entry.id,
                to_inches(entry.length, unit)?,
                width,
                to_inches(entry.depth, unit)?,
                &entry.shape,
            )?;
            options.insert(
                entry.id.clone(),
                ContainerOptions {
                    compost_ratio: entry.compost_ratio,
                    soil_ph: entry.soil_ph,
                },
            );
        }

        let mut garden = Garden::new(
            &config.garden.name,
            &config.garden.last_frost,
            &config.garden.first_frost,
        )?;
        for plant in &config.plants {
            garden.add_plant(
                &plant.plant_type,
                plant.count,
                plant.tolerance.as_deref(),
                plant.avg_per_plant,
            )?;
        }

        let mut schedule = PlantingSchedule::new(config.location());
        for planting in &config.plantings {
            schedule.add_planting_record(&planting.name, &planting.date, planting.container.as_deref())?;
        }

        tracing::info!(
            "Loaded plan '{}': {} containers, {} plant entries, {} plantings",
            garden.name(),
            registry.len(),
            config.plants.len(),
            schedule.len()
        );

        Ok(Self {
            registry,
            garden,
            schedule,
            options,
        })
    }

    pub fn registry(&self) -> &ContainerRegistry {
        &self.registry
    }

    pub fn garden(&self) -> &Garden {
        &self.garden
    }

    pub fn schedule(&self) -> &PlantingSchedule {
        &self.schedule
    }

    /// Report as of `today`. With `season` set, only that season's plantings
    /// are listed.
    pub fn report(&self, today: NaiveDate, season: Option<&str>) -> Result<PlanReport> {
        let containers = self
            .registry
            .list_containers()
            .into_iter()
            .map(|container| -> Result<ContainerReport> {
                let opts = self.options.get(container.id()).copied().unwrap_or_default();
                let compost = self.registry.calculate_compost(container.id(), opts.compost_ratio)?;
                let ph_suitable = opts.soil_ph.map(validate_ph).transpose()?;
                Ok(ContainerReport {
                    id: container.id().to_string(),
                    shape: container.shape_name().to_string(),
                    area_sq_in: container.area(),
                    volume_cu_in: container.volume(),
                    compost_cu_ft: compost.compost_cubic_feet(),
                    soil_cu_ft: compost.soil_cubic_feet(),
                    compost,
                    soil_ph: opts.soil_ph,
                    ph_suitable,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let records = match season {
            Some(name) => self.schedule.get_plantings_by_season(name)?,
            None => self.schedule.records().to_vec(),
        };
        let plantings = records
            .into_iter()
            .map(|record| -> Result<PlantingReport> {
                Ok(PlantingReport {
                    species: parse_species(&record.plant_name)?,
                    season: record.season(),
                    plant_name: record.plant_name,
                    date: record.date,
                    container_id: record.container_id,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let report = PlanReport {
            garden: self.garden.name().to_string(),
            location: self.schedule.location().to_string(),
            today,
            season: self.schedule.get_season_info(Some(today))?,
            days_until_first_frost: self.garden.days_until_first_frost(today)?,
            containers,
            planting_safety: self.garden.is_safe_on(today)?,
            yield_summary: self.garden.total_yield()?,
            plantings,
        };
        tracing::debug!("Built report for {} as of {}", report.garden, today);
        Ok(report)
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Garden: {} ({})", self.garden, self.location)?;
        writeln!(
            f,
            "As of {}: {}, {} starts {} ({} days)",
            format_date(self.today),
            self.season.current_season,
            self.season.next_season,
            format_date(self.season.next_season_start),
            self.season.days_remaining
        )?;
        writeln!(f, "Days until first frost: {}", self.days_until_first_frost)?;

        writeln!(f, "\nContainers:")?;
        for c in &self.containers {
            write!(
                f,
                "  {:<12} {:<10} area {:>9.2} sq in  volume {:>10.2} cu in  compost {:.2} cu ft / soil {:.2} cu ft",
                c.id, c.shape, c.area_sq_in, c.volume_cu_in, c.compost_cu_ft, c.soil_cu_ft
            )?;
            match (c.soil_ph, c.ph_suitable) {
                (Some(ph), Some(true)) => writeln!(f, "  pH {:.1}", ph)?,
                (Some(ph), _) => writeln!(f, "  pH {:.1} (outside 6.0-7.5)", ph)?,
                _ => writeln!(f)?,
            }
        }

        writeln!(f, "\nSafe to plant today:")?;
        for s in &self.planting_safety {
            let verdict = if s.safe { "yes" } else { "no" };
            writeln!(f, "  {:<12} {:<3} (from {})", s.plant_type, verdict, format_date(s.safe_from))?;
        }

        writeln!(f, "\nExpected harvest:")?;
        for item in &self.yield_summary.items {
            writeln!(
                f,
                "  {:<12} {:>3} x {:>5.2} lb = {:>7.2} lb",
                item.plant_type, item.count, item.per_plant, item.total
            )?;
        }
        writeln!(f, "  total {:.2} lb", self.yield_summary.total)?;

        writeln!(f, "\nPlantings:")?;
        for p in &self.plantings {
            writeln!(
                f,
                "  {}  {:<12} {:<6} {}",
                format_date(p.date),
                p.plant_name,
                p.season,
                p.container_id.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }
}
