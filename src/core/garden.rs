use crate::domain::catalog::default_yield;
use crate::domain::model::{FrostTolerance, PlantEntry, PlantingSafety, YieldEstimate, YieldSummary};
use crate::utils::dates::IntoDate;
use crate::utils::error::{GardenError, Result};
use crate::utils::validation::{validate_finite, validate_non_empty_string};
use chrono::{Duration, NaiveDate};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Expected harvest in pounds for `count` plants of one type.
///
/// `avg_per_plant` overrides the default table; a type missing from the table
/// needs an override.
pub fn estimate_harvest_yield(plant_type: &str, count: u32, avg_per_plant: Option<f64>) -> Result<YieldEstimate> {
    let per_plant = match avg_per_plant {
        Some(avg) => {
            validate_finite("avg_per_plant", avg)?;
            if avg < 0.0 {
                return Err(GardenError::invalid("avg_per_plant", avg, "Yield cannot be negative"));
            }
            avg
        }
        None => default_yield(plant_type).ok_or_else(|| GardenError::unsupported("plant type", plant_type))?,
    };

    Ok(YieldEstimate {
        plant_type: plant_type.to_string(),
        count,
        per_plant,
        total: round2(per_plant * f64::from(count)),
    })
}

/// A garden's plantings together with its frost window.
#[derive(Debug, Clone)]
pub struct Garden {
    name: String,
    last_frost: NaiveDate,
    first_frost: NaiveDate,
    plants: Vec<PlantEntry>,
}

impl Garden {
    pub fn new(name: &str, last_frost: impl IntoDate, first_frost: impl IntoDate) -> Result<Self> {
        validate_non_empty_string("name", name)?;
        let last_frost = last_frost.into_date()?;
        let first_frost = first_frost.into_date()?;

        if first_frost <= last_frost {
            tracing::warn!(
                "Garden '{}': first frost {} is not after last frost {}",
                name,
                first_frost,
                last_frost
            );
        }

        Ok(Self {
            name: name.to_string(),
            last_frost,
            first_frost,
            plants: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_frost(&self) -> NaiveDate {
        self.last_frost
    }

    pub fn first_frost(&self) -> NaiveDate {
        self.first_frost
    }

    /// Adds a plant entry. `tolerance` defaults to tender.
    pub fn add_plant(
        &mut self,
        plant_type: &str,
        count: u32,
        tolerance: Option<&str>,
        avg_per_plant: Option<f64>,
    ) -> Result<()> {
        validate_non_empty_string("plant_type", plant_type)?;
        let tolerance = match tolerance {
            Some(t) => t.parse::<FrostTolerance>()?,
            None => FrostTolerance::default(),
        };
        if let Some(avg) = avg_per_plant {
            estimate_harvest_yield(plant_type, count, Some(avg))?;
        }

        tracing::debug!("Garden '{}': adding {} x {} ({})", self.name, count, plant_type, tolerance);
        self.plants.push(PlantEntry {
            plant_type: plant_type.to_string(),
            count,
            tolerance,
            avg_per_plant,
        });
        Ok(())
    }

    pub fn plants(&self) -> Vec<PlantEntry> {
        self.plants.clone()
    }

    /// First day a plant of the given tolerance can go in the ground.
    pub fn safe_planting_date(&self, tolerance: FrostTolerance) -> Result<NaiveDate> {
        self.last_frost
            .checked_add_signed(Duration::days(tolerance.offset_days()))
            .ok_or_else(|| {
                GardenError::invalid("last_frost", self.last_frost, "Safe planting date falls outside the calendar")
            })
    }

    /// One verdict per entry, in entry order.
    pub fn is_safe_on(&self, date: impl IntoDate) -> Result<Vec<PlantingSafety>> {
        let date = date.into_date()?;
        self.plants
            .iter()
            .map(|entry| {
                let safe_from = self.safe_planting_date(entry.tolerance)?;
                Ok(PlantingSafety {
                    plant_type: entry.plant_type.clone(),
                    safe: date >= safe_from,
                    safe_from,
                })
            })
            .collect()
    }

    pub fn total_yield(&self) -> Result<YieldSummary> {
        let items = self
            .plants
            .iter()
            .map(|entry| estimate_harvest_yield(&entry.plant_type, entry.count, entry.avg_per_plant))
            .collect::<Result<Vec<_>>>()?;

        let total = round2(items.iter().map(|item| item.total).sum());
        Ok(YieldSummary { total, items })
    }

    /// Days left before the first fall frost; zero on or after it.
    pub fn days_until_first_frost(&self, today: impl IntoDate) -> Result<i64> {
        let today = today.into_date()?;
        Ok((self.first_frost - today).num_days().max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backyard() -> Garden {
        Garden::new("Backyard", "03/15/2025", "11/10/2025").unwrap()
    }

    #[test]
    fn test_estimate_harvest_yield() {
        assert_eq!(estimate_harvest_yield("tomato", 4, None).unwrap().total, 32.0);
        assert_eq!(estimate_harvest_yield("tomato", 4, Some(10.0)).unwrap().total, 40.0);
        assert!(matches!(
            estimate_harvest_yield("dragonfruit", 2, None),
            Err(GardenError::UnsupportedVariant { .. })
        ));
        assert_eq!(estimate_harvest_yield("dragonfruit", 2, Some(1.5)).unwrap().total, 3.0);
    }

    #[test]
    fn test_is_safe_on() {
        let mut garden = backyard();
        garden.add_plant("tomato", 4, None, None).unwrap();

        let early = garden.is_safe_on("03/01/2025").unwrap();
        assert_eq!(early.len(), 1);
        assert_eq!(early[0].plant_type, "tomato");
        assert!(!early[0].safe);

        assert!(garden.is_safe_on("03/20/2025").unwrap()[0].safe);
        assert!(garden.is_safe_on("03/15/2025").unwrap()[0].safe);
    }

    #[test]
    fn test_tolerance_offsets() {
        let mut garden = backyard();
        garden.add_plant("tomato", 1, Some("tender"), None).unwrap();
        garden.add_plant("lettuce", 6, Some("half-hardy"), None).unwrap();
        garden.add_plant("kale", 2, Some("hardy"), None).unwrap();

        let verdicts = garden.is_safe_on("03/08/2025").unwrap();
        let flags: Vec<bool> = verdicts.iter().map(|v| v.safe).collect();
        assert_eq!(flags, vec![false, true, true]);
        assert_eq!(verdicts[2].safe_from, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_add_plant_validation() {
        let mut garden = backyard();
        assert!(garden.add_plant("", 1, None, None).is_err());
        assert!(garden.add_plant("tomato", 1, Some("very-hardy"), None).is_err());
        assert!(garden.add_plant("tomato", 1, None, Some(-2.0)).is_err());
        assert!(garden.plants().is_empty());
    }

    #[test]
    fn test_duplicates_are_not_merged() {
        let mut garden = backyard();
        garden.add_plant("tomato", 2, None, None).unwrap();
        garden.add_plant("tomato", 3, None, Some(5.0)).unwrap();

        let summary = garden.total_yield().unwrap();
        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.total, 31.0);
        assert_eq!(garden.is_safe_on("04/01/2025").unwrap().len(), 2);
    }

    #[test]
    fn test_total_yield_unknown_type() {
        let mut garden = backyard();
        garden.add_plant("tomato", 2, None, None).unwrap();
        garden.add_plant("kiwano", 1, None, None).unwrap();
        let err = garden.total_yield().unwrap_err();
        assert!(err.to_string().contains("kiwano"));
    }

    #[test]
    fn test_days_until_first_frost() {
        let garden = backyard();
        assert_eq!(garden.days_until_first_frost("11/01/2025").unwrap(), 9);
        assert_eq!(garden.days_until_first_frost("11/10/2025").unwrap(), 0);
        assert_eq!(garden.days_until_first_frost("12/25/2025").unwrap(), 0);
    }

    #[test]
    fn test_estimate_rejects_bad_override() {
        assert!(matches!(
            estimate_harvest_yield("tomato", 4, Some(-1.0)),
            Err(GardenError::InvalidInput { .. })
        ));
        assert!(estimate_harvest_yield("tomato", 4, Some(f64::NAN)).is_err());
        assert_eq!(estimate_harvest_yield("tomato", 4, Some(0.0)).unwrap().total, 0.0);
    }

    #[test]
    fn test_safe_date_at_calendar_edge_is_an_error() {
        let mut garden = Garden::new("Edge", NaiveDate::MIN, NaiveDate::MAX).unwrap();
        garden.add_plant("kale", 1, Some("hardy"), None).unwrap();

        let err = garden.is_safe_on(NaiveDate::MIN).unwrap_err();
        assert!(matches!(err, GardenError::InvalidInput { ref field, .. } if field == "last_frost"));
        assert!(garden.safe_planting_date(FrostTolerance::Tender).is_ok());
    }

    #[test]
    fn test_two_digit_year_frost_date_rejected() {
        assert!(matches!(
            Garden::new("Backyard", "03/15/25", "11/10/2025"),
            Err(GardenError::DateParse { .. })
        ));
    }

    #[test]
    fn test_bad_frost_date() {
        assert!(matches!(
            Garden::new("Backyard", "2025/03/15", "11/10/2025"),
            Err(GardenError::DateParse { .. })
        ));
    }
}
