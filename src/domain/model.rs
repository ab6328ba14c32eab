use crate::domain::catalog::SEASON_BOUNDARIES;
use crate::utils::error::{GardenError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in container shapes. Other shapes plug in through
/// [`Footprint`](crate::domain::ports::Footprint) directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "circle" => Ok(ShapeKind::Circle),
            _ => Err(GardenError::unsupported("shape", s)),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrostTolerance {
    #[default]
    Tender,
    HalfHardy,
    Hardy,
}

impl FrostTolerance {
    /// Days relative to the last frost from which planting is safe.
    pub fn offset_days(self) -> i64 {
        match self {
            FrostTolerance::Tender => 0,
            FrostTolerance::HalfHardy => -7,
            FrostTolerance::Hardy => -14,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FrostTolerance::Tender => "tender",
            FrostTolerance::HalfHardy => "half-hardy",
            FrostTolerance::Hardy => "hardy",
        }
    }
}

impl FromStr for FrostTolerance {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tender" => Ok(FrostTolerance::Tender),
            "half-hardy" => Ok(FrostTolerance::HalfHardy),
            "hardy" => Ok(FrostTolerance::Hardy),
            _ => Err(GardenError::unsupported("frost tolerance", s)),
        }
    }
}

impl fmt::Display for FrostTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    pub fn next(self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Fall,
            Season::Fall => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    /// Month and day this season starts on.
    pub fn start_month_day(self) -> (u32, u32) {
        let index = match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Fall => 2,
            Season::Winter => 3,
        };
        let (_, month, day) = SEASON_BOUNDARIES[index];
        (month, day)
    }

    pub fn start_in(self, year: i32) -> Result<NaiveDate> {
        let (month, day) = self.start_month_day();
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| GardenError::invalid("year", year, "Year is outside the supported calendar"))
    }

    /// Season a date falls in. Dates before the spring boundary and on/after
    /// the winter boundary are both winter.
    pub fn of(date: NaiveDate) -> Season {
        let month_day = (date.month(), date.day());
        SEASON_BOUNDARIES
            .iter()
            .rev()
            .find(|&&(_, month, day)| month_day >= (month, day))
            .map(|&(season, _, _)| season)
            .unwrap_or(Season::Winter)
    }
}

impl FromStr for Season {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self> {
        Season::ALL
            .into_iter()
            .find(|season| season.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GardenError::unsupported("season", s))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonInfo {
    pub current_season: Season,
    pub next_season: Season,
    pub next_season_start: NaiveDate,
    pub days_remaining: i64,
}

impl SeasonInfo {
    pub fn for_date(date: NaiveDate) -> Result<Self> {
        let current_season = Season::of(date);
        let next_season = current_season.next();

        let (winter_month, winter_day) = Season::Winter.start_month_day();
        let year = if (date.month(), date.day()) >= (winter_month, winter_day) {
            date.year() + 1
        } else {
            date.year()
        };
        let next_season_start = next_season.start_in(year)?;

        Ok(Self {
            current_season,
            next_season,
            next_season_start,
            days_remaining: (next_season_start - date).num_days(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantEntry {
    pub plant_type: String,
    pub count: u32,
    pub tolerance: FrostTolerance,
    pub avg_per_plant: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantingSafety {
    pub plant_type: String,
    pub safe: bool,
    pub safe_from: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldEstimate {
    pub plant_type: String,
    pub count: u32,
    pub per_plant: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldSummary {
    pub total: f64,
    pub items: Vec<YieldEstimate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantingRecord {
    pub plant_name: String,
    pub date: NaiveDate,
    /// Id of a registered container. Stored as given and never resolved here.
    pub container_id: Option<String>,
}

impl PlantingRecord {
    pub fn season(&self) -> Season {
        Season::of(self.date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompostSplit {
    pub volume: f64,
    pub ratio: f64,
    pub compost: f64,
    pub soil: f64,
}

impl CompostSplit {
    pub fn compost_cubic_feet(&self) -> f64 {
        crate::utils::units::cubic_inches_to_feet(self.compost)
    }

    pub fn soil_cubic_feet(&self) -> f64 {
        crate::utils::units::cubic_inches_to_feet(self.soil)
    }
}
