use crate::domain::model::{FrostTolerance, ShapeKind};
use crate::utils::dates::parse_date;
use crate::utils::error::{GardenError, Result};
use crate::utils::units::LengthUnit;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub garden: GardenConfig,
    #[serde(default)]
    pub containers: Vec<ContainerConfig>,
    #[serde(default)]
    pub plants: Vec<PlantConfig>,
    #[serde(default)]
    pub plantings: Vec<PlantingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenConfig {
    pub name: String,
    pub last_frost: String,
    pub first_frost: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerConfig {
    pub id: String,
    pub shape: String,
    pub length: f64,
    pub width: Option<f64>,
    pub depth: f64,
    /// Unit for length/width/depth; inches when omitted.
    pub unit: Option<String>,
    pub compost_ratio: Option<f64>,
    pub soil_ph: Option<f64>,
}

impl ContainerConfig {
    pub fn length_unit(&self) -> Result<LengthUnit> {
        self.unit
            .as_deref()
            .map(str::parse)
            .transpose()
            .map(Option::unwrap_or_default)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantConfig {
    #[serde(rename = "type")]
    pub plant_type: String,
    pub count: u32,
    pub tolerance: Option<String>,
    pub avg_per_plant: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantingConfig {
    pub name: String,
    pub date: String,
    pub container: Option<String>,
}

impl PlanConfig {
    /// 從 TOML 檔案載入種植計畫
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析種植計畫
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LAST_FROST})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GardenError::Config {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證計畫的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("garden.name", &self.garden.name)?;
        parse_date(&self.garden.last_frost)?;
        parse_date(&self.garden.first_frost)?;

        let mut seen = HashSet::new();
        for container in &self.containers {
            validate_non_empty_string("containers.id", &container.id)?;
            if !seen.insert(container.id.as_str()) {
                return Err(GardenError::DuplicateId {
                    id: container.id.clone(),
                });
            }
            container.shape.parse::<ShapeKind>()?;
            container.length_unit()?;
            if let Some(ratio) = container.compost_ratio {
                validate_range("containers.compost_ratio", ratio, 0.0, 1.0)?;
            }
        }

        for plant in &self.plants {
            validate_non_empty_string("plants.type", &plant.plant_type)?;
            if let Some(tolerance) = &plant.tolerance {
                tolerance.parse::<FrostTolerance>()?;
            }
        }

        for planting in &self.plantings {
            validate_non_empty_string("plantings.name", &planting.name)?;
            parse_date(&planting.date)?;
            if let Some(container) = &planting.container {
                if !seen.contains(container.as_str()) {
                    tracing::warn!(
                        "Planting '{}' refers to container '{}', which this plan does not declare",
                        planting.name,
                        container
                    );
                }
            }
        }

        Ok(())
    }

    pub fn location(&self) -> &str {
        self.garden.location.as_deref().unwrap_or(&self.garden.name)
    }
}

impl Validate for PlanConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
