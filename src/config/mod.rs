pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::dates::parse_date;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "garden-planner")]
#[command(about = "Plan containers, frost-safe planting dates and harvests for a garden")]
pub struct CliConfig {
    #[arg(long, help = "Path to the TOML garden plan")]
    pub plan: String,

    #[arg(long, help = "Date to plan for (MM/DD/YYYY); defaults to today")]
    pub today: Option<String>,

    #[arg(long, help = "Only list plantings from this season")]
    pub season: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("plan", &self.plan)?;
        if let Some(today) = &self.today {
            parse_date(today)?;
        }
        if let Some(season) = &self.season {
            season.parse::<crate::domain::model::Season>()?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_and_validation() {
        let config = CliConfig::parse_from([
            "garden-planner",
            "--plan",
            "plan.toml",
            "--today",
            "04/01/2025",
            "--format",
            "json",
        ]);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.validate().is_ok());

        let bad = CliConfig::parse_from(["garden-planner", "--plan", "plan.toml", "--season", "monsoon"]);
        assert!(bad.validate().is_err());
    }
}
