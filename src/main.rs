use chrono::Local;
use clap::Parser;
use garden_planner::utils::dates::parse_date;
use garden_planner::utils::{logger, validation::Validate};
use garden_planner::{CliConfig, ErrorCategory, GardenError, GardenPlanner, OutputFormat, PlanConfig};

fn run(config: &CliConfig) -> Result<(), GardenError> {
    // 驗證參數
    config.validate()?;

    let today = match &config.today {
        Some(value) => parse_date(value)?,
        None => Local::now().date_naive(),
    };

    // 載入計畫並建立報表
    let plan = PlanConfig::from_file(&config.plan)?;
    let planner = GardenPlanner::from_config(&plan)?;
    let report = planner.report(today, config.season.as_deref())?;

    match config.format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting garden-planner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ Planning failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 依錯誤類別決定退出碼
        let exit_code = match e.category() {
            ErrorCategory::InvalidInput | ErrorCategory::UnsupportedVariant => 1,
            ErrorCategory::NotFound => 2,
            ErrorCategory::Configuration => 3,
            ErrorCategory::System => 4,
        };
        std::process::exit(exit_code);
    }
}
