use bmi::config::Config;
use bmi::engine::{BmiEngine, HeightUnit, Outcome, WeightUnit};
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(name = "bmi")]
#[command(about = "Body Mass Index calculator", long_about = None)]
struct Cli {
    /// Log each computation step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute BMI and its category
    Calc {
        /// Weight (e.g., "70" or "154")
        #[arg(allow_negative_numbers = true)]
        weight: String,

        /// Height (e.g., "1.75" in meters or "5'9" in feet and inches)
        #[arg(allow_negative_numbers = true)]
        height: String,

        /// Weight unit: kg or lbs
        #[arg(short, long, default_value = "kg")]
        weight_unit: WeightUnit,

        /// Height unit: m or ft
        #[arg(short = 'u', long, default_value = "ft")]
        height_unit: HeightUnit,

        /// Print the result payload as JSON
        #[arg(long)]
        json: bool,

        /// TOML config with category thresholds
        #[arg(short, long)]
        config: Option<String>,
    },

    /// List categories and their BMI ranges
    Categories {
        /// TOML config with category thresholds
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Calc {
            weight,
            height,
            weight_unit,
            height_unit,
            json,
            config,
        } => calc(
            &weight,
            weight_unit,
            &height,
            height_unit,
            json,
            config.as_deref(),
        ),
        Commands::Categories { config } => list_categories(config.as_deref()),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(verbose: bool) {
    use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let log_config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();

    let _ = TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto);
}

#[cfg(target_arch = "wasm32")]
fn init_logging(_verbose: bool) {}

fn load_engine(config_path: Option<&str>) -> Result<BmiEngine, Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => Config::load_from_file(Path::new(path))?,
        None => Config::default(),
    };
    log::debug!("Using thresholds: {:?}", config.thresholds);
    Ok(BmiEngine::new(&config))
}

/// Returns Ok(false) when the input was rejected
fn calc(
    weight: &str,
    weight_unit: WeightUnit,
    height: &str,
    height_unit: HeightUnit,
    json: bool,
    config_path: Option<&str>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let engine = load_engine(config_path)?;
    let result = engine.compute(weight, weight_unit, height, height_unit);
    let accepted = result.is_ok();

    if json {
        println!("{}", serde_json::to_string_pretty(&Outcome::from(&result))?);
        return Ok(accepted);
    }

    match result {
        Ok(bmi) => {
            println!("Your BMI: {}", bmi.display_value());
            println!("Category: {}", bmi.category);
        }
        Err(e) => eprintln!("{} ({})", e, e.reason),
    }

    Ok(accepted)
}

fn list_categories(config_path: Option<&str>) -> Result<bool, Box<dyn std::error::Error>> {
    let engine = load_engine(config_path)?;

    println!("Categories:");
    for (category, range) in engine.thresholds().describe() {
        println!("  - {:<14} {}", category.label(), range);
    }

    Ok(true)
}
