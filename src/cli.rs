use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use growth_screen::utils::{DateFormatConfig, parse_date_string};
use growth_screen::{MeasurementInput, Sex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "growth-screen")]
#[command(about = "WHO child growth z-score and stunting screening", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the WHO reference tables
    #[arg(long, env = "GROWTH_REFERENCE_DIR", default_value = "data")]
    pub reference_dir: PathBuf,

    /// Child's name
    #[arg(long)]
    pub name: String,

    /// Age in completed months
    #[arg(long = "age", value_parser = clap::value_parser!(u32).range(1..))]
    pub age_months: u32,

    /// Sex (L/P, M/F, male/female)
    #[arg(long, value_parser = parse_sex)]
    pub sex: Sex,

    /// Weight in kg
    #[arg(long = "weight")]
    pub weight_kg: f64,

    /// Recumbent length or standing height in cm
    #[arg(long = "height")]
    pub height_cm: f64,

    /// Head circumference in cm
    #[arg(long = "head")]
    pub head_circumference_cm: f64,

    /// Measurement date (e.g. 2024-08-17 or 17/08/2024)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Skip the narrative advice
    #[arg(long)]
    pub no_narrative: bool,

    /// API key for the narrative service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for narrative advice
    #[arg(long, default_value = "gemini-2.5-flash")]
    pub model: String,

    /// Narrative request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn measurement(&self) -> MeasurementInput {
        MeasurementInput::new(
            self.age_months,
            self.sex,
            self.weight_kg,
            self.height_cm,
            self.head_circumference_cm,
        )
        .with_measurement_date(self.date)
    }
}

fn parse_sex(s: &str) -> Result<Sex, String> {
    s.parse::<Sex>().map_err(|e| e.to_string())
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_date_string(s, &DateFormatConfig::default())
        .ok_or_else(|| format!("unrecognised date '{s}'"))
}
