mod cli;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::info;

use cli::{Cli, OutputFormat};
use growth_screen::{
    GeminiGenerator, NarrativeGenerator, ScreeningConfig, ScreeningReport,
    load_reference_tables, narrate, screen,
};

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = ScreeningConfig::default()
        .with_reference_dir(cli.reference_dir.clone())
        .with_api_key(cli.api_key.clone());
    config.narrative.model = cli.model.clone();
    config.narrative.timeout = Duration::from_secs(cli.timeout_secs);

    let input = cli.measurement();
    input.validate().context("Invalid measurement")?;

    let tables = load_reference_tables(&config.reference).with_context(|| {
        format!(
            "Failed to load WHO reference tables from {}",
            config.reference.directory.display()
        )
    })?;

    let outcome = screen(&tables, &input);
    let report = ScreeningReport::new(input.identity(&cli.name), input.measurement_date, &outcome);
    info!("Screened {} ({} months)", cli.name, input.age_months);

    let narrative = if cli.no_narrative {
        None
    } else {
        let generator = GeminiGenerator::from_config(&config.narrative)
            .context("Failed to set up narrative client")?;
        let generator = generator.as_ref().map(|g| g as &dyn NarrativeGenerator);
        Some(narrate(generator, &report, config.narrative.timeout).await)
    };

    match cli.format {
        OutputFormat::Text => {
            print!("{}", report.render_text());
            if let Some(narrative) = &narrative {
                println!();
                println!("Advice");
                println!("{narrative}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "report": report,
                "narrative": narrative,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
