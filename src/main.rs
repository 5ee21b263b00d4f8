use clap::Parser;
use saathi::core::config::{SaathiConfig, load_config, resolve};
use saathi::core::model::{Language, Theme};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "saathi", about = "Travel safety companion for the terminal")]
struct Args {
    /// Colour theme (overrides config and SAATHI_THEME)
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// UI language (overrides config and SAATHI_LANGUAGE)
    #[arg(long, value_enum)]
    language: Option<Language>,

    /// Start without the first-launch onboarding screen
    #[arg(long)]
    skip_onboarding: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to saathi.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("saathi.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        SaathiConfig::default()
    });
    let mut config = resolve(&file_config, args.theme, args.language);
    config.skip_onboarding = args.skip_onboarding;

    log::info!(
        "Saathi starting up (theme: {:?}, language: {:?})",
        config.theme,
        config.language
    );

    saathi::tui::run(config)
}
