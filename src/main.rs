use clap::Parser;
use fn_tour::app::demos;
use fn_tour::utils::logger;
use fn_tour::{CliConfig, OutputFormat, TourEngine, TourError, TourSettings};

fn main() {
    let config = CliConfig::parse();

    if config.list {
        for demo in demos::all() {
            println!("{:<20} {}", demo.name(), demo.description());
        }
        return;
    }

    // 初始化日誌
    if config.format == Some(OutputFormat::Json) {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting fn-tour");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Tour failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.severity().exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<(), TourError> {
    let settings = TourSettings::from_cli(config)?;
    if settings.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = TourEngine::from_config(&settings)?.new_with_monitoring(settings.monitor);

    match settings.format {
        OutputFormat::Text => {
            engine.run_with(|report| println!("{}", report.to_text()))?;
        }
        OutputFormat::Json => {
            let report = engine.run()?;
            println!("{}", report.to_json()?);
        }
    }

    Ok(())
}
