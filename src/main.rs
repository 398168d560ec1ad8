use clap::Parser;
use morse_flash::core::export::render_text;
use morse_flash::utils::error::MorseError;
use morse_flash::utils::{logger, validation::Validate};
use morse_flash::{CliConfig, LocalStorage, MorsePipeline, TransmitEngine};

fn fail(context: &str, e: &MorseError) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting morse-flash");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail("Configuration validation failed", &e);
    }

    let dry_run = config.dry_run;
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = match MorsePipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => fail("Could not build code table", &e),
    };

    let engine = TransmitEngine::new_with_dry_run(pipeline, dry_run);

    match engine.run().await {
        Ok(report) => {
            print!("{}", render_text(&report.plan));
            for output in &report.outputs {
                println!("📁 Output saved to: {}", output);
            }
        }
        Err(e) => fail("Transmission planning failed", &e),
    }

    Ok(())
}
