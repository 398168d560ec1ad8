use anyhow::Context;
use clap::Parser;
use morse_flash::config::toml_config::TomlConfig;
use morse_flash::core::export::render_text;
use morse_flash::core::ConfigProvider;
use morse_flash::utils::{logger, validation::Validate};
use morse_flash::{LocalStorage, MorsePipeline, TransmitEngine};

#[derive(Parser)]
#[command(name = "toml-flash")]
#[command(about = "Morse flash planner with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "morse-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the message from the config
    #[arg(long)]
    message: Option<String>,

    /// Override the speed from the config
    #[arg(long)]
    wpm: Option<u32>,

    /// Dry run - encode and show the plan without writing exports
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    logger::init_with_format(config.log_format(), args.verbose || config.verbose());

    tracing::info!("🚀 Starting TOML-based morse flash planner");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(message) = args.message {
        config.transmission.message = Some(message);
        config.transmission.message_file = None;
        tracing::info!("🔧 Message overridden from the command line");
    }
    if let Some(wpm) = args.wpm {
        config.timing.get_or_insert_with(Default::default).wpm = Some(wpm);
        tracing::info!("🔧 Speed overridden to: {} wpm", wpm);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = MorsePipeline::new(storage, config)
        .context("Failed to build the morse code table")?;
    let engine = TransmitEngine::new_with_dry_run(pipeline, args.dry_run);

    match engine.run().await {
        Ok(report) => {
            print!("{}", render_text(&report.plan));
            for output in &report.outputs {
                println!("📁 Output saved to: {}", output);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Transmission planning failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("   Name: {}", config.name());
    match (config.message(), config.message_file()) {
        (Some(message), _) => tracing::info!("   Message: {:?}", message),
        (None, Some(path)) => tracing::info!("   Message file: {}", path),
        (None, None) => {}
    }
    if let Ok(dot_length) = config.dot_length() {
        tracing::info!("   Dot length: {:?}", dot_length);
    }
    tracing::info!("   Output: {}", config.output_path());
    tracing::info!("   Formats: {}", config.output_formats().join(", "));
    if let Some(extra) = config.extra_codes() {
        tracing::info!("   Extra codes: {}", extra.len());
    }
}
