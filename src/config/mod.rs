pub mod cli;
pub mod toml_config;

use crate::core::export::SUPPORTED_FORMATS;
use crate::core::pipeline::code_table_for;
use crate::core::timing::dot_length_from_wpm;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_allowed_values, validate_exactly_one, validate_path, validate_range,
};
use std::time::Duration;

/// Dot length used when neither a dot length nor a speed is configured.
pub const DEFAULT_DOT_LENGTH_MS: u64 = 200;
pub const MAX_DOT_LENGTH_MS: u128 = 60_000;

/// Checks shared by every [`ConfigProvider`].
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_exactly_one(
        "message",
        &config.message(),
        "message_file",
        &config.message_file(),
    )?;

    if let Some(path) = config.message_file() {
        validate_path("message_file", path)?;
    }

    let dot_length = config.dot_length()?;
    validate_range("dot_length_ms", dot_length.as_millis(), 1, MAX_DOT_LENGTH_MS)?;

    let formats: Vec<String> = config
        .output_formats()
        .iter()
        .map(|f| f.trim().to_ascii_lowercase())
        .collect();
    validate_allowed_values("formats", &formats, &SUPPORTED_FORMATS)?;

    validate_path("output_path", config.output_path())?;

    // Extra codes are checked by building the table once.
    code_table_for(config)?;

    Ok(())
}

/// `wpm` wins over `dot_length_ms` when both are set.
pub fn resolve_dot_length(dot_length_ms: Option<u64>, wpm: Option<u32>) -> Result<Duration> {
    match wpm {
        Some(wpm) => dot_length_from_wpm(wpm),
        None => Ok(Duration::from_millis(
            dot_length_ms.unwrap_or(DEFAULT_DOT_LENGTH_MS),
        )),
    }
}

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::*;
    use crate::utils::validation::Validate;
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "morse-flash")]
    #[command(about = "Encode a message as morse code and plan its on/off timing")]
    pub struct CliConfig {
        /// Message to encode
        pub message: Option<String>,

        /// Read the message from a file instead
        #[arg(long, conflicts_with = "message")]
        pub message_file: Option<String>,

        /// Length of one dot in milliseconds
        #[arg(long, default_value_t = DEFAULT_DOT_LENGTH_MS)]
        pub dot_length_ms: u64,

        /// Speed in words per minute; overrides --dot-length-ms
        #[arg(long)]
        pub wpm: Option<u32>,

        #[arg(long, default_value = "./output")]
        pub output_path: String,

        /// Export formats: text, json, csv
        #[arg(long, value_delimiter = ',', default_value = "text")]
        pub formats: Vec<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Encode and plan without writing exports")]
        pub dry_run: bool,
    }

    impl ConfigProvider for CliConfig {
        fn message(&self) -> Option<&str> {
            self.message.as_deref()
        }

        fn message_file(&self) -> Option<&str> {
            self.message_file.as_deref()
        }

        fn dot_length(&self) -> Result<Duration> {
            resolve_dot_length(Some(self.dot_length_ms), self.wpm)
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_provider(self)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_defaults() {
            let config = CliConfig::parse_from(["morse-flash", "SOS"]);
            assert_eq!(config.message.as_deref(), Some("SOS"));
            assert_eq!(config.dot_length().unwrap(), Duration::from_millis(200));
            assert_eq!(config.formats, vec!["text".to_string()]);
            assert_eq!(config.output_path, "./output");
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_wpm_overrides_dot_length() {
            let config = CliConfig::parse_from([
                "morse-flash",
                "SOS",
                "--dot-length-ms",
                "500",
                "--wpm",
                "20",
            ]);
            assert_eq!(config.dot_length().unwrap(), Duration::from_millis(60));
        }

        #[test]
        fn test_formats_are_comma_separated() {
            let config = CliConfig::parse_from(["morse-flash", "SOS", "--formats", "json,csv"]);
            assert_eq!(config.formats, vec!["json".to_string(), "csv".to_string()]);
        }

        #[test]
        fn test_validation_failures() {
            let no_message = CliConfig::parse_from(["morse-flash"]);
            assert!(no_message.validate().is_err());

            let zero_dot = CliConfig::parse_from(["morse-flash", "E", "--dot-length-ms", "0"]);
            assert!(zero_dot.validate().is_err());

            let bad_wpm = CliConfig::parse_from(["morse-flash", "E", "--wpm", "0"]);
            assert!(bad_wpm.validate().is_err());

            let bad_format = CliConfig::parse_from(["morse-flash", "E", "--formats", "xml"]);
            assert!(bad_format.validate().is_err());
        }

        #[test]
        fn test_message_and_file_conflict() {
            let result = CliConfig::try_parse_from([
                "morse-flash",
                "SOS",
                "--message-file",
                "message.txt",
            ]);
            assert!(result.is_err());
        }
    }
}
