use crate::config::{resolve_dot_length, validate_provider};
use crate::core::ConfigProvider;
use crate::utils::error::{MorseError, Result};
use crate::utils::logger::SUPPORTED_LOG_FORMATS;
use crate::utils::validation::{validate_allowed_values, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub transmission: TransmissionConfig,
    pub timing: Option<TimingConfig>,
    pub output: OutputConfig,
    pub code_table: Option<CodeTableConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransmissionConfig {
    pub name: Option<String>,
    pub message: Option<String>,
    pub message_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimingConfig {
    pub dot_length_ms: Option<u64>,
    pub wpm: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeTableConfig {
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    /// "compact" (default) or "json"
    pub format: Option<String>,
}

fn default_formats() -> Vec<String> {
    vec!["text".to_string()]
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MorseError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MorseError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MorseError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(format) = self.log_format() {
            validate_allowed_values(
                "logging.format",
                &[format.trim().to_ascii_lowercase()],
                &SUPPORTED_LOG_FORMATS,
            )?;
        }
        validate_provider(self)
    }

    pub fn name(&self) -> &str {
        self.transmission.name.as_deref().unwrap_or("unnamed")
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn log_format(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.format.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn message(&self) -> Option<&str> {
        self.transmission.message.as_deref()
    }

    fn message_file(&self) -> Option<&str> {
        self.transmission.message_file.as_deref()
    }

    fn dot_length(&self) -> Result<Duration> {
        let timing = self.timing.clone().unwrap_or_default();
        resolve_dot_length(timing.dot_length_ms, timing.wpm)
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn extra_codes(&self) -> Option<&BTreeMap<String, String>> {
        self.code_table.as_ref().map(|t| &t.extra)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
