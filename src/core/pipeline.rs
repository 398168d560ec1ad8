use crate::core::code_table::CodeTable;
use crate::core::encoder::{MessageEncoder, WORD_SEPARATOR};
use crate::core::export::parse_formats;
use crate::core::{ConfigProvider, FlashPlan, Pipeline, Storage};
use crate::utils::error::{MorseError, Result};
use crate::utils::validation::validate_single_char;
use std::borrow::Cow;
use std::path::Path;

/// Builds the code table a config asks for: the standard one, or a copy
/// with the configured extra codes.
pub fn code_table_for<C: ConfigProvider + ?Sized>(config: &C) -> Result<Cow<'static, CodeTable>> {
    let Some(extra) = config.extra_codes().filter(|extra| !extra.is_empty()) else {
        return Ok(Cow::Borrowed(CodeTable::standard()));
    };

    let mut entries = Vec::with_capacity(extra.len());
    for (key, code) in extra {
        let character = validate_single_char("code_table.extra", key)?;
        if character == WORD_SEPARATOR {
            return Err(MorseError::InvalidConfigValueError {
                field: "code_table.extra".to_string(),
                value: key.clone(),
                reason: "The word separator cannot have a code".to_string(),
            });
        }
        entries.push((character, code.as_str()));
    }
    tracing::debug!("Extending code table with {} entries", entries.len());
    Ok(Cow::Owned(CodeTable::standard().with_extra(entries)?))
}

pub struct MorsePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    table: Cow<'static, CodeTable>,
}

impl<S: Storage, C: ConfigProvider> MorsePipeline<S, C> {
    /// Fails if the configured extra codes are malformed, before anything is encoded.
    pub fn new(storage: S, config: C) -> Result<Self> {
        let table = code_table_for(&config)?;
        Ok(Self {
            storage,
            config,
            table,
        })
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MorsePipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        if let Some(message) = self.config.message() {
            return Ok(message.to_string());
        }

        let path = self
            .config
            .message_file()
            .ok_or_else(|| MorseError::MissingConfigError {
                field: "message or message_file".to_string(),
            })?;

        tracing::debug!("Reading message from: {}", path);
        let raw = tokio::fs::read(path).await?;
        let message = String::from_utf8(raw).map_err(|e| MorseError::ProcessingError {
            message: format!("Message file '{}' is not valid UTF-8: {}", path, e),
        })?;

        // Files usually end with a newline; it is not part of the message.
        Ok(message.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    async fn transform(&self, message: String) -> Result<FlashPlan> {
        let encoder = MessageEncoder::new(&self.table);

        let unsupported = encoder.unsupported_chars(&message);
        if !unsupported.is_empty() {
            tracing::warn!(
                "Characters without morse code will be skipped: {:?}",
                unsupported
            );
        }

        let elements = encoder.encode(&message);
        if elements.is_empty() {
            tracing::warn!("Message produced no morse elements");
        }

        let plan = FlashPlan::build(message, &elements, self.config.dot_length()?)?;
        tracing::debug!(
            "Planned {} pulses, {} units, {:?}",
            plan.len(),
            plan.total_units(),
            plan.total_duration()
        );
        Ok(plan)
    }

    async fn load(&self, plan: &FlashPlan) -> Result<Vec<String>> {
        let formats = parse_formats(self.config.output_formats())?;
        let mut written = Vec::with_capacity(formats.len());

        for format in formats {
            let data = format.render(plan)?;
            self.storage.write_file(format.file_name(), &data).await?;

            let full_path = Path::new(self.config.output_path()).join(format.file_name());
            tracing::debug!("Wrote {} export ({} bytes)", format, data.len());
            written.push(full_path.to_string_lossy().into_owned());
        }

        Ok(written)
    }
}
