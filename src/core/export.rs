use crate::core::encoder::normalize_message;
use crate::domain::model::{as_millis_f64, Element, FlashPlan};
use crate::utils::error::{MorseError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const SUPPORTED_FORMATS: [&str; 3] = ["text", "json", "csv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Text => "morse.txt",
            ExportFormat::Json => "morse.json",
            ExportFormat::Csv => "morse.csv",
        }
    }

    pub fn render(&self, plan: &FlashPlan) -> Result<Vec<u8>> {
        match self {
            ExportFormat::Text => Ok(render_text(plan).into_bytes()),
            ExportFormat::Json => render_json(plan, Utc::now()),
            ExportFormat::Csv => render_csv(plan),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = MorseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(MorseError::InvalidConfigValueError {
                field: "formats".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", SUPPORTED_FORMATS.join(", ")),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Text => "text",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

pub fn parse_formats(names: &[String]) -> Result<Vec<ExportFormat>> {
    let mut formats = Vec::new();
    for name in names {
        let format: ExportFormat = name.parse()?;
        if !formats.contains(&format) {
            formats.push(format);
        }
    }
    Ok(formats)
}

/// `.`/`-` notation: letters separated by a space, words by `" / "`.
pub fn morse_notation<'a>(elements: impl IntoIterator<Item = &'a Element>) -> String {
    let mut out = String::new();
    for element in elements {
        match element {
            Element::Dot => out.push('.'),
            Element::Dash => out.push('-'),
            Element::IntraCharacterGap => {}
            Element::InterLetterGap => out.push(' '),
            Element::InterWordGap => out.push_str(" / "),
        }
    }
    out
}

/// Timing diagram: `=` per lit unit, `.` per dark unit.
pub fn timeline<'a>(elements: impl IntoIterator<Item = &'a Element>) -> String {
    let mut out = String::new();
    for element in elements {
        let mark = if element.is_gap() { '.' } else { '=' };
        out.extend(std::iter::repeat(mark).take(element.units() as usize));
    }
    out
}

pub fn render_text(plan: &FlashPlan) -> String {
    let elements: Vec<Element> = plan.elements().collect();
    format!(
        "message: {}\nmorse: {}\ntimeline: {}\n",
        normalize_message(&plan.message),
        morse_notation(&elements),
        timeline(&elements)
    )
}

#[derive(Serialize)]
struct JsonExport<'a> {
    generated_at: DateTime<Utc>,
    total_units: u64,
    total_duration_ms: f64,
    lit_ratio: f64,
    #[serde(flatten)]
    plan: &'a FlashPlan,
}

pub fn render_json(plan: &FlashPlan, generated_at: DateTime<Utc>) -> Result<Vec<u8>> {
    let total = plan.total_duration();
    let lit_ratio = if total.is_zero() {
        0.0
    } else {
        plan.lit_duration().as_secs_f64() / total.as_secs_f64()
    };

    let export = JsonExport {
        generated_at,
        total_units: plan.total_units(),
        total_duration_ms: as_millis_f64(total),
        lit_ratio,
        plan,
    };
    Ok(serde_json::to_vec_pretty(&export)?)
}

#[derive(Serialize)]
struct CsvRow {
    index: usize,
    element: &'static str,
    lit: bool,
    units: u32,
    duration_ms: f64,
}

pub fn render_csv(plan: &FlashPlan) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if plan.is_empty() {
        writer.write_record(["index", "element", "lit", "units", "duration_ms"])?;
    }
    for (index, pulse) in plan.pulses.iter().enumerate() {
        writer.serialize(CsvRow {
            index,
            element: pulse.element.name(),
            lit: pulse.lit,
            units: pulse.units,
            duration_ms: as_millis_f64(pulse.duration),
        })?;
    }
    writer
        .into_inner()
        .map_err(|e| MorseError::IoError(e.into_error()))
}
