use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One timed unit of encoded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// Short signal
    Dot,
    /// Long signal
    Dash,
    /// Gap between the symbols of one character
    IntraCharacterGap,
    /// Gap between two characters of a word
    InterLetterGap,
    /// Gap emitted for every word separator
    InterWordGap,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Dot,
        Element::Dash,
        Element::IntraCharacterGap,
        Element::InterLetterGap,
        Element::InterWordGap,
    ];

    /// Gaps render as "off", signals as "on".
    pub const fn is_gap(&self) -> bool {
        match self {
            Element::Dot | Element::Dash => false,
            Element::IntraCharacterGap | Element::InterLetterGap | Element::InterWordGap => true,
        }
    }

    pub const fn is_signal(&self) -> bool {
        !self.is_gap()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Element::Dot => "dot",
            Element::Dash => "dash",
            Element::IntraCharacterGap => "intra_character_gap",
            Element::InterLetterGap => "inter_letter_gap",
            Element::InterWordGap => "inter_word_gap",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An element with its absolute hold time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pulse {
    pub element: Element,
    pub lit: bool,
    pub units: u32,
    #[serde(rename = "duration_ms", with = "millis")]
    pub duration: Duration,
}

/// Renderer-side schedule for one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashPlan {
    pub message: String,
    #[serde(rename = "dot_length_ms", with = "millis")]
    pub base_unit: Duration,
    pub pulses: Vec<Pulse>,
}

impl FlashPlan {
    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.pulses.iter().map(|p| p.element)
    }

    pub fn total_units(&self) -> u64 {
        self.pulses.iter().map(|p| u64::from(p.units)).sum()
    }

    /// Saturates at `Duration::MAX` for hand-built plans whose sum overflows.
    pub fn total_duration(&self) -> Duration {
        self.pulses
            .iter()
            .fold(Duration::ZERO, |acc, p| acc.saturating_add(p.duration))
    }

    pub fn lit_duration(&self) -> Duration {
        self.pulses
            .iter()
            .filter(|p| p.lit)
            .fold(Duration::ZERO, |acc, p| acc.saturating_add(p.duration))
    }
}

/// Milliseconds with microsecond precision.
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_micros() as f64 / 1000.0
}

/// Durations cross the serde boundary as fractional milliseconds.
mod millis {
    use super::as_millis_f64;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(as_millis_f64(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let ms = f64::deserialize(deserializer)?;
        if !ms.is_finite() || ms < 0.0 {
            return Err(serde::de::Error::custom("duration must be a non-negative number"));
        }
        Ok(Duration::from_micros((ms * 1000.0).round() as u64))
    }
}
