//! Element timing.
//!
//! Elements only carry relative lengths; a renderer picks the length of one
//! unit (the dot length) and multiplies.

use crate::domain::model::{Element, FlashPlan, Pulse};
use crate::utils::error::{MorseError, Result};
use std::time::Duration;

/// Standard timing: 1 WPM = 1200ms per unit ("PARIS " is 50 units).
const MS_PER_UNIT_AT_1WPM: u64 = 1200;

pub const MIN_WPM: u32 = 1;
pub const MAX_WPM: u32 = 100;

pub const fn relative_units(element: Element) -> u32 {
    match element {
        Element::Dot => 1,
        Element::Dash => 3,
        Element::IntraCharacterGap => 1,
        Element::InterLetterGap => 3,
        Element::InterWordGap => 7,
    }
}

impl Element {
    pub const fn units(&self) -> u32 {
        relative_units(*self)
    }
}

/// How long `element` is held when one unit lasts `base_unit`.
///
/// # Panics
///
/// Panics if the result overflows `Duration`. [`checked_duration`] does not.
pub fn duration(element: Element, base_unit: Duration) -> Duration {
    base_unit * relative_units(element)
}

pub fn checked_duration(element: Element, base_unit: Duration) -> Option<Duration> {
    base_unit.checked_mul(relative_units(element))
}

pub fn dot_length_from_wpm(wpm: u32) -> Result<Duration> {
    if !(MIN_WPM..=MAX_WPM).contains(&wpm) {
        return Err(MorseError::InvalidConfigValueError {
            field: "wpm".to_string(),
            value: wpm.to_string(),
            reason: format!("Value must be between {} and {}", MIN_WPM, MAX_WPM),
        });
    }
    Ok(Duration::from_micros(MS_PER_UNIT_AT_1WPM * 1000 / u64::from(wpm)))
}

pub fn total_units(elements: &[Element]) -> u64 {
    elements.iter().map(|e| u64::from(e.units())).sum()
}

impl FlashPlan {
    pub fn build(
        message: impl Into<String>,
        elements: &[Element],
        base_unit: Duration,
    ) -> Result<Self> {
        if base_unit.is_zero() {
            return Err(MorseError::InvalidConfigValueError {
                field: "dot_length".to_string(),
                value: "0".to_string(),
                reason: "Dot length must be greater than zero".to_string(),
            });
        }

        let too_long = || MorseError::InvalidConfigValueError {
            field: "dot_length".to_string(),
            value: format!("{:?}", base_unit),
            reason: "Dot length is too large to schedule this message".to_string(),
        };

        // The running total is checked too, so the plan's sums cannot overflow.
        let mut total = Duration::ZERO;
        let mut pulses = Vec::with_capacity(elements.len());
        for &element in elements {
            let duration = checked_duration(element, base_unit).ok_or_else(too_long)?;
            total = total.checked_add(duration).ok_or_else(too_long)?;
            pulses.push(Pulse {
                element,
                lit: element.is_signal(),
                units: element.units(),
                duration,
            });
        }

        Ok(Self {
            message: message.into(),
            base_unit,
            pulses,
        })
    }
}
