use crate::utils::error::{MorseError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MorseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MorseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MorseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_allowed_values(field_name: &str, values: &[String], allowed: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed.iter().copied().collect();

    if values.is_empty() {
        return Err(MorseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: format!("At least one value required. Allowed values: {}", allowed.join(", ")),
        });
    }

    for value in values {
        if !allowed_set.contains(value.as_str()) {
            return Err(MorseError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: format!("Unsupported value. Allowed values: {}", allowed.join(", ")),
            });
        }
    }

    Ok(())
}

/// Exactly one of the two options must be present.
pub fn validate_exactly_one<A, B>(
    first_name: &str,
    first: &Option<A>,
    second_name: &str,
    second: &Option<B>,
) -> Result<()> {
    match (first.is_some(), second.is_some()) {
        (true, false) | (false, true) => Ok(()),
        (false, false) => Err(MorseError::MissingConfigError {
            field: format!("{} or {}", first_name, second_name),
        }),
        (true, true) => Err(MorseError::ConfigValidationError {
            field: first_name.to_string(),
            message: format!("'{}' and '{}' are mutually exclusive", first_name, second_name),
        }),
    }
}

pub fn validate_single_char(field_name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(MorseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Key must be exactly one character".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("wpm", 20u32, 1, 100).is_ok());
        assert!(validate_range("wpm", 0u32, 1, 100).is_err());
        assert!(validate_range("wpm", 101u32, 1, 100).is_err());
    }

    #[test]
    fn test_validate_allowed_values() {
        let formats = vec!["text".to_string(), "csv".to_string()];
        assert!(validate_allowed_values("formats", &formats, &["text", "json", "csv"]).is_ok());

        let invalid = vec!["xml".to_string()];
        assert!(validate_allowed_values("formats", &invalid, &["text", "json", "csv"]).is_err());
        assert!(validate_allowed_values("formats", &[], &["text"]).is_err());
    }

    #[test]
    fn test_validate_exactly_one() {
        let some: Option<String> = Some("SOS".to_string());
        let none: Option<String> = None;
        assert!(validate_exactly_one("message", &some, "message_file", &none).is_ok());
        assert!(validate_exactly_one("message", &none, "message_file", &some).is_ok());
        assert!(validate_exactly_one("message", &none, "message_file", &none).is_err());
        assert!(validate_exactly_one("message", &some, "message_file", &some).is_err());
    }

    #[test]
    fn test_validate_single_char() {
        assert_eq!(validate_single_char("code_table.extra", "Ü").unwrap(), 'Ü');
        assert!(validate_single_char("code_table.extra", "").is_err());
        assert!(validate_single_char("code_table.extra", "AB").is_err());
    }
}
