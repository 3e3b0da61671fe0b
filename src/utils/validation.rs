//! Validation helpers
//!
//! Parsing of raw form values into typed column values. Every helper
//! treats a missing or blank value as "not provided".

use chrono::NaiveDate;
use validator::ValidationError;

/// Trim a raw value, mapping blank input to `None`.
pub fn clean_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reject values that are empty after trimming
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.message = Some("This field is required".into());
        return Err(error);
    }
    Ok(())
}

pub fn parse_optional_int(value: Option<&str>) -> Result<Option<i32>, ValidationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw.parse::<i32>().map(Some).map_err(|_| {
            let mut error = ValidationError::new("integer");
            error.message = Some("Not a valid integer value".into());
            error.add_param("value".into(), &raw.to_string());
            error
        }),
    }
}

pub fn parse_optional_float(value: Option<&str>) -> Result<Option<f64>, ValidationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => match raw.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(Some(number)),
            _ => {
                let mut error = ValidationError::new("number");
                error.message = Some("Not a valid number".into());
                error.add_param("value".into(), &raw.to_string());
                Err(error)
            }
        },
    }
}

/// Tri-state boolean: absent stays `None`, recognised words map to a value.
pub fn parse_optional_bool(value: Option<&str>) -> Result<Option<bool>, ValidationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(Some(true)),
            "false" | "no" | "off" | "0" => Ok(Some(false)),
            _ => {
                let mut error = ValidationError::new("boolean");
                error.message = Some("Not a valid choice".into());
                error.add_param("value".into(), &raw.to_string());
                Err(error)
            }
        },
    }
}

/// Validate and convert a `YYYY-MM-DD` string to a date
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                let mut error = ValidationError::new("date");
                error.message = Some("Not a valid date value".into());
                error.add_param("value".into(), &raw.to_string());
                error.add_param("format".into(), &"YYYY-MM-DD".to_string());
                error
            }),
    }
}

/// Resolve a required selector against the ids that were on offer.
pub fn parse_choice(value: Option<&str>, choices: &[i32]) -> Result<i32, ValidationError> {
    let raw = match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => raw,
        None => {
            let mut error = ValidationError::new("required");
            error.message = Some("This field is required".into());
            return Err(error);
        }
    };

    match raw.parse::<i32>() {
        Ok(id) if choices.contains(&id) => Ok(id),
        _ => {
            let mut error = ValidationError::new("invalid_choice");
            error.message = Some("Not a valid choice".into());
            error.add_param("value".into(), &raw.to_string());
            Err(error)
        }
    }
}
