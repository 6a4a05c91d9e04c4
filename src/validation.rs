use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// Collects every field problem of a request body before failing.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    /// Absent, `null`, non-string and blank values all count as missing.
    pub fn required(&mut self, field: &str, value: Option<Value>) -> Option<String> {
        match value {
            Some(Value::String(v)) if !v.trim().is_empty() => Some(v),
            _ => {
                self.errors
                    .push(format!("Please provide a value for \"{}\"", field));
                None
            }
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_error(self) -> AppError {
        AppError::Validation(self.errors)
    }
}

/// Non-blank string value of an optional field, anything else is dropped.
pub fn optional(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(v)) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// Decodes a request body into a field bag, whatever its content type.
///
/// Only bytes that are not JSON at all are rejected. An empty body or a JSON value
/// that is not an object yields `T::default()`, leaving every field to the validator.
pub fn parse_body<T>(bytes: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("Malformed JSON body: {}", e)))?;
    match value {
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("Malformed JSON body: {}", e))),
        _ => Ok(T::default()),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}
