use crate::types::error::AppError;
use std::collections::BTreeMap;

/// Collects per-field messages at the mutation boundary and converts them
/// into a single `VALIDATION_ERROR` keyed by field name.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn require(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.push(field, message);
        }
    }

    pub fn require_filled(&mut self, field: &str, value: &str) {
        self.require(!value.trim().is_empty(), field, "is required");
    }

    pub fn require_email(&mut self, field: &str, value: &str) {
        self.require_filled(field, value);
        if !value.trim().is_empty() {
            let looks_like_email = value.contains('@') && !value.starts_with('@') && !value.ends_with('@');
            self.require(looks_like_email, field, "is not a valid email address");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn finish(self, message: &str) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation {
                message: message.to_string(),
                details: self.errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collector_passes() {
        assert!(FieldErrors::new().finish("Invalid input").is_ok());
    }

    #[test]
    fn missing_field_is_keyed_by_name() {
        let mut errs = FieldErrors::new();
        errs.require_filled("name", "   ");
        let err = errs.finish("Invalid input").unwrap_err();
        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(details.get("name").map(String::as_str), Some("is required"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errs = FieldErrors::new();
        errs.require_email("email", "not-an-email");
        errs.push("email", "second message");
        let err = errs.finish("Invalid input").unwrap_err();
        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(
                    details.get("email").map(String::as_str),
                    Some("is not a valid email address")
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
