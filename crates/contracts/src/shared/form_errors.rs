//! Field level validation errors for admin forms.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Records `message` when `value` is shorter than `min` characters after trimming.
    pub fn require_len(&mut self, field: &'static str, value: &str, min: usize, message: &str) {
        if value.trim().chars().count() < min {
            self.push(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First message reported for `field`, used next to the input.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn into_result<T>(self, ok: T) -> Result<T, FormErrors> {
        if self.is_empty() { Ok(ok) } else { Err(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_len_trims() {
        let mut errors = FormErrors::new();
        errors.require_len("name", "  ab  ", 3, "too short");
        errors.require_len("other", "abc", 3, "too short");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for("name"), Some("too short"));
        assert_eq!(errors.message_for("other"), None);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(FormErrors::new().into_result(5), Ok(5));

        let mut errors = FormErrors::new();
        errors.push("title", "Title is required");
        let err = errors.into_result(5).unwrap_err();
        assert_eq!(err.to_string(), "1 field(s) failed validation");
    }
}
