use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    BadRequest,
    ValidationError,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error shared by the UI and data layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Build a validation error where every listed field is reported as required.
    pub fn missing_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        let field_errors: HashMap<String, String> = fields
            .into_iter()
            .map(|f| (f.to_string(), "required".to_string()))
            .collect();
        let mut names: Vec<&str> = field_errors.keys().map(String::as_str).collect();
        names.sort_unstable();
        let message = format!("Missing required fields: {}", names.join(", "));
        Self::validation(message, field_errors)
    }

    /// Whether the given field was flagged by this error.
    pub fn has_field_error(&self, field: &str) -> bool {
        self.field_errors.contains_key(field)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_includes_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "required".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors.get("name").unwrap(), "required");
    }

    #[test]
    fn missing_fields_lists_every_field_sorted() {
        let err = AppError::missing_fields(["handout", "name"]);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.message, "Missing required fields: handout, name");
        assert!(err.has_field_error("name"));
        assert!(err.has_field_error("handout"));
        assert!(!err.has_field_error("due_at"));
    }

    #[test]
    fn bad_request_has_no_field_errors() {
        let err = AppError::bad_request("unreadable file");
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::internal("logger unavailable");
        assert_eq!(format!("{}", err), "InternalError: logger unavailable");
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = AppError::missing_fields(["due_at"]);
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }

    #[test]
    fn empty_field_errors_are_not_serialized() {
        let json = serde_json::to_string(&AppError::bad_request("x")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
