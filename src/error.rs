//! Error type shared by every person field, the builder and the record DTO.

use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("The {field} view is read-only and cannot be modified")]
    UnsupportedModification { field: &'static str },

    #[error("Invalid person record: {0}")]
    InvalidRecord(String),
}

impl ModelError {
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }
    pub fn unsupported_modification(field: &'static str) -> Self {
        Self::UnsupportedModification { field }
    }

    /// Name of the field the error refers to, when there is exactly one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ModelError::InvalidField { field, .. }
            | ModelError::MissingField { field }
            | ModelError::UnsupportedModification { field } => Some(field),
            ModelError::InvalidRecord(_) => None,
        }
    }
}

impl From<ValidationErrors> for ModelError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let reasons: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                format!("{} ({})", field, reasons.join(", "))
            })
            .collect();
        fields.sort();

        Self::InvalidRecord(fields.join("; "))
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_message() {
        let err = ModelError::invalid_field("phone", "must contain only digits");
        assert_eq!(err.to_string(), "Invalid phone: must contain only digits");
        assert_eq!(err.field(), Some("phone"));
    }

    #[test]
    fn test_missing_field_message() {
        let err = ModelError::missing_field("address");
        assert_eq!(err.to_string(), "Missing required field: address");
        assert_eq!(err.field(), Some("address"));
    }

    #[test]
    fn test_unsupported_modification_message() {
        let err = ModelError::unsupported_modification("tags");
        assert!(err.to_string().contains("tags"));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_invalid_record_has_no_single_field() {
        let err = ModelError::InvalidRecord("email (email)".to_string());
        assert!(err.field().is_none());
    }
}
