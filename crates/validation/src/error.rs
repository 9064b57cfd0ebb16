//! Validation error types.

use std::fmt;

use thiserror::Error;

/// A profile form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Role,
    Department,
    Phone,
}

impl Field {
    /// All fields, in form order.
    pub fn all() -> [Field; 5] {
        [
            Self::Name,
            Self::Email,
            Self::Role,
            Self::Department,
            Self::Phone,
        ]
    }

    /// Machine-readable field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::Department => "department",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single failing field and the message to show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Errors raised when a draft cannot become a profile.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// One or more fields failed validation.
    #[error("invalid profile fields: {}", field_list(.0))]
    InvalidFields(Vec<FieldError>),
}

impl ValidationError {
    /// The failing fields.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::InvalidFields(errors) => errors,
        }
    }
}

fn field_list(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_lists_fields() {
        let err = ValidationError::InvalidFields(vec![
            FieldError {
                field: Field::Name,
                message: "x".to_string(),
            },
            FieldError {
                field: Field::Phone,
                message: "y".to_string(),
            },
        ]);

        assert_eq!(err.to_string(), "invalid profile fields: name, phone");
        assert_eq!(err.field_errors().len(), 2);
    }
}
