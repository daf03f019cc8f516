//! Error types for input validation.

use ptnm::Field;
use thiserror::Error;

/// Errors that can occur while validating raw form answers.
///
/// The engine itself never fails, so this is the only error the classifier
/// raises. It lists every offending field so the caller can re-prompt for
/// all of them at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are unanswered or hold an unrecognized
    /// label.
    #[error("missing required fields: {}", join(.0))]
    MissingFields(Vec<Field>),
}

impl ValidationError {
    /// Fields the caller should re-prompt for, in form order.
    pub fn fields(&self) -> &[Field] {
        match self {
            ValidationError::MissingFields(fields) => fields,
        }
    }
}

fn join(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for validation.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
