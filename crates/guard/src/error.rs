//! The single validation failure kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure raised for the first violated rule on a DTO.
///
/// Carries the offending field's name and the failing rule's message, and
/// renders as `Validation error on property "<field>": <message>`. There is
/// exactly one failure per validation call; the scan stops where it is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    field: Box<str>,
    message: Box<str>,
}

impl ValidationError {
    /// Build a failure for `field` from the failing rule's message.
    pub fn new(field: impl Into<Box<str>>, message: impl Into<Box<str>>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The failing rule's own message.
    #[must_use]
    pub fn rule_message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Validation error on property \"{}\": {}",
            self.field, self.message
        )
    }
}

impl std::error::Error for ValidationError {}
