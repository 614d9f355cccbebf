//! The process-wide validator and its fail-fast scan.

use crate::error::ValidationError;
use crate::field::Inspect;
use std::sync::OnceLock;

static INSTANCE: OnceLock<Validator> = OnceLock::new();

/// Process-wide validation engine.
///
/// Exactly one instance exists per process, obtained with
/// [`Validator::instance`]. The constructor is private and the type is
/// neither clonable nor deserializable, so no other creation path exists.
#[derive(Debug)]
pub struct Validator {
    _private: (),
}

impl Validator {
    /// The single process-wide instance, created on first access.
    ///
    /// First access goes through a [`OnceLock`], so racing callers all
    /// observe the same instance.
    #[must_use]
    pub fn instance() -> &'static Self {
        INSTANCE.get_or_init(|| Self { _private: () })
    }

    /// Whether the instance has been created yet, without creating it.
    ///
    /// Introspection and test hook only; has no effect on behavior.
    #[must_use]
    pub fn has_instance() -> bool {
        INSTANCE.get().is_some()
    }

    /// Validate a DTO against the rules attached to its fields.
    ///
    /// Walks every field in declaration order and, within a field, every
    /// attached rule in attachment order. The first rule that reports
    /// failure ends the scan: the error names the field and embeds the
    /// rule's message, and no further rules or fields are evaluated.
    ///
    /// The scan only reads field values. All per-call state is local, so
    /// any number of threads may validate concurrently.
    pub fn validate(&self, dto: &dyn Inspect) -> Result<(), ValidationError> {
        for field in dto.fields() {
            for rule in field.rules() {
                if !rule.validate(field.value()) {
                    return Err(ValidationError::new(field.name(), rule.message()));
                }
            }
        }
        Ok(())
    }
}
