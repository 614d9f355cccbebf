//! Field reflection model: the registration table the validator scans.

use crate::rule::Rule;
use std::any::Any;

/// One field of one DTO instance: its name, current value, and the rules
/// attached to it, first-attached first.
pub struct FieldBinding<'dto> {
    name: &'static str,
    value: &'dto dyn Any,
    rules: Vec<Box<dyn Rule>>,
}

impl<'dto> FieldBinding<'dto> {
    /// Bind a field name to its current value and attached rules.
    pub fn new(name: &'static str, value: &'dto dyn Any, rules: Vec<Box<dyn Rule>>) -> Self {
        Self { name, value, rules }
    }

    /// Field name as reported in validation errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Borrow of the field's current value.
    #[must_use]
    pub fn value(&self) -> &'dto dyn Any {
        self.value
    }

    /// Rules attached to this field, in attachment order.
    #[must_use]
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }
}

/// Exposes a DTO's declared fields, in declaration order, with their
/// attached rules.
///
/// Usually derived with `#[derive(Inspect)]`; the generated impl lives in
/// the DTO's own crate, so private fields stay readable without any
/// visibility override. Implementations must be deterministic: declaration
/// order for fields, attachment order for rules, stable across calls.
pub trait Inspect {
    /// Every declared field in declaration order, including fields with no
    /// attached rules.
    fn fields(&self) -> Vec<FieldBinding<'_>>;
}
