//! The rule capability contract consumed by the validator.

use std::any::Any;

/// A single validation rule, evaluable against one field value.
///
/// Implementations are stateless per invocation; construction-time
/// parameters (a minimum length, range bounds) are fine. The validator
/// discovers rules as trait objects, so any implementor matches regardless
/// of its concrete type.
///
/// A rule that panics instead of returning a verdict is a rule-author
/// defect; the validator does not catch it.
pub trait Rule {
    /// Check one value. Returns true when the value satisfies the rule.
    fn validate(&self, value: &dyn Any) -> bool;

    /// The rule's own failure message, embedded into the validation error.
    fn message(&self) -> String;
}
