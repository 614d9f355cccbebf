//! Built-in rule capabilities.
//!
//! Values reach rules as `&dyn Any`. The probes below cover the primitive
//! string-like and numeric types plus their `Option`s; an absent `Option`
//! passes every rule except [`Required`], and a rule attached to a field
//! type it cannot read fails validation rather than passing silently.

pub mod numeric;
pub mod text;

pub use numeric::{Positive, Range};
pub use text::{Email, Matches, MaxLength, MinLength, NotEmpty};

use crate::rule::Rule;
use std::any::Any;

/// Outcome of reading a `&dyn Any` field value as a particular shape.
pub(crate) enum Probe<T> {
    /// The value is present and readable.
    Value(T),
    /// The field is an `Option` holding `None`.
    Absent,
    /// The value's type is not covered by this probe.
    Foreign,
}

/// Read a value as text. Covers `String`, `&str`, `Box<str>` and their
/// `Option`s.
pub(crate) fn probe_text(value: &dyn Any) -> Probe<&str> {
    if let Some(text) = value.downcast_ref::<String>() {
        return Probe::Value(text);
    }
    if let Some(text) = value.downcast_ref::<&str>() {
        return Probe::Value(text);
    }
    if let Some(text) = value.downcast_ref::<Box<str>>() {
        return Probe::Value(text);
    }
    if let Some(optional) = value.downcast_ref::<Option<String>>() {
        return match optional {
            Some(text) => Probe::Value(text),
            None => Probe::Absent,
        };
    }
    if let Some(optional) = value.downcast_ref::<Option<&str>>() {
        return match optional {
            Some(text) => Probe::Value(text),
            None => Probe::Absent,
        };
    }
    if let Some(optional) = value.downcast_ref::<Option<Box<str>>>() {
        return match optional {
            Some(text) => Probe::Value(text),
            None => Probe::Absent,
        };
    }
    Probe::Foreign
}

/// Read a value as a number, widened to `f64`. Covers the integer and
/// float primitives and their `Option`s.
pub(crate) fn probe_numeric(value: &dyn Any) -> Probe<f64> {
    macro_rules! probe {
        ($($ty:ty),+ $(,)?) => {
            $(
                if let Some(number) = value.downcast_ref::<$ty>() {
                    return Probe::Value(*number as f64);
                }
                if let Some(optional) = value.downcast_ref::<Option<$ty>>() {
                    return match optional {
                        Some(number) => Probe::Value(*number as f64),
                        None => Probe::Absent,
                    };
                }
            )+
        };
    }

    probe!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
    Probe::Foreign
}

/// Fails when an `Option` field holds `None`; present values always pass.
///
/// Non-optional fields trivially pass. Coverage follows the value probes;
/// an `Option` of an unprobed type reads as present.
#[derive(Debug, Clone, Copy)]
pub struct Required;

impl Rule for Required {
    fn validate(&self, value: &dyn Any) -> bool {
        match probe_text(value) {
            Probe::Value(_) => return true,
            Probe::Absent => return false,
            Probe::Foreign => {},
        }
        match probe_numeric(value) {
            Probe::Value(_) | Probe::Foreign => true,
            Probe::Absent => false,
        }
    }

    fn message(&self) -> String {
        "value is required".to_string()
    }
}
