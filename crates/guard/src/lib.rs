//! # dto-guard
//!
//! Declarative validation for plain data-transfer objects.
//!
//! A DTO declares rules against its fields; the process-wide [`Validator`]
//! walks the fields in declaration order, evaluates each field's rules in
//! attachment order, and fails fast on the first violation with an error
//! naming the field and the rule's own message.
//!
//! ```
//! use dto_guard::{Inspect, Validator};
//!
//! #[derive(Inspect)]
//! struct SignupRequest {
//!     #[rule(not_empty)]
//!     #[rule(min_length = 3)]
//!     name: String,
//!     #[rule(range(min = 13, max = 130))]
//!     age: u32,
//!     #[rule(email)]
//!     contact: Option<String>,
//! }
//!
//! let request = SignupRequest {
//!     name: "ada".to_string(),
//!     age: 36,
//!     contact: None,
//! };
//! assert!(Validator::instance().validate(&request).is_ok());
//!
//! let blank = SignupRequest {
//!     name: "  ".to_string(),
//!     age: 36,
//!     contact: None,
//! };
//! let error = Validator::instance().validate(&blank).unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "Validation error on property \"name\": value must be non-empty",
//! );
//! ```
//!
//! Custom rules implement [`Rule`] and attach through
//! `#[rule(custom = "path::to::constructor")]`, or through a hand-written
//! [`Inspect`] impl when a DTO cannot use the derive.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod error;
pub mod field;
pub mod rule;
pub mod rules;
pub mod validator;

pub use error::ValidationError;
pub use field::{FieldBinding, Inspect};
pub use rule::Rule;
pub use validator::Validator;

/// Derives [`Inspect`] for a struct with named fields; attach rules with
/// `#[rule(...)]` field attributes.
pub use dto_guard_derive::Inspect;
