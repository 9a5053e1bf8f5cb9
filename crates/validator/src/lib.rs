//! # formkit-validator
//!
//! Small, composable string validators for form and prompt inputs.
//!
//! ## Quick Start
//!
//! ```
//! use formkit_validator::prelude::*;
//!
//! let username = not_empty().and(length_range(3, 20));
//! assert!(username.validate("alice").is_ok());
//! assert_eq!(
//!     username.validate("").unwrap_err().to_string(),
//!     "input cannot be empty"
//! );
//!
//! let color = one_of(["red", "blue"]);
//! assert_eq!(
//!     color.validate("green").unwrap_err().to_string(),
//!     "invalid option: green"
//! );
//! ```
//!
//! ## Built-in Validators
//!
//! - [`NotEmpty`](validators::NotEmpty), [`MinLength`](validators::MinLength),
//!   [`MaxLength`](validators::MaxLength), [`LengthRange`](validators::LengthRange)
//! - [`OneOf`](validators::OneOf)
//!
//! Lengths count Unicode scalar values, not bytes.
//!
//! ## Configuration
//!
//! Rules can also be described as data with [`rule::ValidationRule`] and
//! built into validators at runtime.

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rule;
pub mod validators;
