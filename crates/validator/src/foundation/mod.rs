//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`
//!
//! # Architecture
//!
//! Validators are small immutable values created by factory functions
//! (`min_length(3)`, `one_of(["a", "b"])`, ...). Each one checks a single
//! string and returns either `Ok(())` or exactly one [`ValidationError`].
//! Composition happens by one validator invoking another:
//!
//! ```
//! use formkit_validator::prelude::*;
//!
//! let username = min_length(3).and(max_length(20));
//! assert!(username.validate("alice").is_ok());
//! assert_eq!(
//!     username.validate("al").unwrap_err().to_string(),
//!     "input must be at least 3 characters long"
//! );
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationResult};
pub use traits::{Validate, ValidateExt};

/// Counts Unicode scalar values in `input`, the unit all length checks use.
///
/// Saturates at `i64::MAX`, which no real input reaches.
#[inline]
#[must_use]
pub fn char_count(input: &str) -> i64 {
    i64::try_from(input.chars().count()).unwrap_or(i64::MAX)
}
