//! Prelude module for convenient imports.
//!
//! Provides a single `use formkit_validator::prelude::*;` import that brings
//! in the traits, error type, validators and rule configuration.
//!
//! # Examples
//!
//! ```
//! use formkit_validator::prelude::*;
//!
//! let username = min_length(3).and(max_length(20));
//! assert!(username.validate("bob").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationResult};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    LengthRange, MaxLength, MinLength, NotEmpty, OneOf, length_range, max_length, min_length,
    not_empty, one_of,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::And;

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::rule::{BoxedValidator, RuleError, ValidationRule};
