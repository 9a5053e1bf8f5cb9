//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must implement.

use crate::combinators::And;
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator is an immutable value built once, typically when a form field
/// is defined, and invoked any number of times afterwards. Validators hold
/// no mutable state, so the same instance can be shared across threads.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::invalid_option(input))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("alice").is_ok());
/// assert!(NoSpaces.validate("alice smith").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V> Validate for Box<V>
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// `Validate`.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// The left validator runs first; if it fails its error is returned and
    /// the right validator is never consulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::prelude::*;
    ///
    /// let validator = min_length(3).and(max_length(10));
    /// assert!(validator.validate("hello").is_ok());
    /// assert!(validator.validate("hi").is_err()); // too short
    /// assert!(validator.validate("verylongstring").is_err()); // too long
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Turns the validator into a plain closure.
    ///
    /// Handy for form libraries that accept validation callbacks rather than
    /// trait objects.
    ///
    /// # Examples
    ///
    /// ```
    /// use formkit_validator::prelude::*;
    ///
    /// let check = one_of(["red", "blue"]).into_fn();
    /// assert!(check("red").is_ok());
    /// assert_eq!(
    ///     check("green").unwrap_err().to_string(),
    ///     "invalid option: green"
    /// );
    /// ```
    fn into_fn(self) -> impl Fn(&Self::Input) -> Result<(), ValidationError> {
        move |input: &Self::Input| self.validate(input)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
