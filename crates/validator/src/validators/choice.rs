//! Enumeration validator
//!
//! Checks that a string is exactly one of a fixed set of options.

use std::collections::HashSet;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// ONE OF
// ============================================================================

/// Validates that a string is one of the allowed options.
///
/// Matching is exact: case-sensitive, byte-for-byte, with no trimming. The
/// option set is built once at construction; order and duplicates do not
/// matter. An empty option set rejects every input.
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::Validate;
/// use formkit_validator::validators::one_of;
///
/// let color = one_of(["red", "blue"]);
/// assert!(color.validate("red").is_ok());
/// assert_eq!(
///     color.validate("Red").unwrap_err().to_string(),
///     "invalid option: Red"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf {
    options: HashSet<String>,
}

impl OneOf {
    /// Creates a validator accepting exactly the given options.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `value` is an allowed option.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.options.contains(value)
    }

    /// Number of distinct allowed options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if no option is allowed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates over the allowed options in no particular order.
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }
}

impl Validate for OneOf {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.contains(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_option(input))
        }
    }
}

/// Creates a [`OneOf`] validator.
pub fn one_of<I, S>(options: I) -> OneOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOf::new(options)
}

// ============================================================================
// TESTS
// ============================================================================
