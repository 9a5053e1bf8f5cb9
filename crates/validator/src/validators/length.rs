//! String length validators
//!
//! Length is always measured in Unicode scalar values (chars), never bytes:
//! `"日本語"` is three characters long even though it takes nine bytes.
//!
//! Thresholds are signed. A negative minimum accepts every input and a
//! negative maximum rejects every input; neither is reported as a
//! configuration error.

use crate::combinators::And;
use crate::foundation::{Validate, ValidateExt, ValidationError, char_count};

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least `min` characters.
    ///
    /// Fails with "input must be at least N characters long".
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: i64 } for str;
    rule(self, input) { char_count(input) >= self.min }
    error(self, input) { ValidationError::too_short(self.min) }
    fn min_length(min: i64);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at most `max` characters.
    ///
    /// Fails with "input must be at most N characters long".
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: i64 } for str;
    rule(self, input) { char_count(input) <= self.max }
    error(self, input) { ValidationError::too_long(self.max) }
    fn max_length(max: i64);
}

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Validates that a string is not empty.
///
/// Runs a [`MinLength`] check with a threshold of one and replaces its error
/// with [`ValidationError::Empty`], so callers see "input cannot be empty"
/// rather than the generic minimum-length message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotEmpty {
    inner: MinLength,
}

impl NotEmpty {
    /// Creates a new `NotEmpty` validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: MinLength { min: 1 },
        }
    }
}

impl Default for NotEmpty {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for NotEmpty {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|_| ValidationError::Empty)
    }
}

/// Creates a [`NotEmpty`] validator.
#[must_use]
pub const fn not_empty() -> NotEmpty {
    NotEmpty::new()
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Validates that a string length is within `min..=max`.
///
/// The minimum check runs first and its error is returned as is; the
/// maximum is only checked once the minimum has passed. `min > max` is not
/// rejected: such a validator simply never succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    inner: And<MinLength, MaxLength>,
}

impl LengthRange {
    /// Creates a new length range validator.
    #[must_use]
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            inner: MinLength::new(min).and(MaxLength::new(max)),
        }
    }

    /// Minimum length (inclusive).
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.inner.left().min
    }

    /// Maximum length (inclusive).
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.inner.right().max
    }
}

impl Validate for LengthRange {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input)
    }
}

/// Creates a [`LengthRange`] validator.
#[must_use]
pub fn length_range(min: i64, max: i64) -> LengthRange {
    LengthRange::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_WIDE: &str = "\u{65e5}\u{672c}\u{8a9e}";

    #[test]
    fn test_min_length_valid() {
        let validator = MinLength::new(3);
        assert!(validator.validate("abc").is_ok());
        assert!(validator.validate("hello world").is_ok());
    }

    #[test]
    fn test_min_length_invalid() {
        let validator = MinLength::new(3);
        let err = validator.validate("ab").unwrap_err();
        assert_eq!(err, ValidationError::too_short(3));
        assert_eq!(err.to_string(), "input must be at least 3 characters long");
    }

    #[test]
    fn test_min_length_zero_and_negative() {
        assert!(min_length(0).validate("").is_ok());
        assert!(min_length(-4).validate("").is_ok());
    }

    #[test]
    fn test_max_length_valid() {
        let validator = MaxLength::new(5);
        assert!(validator.validate("").is_ok());
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn test_max_length_invalid() {
        let err = max_length(5).validate("abcdef").unwrap_err();
        assert_eq!(err.to_string(), "input must be at most 5 characters long");
    }

    #[test]
    fn test_max_length_negative_rejects_everything() {
        assert_eq!(max_length(-1).validate(""), Err(ValidationError::too_long(-1)));
    }

    #[test]
    fn test_not_empty_valid() {
        assert!(not_empty().validate("x").is_ok());
        assert!(not_empty().validate(" ").is_ok()); // whitespace is not empty
    }

    #[test]
    fn test_not_empty_uses_specific_message() {
        let err = NotEmpty::default().validate("").unwrap_err();
        assert_eq!(err, ValidationError::Empty);
        assert_eq!(err.to_string(), "input cannot be empty");
    }

    #[test]
    fn test_length_range_valid() {
        let validator = length_range(2, 4);
        assert!(validator.validate("ab").is_ok());
        assert!(validator.validate("abcd").is_ok());
    }

    #[test]
    fn test_length_range_empty_is_too_short() {
        assert_eq!(
            length_range(2, 4).validate(""),
            Err(ValidationError::too_short(2))
        );
    }

    #[test]
    fn test_length_range_too_long() {
        assert_eq!(
            length_range(2, 4).validate("abcde"),
            Err(ValidationError::too_long(4))
        );
    }

    #[test]
    fn test_length_range_min_above_max_reports_minimum_first() {
        let validator = LengthRange::new(5, 2);
        assert_eq!(validator.min(), 5);
        assert_eq!(validator.max(), 2);
        // too short and too long at once: the minimum wins
        assert_eq!(validator.validate("abc"), Err(ValidationError::too_short(5)));
        assert_eq!(
            validator.validate("abcdefg"),
            Err(ValidationError::too_long(2))
        );
    }

    #[test]
    fn test_unicode_counts_chars_not_bytes() {
        assert_eq!(THREE_WIDE.len(), 9);
        assert!(min_length(3).validate(THREE_WIDE).is_ok());
        assert!(min_length(4).validate(THREE_WIDE).is_err());
        assert!(max_length(3).validate(THREE_WIDE).is_ok());
        assert!(max_length(2).validate(THREE_WIDE).is_err());
        assert!(length_range(3, 3).validate(THREE_WIDE).is_ok());
    }

    #[test]
    fn test_validators_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MinLength>();
        assert_send_sync::<MaxLength>();
        assert_send_sync::<NotEmpty>();
        assert_send_sync::<LengthRange>();
    }
}
