//! Error types for validation failures
//!
//! Every validator reports at most one [`ValidationError`]. The `Display`
//! output of each variant is the human-readable message shown to the person
//! filling in the form; [`ValidationError::code`] is the stable identifier
//! for callers that map failures to their own text.

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The reason a candidate string was rejected.
///
/// # Examples
///
/// ```
/// use formkit_validator::foundation::ValidationError;
///
/// let error = ValidationError::too_short(3);
/// assert_eq!(error.to_string(), "input must be at least 3 characters long");
/// assert_eq!(error.code(), "min_length");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The input has no characters at all.
    ///
    /// Only produced by [`NotEmpty`](crate::validators::NotEmpty), so callers
    /// can tell "empty" apart from "too short".
    #[error("input cannot be empty")]
    Empty,

    /// The input has fewer characters than required.
    #[error("input must be at least {min} characters long")]
    TooShort {
        /// Required minimum, in Unicode scalar values.
        min: i64,
    },

    /// The input has more characters than allowed.
    #[error("input must be at most {max} characters long")]
    TooLong {
        /// Allowed maximum, in Unicode scalar values.
        max: i64,
    },

    /// The input is not one of the allowed options.
    #[error("invalid option: {value}")]
    InvalidOption {
        /// The rejected input, verbatim.
        value: String,
    },
}

impl ValidationError {
    /// Creates a [`ValidationError::TooShort`] error.
    #[must_use]
    pub const fn too_short(min: i64) -> Self {
        Self::TooShort { min }
    }

    /// Creates a [`ValidationError::TooLong`] error.
    #[must_use]
    pub const fn too_long(max: i64) -> Self {
        Self::TooLong { max }
    }

    /// Creates a [`ValidationError::InvalidOption`] error.
    pub fn invalid_option(value: impl Into<String>) -> Self {
        Self::InvalidOption {
            value: value.into(),
        }
    }

    /// Error code for programmatic handling.
    ///
    /// Examples: `"not_empty"`, `"min_length"`, `"one_of"`
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Empty => "not_empty",
            Self::TooShort { .. } => "min_length",
            Self::TooLong { .. } => "max_length",
            Self::InvalidOption { .. } => "one_of",
        }
    }
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
