//! Declarative validation rules
//!
//! A [`ValidationRule`] is a pure data description of one validator, so form
//! definitions can be stored as JSON (or any serde format) and turned into
//! live validators at load time.
//!
//! ```
//! use formkit_validator::rule::ValidationRule;
//!
//! let rules = ValidationRule::list_from_json(
//!     r#"[{"rule":"not_empty"},{"rule":"length","min":3,"max":20}]"#,
//! )
//! .unwrap();
//!
//! let validators: Vec<_> = rules.iter().map(ValidationRule::build).collect();
//! assert!(validators.iter().all(|v| v.validate("alice").is_ok()));
//! ```

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};
use crate::validators::{LengthRange, MaxLength, MinLength, NotEmpty, OneOf};

/// A validator behind a trait object, as produced by [`ValidationRule::build`].
pub type BoxedValidator = Box<dyn Validate<Input = str> + Send + Sync>;

// ============================================================================
// RULE ERROR
// ============================================================================

/// Failure to load a rule description.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The JSON could not be parsed into rules.
    #[error("invalid validation rule: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// VALIDATION RULE
// ============================================================================

/// A declarative validation rule that can be attached to a form field.
///
/// Serialized with a `rule` tag, e.g. `{"rule":"min_length","min":3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationRule {
    /// Input must not be empty.
    NotEmpty,

    /// Input must be at least `min` characters.
    MinLength {
        /// Minimum length, inclusive.
        min: i64,
    },

    /// Input must be at most `max` characters.
    MaxLength {
        /// Maximum length, inclusive.
        max: i64,
    },

    /// Input length must be within `min..=max`.
    Length {
        /// Minimum length, inclusive.
        min: i64,
        /// Maximum length, inclusive.
        max: i64,
    },

    /// Input must be exactly one of `options`.
    OneOf {
        /// Allowed values.
        #[serde(default)]
        options: Vec<String>,
    },
}

impl ValidationRule {
    /// Require a minimum length.
    #[must_use]
    pub const fn min_length(min: i64) -> Self {
        Self::MinLength { min }
    }

    /// Require a maximum length.
    #[must_use]
    pub const fn max_length(max: i64) -> Self {
        Self::MaxLength { max }
    }

    /// Require a length within an inclusive range.
    #[must_use]
    pub const fn length(min: i64, max: i64) -> Self {
        Self::Length { min, max }
    }

    /// Require one of the given options.
    pub fn one_of<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// The rule's tag as it appears in serialized form.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NotEmpty => "not_empty",
            Self::MinLength { .. } => "min_length",
            Self::MaxLength { .. } => "max_length",
            Self::Length { .. } => "length",
            Self::OneOf { .. } => "one_of",
        }
    }

    /// Builds the validator this rule describes.
    #[must_use]
    pub fn build(&self) -> BoxedValidator {
        tracing::debug!(rule = self.name(), "building validator from rule");
        match self {
            Self::NotEmpty => Box::new(NotEmpty::new()),
            Self::MinLength { min } => Box::new(MinLength::new(*min)),
            Self::MaxLength { max } => Box::new(MaxLength::new(*max)),
            Self::Length { min, max } => Box::new(LengthRange::new(*min, *max)),
            Self::OneOf { options } => Box::new(OneOf::new(options.iter().map(String::as_str))),
        }
    }

    /// Builds the validator and runs it once against `input`.
    ///
    /// Prefer [`build`](Self::build) when the same rule checks many inputs.
    pub fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.build().validate(input)
    }

    /// Parses a single rule from JSON.
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        let rule: Self = serde_json::from_str(json)?;
        tracing::debug!(rule = rule.name(), "parsed validation rule");
        Ok(rule)
    }

    /// Parses a list of rules from a JSON array.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, RuleError> {
        let rules: Vec<Self> = serde_json::from_str(json)?;
        tracing::debug!(count = rules.len(), "parsed validation rules");
        Ok(rules)
    }
}

// ============================================================================
// TESTS
// ============================================================================
