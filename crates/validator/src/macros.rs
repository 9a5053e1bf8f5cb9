//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] — Create a complete validator (struct + Validate impl + factory fn)
//! - [`one_of!`] — Build a [`OneOf`](crate::validators::OneOf) from a list of options
//!
//! # Examples
//!
//! ```
//! use formkit_validator::validator;
//! use formkit_validator::foundation::{Validate, ValidationError, char_count};
//!
//! validator! {
//!     /// Rejects input longer than a tweet.
//!     #[derive(Copy, PartialEq, Eq)]
//!     pub Tweet { max: i64 } for str;
//!     rule(self, input) { char_count(input) <= self.max }
//!     error(self, input) { ValidationError::too_long(self.max) }
//!     fn tweet(max: i64);
//! }
//!
//! assert!(tweet(280).validate("hello").is_ok());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
/// The `rule` block is a boolean; when it is `false` the `error` block builds
/// the returned [`ValidationError`](crate::foundation::ValidationError).
///
/// ```ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: i64 } for str;
///     rule(self, input) { char_count(input) >= self.min }
///     error(self, input) { ValidationError::too_short(self.min) }
///     fn min_length(min: i64);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] validator.")]
        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(
                #[allow(missing_docs)]
                pub $field: $fty,
            )+
        }

        impl $name {
            #[doc = concat!("Creates a new [`", stringify!($name), "`].")]
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// ONE OF MACRO
// ============================================================================

/// Builds a [`OneOf`](crate::validators::OneOf) validator from a list of options.
///
/// ```
/// use formkit_validator::one_of;
/// use formkit_validator::foundation::Validate;
///
/// let size = one_of!("small", "medium", "large");
/// assert!(size.validate("medium").is_ok());
/// assert!(size.validate("huge").is_err());
///
/// // No options: every input is rejected.
/// let nothing = one_of!();
/// assert!(nothing.validate("").is_err());
/// ```
#[macro_export]
macro_rules! one_of {
    () => {
        $crate::validators::OneOf::new(::std::iter::empty::<&str>())
    };
    ($($option:expr),+ $(,)?) => {
        $crate::validators::OneOf::new([$($option),+])
    };
}

// ============================================================================
// TESTS
// ============================================================================
