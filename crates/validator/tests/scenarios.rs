//! Concrete validation scenarios through the public prelude.

use formkit_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Three characters, nine bytes.
const JAPANESE: &str = "\u{65e5}\u{672c}\u{8a9e}";

// ============================================================================
// MIN / MAX LENGTH
// ============================================================================

#[rstest]
#[case::too_short(3, "ab", Some("input must be at least 3 characters long"))]
#[case::exact(3, "abc", None)]
#[case::longer(3, "abcdef", None)]
#[case::zero(0, "", None)]
#[case::multibyte_exact(3, JAPANESE, None)]
#[case::multibyte_short(4, JAPANESE, Some("input must be at least 4 characters long"))]
fn min_length_cases(#[case] min: i64, #[case] input: &str, #[case] expected: Option<&str>) {
    let message = min_length(min).validate(input).err().map(|e| e.to_string());
    assert_eq!(message.as_deref(), expected);
}

#[rstest]
#[case::too_long(5, "abcdef", Some("input must be at most 5 characters long"))]
#[case::exact(5, "abcde", None)]
#[case::empty(0, "", None)]
#[case::multibyte_fits(3, JAPANESE, None)]
#[case::multibyte_too_long(2, JAPANESE, Some("input must be at most 2 characters long"))]
fn max_length_cases(#[case] max: i64, #[case] input: &str, #[case] expected: Option<&str>) {
    let message = max_length(max).validate(input).err().map(|e| e.to_string());
    assert_eq!(message.as_deref(), expected);
}

// ============================================================================
// NOT EMPTY
// ============================================================================

#[test]
fn not_empty_distinguishes_empty_from_too_short() {
    assert_eq!(not_empty().validate(""), Err(ValidationError::Empty));
    assert_eq!(min_length(1).validate(""), Err(ValidationError::too_short(1)));
    assert_eq!(
        not_empty().validate("").unwrap_err().to_string(),
        "input cannot be empty"
    );
}

#[test]
fn not_empty_accepts_single_multibyte_char() {
    assert!(not_empty().validate("\u{1f600}").is_ok());
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

#[rstest]
#[case::empty("", Err(ValidationError::too_short(2)))]
#[case::lower_bound("ab", Ok(()))]
#[case::upper_bound("abcd", Ok(()))]
#[case::too_long("abcde", Err(ValidationError::too_long(4)))]
fn length_range_cases(#[case] input: &str, #[case] expected: ValidationResult<()>) {
    assert_eq!(length_range(2, 4).validate(input), expected);
}

#[test]
fn length_range_with_inverted_bounds_never_passes() {
    let validator = length_range(4, 1);
    for input in ["", "a", "abc", "abcd", "abcdefgh"] {
        assert!(validator.validate(input).is_err(), "{input:?} passed");
    }
    assert_eq!(validator.validate("ab"), Err(ValidationError::too_short(4)));
}

// ============================================================================
// ONE OF
// ============================================================================

#[rstest]
#[case::member("red", Ok(()))]
#[case::other_member("blue", Ok(()))]
#[case::non_member("green", Err(ValidationError::invalid_option("green")))]
#[case::case_sensitive("RED", Err(ValidationError::invalid_option("RED")))]
#[case::untrimmed("red ", Err(ValidationError::invalid_option("red ")))]
fn one_of_cases(#[case] input: &str, #[case] expected: ValidationResult<()>) {
    assert_eq!(one_of(["red", "blue"]).validate(input), expected);
}

#[test]
fn one_of_error_message() {
    let err = one_of(["red", "blue"]).validate("green").unwrap_err();
    assert_eq!(err.to_string(), "invalid option: green");
    assert_eq!(err.code(), "one_of");
}

// ============================================================================
// ATTACHING TO A FIELD
// ============================================================================

#[test]
fn field_runs_attached_validators_in_order() {
    let field: Vec<BoxedValidator> = vec![
        Box::new(not_empty()),
        Box::new(max_length(6)),
        Box::new(one_of(["small", "medium", "large"])),
    ];
    let first_error = |input: &str| {
        field
            .iter()
            .find_map(|validator| validator.validate(input).err())
    };

    assert_eq!(first_error("small"), None);
    assert_eq!(first_error(""), Some(ValidationError::Empty));
    assert_eq!(first_error("enormous"), Some(ValidationError::too_long(6)));
    assert_eq!(
        first_error("tiny"),
        Some(ValidationError::invalid_option("tiny"))
    );
}

#[test]
fn validators_convert_into_callbacks() {
    let callbacks: Vec<Box<dyn Fn(&str) -> ValidationResult<()>>> = vec![
        Box::new(not_empty().into_fn()),
        Box::new(length_range(1, 3).into_fn()),
    ];
    assert!(callbacks.iter().all(|check| check("ok").is_ok()));
    assert!(callbacks.iter().any(|check| check("").is_err()));
}
