//! Basic usage example for formkit-validator
//!
//! Run with `RUST_LOG=debug` to see rule loading.

use formkit_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn report(label: &str, input: &str, result: ValidationResult<()>) {
    match result {
        Ok(()) => println!("✓ {label}: {input:?} is valid"),
        Err(e) => println!("✗ {label}: {input:?} is invalid: {e} [{}]", e.code()),
    }
}

fn main() -> Result<(), RuleError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = not_empty().and(length_range(3, 16));
    for input in ["", "al", "alice", "a-very-long-username"] {
        report("username", input, username.validate(input));
    }

    let color = one_of(["red", "green", "blue"]);
    for input in ["green", "Green"] {
        report("color", input, color.validate(input));
    }

    let rules = ValidationRule::list_from_json(
        r#"[{"rule":"not_empty"},{"rule":"max_length","max":3}]"#,
    )?;
    let validators: Vec<BoxedValidator> = rules.iter().map(ValidationRule::build).collect();
    for input in ["\u{65e5}\u{672c}\u{8a9e}", "abcd"] {
        let result = validators.iter().try_for_each(|v| v.validate(input));
        report("code", input, result);
    }

    Ok(())
}
