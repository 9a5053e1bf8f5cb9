//! Built-in validators
//!
//! # Categories
//!
//! - **Length**: [`NotEmpty`], [`MinLength`], [`MaxLength`], [`LengthRange`]
//! - **Choice**: [`OneOf`]
//!
//! # Examples
//!
//! ```
//! use formkit_validator::prelude::*;
//!
//! let username = length_range(3, 20);
//! let color = one_of(["red", "green", "blue"]);
//!
//! assert!(username.validate("alice").is_ok());
//! assert!(color.validate("green").is_ok());
//! assert!(not_empty().validate("").is_err());
//! ```

pub mod choice;
pub mod length;

pub use choice::{OneOf, one_of};
pub use length::{
    LengthRange, MaxLength, MinLength, NotEmpty, length_range, max_length, min_length, not_empty,
};
