//! Combinators for composing validators
//!
//! Only conjunction is provided: a field either carries several validators
//! that the form runs one after another, or a validator is built from
//! others with [`And`] (as [`LengthRange`](crate::validators::LengthRange)
//! is built from a minimum and a maximum check).

pub mod and;

pub use and::{And, and};
