//! Domain layer containing the person entity and its field values.
//!
//! The domain layer is pure: no I/O, no shared state, no logging of failures.
//! Every error is returned to the caller as [`crate::error::ModelError`].
//!
//! # Architecture
//!
//! - [`values`] - Validated field types (name, phone, email, ...)
//! - [`entities`] - The [`entities::Person`] record and its builder
//! - [`read_only`] - Unmodifiable views over a person's label sets
//!
//! # Comparing Persons
//!
//! 1. [`entities::Person::is_same_person`] flags likely duplicates: any shared
//!    name, email or phone is a match
//! 2. `==` is strict equality over every field, used to detect edits
//!
//! The first relation is not transitive and must only be used pairwise.

pub mod entities;
pub mod read_only;
pub mod values;
