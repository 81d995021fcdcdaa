//! Core domain entities representing the contact book data model.
//!
//! # Entity Types
//!
//! - [`Person`] - An immutable contact record with enrolled courses and tags
//!
//! # Design Pattern
//!
//! Entities are immutable values built from validated field types (see
//! [`crate::domain::values`]). Two construction paths exist:
//! - [`Person::new`] - From already validated field values
//! - [`PersonBuilder`] - From raw text, reporting missing and invalid fields
//!
//! Edits never modify a person in place: `with_*` methods and
//! `PersonBuilder::from(&person)` produce a new record.

pub mod builder;
pub mod person;

pub use builder::PersonBuilder;
pub use person::Person;
