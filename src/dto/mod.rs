//! Data Transfer Objects for exchanging person records as JSON.
//!
//! DTOs use Serde for serialization and validator for shape checks before
//! conversion into domain entities.

pub mod person;

pub use person::PersonRecord;
