//! Validated field values of a person.
//!
//! Each type checks its own format on construction and is immutable afterwards.
//! Constructors return [`crate::error::ModelError::InvalidField`] naming the
//! field that was rejected.
//!
//! - [`Name`] - auto-capitalized letters and spaces
//! - [`Phone`] - digits only, at least three
//! - [`Email`] - `local-part@domain`
//! - [`Address`] - free text, not starting with whitespace
//! - [`Birthday`] - `DD-MM-YYYY` calendar date
//! - [`Tag`] - alphanumeric label
//! - [`Course`] - course code such as `CS2103T`

pub mod address;
pub mod birthday;
pub mod course;
pub mod email;
pub mod name;
pub mod phone;
pub mod tag;

pub use address::Address;
pub use birthday::Birthday;
pub use course::Course;
pub use email::Email;
pub use name::Name;
pub use phone::Phone;
pub use tag::Tag;
