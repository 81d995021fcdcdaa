//! # Coursebook
//!
//! Contact and course-roster records: an immutable [`Person`] entity with
//! validated fields, two comparison relations and a canonical display format.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Person entity, field values and read-only views
//! - **Messages** ([`messages`]) - User-visible messages and [`messages::format_person`]
//! - **DTO Layer** ([`dto`]) - JSON record shape with serde and validator
//! - **Ambient** ([`config`], [`telemetry`], [`error`]) - Environment configuration,
//!   tracing setup and the shared error type
//!
//! ## Comparing Persons
//!
//! ```
//! use coursebook::prelude::*;
//!
//! let alex = PersonBuilder::new()
//!     .name("Alex")
//!     .phone("98765432")
//!     .email("a@x.com")
//!     .address("Blk 30 Geylang Street 29")
//!     .build()
//!     .unwrap();
//! let bob = PersonBuilder::from(&alex)
//!     .name("Bob")
//!     .email("b@x.com")
//!     .build()
//!     .unwrap();
//!
//! // Same phone: likely the same person, but not an identical record.
//! assert!(alex.is_same_person(Some(&bob)));
//! assert_ne!(alex, bob);
//! ```

pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod messages;
pub mod telemetry;
pub mod utils;

pub use domain::entities::Person;
pub use error::ModelError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{Person, PersonBuilder};
    pub use crate::domain::read_only::ReadOnlySet;
    pub use crate::domain::values::{Address, Birthday, Course, Email, Name, Phone, Tag};
    pub use crate::dto::PersonRecord;
    pub use crate::error::ModelError;
    pub use crate::messages::format_person;
}
