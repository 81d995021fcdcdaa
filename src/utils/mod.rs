//! Utility functions shared by the field value types.
//!
//! - [`text`] - Name capitalization

pub mod text;
