//! Email address value.

use crate::error::{ModelError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Compiled regex for email validation.
///
/// `[^\W_]` is an alphanumeric character excluding underscore.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[^\W_]+([+_.\-][^\W_]+)*",
        r"@",
        r"([^\W_]+(-[^\W_]+)*\.)*",
        r"([^\W_]+(-[^\W_]+)*){2,}$",
    ))
    .unwrap()
});

pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain. \
The local-part should only contain alphanumeric characters and the special characters +_.-, \
and may not start or end with a special character. \
The domain is made of labels separated by periods: each label starts and ends with an \
alphanumeric character, may contain inner hyphens, and the last label is at least 2 characters long";

/// A syntactically valid email address.
///
/// Comparison is case-sensitive; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] if `value` is not of the form
    /// `local-part@domain`.
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        if !Self::is_valid(value) {
            return Err(ModelError::invalid_field("email", EMAIL_CONSTRAINTS));
        }
        Ok(Self(value.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        EMAIL_REGEX.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(Email::is_valid("alice@example.com"));
        assert!(Email::is_valid("PeterJack_1190@example.com"));
        assert!(Email::is_valid("a@bc"));
        assert!(Email::is_valid("test@localhost"));
        assert!(Email::is_valid("a1+be.d@example1.com"));
        assert!(Email::is_valid("peter_jack@very-very-very-long-example.com"));
        assert!(Email::is_valid("e1234567@u.nus.edu"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!Email::is_valid(""));
        assert!(!Email::is_valid("@example.com"));
        assert!(!Email::is_valid("peterjack@"));
        assert!(!Email::is_valid("peterjackexample.com"));
        assert!(!Email::is_valid("peter jack@example.com"));
        assert!(!Email::is_valid("-peterjack@example.com"));
        assert!(!Email::is_valid("peterjack-@example.com"));
        assert!(!Email::is_valid("peter..jack@example.com"));
        assert!(!Email::is_valid("peterjack@example_com"));
        assert!(!Email::is_valid("peterjack@example.c"));
        assert!(!Email::is_valid("peterjack@-example.com"));
        assert!(!Email::is_valid("peterjack@example.com-"));
    }

    #[test]
    fn test_email_is_case_sensitive() {
        let lower = Email::new("bob@example.com").unwrap();
        let upper = Email::new("Bob@example.com").unwrap();
        assert_ne!(lower, upper);
    }
}
