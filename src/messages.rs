//! User-visible messages and the canonical person display format.

use crate::domain::entities::Person;
use std::collections::BTreeSet;
use std::fmt;

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_NO_CONTACT_FOUND: &str = "No such contact found";
pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";
pub const MESSAGE_SINGLE_COURSE_ONLY: &str = "Only one course can be listed at a time.";
pub const MESSAGE_SINGLE_BDAY_ONLY: &str = "Only one birthday can be added to a person.";
pub const MESSAGE_SINGLE_ORDER_ONLY: &str = "Sort by only one order at a time.";
pub const MESSAGE_NAME_ALPHA_ONLY: &str = "Names must contain only alphabets";

/// A command argument prefix such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_COURSE: Prefix = Prefix::new("c/");
pub const PREFIX_BIRTHDAY: Prefix = Prefix::new("b/");

/// Returns "<invalid command format> <usage>".
pub fn invalid_command_format(usage: &str) -> String {
    format!("{MESSAGE_INVALID_COMMAND_FORMAT}{usage}")
}

pub fn persons_listed_overview(count: usize) -> String {
    format!("{count} persons listed!")
}

/// Returns an error message naming each duplicated prefix once.
///
/// Prefixes are listed in sorted order, separated by a single space.
pub fn error_message_for_duplicate_prefixes(duplicates: &[Prefix]) -> String {
    debug_assert!(!duplicates.is_empty());

    let fields: BTreeSet<&str> = duplicates.iter().map(Prefix::as_str).collect();
    let fields: Vec<&str> = fields.into_iter().collect();

    format!("{MESSAGE_DUPLICATE_FIELDS}{}", fields.join(" "))
}

/// Formats `person` for display to the user.
///
/// Layout: `<name>; Phone: <phone>; Email: <email>; Address: <address>;
/// Courses: <courses>; Tags: <tags>`. Course and tag labels are concatenated
/// without separators, in set order.
pub fn format_person(person: &Person) -> String {
    let mut out = String::new();

    out.push_str(person.name().as_str());
    out.push_str("; Phone: ");
    out.push_str(person.phone().as_str());
    out.push_str("; Email: ");
    out.push_str(person.email().as_str());
    out.push_str("; Address: ");
    out.push_str(person.address().as_str());

    out.push_str("; Courses: ");
    for course in person.courses() {
        out.push_str(course.code());
    }

    out.push_str("; Tags: ");
    for tag in person.tags() {
        out.push_str(tag.as_str());
    }

    out
}
