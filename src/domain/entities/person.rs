//! Person entity: a contact enrolled in zero or more courses.

use crate::domain::read_only::ReadOnlySet;
use crate::domain::values::{Address, Birthday, Course, Email, Name, Phone, Tag};
use std::any::Any;
use std::collections::BTreeSet;

/// An immutable contact record.
///
/// Identity fields are `name`, `phone` and `email`; the remaining fields are
/// data. A `Person` never changes after construction: every `with_*` method
/// returns a new record.
///
/// Two relations compare persons:
///
/// - [`Person::is_same_person`] - weak identity match used to flag likely
///   duplicates (any one identity field in common)
/// - `==` / [`Person::equals`] - strict equality over every field, used for
///   change detection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    // Identity fields
    name: Name,
    phone: Phone,
    email: Email,

    // Data fields
    address: Address,
    tags: BTreeSet<Tag>,
    courses: BTreeSet<Course>,
    birthday: Option<Birthday>,
    favourite: bool,
}

impl Person {
    /// Creates a new Person.
    ///
    /// The tag and course collections are copied into sets owned by the person,
    /// so the caller's collections can be reused or modified afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
        courses: impl IntoIterator<Item = Course>,
        birthday: Option<Birthday>,
        favourite: bool,
    ) -> Self {
        let person = Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
            courses: courses.into_iter().collect(),
            birthday,
            favourite,
        };
        tracing::trace!(name = %person.name, "person created");
        person
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn is_favourite(&self) -> bool {
        self.favourite
    }

    /// Returns a read-only view of the tags.
    ///
    /// Mutation attempts on the view fail with
    /// [`crate::error::ModelError::UnsupportedModification`].
    pub fn tags(&self) -> ReadOnlySet<'_, Tag> {
        ReadOnlySet::new("tags", &self.tags)
    }

    /// Returns a read-only view of the enrolled courses.
    ///
    /// Mutation attempts on the view fail with
    /// [`crate::error::ModelError::UnsupportedModification`].
    pub fn courses(&self) -> ReadOnlySet<'_, Course> {
        ReadOnlySet::new("courses", &self.courses)
    }

    pub fn is_enrolled_in(&self, course: &Course) -> bool {
        self.courses.contains(course)
    }

    /// Returns true if both persons share a name, an email or a phone number.
    ///
    /// This is a weaker notion than equality. It is not transitive: A and B may
    /// share a phone, B and C an email, while A and C share nothing. Use it for
    /// pairwise duplicate checks only. `None` never matches.
    pub fn is_same_person(&self, other: Option<&Person>) -> bool {
        let Some(other) = other else {
            return false;
        };
        if std::ptr::eq(self, other) {
            return true;
        }

        other.name == self.name || other.email == self.email || other.phone == self.phone
    }

    /// Strict equality against a value of any type.
    ///
    /// Returns false for `None` and for values that are not a `Person`;
    /// otherwise behaves exactly like `==`.
    pub fn equals(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|value| value.downcast_ref::<Person>())
            .is_some_and(|person| std::ptr::eq(self, person) || self == person)
    }

    /// Returns a copy of this person with the favourite flag set to `favourite`.
    pub fn with_favourite(&self, favourite: bool) -> Self {
        Self {
            favourite,
            ..self.clone()
        }
    }

    /// Returns a copy of this person with `birthday` replacing the current one.
    pub fn with_birthday(&self, birthday: Option<Birthday>) -> Self {
        Self {
            birthday,
            ..self.clone()
        }
    }

    pub fn with_tags(&self, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
            ..self.clone()
        }
    }

    pub fn with_courses(&self, courses: impl IntoIterator<Item = Course>) -> Self {
        Self {
            courses: courses.into_iter().collect(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{DefaultHasher, Hash, Hasher};

    fn alice() -> Person {
        Person::new(
            Name::new("Alice Pauline").unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
            [Tag::new("friends").unwrap()],
            [Course::new("CS2103T").unwrap()],
            None,
            false,
        )
    }

    fn hash_of(person: &Person) -> u64 {
        let mut hasher = DefaultHasher::new();
        person.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_person_creation() {
        let person = alice();

        assert_eq!(person.name().as_str(), "Alice Pauline");
        assert_eq!(person.phone().as_str(), "94351253");
        assert_eq!(person.email().as_str(), "alice@example.com");
        assert_eq!(person.address().as_str(), "123, Jurong West Ave 6, #08-111");
        assert_eq!(person.tags().len(), 1);
        assert!(person.is_enrolled_in(&Course::new("cs2103t").unwrap()));
        assert!(person.birthday().is_none());
        assert!(!person.is_favourite());
    }

    #[test]
    fn test_constructor_copies_collections() {
        let mut tags = vec![Tag::new("friends").unwrap()];
        let person = Person::new(
            Name::new("Alice").unwrap(),
            Phone::new("85355255").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Address::new("123 Main St").unwrap(),
            tags.iter().cloned(),
            Vec::<Course>::new(),
            None,
            false,
        );

        tags.push(Tag::new("family").unwrap());

        assert_eq!(person.tags().len(), 1);
        assert!(person.courses().is_empty());
    }

    #[test]
    fn test_duplicate_labels_collapse() {
        let person = alice().with_courses([
            Course::new("CS2103T").unwrap(),
            Course::new("cs2103t").unwrap(),
        ]);
        assert_eq!(person.courses().len(), 1);
    }

    #[test]
    fn test_equal_persons_hash_equal() {
        let a = alice();
        let b = alice();

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_equals_reference_short_circuit() {
        let a = alice();
        assert!(a.equals(Some(&a)));
        assert!(a.is_same_person(Some(&a)));
    }

    #[test]
    fn test_with_methods_leave_original_untouched() {
        let original = alice();
        let birthday = Birthday::parse("01-01-2000").unwrap();

        let edited = original.with_favourite(true).with_birthday(Some(birthday));

        assert!(!original.is_favourite());
        assert!(original.birthday().is_none());
        assert!(edited.is_favourite());
        assert_eq!(edited.birthday(), Some(&birthday));
        assert_ne!(original, edited);
        assert!(original.is_same_person(Some(&edited)));
    }

    #[test]
    fn test_with_tags_replaces_tags() {
        let edited = alice().with_tags([Tag::new("husband").unwrap()]);
        assert!(edited.tags().contains(&Tag::new("husband").unwrap()));
        assert!(!edited.tags().contains(&Tag::new("friends").unwrap()));
    }

    #[test]
    fn test_debug_lists_every_field() {
        let debug = format!("{:?}", alice());
        for field in [
            "name",
            "phone",
            "email",
            "address",
            "tags",
            "courses",
            "birthday",
            "favourite",
        ] {
            assert!(debug.contains(field), "missing {field} in {debug}");
        }
    }
}
