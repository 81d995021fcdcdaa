#![allow(dead_code)]

use coursebook::prelude::*;

pub const VALID_NAME_AMY: &str = "Amy Bee";
pub const VALID_NAME_BOB: &str = "Bob Choo";
pub const VALID_PHONE_AMY: &str = "11111111";
pub const VALID_PHONE_BOB: &str = "22222222";
pub const VALID_EMAIL_AMY: &str = "amy@example.com";
pub const VALID_EMAIL_BOB: &str = "bob@example.com";
pub const VALID_ADDRESS_AMY: &str = "Block 312, Amy Street 1";
pub const VALID_ADDRESS_BOB: &str = "Block 123, Bobby Street 3";
pub const VALID_TAG_HUSBAND: &str = "husband";
pub const VALID_TAG_FRIEND: &str = "friend";
pub const VALID_COURSE_CS2103: &str = "CS2103";
pub const VALID_COURSE_CS2106: &str = "CS2106";

/// Builder pre-filled with a valid default person.
pub fn default_person() -> PersonBuilder {
    PersonBuilder::new()
        .name(VALID_NAME_AMY)
        .phone("85355255")
        .email("amy@gmail.com")
        .address("123, Jurong West Ave 6, #08-111")
}

pub fn alice() -> Person {
    PersonBuilder::new()
        .name("Alice Pauline")
        .phone("94351253")
        .email("alice@example.com")
        .address("123, Jurong West Ave 6, #08-111")
        .tags(["friends"])
        .courses([VALID_COURSE_CS2103])
        .build()
        .unwrap()
}

pub fn benson() -> Person {
    PersonBuilder::new()
        .name("Benson Meier")
        .phone("98765432")
        .email("johnd@example.com")
        .address("311, Clementi Ave 2, #02-25")
        .tags(["owesMoney", "friends"])
        .courses(["CS2101", VALID_COURSE_CS2103])
        .birthday("14-02-1999")
        .build()
        .unwrap()
}

pub fn bob() -> Person {
    PersonBuilder::new()
        .name(VALID_NAME_BOB)
        .phone(VALID_PHONE_BOB)
        .email(VALID_EMAIL_BOB)
        .address(VALID_ADDRESS_BOB)
        .tags([VALID_TAG_HUSBAND, VALID_TAG_FRIEND])
        .courses([VALID_COURSE_CS2106])
        .build()
        .unwrap()
}
