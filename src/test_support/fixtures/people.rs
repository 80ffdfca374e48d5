// Shared test fixture for building people.
// Compiled only for unit tests, exposed as `crate::test_support::fixtures::people`.

use crate::core::person::Person;

pub struct PersonBuilder {
    first_name: String,
    last_name: String,
    email_address: Option<String>,
    phone_number: Option<String>,
    registered_event_count: usize,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PersonBuilder {
    pub fn new() -> Self {
        Self {
            first_name: "Susi".to_string(),
            last_name: "Huber".to_string(),
            email_address: None,
            phone_number: None,
            registered_event_count: 0,
        }
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.last_name = v.into();
        self
    }

    pub fn email_address(mut self, v: impl Into<String>) -> Self {
        self.email_address = Some(v.into());
        self
    }

    pub fn phone_number(mut self, v: impl Into<String>) -> Self {
        self.phone_number = Some(v.into());
        self
    }

    pub fn registered_event_count(mut self, v: usize) -> Self {
        self.registered_event_count = v;
        self
    }

    pub fn build(self) -> Person {
        let mut person = Person::new(self.first_name, self.last_name);
        person.set_email_address(self.email_address);
        person.set_phone_number(self.phone_number);
        person.set_registered_event_count(self.registered_event_count);
        person
    }
}

#[cfg(test)]
mod person_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_builds_susi_huber_without_contact() {
        let person = PersonBuilder::default().build();
        assert_eq!(person.first_name(), "Susi");
        assert_eq!(person.last_name(), "Huber");
        assert_eq!(person.email_address(), None);
        assert_eq!(person.registered_event_count(), 0);
    }

    #[rstest]
    fn setters_override_all_fields() {
        let person = PersonBuilder::new()
            .first_name("Gretl")
            .last_name("Sauerkraut")
            .email_address("gretl@example.com")
            .phone_number("0043 1 234")
            .registered_event_count(7)
            .build();

        assert_eq!(person.full_name(), "Gretl Sauerkraut");
        assert_eq!(person.email_address(), Some("gretl@example.com"));
        assert_eq!(person.phone_number(), Some("0043 1 234"));
        assert_eq!(person.registered_event_count(), 7);
    }
}
